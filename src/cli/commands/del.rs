use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteConfirmation;
use crate::errors::{AppError, AppResult};
use crate::store::{SqliteStore, TicketStore};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::time::format_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let mut confirmation = DeleteConfirmation::new();
        confirmation.stage(*id);

        // only a ticket present in the listing can be confirmed
        let tickets = store.list_all()?;
        let Some(ticket) = confirmation.staged_ticket(&tickets) else {
            confirmation.dismiss();
            return Err(AppError::TicketNotFound(*id));
        };

        let prompt = format!(
            "Permanently delete ticket #{} \"{}\" ({})?",
            ticket.id,
            ticket.name,
            format_duration(ticket.duration_ms)
        );

        if ask_confirmation(&prompt) {
            let deleted = confirmation.confirm(&mut store)?;
            success(format!("Ticket #{deleted} has been deleted."));
        } else {
            confirmation.dismiss();
            info("Operation cancelled.");
        }
    }
    Ok(())
}
