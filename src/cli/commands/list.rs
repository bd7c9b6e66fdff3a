use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{SqliteStore, TicketStore};
use crate::ui::messages::info;
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_duration, format_started};

const NAME_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let tickets = store.list_all()?;

        if tickets.is_empty() {
            info("No tickets yet. Start your first tracking session with `ticktrack track`.");
            return Ok(());
        }

        let total: i64 = tickets.iter().map(|t| t.duration_ms).sum();
        let shown = limit.unwrap_or(tickets.len());

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Ticket", NAME_WIDTH),
            Column::new("Started", 22),
            Column::new("Duration", 8),
        ]);
        for t in tickets.iter().take(shown) {
            table.add_row(vec![
                t.id.to_string(),
                truncate(&t.name, NAME_WIDTH),
                format_started(t.start_time, &cfg.date_format, &cfg.time_format),
                format_duration(t.duration_ms),
            ]);
        }

        println!("History\n");
        print!("{}", table.render());
        println!(
            "\n{} ticket(s), {} tracked in total.",
            tickets.len(),
            format_duration(total)
        );
    }
    Ok(())
}
