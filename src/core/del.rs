use crate::errors::{AppError, AppResult};
use crate::models::ticket::Ticket;
use crate::store::TicketStore;

/// Two-step delete: stage an id, then confirm or dismiss.
/// Staging never touches the store; only one id can be staged.
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    staged: Option<i64>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `id`, replacing and returning whatever was staged before.
    pub fn stage(&mut self, id: i64) -> Option<i64> {
        self.staged.replace(id)
    }

    pub fn staged(&self) -> Option<i64> {
        self.staged
    }

    /// The staged ticket as found in a listing, if it is still there.
    pub fn staged_ticket<'a>(&self, tickets: &'a [Ticket]) -> Option<&'a Ticket> {
        let id = self.staged?;
        tickets.iter().find(|t| t.id == id)
    }

    pub fn dismiss(&mut self) -> Option<i64> {
        self.staged.take()
    }

    /// Delete the staged id. The slot is cleared whatever the outcome.
    pub fn confirm(&mut self, store: &mut dyn TicketStore) -> AppResult<i64> {
        let id = self.staged.take().ok_or(AppError::NothingStaged)?;

        match store.delete_by_id(id) {
            Ok(true) => Ok(id),
            Ok(false) => Err(AppError::TicketNotFound(id)),
            Err(e) => {
                log::error!("Failed to delete ticket {id}: {e}");
                Err(e)
            }
        }
    }
}
