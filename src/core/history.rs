use crate::errors::AppResult;
use crate::models::ticket::Ticket;
use crate::store::{StoreEvent, TicketStore};
use std::sync::mpsc::Receiver;

/// Cached listing of the store that follows its change notifications.
pub struct HistoryView {
    rx: Receiver<StoreEvent>,
    tickets: Vec<Ticket>,
}

impl HistoryView {
    pub fn attach(store: &mut dyn TicketStore) -> AppResult<Self> {
        let rx = store.subscribe();
        let tickets = store.list_all()?;
        Ok(Self { rx, tickets })
    }

    /// Re-fetch if any change was announced since the last call.
    /// Returns whether the listing was reloaded.
    pub fn refresh(&mut self, store: &dyn TicketStore) -> AppResult<bool> {
        let pending = self.rx.try_iter().count();
        if pending == 0 {
            return Ok(false);
        }
        log::trace!("history: {pending} change(s), reloading");
        self.tickets = store.list_all()?;
        Ok(true)
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
