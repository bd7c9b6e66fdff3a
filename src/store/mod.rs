//! Record store: the single table of completed tickets.
//!
//! Consumers never poll; they call [`TicketStore::subscribe`] and get a
//! [`StoreEvent`] after every successful insert or delete.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::ticket::{NewTicket, Ticket};
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Inserted(i64),
    Deleted(i64),
}

pub trait TicketStore {
    /// Persist a stopped session; returns the assigned id.
    fn insert(&mut self, ticket: &NewTicket) -> AppResult<i64>;

    /// Every ticket, most recent id first.
    fn list_all(&self) -> AppResult<Vec<Ticket>>;

    fn get(&self, id: i64) -> AppResult<Option<Ticket>>;

    /// `Ok(false)` when no ticket had that id.
    fn delete_by_id(&mut self, id: i64) -> AppResult<bool>;

    fn subscribe(&mut self) -> Receiver<StoreEvent>;
}

/// Fan-out list of change listeners. Listeners whose receiver was dropped
/// are pruned on the next notification.
#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Vec<Sender<StoreEvent>>,
}

impl Subscribers {
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    pub fn notify(&mut self, event: StoreEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
