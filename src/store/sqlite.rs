use super::{StoreEvent, Subscribers, TicketStore};
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_ticket, insert_ticket, load_ticket, load_tickets};
use crate::errors::AppResult;
use crate::models::ticket::{NewTicket, Ticket};
use std::sync::mpsc::Receiver;

/// [`TicketStore`] backed by the `tickets` table of a SQLite file.
pub struct SqliteStore {
    pool: DbPool,
    subscribers: Subscribers,
}

impl SqliteStore {
    /// Wrap an open connection, running pending migrations first.
    pub fn new(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            subscribers: Subscribers::default(),
        })
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Self::new(DbPool::new(path)?)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl TicketStore for SqliteStore {
    fn insert(&mut self, ticket: &NewTicket) -> AppResult<i64> {
        let id = insert_ticket(&self.pool.conn, ticket)?;
        log::debug!("inserted ticket {id} ({} ms)", ticket.duration_ms);
        ttlog_quiet(
            &self.pool.conn,
            "save",
            &id.to_string(),
            &format!("Saved '{}' ({} ms)", ticket.name, ticket.duration_ms),
        );
        self.subscribers.notify(StoreEvent::Inserted(id));
        Ok(id)
    }

    fn list_all(&self) -> AppResult<Vec<Ticket>> {
        load_tickets(&self.pool.conn)
    }

    fn get(&self, id: i64) -> AppResult<Option<Ticket>> {
        load_ticket(&self.pool.conn, id)
    }

    fn delete_by_id(&mut self, id: i64) -> AppResult<bool> {
        let removed = delete_ticket(&self.pool.conn, id)?;
        if removed {
            log::debug!("deleted ticket {id}");
            ttlog_quiet(&self.pool.conn, "del", &id.to_string(), "Deleted ticket");
            self.subscribers.notify(StoreEvent::Deleted(id));
        }
        Ok(removed)
    }

    fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.subscribers.subscribe()
    }
}
