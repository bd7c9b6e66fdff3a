use crate::errors::AppResult;
use crate::models::ticket::{NewTicket, Ticket};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Ticket> {
    Ok(Ticket {
        id: row.get("id")?,
        name: row.get("name")?,
        start_time: row.get("startTime")?,
        end_time: row.get("endTime")?,
        duration_ms: row.get("durationMs")?,
    })
}

/// Insert a stopped session and return the id SQLite assigned to it.
pub fn insert_ticket(conn: &Connection, t: &NewTicket) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tickets (name, startTime, endTime, durationMs)
         VALUES (?1, ?2, ?3, ?4)",
        params![t.name, t.start_time, t.end_time, t.duration_ms],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All tickets, most recent id first.
pub fn load_tickets(conn: &Connection) -> AppResult<Vec<Ticket>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, startTime, endTime, durationMs
         FROM tickets
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_ticket(conn: &Connection, id: i64) -> AppResult<Option<Ticket>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, startTime, endTime, durationMs
         FROM tickets
         WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Returns whether a row was actually removed.
pub fn delete_ticket(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM tickets WHERE id = ?1", [id])?;
    Ok(n > 0)
}
