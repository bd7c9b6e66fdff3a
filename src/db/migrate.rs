use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_TICKETS: &str = "20250101_0001_create_tickets";

/// Ensure that the `log` table exists. Migration markers live in it,
/// so it is always created first.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `tickets` table. There is no update path for rows, so the
/// CHECK constraints are the only guard on stored values.
fn create_tickets_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tickets (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT    NOT NULL CHECK(length(trim(name)) > 0),
            startTime   INTEGER NOT NULL,
            endTime     INTEGER NOT NULL,
            durationMs  INTEGER NOT NULL CHECK(durationMs >= 0),
            CHECK(endTime >= startTime)
        );
        "#,
    )?;
    Ok(())
}

/// Run every pending migration. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !is_applied(conn, CREATE_TICKETS)? {
        let existed = table_exists(conn, "tickets")?;
        create_tickets_table(conn)?;
        mark_applied(conn, CREATE_TICKETS, "Created tickets table")?;
        if existed {
            log::info!("tickets table already present, marked {CREATE_TICKETS} as applied");
        } else {
            log::info!("migration applied: {CREATE_TICKETS}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert!(table_exists(&conn, "tickets").unwrap());
        let markers: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(markers, 1);
    }

    #[test]
    fn schema_rejects_blank_names_and_inverted_spans() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let blank = conn.execute(
            "INSERT INTO tickets (name, startTime, endTime, durationMs) VALUES ('  ', 0, 1, 1)",
            [],
        );
        assert!(blank.is_err());

        let inverted = conn.execute(
            "INSERT INTO tickets (name, startTime, endTime, durationMs) VALUES ('a', 5, 1, 0)",
            [],
        );
        assert!(inverted.is_err());
    }
}
