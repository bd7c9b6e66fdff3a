#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("ticktrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ticktrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    tt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run one full `track` session: stop at once, then save.
pub fn track_and_save(db_path: &str, name: &str) {
    tt().args(["--db", db_path, "--test", "track", "--name", name])
        .write_stdin("\ns\n")
        .assert()
        .success();
}

/// Init the DB and save a couple of tickets through the CLI
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    track_and_save(db_path, "First ticket");
    track_and_save(db_path, "Second ticket");
}

/// Insert tickets straight through the library, bypassing the CLI
pub fn populate_tickets(db_path: &str, spans: &[(&str, i64, i64)]) -> Vec<i64> {
    use ticktrack::models::ticket::NewTicket;
    use ticktrack::store::{SqliteStore, TicketStore};

    let mut store = SqliteStore::open(db_path).expect("open store");
    spans
        .iter()
        .map(|(name, start, end)| {
            store
                .insert(&NewTicket::from_span(name, *start, *end))
                .expect("insert ticket")
        })
        .collect()
}
