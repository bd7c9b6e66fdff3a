use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, populate_tickets, setup_test_db, temp_out, track_and_save, tt};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_list_empty_history_shows_hint() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Start your first tracking session"));
}

#[test]
fn test_track_save_then_list() {
    let db_path = setup_test_db("track_save");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "track", "--name", "Bug Fix"])
        .write_stdin("\ns\n")
        .assert()
        .success()
        .stdout(contains("Saved #1 Bug Fix"));

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Bug Fix"))
        .stdout(contains("1 ticket(s)"));
}

#[test]
fn test_track_prompts_for_name_when_missing() {
    let db_path = setup_test_db("track_prompt");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "track"])
        .write_stdin("Prompted ticket\n\ns\n")
        .assert()
        .success()
        .stdout(contains("Ticket name:"))
        .stdout(contains("Saved #1 Prompted ticket"));
}

#[test]
fn test_track_blank_name_is_rejected_then_retried() {
    let db_path = setup_test_db("track_blank");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "track", "--name", "   "])
        .write_stdin("Real name\n\ns\n")
        .assert()
        .success()
        .stderr(contains("Ticket name is required!"))
        .stdout(contains("Saved #1 Real name"));
}

#[test]
fn test_track_blank_name_then_eof_saves_nothing() {
    let db_path = setup_test_db("track_blank_eof");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "track", "--name", ""])
        .write_stdin("")
        .assert()
        .success()
        .stderr(contains("Ticket name is required!"));

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Start your first tracking session"));
}

#[test]
fn test_track_cancel_writes_nothing() {
    let db_path = setup_test_db("track_cancel");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "track", "--name", "Throwaway"])
        .write_stdin("\nc\n")
        .assert()
        .success()
        .stdout(contains("Cancelled; 'Throwaway' was not saved."));

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Throwaway").not());
}

#[test]
fn test_track_eof_while_running_discards_session() {
    let db_path = setup_test_db("track_eof");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "track", "--name", "Unfinished"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("was not saved"));

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Unfinished").not());
}

#[test]
fn test_track_unknown_answer_reprompts() {
    let db_path = setup_test_db("track_reprompt");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "track", "--name", "Indecisive"])
        .write_stdin("\nmaybe\nsave\n")
        .assert()
        .success()
        .stdout(contains("Type s to save or c to cancel."))
        .stdout(contains("Saved #1 Indecisive"));
}

#[test]
fn test_list_is_most_recent_first() {
    let db_path = setup_test_db("list_order");
    init_db_with_data(&db_path);

    let out = tt().args(["--db", &db_path, "--test", "list"]).output().expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);

    let first = stdout.find("First ticket").expect("first listed");
    let second = stdout.find("Second ticket").expect("second listed");
    assert!(second < first, "newest ticket must come first:\n{stdout}");
}

#[test]
fn test_list_limit() {
    let db_path = setup_test_db("list_limit");
    init_db_with_data(&db_path);

    tt().args(["--db", &db_path, "--test", "list", "-n", "1"])
        .assert()
        .success()
        .stdout(contains("Second ticket"))
        .stdout(contains("First ticket").not())
        .stdout(contains("2 ticket(s)"));
}

#[test]
fn test_list_shows_formatted_duration() {
    let db_path = setup_test_db("list_duration");
    init_db(&db_path);
    populate_tickets(&db_path, &[("Bug Fix", 0, 5_000), ("Long one", 0, 3_723_000)]);

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("00:00:05"))
        .stdout(contains("01:02:03"))
        .stdout(contains("01:02:08"));
}

#[test]
fn test_del_confirmed_removes_only_that_ticket() {
    let db_path = setup_test_db("del_confirm");
    init_db(&db_path);
    let ids = populate_tickets(&db_path, &[("Keep me", 0, 1_000), ("Drop me", 0, 2_000)]);

    tt().args(["--db", &db_path, "--test", "del", &ids[1].to_string()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Drop me"))
        .stdout(contains(format!("Ticket #{} has been deleted.", ids[1])));

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Keep me"))
        .stdout(contains("Drop me").not());
}

#[test]
fn test_del_declined_leaves_store_unchanged() {
    let db_path = setup_test_db("del_decline");
    init_db(&db_path);
    let ids = populate_tickets(&db_path, &[("Precious", 0, 1_000)]);

    tt().args(["--db", &db_path, "--test", "del", &ids[0].to_string()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    tt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Precious"));
}

#[test]
fn test_del_unknown_id_fails() {
    let db_path = setup_test_db("del_unknown");
    init_db(&db_path);

    tt().args(["--db", &db_path, "--test", "del", "99"])
        .assert()
        .failure()
        .stderr(contains("No ticket with id 99"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("export_all");
    init_db(&db_path);
    populate_tickets(&db_path, &[("Bug Fix", 0, 5_000)]);

    let json_out = temp_out("export_all", "json");
    tt().args(["--db", &db_path, "--test", "export", "--format", "json", "--file", &json_out])
        .assert()
        .success();
    let json = fs::read_to_string(&json_out).expect("read exported json");
    assert!(json.contains("\"name\": \"Bug Fix\""));
    assert!(json.contains("\"durationMs\": 5000"));
    assert!(json.contains("\"duration\": \"00:00:05\""));

    let csv_out = temp_out("export_all", "csv");
    tt().args(["--db", &db_path, "--test", "export", "--file", &csv_out])
        .assert()
        .success();
    let csv = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(csv.starts_with("id,name,startTime,endTime,durationMs"));
    assert!(csv.contains("Bug Fix,0,5000,5000"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep").unwrap();

    tt().args(["--db", &db_path, "--test", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep");

    tt().args(["--db", &db_path, "--test", "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep");
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    tt().args(["--db", &db_path, "--test", "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&plain).exists());

    let zipped_src = temp_out("backup_zip", "sqlite");
    let zipped = temp_out("backup_zip", "zip");
    tt().args(["--db", &db_path, "--test", "backup", "--file", &zipped_src, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(std::path::Path::new(&zipped).exists());
    assert!(!std::path::Path::new(&zipped_src).exists());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db(&db_path);
    track_and_save(&db_path, "Audited");

    tt().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("save"))
        .stdout(contains("Saved 'Audited'"));
}

/// Write a config with a broken date pattern under a throwaway HOME.
fn home_with_broken_config(name: &str) -> std::path::PathBuf {
    let home = std::env::temp_dir().join(format!("{name}_home"));
    let dir = home.join(".ticktrack");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("ticktrack.conf"),
        "database: ticktrack.sqlite\ndate_format: \"%Q\"\n",
    )
    .unwrap();
    home
}

#[test]
fn test_broken_date_format_is_reported_not_panicked() {
    let db_path = setup_test_db("broken_format");
    init_db(&db_path);
    let home = home_with_broken_config("broken_format");

    tt().env("HOME", &home)
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid date_format '%Q'"))
        .stderr(contains("panicked").not());
}

#[test]
fn test_mode_ignores_user_config() {
    let db_path = setup_test_db("ignores_user_config");
    init_db(&db_path);
    populate_tickets(&db_path, &[("Hermetic", 0, 2_000)]);
    let home = home_with_broken_config("ignores_user_config");

    tt().env("HOME", &home)
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Hermetic"))
        .stdout(contains("00:00:02"));
}
