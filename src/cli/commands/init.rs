use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped with `--test`), the
/// SQLite file, and runs all pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path);

    let store = SqliteStore::open(&db_path)?;
    ttlog_quiet(
        &store.pool().conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {db_path}"),
    );

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
