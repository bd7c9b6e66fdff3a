//! ticktrack main entrypoint.

use ticktrack::run;
use ticktrack::ui::messages::error;

fn main() {
    // diagnostics only; user-facing output goes through ui::messages
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("TICKTRACK_LOG", "warn"))
        .init();

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
