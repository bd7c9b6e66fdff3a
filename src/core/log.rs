use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

/// Colour of the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `max` visible characters.
fn op_target(entry: &LogEntry, max: usize) -> String {
    let full = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };
    if full.chars().count() > max {
        let mut s: String = full.chars().take(max.saturating_sub(3)).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(|e| op_target(e, 60)).collect();
        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, label) in entries.iter().zip(labels) {
            let color = color_for_operation(&entry.operation);

            // only the operation word is coloured; pad on the visible width
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id, entry.date, colored, padding, entry.message
            );
        }

        Ok(())
    }
}
