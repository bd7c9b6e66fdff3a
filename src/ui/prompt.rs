//! Line-based prompts on stdin.

use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line. `Ok(None)` on end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut s = String::new();
    if io::stdin().lock().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim_end_matches(['\r', '\n']).to_string()))
}

/// Yes/no question, default no. End of input or a read error counts as no.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    match read_line("Confirm [y/N]: ") {
        Ok(Some(answer)) => is_yes(&answer),
        _ => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
