use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open `path` in `editor`, then `$EDITOR`/`$VISUAL`, then nano/notepad.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `ticktrack init` first",
                path.display()
            )));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if matches!(Command::new(&requested).arg(path).status(), Ok(s) if s.success()) {
            success(format!("Configuration edited with '{requested}'"));
            return Ok(());
        }

        warning(format!(
            "Editor '{requested}' not available, falling back to '{default_editor}'"
        ));
        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{default_editor}'"));
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor exited with {s}"))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
