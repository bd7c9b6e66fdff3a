// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;
use std::path::Path;

/// Decide whether `path` may be (over)written.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask; a "no" aborts the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if ask_confirmation(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "existing file not overwritten (use --force)".to_string(),
        ))
    }
}
