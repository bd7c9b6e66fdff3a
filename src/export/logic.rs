// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TicketExport;
use crate::store::{SqliteStore, TicketStore};
use crate::ui::messages::{info, warning};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every ticket (most recent first) to `file`.
    /// Returns the number of exported rows.
    pub fn export(
        store: &SqliteStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows: Vec<TicketExport> = store.list_all()?.iter().map(TicketExport::from).collect();
        if rows.is_empty() {
            warning("No tickets to export; writing an empty file.");
        }

        info(format!("Exporting to {}: {}", format.as_str(), path.display()));
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_quiet(
            &store.pool().conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} ticket(s) as {}", rows.len(), format.as_str()),
        );
        Ok(rows.len())
    }
}
