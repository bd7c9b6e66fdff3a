// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{TicketExport, notify_export_success};
use std::fs;
use std::path::Path;

pub(crate) fn export_json(rows: &[TicketExport], path: &Path) -> AppResult<()> {
    fs::write(path, serde_json::to_string_pretty(rows)?)?;
    notify_export_success("JSON", path);
    Ok(())
}

/// Header row comes from the serde field names.
pub(crate) fn export_csv(rows: &[TicketExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
