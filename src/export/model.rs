// src/export/model.rs

use crate::models::ticket::Ticket;
use crate::utils::time::{format_duration, to_local_rfc3339};
use serde::Serialize;

/// Flat export row: the stored columns plus human-readable renderings.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TicketExport {
    pub id: i64,
    pub name: String,
    pub start_time: i64,
    pub end_time: i64,
    pub duration_ms: i64,
    pub started: String,
    pub ended: String,
    pub duration: String,
}

impl From<&Ticket> for TicketExport {
    fn from(t: &Ticket) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            start_time: t.start_time,
            end_time: t.end_time,
            duration_ms: t.duration_ms,
            started: to_local_rfc3339(t.start_time),
            ended: to_local_rfc3339(t.end_time),
            duration: format_duration(t.duration_ms),
        }
    }
}
