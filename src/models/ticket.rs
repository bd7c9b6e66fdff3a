use serde::Serialize;

/// A saved, immutable time-tracking entry.
///
/// Maps 1:1 onto a row of the `tickets` table. Timestamps are epoch
/// milliseconds; `duration_ms` always equals `end_time - start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,            // ⇔ tickets.id (AUTOINCREMENT)
    pub name: String,       // ⇔ tickets.name (trimmed, never blank)
    pub start_time: i64,    // ⇔ tickets.startTime
    pub end_time: i64,      // ⇔ tickets.endTime
    pub duration_ms: i64,   // ⇔ tickets.durationMs
}

/// A stopped session waiting to be saved or cancelled.
/// Carries everything a [`Ticket`] has except the id the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub name: String,
    pub start_time: i64,
    pub end_time: i64,
    pub duration_ms: i64,
}

impl NewTicket {
    /// Build a candidate from the two timestamps taken at start and stop.
    ///
    /// The name is trimmed. An end earlier than the start (wall clock moved
    /// backwards) is pinned to the start, so the duration is never negative.
    pub fn from_span(name: &str, start_time: i64, end_time: i64) -> Self {
        let end_time = end_time.max(start_time);
        Self {
            name: name.trim().to_string(),
            start_time,
            end_time,
            duration_ms: end_time - start_time,
        }
    }

    pub fn with_id(self, id: i64) -> Ticket {
        Ticket {
            id,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_ms: self.duration_ms,
        }
    }
}
