//! Queue Entry Model

use serde::{Deserialize, Serialize};

/// Queue entry kind: booked ahead or walked in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Reservation,
    #[default]
    Waitlist,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::Reservation => write!(f, "reservation"),
            EntryType::Waitlist => write!(f, "waitlist"),
        }
    }
}

/// A guest party waiting to be seated.
///
/// Entries are immutable after creation; they leave the queue either by
/// promotion to a table or by no-show/cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Store-assigned, monotonic by creation order
    pub id: i64,
    pub name: String,
    pub party_size: i32,
    /// Unix milliseconds
    pub joined_at: i64,
    /// Advisory wait estimate in minutes
    pub estimated_wait: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl QueueEntry {
    /// Whether the entry carries a non-blank special request.
    ///
    /// Blank strings count as "no request" when ordering batch seating.
    pub fn has_special_requests(&self) -> bool {
        self.special_requests
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}
