//! Engine responses returned to the caller (UI layer or a server-side port)

use serde::{Deserialize, Serialize};

use super::outcome::SeatingOutcome;

/// Result of promoting a single queue entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoteResponse {
    /// Whether the entry was seated
    pub success: bool,
    /// The assigned table, present iff `success`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<i64>,
    /// Terminal outcome tag
    pub outcome: SeatingOutcome,
    /// Non-terminal tags hit while falling through the priority chain
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<SeatingOutcome>,
}

impl PromoteResponse {
    pub fn seated(table_id: i64, outcome: SeatingOutcome, advisories: Vec<SeatingOutcome>) -> Self {
        Self {
            success: true,
            table_id: Some(table_id),
            outcome,
            advisories,
        }
    }

    pub fn failed(outcome: SeatingOutcome, advisories: Vec<SeatingOutcome>) -> Self {
        Self {
            success: false,
            table_id: None,
            outcome,
            advisories,
        }
    }
}

/// Result of batch-promoting every entry of one type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatAllResponse {
    pub seated_count: usize,
    pub failed_count: usize,
    pub seated_entry_ids: Vec<i64>,
}

/// Floor occupancy and queue depth summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorDashboard {
    pub occupied_tables: usize,
    pub available_tables: usize,
    pub reservations_queued: usize,
    pub waitlist_queued: usize,
}
