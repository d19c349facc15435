//! Floor events - immutable facts recorded after action processing

use serde::{Deserialize, Serialize};

use super::outcome::SeatingOutcome;
use crate::models::QueueEntry;

/// Floor event - one committed mutation of the floor state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorEvent {
    /// Global sequence number (for ordering and replay)
    pub sequence: u64,
    /// Unix milliseconds at which the action ran
    pub timestamp: i64,
    /// Event type
    pub event_type: FloorEventType,
    /// Event payload
    pub payload: FloorEventPayload,
}

impl FloorEvent {
    pub fn new(
        sequence: u64,
        timestamp: i64,
        event_type: FloorEventType,
        payload: FloorEventPayload,
    ) -> Self {
        Self {
            sequence,
            timestamp,
            event_type,
            payload,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorEventType {
    // Queue
    EntryJoined,
    EntrySeated,
    EntryRemoved,

    // Tables
    TableCleared,
    AllTablesCleared,
    TableOccupied,
    TableRenamed,
    TableCapacityUpdated,

    // Layout
    LayoutResized,
}

impl std::fmt::Display for FloorEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloorEventType::EntryJoined => write!(f, "ENTRY_JOINED"),
            FloorEventType::EntrySeated => write!(f, "ENTRY_SEATED"),
            FloorEventType::EntryRemoved => write!(f, "ENTRY_REMOVED"),
            FloorEventType::TableCleared => write!(f, "TABLE_CLEARED"),
            FloorEventType::AllTablesCleared => write!(f, "ALL_TABLES_CLEARED"),
            FloorEventType::TableOccupied => write!(f, "TABLE_OCCUPIED"),
            FloorEventType::TableRenamed => write!(f, "TABLE_RENAMED"),
            FloorEventType::TableCapacityUpdated => write!(f, "TABLE_CAPACITY_UPDATED"),
            FloorEventType::LayoutResized => write!(f, "LAYOUT_RESIZED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorEventPayload {
    // ========== Queue ==========
    EntryJoined {
        entry: QueueEntry,
    },

    /// An entry was promoted onto a table and left the queue
    EntrySeated {
        entry_id: i64,
        table_id: i64,
        guest_name: String,
        party_size: i32,
        seated_at: i64,
        outcome: SeatingOutcome,
    },

    /// No-show or cancellation
    EntryRemoved {
        entry_id: i64,
    },

    // ========== Tables ==========
    TableCleared {
        table_id: i64,
    },

    AllTablesCleared,

    /// Manual occupancy, no guest metadata
    TableOccupied {
        table_id: i64,
        occupied_at: i64,
    },

    TableRenamed {
        table_id: i64,
        name: String,
    },

    TableCapacityUpdated {
        table_id: i64,
        capacity: i32,
    },

    // ========== Layout ==========
    LayoutResized {
        table_count: usize,
    },
}
