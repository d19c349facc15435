//! Shared types for the waitlist/seating system
//!
//! This crate holds the data model and the floor event types consumed by
//! `floor-engine` and by any frontend exposed on top of it:
//! - Models: tables and queue entries
//! - Floor: events, outcome tags, engine responses, floor state

pub mod floor;
pub mod models;
pub mod util;

// Re-export commonly used types
pub use floor::{
    FloorDashboard, FloorEvent, FloorEventPayload, FloorEventType, FloorState, PromoteResponse,
    SeatAllResponse, SeatingOutcome,
};
pub use models::{EntryType, QueueEntry, Table};
