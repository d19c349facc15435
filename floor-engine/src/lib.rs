//! Floor Seating Engine
//!
//! Deterministic table assignment for a venue waitlist/reservation manager:
//!
//! - **preferences**: free-text special requests → structured seating intent
//! - **adjacency**: free tables near a reference table on the grid
//! - **selector**: the priority policy picking one table for one entry
//! - **actions / appliers**: command pipeline producing and applying events
//! - **manager**: loads a snapshot, runs one action, commits atomically
//! - **store**: the injectable state seam (in-memory implementation)
//!
//! # Command Flow
//!
//! ```text
//! FloorManager::promote(entry_id)
//!     ├─ 1. Load FloorState snapshot from the store
//!     ├─ 2. Run the action against a working copy (CommandContext)
//!     ├─ 3. Action records events; each applies to the working copy
//!     ├─ 4. Commit the working copy iff any event was recorded
//!     └─ 5. Return the response
//! ```
//!
//! Batch promotion records one event per seated entry against the same
//! working copy, so later entries in a batch see earlier assignments and a
//! single commit covers the whole successful subset.

pub mod actions;
pub mod adjacency;
pub mod appliers;
pub mod config;
pub mod context;
pub mod error;
pub mod layout;
pub mod manager;
pub mod preferences;
pub mod selector;
pub mod store;
pub mod validation;

// Re-exports
pub use config::FloorConfig;
pub use context::CommandContext;
pub use error::{FloorError, FloorResult};
pub use manager::FloorManager;
pub use selector::{Selection, select_table};
pub use store::{FloorStore, MemoryStore, StoreError};

// Re-export shared types for convenience
pub use shared::floor::{
    FloorDashboard, FloorEvent, FloorEventPayload, FloorEventType, FloorState, PromoteResponse,
    SeatAllResponse, SeatingOutcome,
};
pub use shared::models::{EntryType, QueueEntry, Table};
