//! Floor store seam
//!
//! The store exclusively owns the committed [`FloorState`]. The engine only
//! ever sees snapshots and hands back a full replacement state, so every
//! commit is atomic from the engine's point of view and the engine itself
//! carries no hidden shared state.

use shared::floor::FloorState;
use thiserror::Error;

mod memory;
pub use memory::MemoryStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Read/commit seam between the engine and whatever owns the state
pub trait FloorStore {
    /// Read a consistent snapshot of the full floor state.
    fn load(&self) -> Result<FloorState, StoreError>;

    /// Atomically replace the floor state.
    fn commit(&self, state: FloorState) -> Result<(), StoreError>;
}
