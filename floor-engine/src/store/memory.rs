//! In-memory floor store

use parking_lot::RwLock;

use shared::floor::FloorState;

use super::{FloorStore, StoreError};
use crate::config::FloorConfig;
use crate::layout;

/// The single-process store backend: a lock around one [`FloorState`].
pub struct MemoryStore {
    state: RwLock<FloorState>,
}

impl MemoryStore {
    pub fn new(state: FloorState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// A store seeded with the configured all-vacant layout.
    pub fn seeded(config: &FloorConfig) -> Self {
        Self::new(FloorState::with_tables(layout::default_layout(
            config.table_count,
        )))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded(&FloorConfig::default())
    }
}

impl FloorStore for MemoryStore {
    fn load(&self) -> Result<FloorState, StoreError> {
        Ok(self.state.read().clone())
    }

    fn commit(&self, state: FloorState) -> Result<(), StoreError> {
        *self.state.write() = state;
        Ok(())
    }
}
