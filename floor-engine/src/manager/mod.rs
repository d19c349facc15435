//! FloorManager - the engine's public surface
//!
//! Every operation follows the same shape:
//!
//! ```text
//! operation(args)
//!     ├─ 1. Load a FloorState snapshot from the store
//!     ├─ 2. Run the action against a working copy (CommandContext)
//!     ├─ 3. Commit the working copy iff events were recorded
//!     └─ 4. Return the action's typed result
//! ```
//!
//! Actions that record nothing (lookup misses, empty batches, failed
//! selections) leave the store bit-for-bit unchanged. A batch records one
//! event per seated entry but still commits exactly once, so the whole
//! successful subset lands as a single state transition.

use tracing::debug;

use shared::floor::{FloorDashboard, FloorState, PromoteResponse, SeatAllResponse};
use shared::models::{EntryType, QueueEntry, Table};
use shared::util;

use crate::actions::{
    ClearAllTablesAction, ClearTableAction, JoinQueueAction, NoShowAction, OccupyTableAction,
    PromoteAction, RenameTableAction, ResizeLayoutAction, SeatAllAction, UpdateCapacityAction,
};
use crate::config::FloorConfig;
use crate::context::CommandContext;
use crate::error::FloorResult;
use crate::store::{FloorStore, MemoryStore};

#[cfg(test)]
mod tests;

/// FloorManager for seating operations
pub struct FloorManager<S: FloorStore> {
    store: S,
}

impl FloorManager<MemoryStore> {
    /// A manager over a fresh in-memory floor with the configured layout.
    pub fn in_memory(config: &FloorConfig) -> Self {
        Self::new(MemoryStore::seeded(config))
    }
}

impl<S: FloorStore> FloorManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one action against a working copy and commit iff it recorded
    /// events.
    fn run<T>(&self, f: impl FnOnce(&mut CommandContext) -> FloorResult<T>) -> FloorResult<T> {
        let state = self.store.load()?;
        let mut ctx = CommandContext::new(state, util::now_millis());

        let result = f(&mut ctx)?;

        let (state, events) = ctx.into_parts();
        if events.is_empty() {
            return Ok(result);
        }
        self.store.commit(state)?;
        for event in &events {
            debug!(
                sequence = event.sequence,
                event_type = %event.event_type,
                "event committed"
            );
        }
        Ok(result)
    }

    // ========== Seating Operations ==========

    /// Seat one queue entry. `None` means the entry was already gone.
    pub fn promote(&self, entry_id: i64) -> FloorResult<Option<PromoteResponse>> {
        self.run(|ctx| PromoteAction { entry_id }.execute(ctx))
    }

    /// Seat every queued entry of `entry_type`, preferences first.
    pub fn seat_all(&self, entry_type: EntryType) -> FloorResult<SeatAllResponse> {
        self.run(|ctx| SeatAllAction { entry_type }.execute(ctx))
    }

    /// Add a party to the queue and return the created entry.
    pub fn join(
        &self,
        name: impl Into<String>,
        party_size: i32,
        special_requests: Option<String>,
        entry_type: EntryType,
    ) -> FloorResult<QueueEntry> {
        let action = JoinQueueAction {
            name: name.into(),
            party_size,
            special_requests,
            entry_type,
        };
        self.run(|ctx| action.execute(ctx))
    }

    /// Remove an entry without seating it.
    pub fn no_show(&self, entry_id: i64) -> FloorResult<()> {
        self.run(|ctx| NoShowAction { entry_id }.execute(ctx))
    }

    // ========== Table Lifecycle ==========

    pub fn clear_table(&self, table_id: i64) -> FloorResult<()> {
        self.run(|ctx| ClearTableAction { table_id }.execute(ctx))
    }

    /// Release every occupied table; returns how many were cleared.
    pub fn clear_all_tables(&self) -> FloorResult<usize> {
        self.run(|ctx| ClearAllTablesAction.execute(ctx))
    }

    pub fn occupy_manually(&self, table_id: i64) -> FloorResult<()> {
        self.run(|ctx| OccupyTableAction { table_id }.execute(ctx))
    }

    pub fn rename_table(&self, table_id: i64, name: impl Into<String>) -> FloorResult<()> {
        let action = RenameTableAction {
            table_id,
            name: name.into(),
        };
        self.run(|ctx| action.execute(ctx))
    }

    pub fn update_capacity(&self, table_id: i64, capacity: i32) -> FloorResult<()> {
        self.run(|ctx| UpdateCapacityAction { table_id, capacity }.execute(ctx))
    }

    pub fn resize_layout(&self, table_count: usize) -> FloorResult<()> {
        self.run(|ctx| ResizeLayoutAction { table_count }.execute(ctx))
    }

    // ========== Queries ==========

    pub fn tables(&self) -> FloorResult<Vec<Table>> {
        Ok(self.store.load()?.tables)
    }

    pub fn queue(&self) -> FloorResult<Vec<QueueEntry>> {
        Ok(self.store.load()?.queue)
    }

    pub fn queue_of(&self, entry_type: EntryType) -> FloorResult<Vec<QueueEntry>> {
        let state = self.store.load()?;
        Ok(state.entries_of(entry_type).cloned().collect())
    }

    /// 1-based rank among same-type entries, `None` if the entry is gone.
    pub fn position(&self, entry_id: i64) -> FloorResult<Option<usize>> {
        let state = self.store.load()?;
        let Some(entry) = state.entry(entry_id) else {
            return Ok(None);
        };
        let position = state
            .entries_of(entry.entry_type)
            .position(|e| e.id == entry_id)
            .map(|idx| idx + 1);
        Ok(position)
    }

    /// Occupancy and queue depth summary.
    pub fn dashboard(&self) -> FloorResult<FloorDashboard> {
        let state = self.store.load()?;
        let occupied_tables = state.tables.iter().filter(|t| t.occupied).count();
        Ok(FloorDashboard {
            occupied_tables,
            available_tables: state.tables.len() - occupied_tables,
            reservations_queued: state.entries_of(EntryType::Reservation).count(),
            waitlist_queued: state.entries_of(EntryType::Waitlist).count(),
        })
    }

    /// The full committed state, for callers that render the floor.
    pub fn state(&self) -> FloorResult<FloorState> {
        Ok(self.store.load()?)
    }
}
