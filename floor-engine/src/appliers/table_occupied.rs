//! TableOccupied event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Marks a table occupied without guest metadata (manual occupancy).
pub struct TableOccupiedApplier;

impl EventApplier for TableOccupiedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::TableOccupied {
            table_id,
            occupied_at,
        } = &event.payload
            && let Some(table) = state.table_mut(*table_id)
        {
            table.occupy(*occupied_at);
        }
    }
}
