//! TableCleared event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Releases one table and drops its occupancy data.
pub struct TableClearedApplier;

impl EventApplier for TableClearedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::TableCleared { table_id } = &event.payload
            && let Some(table) = state.table_mut(*table_id)
        {
            table.vacate();
        }
    }
}
