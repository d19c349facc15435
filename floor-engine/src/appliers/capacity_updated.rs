//! TableCapacityUpdated event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Updates a table's seat count. Bounds are enforced at the action
/// boundary, not here.
pub struct TableCapacityUpdatedApplier;

impl EventApplier for TableCapacityUpdatedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::TableCapacityUpdated { table_id, capacity } = &event.payload
            && let Some(table) = state.table_mut(*table_id)
        {
            table.capacity = *capacity;
        }
    }
}
