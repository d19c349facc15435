//! AllTablesCleared event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Releases every table on the floor.
pub struct AllTablesClearedApplier;

impl EventApplier for AllTablesClearedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if matches!(event.payload, FloorEventPayload::AllTablesCleared) {
            for table in &mut state.tables {
                table.vacate();
            }
        }
    }
}
