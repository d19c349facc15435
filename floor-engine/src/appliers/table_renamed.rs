//! TableRenamed event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Updates a table's display label.
pub struct TableRenamedApplier;

impl EventApplier for TableRenamedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::TableRenamed { table_id, name } = &event.payload
            && let Some(table) = state.table_mut(*table_id)
        {
            table.name = name.clone();
        }
    }
}
