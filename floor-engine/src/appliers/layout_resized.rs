//! LayoutResized event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;
use crate::layout;

/// Rebuilds the table collection at the new count, preserving surviving
/// slots' data and re-deriving grid positions.
pub struct LayoutResizedApplier;

impl EventApplier for LayoutResizedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::LayoutResized { table_count } = &event.payload {
            state.tables = layout::resize(&state.tables, *table_count);
        }
    }
}
