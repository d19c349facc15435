//! EntryRemoved event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Drops the entry from the queue (no-show or cancellation).
pub struct EntryRemovedApplier;

impl EventApplier for EntryRemovedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::EntryRemoved { entry_id } = &event.payload {
            state.remove_entry(*entry_id);
        }
    }
}
