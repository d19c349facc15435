//! EntryJoined event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Appends the entry to the queue and advances the id counter.
pub struct EntryJoinedApplier;

impl EventApplier for EntryJoinedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::EntryJoined { entry } = &event.payload {
            // Keep the counter ahead of the highest id seen (replay-safe)
            state.next_entry_id = state.next_entry_id.max(entry.id + 1);
            state.queue.push(entry.clone());
        }
    }
}
