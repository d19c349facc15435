//! EntrySeated event applier

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

use super::EventApplier;

/// Occupies the assigned table with the guest data and removes the entry
/// from the queue.
pub struct EntrySeatedApplier;

impl EventApplier for EntrySeatedApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent) {
        if let FloorEventPayload::EntrySeated {
            entry_id,
            table_id,
            guest_name,
            party_size,
            seated_at,
            ..
        } = &event.payload
        {
            if let Some(table) = state.table_mut(*table_id) {
                table.seat(guest_name.clone(), *party_size, *seated_at);
            }
            state.remove_entry(*entry_id);
        }
    }
}
