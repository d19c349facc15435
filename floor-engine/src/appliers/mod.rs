//! Event applier implementations
//!
//! Each applier handles one event type and is the only code that mutates
//! [`FloorState`]. Appliers are pure functions of (state, event).

use enum_dispatch::enum_dispatch;

use shared::floor::{FloorEvent, FloorEventPayload, FloorState};

mod all_tables_cleared;
mod capacity_updated;
mod entry_joined;
mod entry_removed;
mod entry_seated;
mod layout_resized;
mod table_cleared;
mod table_occupied;
mod table_renamed;

pub use all_tables_cleared::AllTablesClearedApplier;
pub use capacity_updated::TableCapacityUpdatedApplier;
pub use entry_joined::EntryJoinedApplier;
pub use entry_removed::EntryRemovedApplier;
pub use entry_seated::EntrySeatedApplier;
pub use layout_resized::LayoutResizedApplier;
pub use table_cleared::TableClearedApplier;
pub use table_occupied::TableOccupiedApplier;
pub use table_renamed::TableRenamedApplier;

/// Applies one event to the floor state
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, state: &mut FloorState, event: &FloorEvent);
}

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    EntryJoined(EntryJoinedApplier),
    EntrySeated(EntrySeatedApplier),
    EntryRemoved(EntryRemovedApplier),
    TableCleared(TableClearedApplier),
    AllTablesCleared(AllTablesClearedApplier),
    TableOccupied(TableOccupiedApplier),
    TableRenamed(TableRenamedApplier),
    TableCapacityUpdated(TableCapacityUpdatedApplier),
    LayoutResized(LayoutResizedApplier),
}

/// Convert a FloorEvent reference to its applier
///
/// This is the ONLY place with a match on FloorEventPayload.
impl From<&FloorEvent> for EventAction {
    fn from(event: &FloorEvent) -> Self {
        match &event.payload {
            FloorEventPayload::EntryJoined { .. } => EventAction::EntryJoined(EntryJoinedApplier),
            FloorEventPayload::EntrySeated { .. } => EventAction::EntrySeated(EntrySeatedApplier),
            FloorEventPayload::EntryRemoved { .. } => {
                EventAction::EntryRemoved(EntryRemovedApplier)
            }
            FloorEventPayload::TableCleared { .. } => {
                EventAction::TableCleared(TableClearedApplier)
            }
            FloorEventPayload::AllTablesCleared => {
                EventAction::AllTablesCleared(AllTablesClearedApplier)
            }
            FloorEventPayload::TableOccupied { .. } => {
                EventAction::TableOccupied(TableOccupiedApplier)
            }
            FloorEventPayload::TableRenamed { .. } => {
                EventAction::TableRenamed(TableRenamedApplier)
            }
            FloorEventPayload::TableCapacityUpdated { .. } => {
                EventAction::TableCapacityUpdated(TableCapacityUpdatedApplier)
            }
            FloorEventPayload::LayoutResized { .. } => {
                EventAction::LayoutResized(LayoutResizedApplier)
            }
        }
    }
}
