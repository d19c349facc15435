//! OccupyTable command handler
//!
//! Manual occupancy for walk-ins handled off-system: the table is marked
//! occupied with a timestamp but no guest metadata.

use tracing::{debug, info};

use shared::floor::{FloorEventPayload, FloorEventType};

use crate::context::CommandContext;
use crate::error::FloorResult;

/// OccupyTable action
#[derive(Debug, Clone)]
pub struct OccupyTableAction {
    pub table_id: i64,
}

impl OccupyTableAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<()> {
        if ctx.state().table(self.table_id).is_none() {
            debug!(table_id = self.table_id, "occupy skipped: no such table");
            return Ok(());
        }

        ctx.record(
            FloorEventType::TableOccupied,
            FloorEventPayload::TableOccupied {
                table_id: self.table_id,
                occupied_at: ctx.now(),
            },
        );
        info!(table_id = self.table_id, "table occupied manually");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_layout;
    use shared::floor::FloorState;

    #[test]
    fn occupies_with_timestamp_only() {
        let state = FloorState::with_tables(default_layout(4));
        let mut ctx = CommandContext::new(state, 7_500);
        OccupyTableAction { table_id: 3 }.execute(&mut ctx).unwrap();

        let table = ctx.state().table(3).unwrap();
        assert!(table.occupied);
        assert_eq!(table.guest_name, None);
        assert_eq!(table.party_size, None);
        assert_eq!(table.seated_at, Some(7_500));
    }
}
