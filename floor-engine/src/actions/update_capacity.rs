//! UpdateCapacity command handler

use tracing::{debug, info};

use shared::floor::{FloorEventPayload, FloorEventType};

use crate::config::{MAX_TABLE_CAPACITY, MIN_TABLE_CAPACITY};
use crate::context::CommandContext;
use crate::error::{FloorError, FloorResult};

/// UpdateCapacity action
#[derive(Debug, Clone)]
pub struct UpdateCapacityAction {
    pub table_id: i64,
    pub capacity: i32,
}

impl UpdateCapacityAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<()> {
        if !(MIN_TABLE_CAPACITY..=MAX_TABLE_CAPACITY).contains(&self.capacity) {
            return Err(FloorError::InvalidCapacity(self.capacity));
        }

        if ctx.state().table(self.table_id).is_none() {
            debug!(
                table_id = self.table_id,
                "capacity update skipped: no such table"
            );
            return Ok(());
        }

        ctx.record(
            FloorEventType::TableCapacityUpdated,
            FloorEventPayload::TableCapacityUpdated {
                table_id: self.table_id,
                capacity: self.capacity,
            },
        );
        info!(
            table_id = self.table_id,
            capacity = self.capacity,
            "table capacity updated"
        );
        Ok(())
    }
}
