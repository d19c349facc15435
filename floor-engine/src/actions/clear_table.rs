//! ClearTable command handler

use tracing::{debug, info};

use shared::floor::{FloorEventPayload, FloorEventType};

use crate::context::CommandContext;
use crate::error::FloorResult;

/// ClearTable action
#[derive(Debug, Clone)]
pub struct ClearTableAction {
    pub table_id: i64,
}

impl ClearTableAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<()> {
        if ctx.state().table(self.table_id).is_none() {
            debug!(table_id = self.table_id, "clear skipped: no such table");
            return Ok(());
        }

        ctx.record(
            FloorEventType::TableCleared,
            FloorEventPayload::TableCleared {
                table_id: self.table_id,
            },
        );
        info!(table_id = self.table_id, "table cleared");
        Ok(())
    }
}
