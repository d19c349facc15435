//! ResizeLayout command handler

use tracing::info;

use shared::floor::{FloorEventPayload, FloorEventType};

use crate::config::{MAX_TABLE_COUNT, MIN_TABLE_COUNT};
use crate::context::CommandContext;
use crate::error::{FloorError, FloorResult};

/// ResizeLayout action
#[derive(Debug, Clone)]
pub struct ResizeLayoutAction {
    pub table_count: usize,
}

impl ResizeLayoutAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<()> {
        if !(MIN_TABLE_COUNT..=MAX_TABLE_COUNT).contains(&self.table_count) {
            return Err(FloorError::InvalidTableCount(self.table_count));
        }

        ctx.record(
            FloorEventType::LayoutResized,
            FloorEventPayload::LayoutResized {
                table_count: self.table_count,
            },
        );
        info!(table_count = self.table_count, "layout resized");
        Ok(())
    }
}
