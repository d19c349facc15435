//! NoShow command handler

use tracing::{debug, info};

use shared::floor::{FloorEventPayload, FloorEventType};

use crate::context::CommandContext;
use crate::error::FloorResult;

/// NoShow action - unconditional removal without seating
#[derive(Debug, Clone)]
pub struct NoShowAction {
    pub entry_id: i64,
}

impl NoShowAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<()> {
        if ctx.state().entry(self.entry_id).is_none() {
            debug!(entry_id = self.entry_id, "no-show skipped: entry not queued");
            return Ok(());
        }

        ctx.record(
            FloorEventType::EntryRemoved,
            FloorEventPayload::EntryRemoved {
                entry_id: self.entry_id,
            },
        );
        info!(entry_id = self.entry_id, "entry removed as no-show");
        Ok(())
    }
}
