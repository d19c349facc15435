//! RenameTable command handler

use tracing::{debug, info};

use shared::floor::{FloorEventPayload, FloorEventType};

use crate::context::CommandContext;
use crate::error::FloorResult;
use crate::validation::{MAX_NAME_LEN, validate_required_text};

/// RenameTable action
#[derive(Debug, Clone)]
pub struct RenameTableAction {
    pub table_id: i64,
    pub name: String,
}

impl RenameTableAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<()> {
        validate_required_text(&self.name, "table name", MAX_NAME_LEN)?;

        if ctx.state().table(self.table_id).is_none() {
            debug!(table_id = self.table_id, "rename skipped: no such table");
            return Ok(());
        }

        ctx.record(
            FloorEventType::TableRenamed,
            FloorEventPayload::TableRenamed {
                table_id: self.table_id,
                name: self.name.clone(),
            },
        );
        info!(table_id = self.table_id, name = %self.name, "table renamed");
        Ok(())
    }
}
