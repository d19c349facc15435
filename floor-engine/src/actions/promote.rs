//! Promote command handler
//!
//! Seats one queue entry: runs the selector against the working state and,
//! on success, records the assignment and removes the entry.

use tracing::{debug, info, warn};

use shared::floor::{FloorEventPayload, FloorEventType, PromoteResponse};

use crate::context::CommandContext;
use crate::error::FloorResult;
use crate::selector::select_table;

/// Promote action
#[derive(Debug, Clone)]
pub struct PromoteAction {
    pub entry_id: i64,
}

impl PromoteAction {
    /// Returns `None` when the entry is no longer queued (idempotent no-op).
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<Option<PromoteResponse>> {
        let Some(entry) = ctx.state().entry(self.entry_id).cloned() else {
            debug!(entry_id = self.entry_id, "promote skipped: entry not queued");
            return Ok(None);
        };

        let selection = select_table(&entry, &ctx.state().tables);
        for advisory in &selection.advisories {
            info!(
                entry_id = entry.id,
                guest = %entry.name,
                advisory = %advisory,
                "seating preference not satisfied"
            );
        }

        match selection.table_id {
            Some(table_id) => {
                ctx.record(
                    FloorEventType::EntrySeated,
                    FloorEventPayload::EntrySeated {
                        entry_id: entry.id,
                        table_id,
                        guest_name: entry.name.clone(),
                        party_size: entry.party_size,
                        seated_at: ctx.now(),
                        outcome: selection.outcome,
                    },
                );
                info!(
                    entry_id = entry.id,
                    guest = %entry.name,
                    table_id,
                    outcome = %selection.outcome,
                    "entry seated"
                );
                Ok(Some(PromoteResponse::seated(
                    table_id,
                    selection.outcome,
                    selection.advisories,
                )))
            }
            None => {
                warn!(
                    entry_id = entry.id,
                    party_size = entry.party_size,
                    "no table available"
                );
                Ok(Some(PromoteResponse::failed(
                    selection.outcome,
                    selection.advisories,
                )))
            }
        }
    }
}
