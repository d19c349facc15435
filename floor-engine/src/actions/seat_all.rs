//! SeatAll command handler
//!
//! Batch promotion of every queued entry of one type. Entries carrying a
//! special request are processed first (stable within each group), and each
//! selection runs against the working copy so earlier assignments in the
//! batch are visible to later entries. The manager commits the whole
//! successful subset in one state transition; zero successes leave the
//! store untouched.

use tracing::{info, warn};

use shared::floor::{FloorEventPayload, FloorEventType, SeatAllResponse};
use shared::models::{EntryType, QueueEntry};

use crate::context::CommandContext;
use crate::error::FloorResult;
use crate::selector::select_table;

/// SeatAll action
#[derive(Debug, Clone)]
pub struct SeatAllAction {
    pub entry_type: EntryType,
}

impl SeatAllAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<SeatAllResponse> {
        let mut pending: Vec<QueueEntry> =
            ctx.state().entries_of(self.entry_type).cloned().collect();
        if pending.is_empty() {
            info!(entry_type = %self.entry_type, "no entries to seat");
            return Ok(SeatAllResponse::default());
        }

        // Preference satisfaction priority: entries that asked for something
        // specific go first; the sort is stable so join order holds within
        // each group.
        pending.sort_by_key(|e| !e.has_special_requests());

        let mut response = SeatAllResponse::default();
        for entry in pending {
            let selection = select_table(&entry, &ctx.state().tables);
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
                        "entry seated in batch"
                    );
                    response.seated_entry_ids.push(entry.id);
                    response.seated_count += 1;
                }
                None => {
                    warn!(
                        entry_id = entry.id,
                        guest = %entry.name,
                        party_size = entry.party_size,
                        "batch seating failed: no table available"
                    );
                    response.failed_count += 1;
                }
            }
        }

        info!(
            entry_type = %self.entry_type,
            seated = response.seated_count,
            failed = response.failed_count,
            "batch seating finished"
        );
        Ok(response)
    }
}
