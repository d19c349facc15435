//! JoinQueue command handler

use tracing::info;

use shared::floor::{FloorEventPayload, FloorEventType};
use shared::models::{EntryType, QueueEntry};

use crate::context::CommandContext;
use crate::error::{FloorError, FloorResult};
use crate::validation::{
    MAX_NAME_LEN, MAX_REQUEST_LEN, validate_optional_text, validate_required_text,
};

/// Advisory wait estimate: a base plus a per-party increment for everyone
/// already queued.
const BASE_WAIT_MINUTES: i32 = 15;
const PER_PARTY_WAIT_MINUTES: i32 = 5;

/// JoinQueue action
#[derive(Debug, Clone)]
pub struct JoinQueueAction {
    pub name: String,
    pub party_size: i32,
    pub special_requests: Option<String>,
    pub entry_type: EntryType,
}

impl JoinQueueAction {
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<QueueEntry> {
        validate_required_text(&self.name, "guest name", MAX_NAME_LEN)?;
        validate_optional_text(
            self.special_requests.as_deref(),
            "special requests",
            MAX_REQUEST_LEN,
        )?;
        if self.party_size < 1 {
            return Err(FloorError::validation("party size must be positive"));
        }

        let entry = QueueEntry {
            id: ctx.state().next_entry_id,
            name: self.name.clone(),
            party_size: self.party_size,
            joined_at: ctx.now(),
            estimated_wait: BASE_WAIT_MINUTES
                + PER_PARTY_WAIT_MINUTES * ctx.state().queue.len() as i32,
            special_requests: self.special_requests.clone(),
            entry_type: self.entry_type,
        };

        ctx.record(
            FloorEventType::EntryJoined,
            FloorEventPayload::EntryJoined {
                entry: entry.clone(),
            },
        );
        info!(
            entry_id = entry.id,
            guest = %entry.name,
            party_size = entry.party_size,
            entry_type = %entry.entry_type,
            "entry joined queue"
        );
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::floor::FloorState;

    fn action(name: &str, party_size: i32) -> JoinQueueAction {
        JoinQueueAction {
            name: name.to_string(),
            party_size,
            special_requests: None,
            entry_type: EntryType::Waitlist,
        }
    }

    #[test]
    fn assigns_monotonic_ids_and_wait_estimate() {
        let mut ctx = CommandContext::new(FloorState::default(), 1_000);

        let first = action("Sarah Johnson", 4).execute(&mut ctx).unwrap();
        let second = action("Michael Chen", 2).execute(&mut ctx).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.estimated_wait, 15);
        assert_eq!(second.estimated_wait, 20);
        assert_eq!(first.joined_at, 1_000);
        assert_eq!(ctx.state().queue.len(), 2);
    }

    #[test]
    fn rejects_blank_name_and_zero_party() {
        let mut ctx = CommandContext::new(FloorState::default(), 1_000);
        assert!(action("  ", 2).execute(&mut ctx).is_err());
        assert!(action("Jessica Lee", 0).execute(&mut ctx).is_err());
        assert!(ctx.events().is_empty());
    }
}
