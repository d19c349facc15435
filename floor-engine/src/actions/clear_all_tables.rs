//! ClearAllTables command handler

use tracing::info;

use shared::floor::{FloorEventPayload, FloorEventType};

use crate::context::CommandContext;
use crate::error::FloorResult;

/// ClearAllTables action - end-of-service reset of every occupied table
#[derive(Debug, Clone)]
pub struct ClearAllTablesAction;

impl ClearAllTablesAction {
    /// Returns how many occupied tables were released.
    pub fn execute(&self, ctx: &mut CommandContext) -> FloorResult<usize> {
        let occupied = ctx.state().tables.iter().filter(|t| t.occupied).count();
        if occupied == 0 {
            info!("no occupied tables to clear");
            return Ok(0);
        }

        ctx.record(
            FloorEventType::AllTablesCleared,
            FloorEventPayload::AllTablesCleared,
        );
        info!(cleared = occupied, "all tables cleared");
        Ok(occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_layout;
    use shared::floor::FloorState;

    #[test]
    fn clears_every_occupied_table() {
        let mut state = FloorState::with_tables(default_layout(6));
        state.table_mut(1).unwrap().seat("A".to_string(), 2, 1);
        state.table_mut(5).unwrap().occupy(2);

        let mut ctx = CommandContext::new(state, 1_000);
        let cleared = ClearAllTablesAction.execute(&mut ctx).unwrap();

        assert_eq!(cleared, 2);
        assert!(ctx.state().tables.iter().all(|t| !t.occupied));
    }

    #[test]
    fn all_free_floor_records_nothing() {
        let state = FloorState::with_tables(default_layout(6));
        let mut ctx = CommandContext::new(state, 1_000);
        assert_eq!(ClearAllTablesAction.execute(&mut ctx).unwrap(), 0);
        assert!(ctx.events().is_empty());
    }
}
