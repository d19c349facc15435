//! FloorManager test suite
//!
//! Helpers shared by the scenario files. All tests run against an
//! in-memory store seeded with the default 12-table layout.

use super::*;
use crate::store::MemoryStore;
use shared::floor::SeatingOutcome;

mod test_flows;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("floor_engine=debug")
        .with_test_writer()
        .try_init();
}

fn create_test_manager() -> FloorManager<MemoryStore> {
    init_tracing();
    FloorManager::in_memory(&FloorConfig::default())
}

fn join_waitlist(
    manager: &FloorManager<MemoryStore>,
    name: &str,
    party_size: i32,
    special_requests: Option<&str>,
) -> i64 {
    manager
        .join(
            name,
            party_size,
            special_requests.map(str::to_string),
            EntryType::Waitlist,
        )
        .unwrap()
        .id
}

fn join_reservation(
    manager: &FloorManager<MemoryStore>,
    name: &str,
    party_size: i32,
    special_requests: Option<&str>,
) -> i64 {
    manager
        .join(
            name,
            party_size,
            special_requests.map(str::to_string),
            EntryType::Reservation,
        )
        .unwrap()
        .id
}
