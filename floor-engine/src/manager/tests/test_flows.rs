use super::*;

#[test]
fn seat_all_prioritizes_special_requests_and_reports_counts() {
    let manager = create_test_manager();
    // Shrink the floor to two tables so one reservation must fail
    manager.resize_layout(2).unwrap();

    let plain = join_reservation(&manager, "Plain", 2, None);
    let wants_two = join_reservation(&manager, "Wants Two", 2, Some("table 2"));
    let late = join_reservation(&manager, "Late", 2, None);

    let response = manager.seat_all(EntryType::Reservation).unwrap();

    assert_eq!(response.seated_count, 2);
    assert_eq!(response.failed_count, 1);
    // The special request jumped the line; the first plain entry kept its
    // relative order and took the remaining table.
    assert_eq!(response.seated_entry_ids, vec![wants_two, plain]);

    let tables = manager.tables().unwrap();
    assert_eq!(tables[1].guest_name.as_deref(), Some("Wants Two"));
    assert_eq!(tables[0].guest_name.as_deref(), Some("Plain"));

    // The failed entry is still queued, unchanged
    let queue = manager.queue().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, late);
    assert_eq!(queue[0].name, "Late");
}

#[test]
fn seat_all_never_double_assigns_within_a_batch() {
    let manager = create_test_manager();
    join_reservation(&manager, "A", 2, Some("Table 4"));
    join_reservation(&manager, "B", 2, Some("Table 4"));
    join_reservation(&manager, "C", 2, Some("Table 4"));

    let response = manager.seat_all(EntryType::Reservation).unwrap();
    assert_eq!(response.seated_count, 3);

    let tables = manager.tables().unwrap();
    let occupied: Vec<i64> = tables.iter().filter(|t| t.occupied).map(|t| t.id).collect();
    assert_eq!(occupied.len(), 3);
    // Exactly one of them got table 4
    assert_eq!(
        tables
            .iter()
            .filter(|t| t.id == 4 && t.occupied)
            .count(),
        1
    );
}

#[test]
fn seat_all_with_zero_successes_commits_nothing() {
    let manager = create_test_manager();
    manager.resize_layout(1).unwrap();
    manager.occupy_manually(1).unwrap();

    join_reservation(&manager, "A", 2, None);
    join_reservation(&manager, "B", 4, None);
    let before = manager.state().unwrap();

    let response = manager.seat_all(EntryType::Reservation).unwrap();

    assert_eq!(response.seated_count, 0);
    assert_eq!(response.failed_count, 2);
    assert!(response.seated_entry_ids.is_empty());
    assert_eq!(manager.state().unwrap(), before);
}

#[test]
fn seat_all_ignores_other_entry_types() {
    let manager = create_test_manager();
    let walk_in = join_waitlist(&manager, "Walk In", 2, None);
    join_reservation(&manager, "Booked", 2, None);

    let response = manager.seat_all(EntryType::Reservation).unwrap();
    assert_eq!(response.seated_count, 1);

    let queue = manager.queue().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, walk_in);
}

#[test]
fn seat_all_with_no_reservations_reports_nothing_to_do() {
    let manager = create_test_manager();
    join_waitlist(&manager, "Walk In", 2, None);
    let before = manager.state().unwrap();

    let response = manager.seat_all(EntryType::Reservation).unwrap();
    assert_eq!(response.seated_count, 0);
    assert_eq!(response.failed_count, 0);
    assert_eq!(manager.state().unwrap(), before);
}

#[test]
fn batch_entries_see_prior_assignments_for_near_requests() {
    let manager = create_test_manager();
    // Host books table 1 explicitly; friend wants to sit near them. The
    // friend's selection must observe the host's assignment made earlier in
    // the same batch.
    join_reservation(&manager, "Sarah Johnson", 2, Some("Table 1"));
    join_reservation(&manager, "Friend", 2, Some("near Sarah"));

    let response = manager.seat_all(EntryType::Reservation).unwrap();
    assert_eq!(response.seated_count, 2);

    let tables = manager.tables().unwrap();
    assert_eq!(tables[0].guest_name.as_deref(), Some("Sarah Johnson"));
    // First free neighbor of (0,0) is table 2
    assert_eq!(tables[1].guest_name.as_deref(), Some("Friend"));
}

#[test]
fn clear_all_tables_resets_the_floor() {
    let manager = create_test_manager();
    join_reservation(&manager, "A", 2, None);
    join_reservation(&manager, "B", 2, None);
    manager.seat_all(EntryType::Reservation).unwrap();
    manager.occupy_manually(7).unwrap();

    let cleared = manager.clear_all_tables().unwrap();
    assert_eq!(cleared, 3);
    assert!(manager.tables().unwrap().iter().all(|t| !t.occupied));

    // Nothing left to clear: store stays untouched
    let before = manager.state().unwrap();
    assert_eq!(manager.clear_all_tables().unwrap(), 0);
    assert_eq!(manager.state().unwrap(), before);
}
