//! Table selection policy
//!
//! Picks one table for one queue entry, or declares none available.
//! Strict priority: explicitly requested table, then proximity to a named
//! guest, then first free table that fits the party. Every tie-break is
//! first-match in layout order; callers and the batch engine depend on the
//! exact policy, so none of it may be "improved" into distance ranking.

use shared::floor::SeatingOutcome;
use shared::models::{QueueEntry, Table};

use crate::adjacency::find_nearby_tables;
use crate::preferences::parse_special_requests;

/// Result of running the selection policy for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The chosen table, if any
    pub table_id: Option<i64>,
    /// Terminal tag: `Seated*` or `NoTableAvailable`
    pub outcome: SeatingOutcome,
    /// Non-terminal tags hit while falling through the priority chain,
    /// in encounter order
    pub advisories: Vec<SeatingOutcome>,
}

/// Select a table for `entry` against the given layout.
///
/// Pure: reads the slice, mutates nothing. The caller is responsible for
/// applying the resulting assignment.
pub fn select_table(entry: &QueueEntry, tables: &[Table]) -> Selection {
    let preference = parse_special_requests(entry.special_requests.as_deref());
    let mut advisories = Vec::new();

    // Priority 1: explicitly requested table
    if let Some(requested_id) = preference.requested_table_id {
        if let Some(table) = tables.iter().find(|t| t.id == requested_id) {
            if !table.occupied && table.capacity >= entry.party_size {
                return Selection {
                    table_id: Some(table.id),
                    outcome: SeatingOutcome::SeatedRequested,
                    advisories,
                };
            }
            if table.occupied {
                advisories.push(SeatingOutcome::RequestedOccupied);
            } else {
                advisories.push(SeatingOutcome::RequestedTooSmall);
            }
        }
        // Unknown table id: silent fall-through
    }

    // Priority 2: near a named, already-seated guest
    if let Some(target) = preference.near_guest_name.as_deref() {
        let target = target.to_lowercase();
        let host = tables.iter().find(|t| {
            t.occupied
                && t.guest_name
                    .as_deref()
                    .is_some_and(|g| g.to_lowercase().contains(&target))
        });
        match host {
            Some(host) => {
                // Only the first candidate is considered; a too-small first
                // candidate is not skipped in favor of a later one.
                match find_nearby_tables(host, tables).first() {
                    Some(candidate) if candidate.capacity >= entry.party_size => {
                        return Selection {
                            table_id: Some(candidate.id),
                            outcome: SeatingOutcome::SeatedNear,
                            advisories,
                        };
                    }
                    _ => advisories.push(SeatingOutcome::NearGuestNoTable),
                }
            }
            None => advisories.push(SeatingOutcome::NearGuestNotFound),
        }
    }

    // Priority 3: first free table that fits the party
    match tables
        .iter()
        .find(|t| !t.occupied && t.capacity >= entry.party_size)
    {
        Some(table) => Selection {
            table_id: Some(table.id),
            outcome: SeatingOutcome::SeatedFallback,
            advisories,
        },
        None => Selection {
            table_id: None,
            outcome: SeatingOutcome::NoTableAvailable,
            advisories,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_layout;
    use shared::models::EntryType;

    fn entry(party_size: i32, special_requests: Option<&str>) -> QueueEntry {
        QueueEntry {
            id: 1,
            name: "Guest".to_string(),
            party_size,
            joined_at: 0,
            estimated_wait: 15,
            special_requests: special_requests.map(str::to_string),
            entry_type: EntryType::Waitlist,
        }
    }

    #[test]
    fn requested_table_free_and_big_enough_wins() {
        // Table 3 has capacity 4 by default; raise it to 6 so the party fits
        let mut tables = default_layout(12);
        tables[2].capacity = 6;

        let selection = select_table(&entry(4, Some("Table 3")), &tables);
        assert_eq!(selection.table_id, Some(3));
        assert_eq!(selection.outcome, SeatingOutcome::SeatedRequested);
        assert!(selection.advisories.is_empty());
    }

    #[test]
    fn occupied_requested_table_falls_back_with_advisory() {
        let mut tables = default_layout(12);
        tables[2].seat("Sarah Johnson".to_string(), 2, 1_000);

        let selection = select_table(&entry(2, Some("table 3")), &tables);
        assert_eq!(selection.outcome, SeatingOutcome::SeatedFallback);
        assert_eq!(selection.table_id, Some(1));
        assert_eq!(selection.advisories, vec![SeatingOutcome::RequestedOccupied]);
    }

    #[test]
    fn too_small_requested_table_falls_back_with_advisory() {
        let tables = default_layout(12);
        // Table 1 seats 2; a party of 4 cannot take it
        let selection = select_table(&entry(4, Some("#1")), &tables);
        assert_eq!(selection.outcome, SeatingOutcome::SeatedFallback);
        assert_eq!(selection.table_id, Some(3));
        assert_eq!(selection.advisories, vec![SeatingOutcome::RequestedTooSmall]);
    }

    #[test]
    fn unknown_requested_table_id_falls_back_silently() {
        let tables = default_layout(12);
        let selection = select_table(&entry(2, Some("table 99")), &tables);
        assert_eq!(selection.outcome, SeatingOutcome::SeatedFallback);
        assert!(selection.advisories.is_empty());
    }

    #[test]
    fn near_guest_selects_first_adjacent_candidate() {
        // Sarah at table 1 (0,0); first free neighbor is table 2 at (0,1)
        let mut tables = default_layout(12);
        tables[0].seat("Sarah Johnson".to_string(), 4, 1_000);
        tables[1].capacity = 4;

        let selection = select_table(&entry(2, Some("near Sarah Johnson")), &tables);
        assert_eq!(selection.table_id, Some(2));
        assert_eq!(selection.outcome, SeatingOutcome::SeatedNear);
    }

    #[test]
    fn near_guest_match_is_case_insensitive_substring() {
        let mut tables = default_layout(12);
        tables[5].seat("Sarah Johnson".to_string(), 4, 1_000);

        let selection = select_table(&entry(2, Some("near sarah")), &tables);
        assert_eq!(selection.outcome, SeatingOutcome::SeatedNear);
        // First free neighbor of (1,1) in layout order is table 1
        assert_eq!(selection.table_id, Some(1));
    }

    #[test]
    fn near_guest_not_seated_anywhere_is_advisory() {
        let tables = default_layout(12);
        let selection = select_table(&entry(2, Some("near Nobody")), &tables);
        assert_eq!(selection.outcome, SeatingOutcome::SeatedFallback);
        assert_eq!(selection.advisories, vec![SeatingOutcome::NearGuestNotFound]);
    }

    #[test]
    fn too_small_first_neighbor_is_not_skipped() {
        // Host at table 1; first candidate is table 2 (capacity 2).
        // A party of 4 fails the near step even though table 6 would fit.
        let mut tables = default_layout(12);
        tables[0].seat("Sarah Johnson".to_string(), 2, 1_000);

        let selection = select_table(&entry(4, Some("near Sarah")), &tables);
        assert_eq!(selection.advisories, vec![SeatingOutcome::NearGuestNoTable]);
        assert_eq!(selection.outcome, SeatingOutcome::SeatedFallback);
        assert_eq!(selection.table_id, Some(3));
    }

    #[test]
    fn no_table_available_when_nothing_fits() {
        let mut tables = default_layout(2);
        tables[0].seat("A".to_string(), 2, 1_000);
        tables[1].seat("B".to_string(), 2, 1_000);

        let selection = select_table(&entry(2, None), &tables);
        assert_eq!(selection.table_id, None);
        assert_eq!(selection.outcome, SeatingOutcome::NoTableAvailable);
    }

    #[test]
    fn never_selects_occupied_or_too_small_tables() {
        let mut tables = default_layout(12);
        for table in tables.iter_mut().filter(|t| t.capacity < 6) {
            table.seat("X".to_string(), 2, 1_000);
        }

        let selection = select_table(&entry(6, None), &tables);
        let chosen = tables
            .iter()
            .find(|t| Some(t.id) == selection.table_id)
            .unwrap();
        assert!(!chosen.occupied);
        assert!(chosen.capacity >= 6);
    }
}
