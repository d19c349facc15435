//! Table Model

use serde::{Deserialize, Serialize};

/// A physical table on the floor grid.
///
/// `row`/`col` are derived from the table's index in the layout (fixed
/// 4-column grid); `id` is always index + 1. Occupancy fields are present
/// only while the table is occupied, except that a manually occupied table
/// carries `seated_at` with no guest metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub row: i32,
    pub col: i32,
    pub name: String,
    pub capacity: i32,
    pub occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i32>,
    /// Unix milliseconds; set whenever the table becomes occupied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seated_at: Option<i64>,
}

impl Table {
    /// A free table with no occupancy data.
    pub fn vacant(id: i64, row: i32, col: i32, name: String, capacity: i32) -> Self {
        Self {
            id,
            row,
            col,
            name,
            capacity,
            occupied: false,
            guest_name: None,
            party_size: None,
            seated_at: None,
        }
    }

    /// Seat a guest party at this table.
    pub fn seat(&mut self, guest_name: String, party_size: i32, seated_at: i64) {
        self.occupied = true;
        self.guest_name = Some(guest_name);
        self.party_size = Some(party_size);
        self.seated_at = Some(seated_at);
    }

    /// Mark occupied without guest metadata (walk-in handled off-system).
    pub fn occupy(&mut self, occupied_at: i64) {
        self.occupied = true;
        self.guest_name = None;
        self.party_size = None;
        self.seated_at = Some(occupied_at);
    }

    /// Release the table and drop all occupancy data.
    pub fn vacate(&mut self) {
        self.occupied = false;
        self.guest_name = None;
        self.party_size = None;
        self.seated_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacate_drops_all_occupancy_fields() {
        let mut table = Table::vacant(1, 0, 0, "Table 1".to_string(), 4);
        table.seat("Sarah Johnson".to_string(), 4, 1_000);
        assert!(table.occupied);
        assert_eq!(table.guest_name.as_deref(), Some("Sarah Johnson"));

        table.vacate();
        assert!(!table.occupied);
        assert_eq!(table.guest_name, None);
        assert_eq!(table.party_size, None);
        assert_eq!(table.seated_at, None);
    }

    #[test]
    fn manual_occupy_keeps_timestamp_only() {
        let mut table = Table::vacant(3, 0, 2, "Table 3".to_string(), 2);
        table.occupy(5_000);
        assert!(table.occupied);
        assert_eq!(table.guest_name, None);
        assert_eq!(table.party_size, None);
        assert_eq!(table.seated_at, Some(5_000));
    }
}
