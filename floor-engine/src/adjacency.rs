//! Adjacent-table lookup

use shared::models::Table;

/// Free tables adjacent or diagonal to `reference` (within one row and one
/// column), in layout order. The reference position itself is excluded.
///
/// No distance ranking is applied; callers take the first candidate. That
/// first-in-layout-order tie-break is part of the seating contract.
pub fn find_nearby_tables<'a>(reference: &Table, tables: &'a [Table]) -> Vec<&'a Table> {
    tables
        .iter()
        .filter(|t| {
            if t.occupied {
                return false;
            }
            let row_diff = (t.row - reference.row).abs();
            let col_diff = (t.col - reference.col).abs();
            row_diff <= 1 && col_diff <= 1 && !(row_diff == 0 && col_diff == 0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_layout;

    #[test]
    fn returns_free_neighbors_in_layout_order() {
        // 4-column grid: table 1 at (0,0); neighbors are 2 (0,1), 5 (1,0), 6 (1,1)
        let tables = default_layout(12);
        let nearby = find_nearby_tables(&tables[0], &tables);
        let ids: Vec<i64> = nearby.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 5, 6]);
    }

    #[test]
    fn excludes_reference_position_and_occupied() {
        let mut tables = default_layout(12);
        tables[0].seat("Sarah Johnson".to_string(), 4, 1_000);
        tables[1].seat("Michael Chen".to_string(), 2, 1_000);

        let reference = tables[0].clone();
        let ids: Vec<i64> = find_nearby_tables(&reference, &tables)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn interior_table_sees_all_eight_neighbors() {
        let tables = default_layout(12);
        // Table 6 at (1,1): neighbors 1,2,3,5,7,9,10,11
        let nearby = find_nearby_tables(&tables[5], &tables);
        let ids: Vec<i64> = nearby.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 7, 9, 10, 11]);
    }

    #[test]
    fn may_be_empty() {
        let mut tables = default_layout(2);
        tables[1].seat("Emily Rodriguez".to_string(), 6, 1_000);
        let reference = tables[1].clone();
        // Only neighbor of (0,1) besides (0,0) is nothing else on a 2-table floor
        tables[0].seat("David Thompson".to_string(), 3, 1_000);
        assert!(find_nearby_tables(&reference, &tables).is_empty());
    }
}
