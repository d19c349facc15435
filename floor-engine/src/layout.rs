//! Grid layout construction and resizing
//!
//! Tables live on a fixed 4-column grid. `id` is always index + 1 and
//! `(row, col)` are re-derived from the index, so a resize renumbers
//! positions while keeping each surviving slot's data.

use shared::models::Table;

/// Column count of the floor grid (layout is row-major over this width)
pub const GRID_COLS: usize = 4;

/// Seat counts for fresh slots, by layout index
const DEFAULT_CAPACITIES: [i32; 24] = [
    2, 2, 4, 4, 2, 4, 6, 6, 4, 4, 6, 8, 2, 4, 4, 6, 2, 4, 6, 8, 4, 4, 6, 8,
];
const FALLBACK_CAPACITY: i32 = 4;

fn slot(index: usize) -> (i64, i32, i32) {
    (
        (index + 1) as i64,
        (index / GRID_COLS) as i32,
        (index % GRID_COLS) as i32,
    )
}

/// Default capacity for a layout slot.
pub fn default_capacity(index: usize) -> i32 {
    DEFAULT_CAPACITIES
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_CAPACITY)
}

/// A fresh, unoccupied table for the given layout slot.
pub fn fresh_table(index: usize) -> Table {
    let (id, row, col) = slot(index);
    Table::vacant(id, row, col, format!("Table {id}"), default_capacity(index))
}

/// Build an all-vacant layout of `count` tables.
pub fn default_layout(count: usize) -> Vec<Table> {
    (0..count).map(fresh_table).collect()
}

/// Resize the layout to `count` tables.
///
/// Surviving indices keep their name, capacity, occupancy and guest data;
/// id and grid position are re-derived from the index. New slots get the
/// default capacity for their index.
pub fn resize(existing: &[Table], count: usize) -> Vec<Table> {
    (0..count)
        .map(|index| match existing.get(index) {
            Some(table) => {
                let (id, row, col) = slot(index);
                Table {
                    id,
                    row,
                    col,
                    ..table.clone()
                }
            }
            None => fresh_table(index),
        })
        .collect()
}
