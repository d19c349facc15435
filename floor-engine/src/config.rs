//! Engine configuration
//!
//! # Environment variables
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | FLOOR_TABLE_COUNT | 12 | initial layout size (clamped to 1..=24) |

/// Smallest layout the floor supports
pub const MIN_TABLE_COUNT: usize = 1;
/// Largest layout the floor supports (6 rows of the fixed 4-column grid)
pub const MAX_TABLE_COUNT: usize = 24;

/// Per-table capacity bounds enforced at the update boundary
pub const MIN_TABLE_CAPACITY: i32 = 1;
pub const MAX_TABLE_CAPACITY: i32 = 20;

const DEFAULT_TABLE_COUNT: usize = 12;

/// Floor configuration
#[derive(Debug, Clone)]
pub struct FloorConfig {
    /// Number of tables in the initial layout
    pub table_count: usize,
}

impl FloorConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let table_count = std::env::var("FLOOR_TABLE_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TABLE_COUNT)
            .clamp(MIN_TABLE_COUNT, MAX_TABLE_COUNT);
        Self { table_count }
    }
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            table_count: DEFAULT_TABLE_COUNT,
        }
    }
}
