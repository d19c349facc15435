//! Floor state - the store-owned value the engine reads and commits

use serde::{Deserialize, Serialize};

use crate::models::{EntryType, QueueEntry, Table};

/// Complete floor snapshot: table layout plus waiting queue.
///
/// `tables` is kept in layout order (id ascending) and `queue` in join
/// order; selection and adjacency tie-breaks depend on those orders.
/// Only event appliers mutate this value, against a working copy that the
/// manager commits back atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorState {
    pub tables: Vec<Table>,
    pub queue: Vec<QueueEntry>,
    /// Sequence of the last applied event
    pub last_sequence: u64,
    /// Next queue entry id to hand out (monotonic)
    pub next_entry_id: i64,
}

impl FloorState {
    pub fn with_tables(tables: Vec<Table>) -> Self {
        Self {
            tables,
            queue: Vec::new(),
            last_sequence: 0,
            next_entry_id: 1,
        }
    }

    pub fn table(&self, table_id: i64) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    pub fn table_mut(&mut self, table_id: i64) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == table_id)
    }

    pub fn entry(&self, entry_id: i64) -> Option<&QueueEntry> {
        self.queue.iter().find(|e| e.id == entry_id)
    }

    /// Remove and return the entry, if still queued.
    pub fn remove_entry(&mut self, entry_id: i64) -> Option<QueueEntry> {
        let idx = self.queue.iter().position(|e| e.id == entry_id)?;
        Some(self.queue.remove(idx))
    }

    /// Entries of one type, in join order.
    pub fn entries_of(&self, entry_type: EntryType) -> impl Iterator<Item = &QueueEntry> {
        self.queue.iter().filter(move |e| e.entry_type == entry_type)
    }

    /// Allocate the next monotonic entry id.
    pub fn allocate_entry_id(&mut self) -> i64 {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        id
    }
}
