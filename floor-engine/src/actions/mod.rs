//! Command action implementations
//!
//! One file per operation. Actions validate input against the working copy
//! in [`CommandContext`](crate::context::CommandContext), record events, and
//! return the operation's typed result. Lookup misses are no-ops, never
//! errors; only boundary-invalid configuration input returns `Err`.

mod clear_all_tables;
mod clear_table;
mod join_queue;
mod no_show;
mod occupy_table;
mod promote;
mod rename_table;
mod resize_layout;
mod seat_all;
mod update_capacity;

pub use clear_all_tables::ClearAllTablesAction;
pub use clear_table::ClearTableAction;
pub use join_queue::JoinQueueAction;
pub use no_show::NoShowAction;
pub use occupy_table::OccupyTableAction;
pub use promote::PromoteAction;
pub use rename_table::RenameTableAction;
pub use resize_layout::ResizeLayoutAction;
pub use seat_all::SeatAllAction;
pub use update_capacity::UpdateCapacityAction;
