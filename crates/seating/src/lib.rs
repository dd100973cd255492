//! Seating domain module.
//!
//! Capacity-bounded [`Table`]s and the per-wedding [`TableList`] registry.
//! Pure domain logic: no IO, no storage.

pub mod table;
pub mod table_list;

pub use table::{Capacity, Table};
pub use table_list::TableList;
pub use wedplan_guests::TableId;
