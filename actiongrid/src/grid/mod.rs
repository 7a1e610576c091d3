//! The underlying grid view: columns and row store.

mod column;
mod state;

pub use column::{Column, ColumnHeader, ColumnId, ColumnWidth};
pub use state::GridCore;

pub(crate) use column::WeakColumn;
