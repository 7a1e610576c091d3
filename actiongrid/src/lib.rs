//! A tabular grid view with a dedicated column of per-row action buttons.
//!
//! [`ActionGrid`] wraps a plain grid core and maintains a synthetic action
//! column for it: actions are registered under unique keys, each rendered
//! as an icon button whose icon, styling, accessible name, tooltip,
//! visibility, and enablement are all evaluated per row. The column is
//! frozen to one edge of the grid and keeps that position across column
//! reordering, and its renderer is recompiled automatically whenever the
//! action set changes.
//!
//! ```
//! use actiongrid::prelude::*;
//!
//! #[derive(Clone)]
//! struct Item {
//!     name: String,
//!     done: bool,
//! }
//!
//! let grid: ActionGrid<Item> = ActionGrid::new();
//! grid.add_column("name").unwrap().set_header_text("Name");
//!
//! let toggle = grid.add_action("toggle").unwrap();
//! toggle
//!     .set_icon(Icon::new("vaadin:check"))
//!     .set_tooltip("Toggle")
//!     .add_click_handler(|item: &mut Item| item.done = !item.done);
//!
//! grid.set_rows(vec![Item { name: "first".into(), done: false }]);
//! grid.click_action(0, "toggle").unwrap();
//! assert!(grid.row(0).unwrap().done);
//! ```

pub mod actions;
pub mod error;
pub mod grid;
pub mod icon;
pub mod order;
pub mod renderer;

mod action_grid;

pub use action_grid::{ACTION_COLUMN_KEY, ActionGrid};

/// Common imports.
pub mod prelude {
    pub use crate::action_grid::{ACTION_COLUMN_KEY, ActionGrid};
    pub use crate::actions::{Action, ActionColumnWidth};
    pub use crate::error::ActionGridError;
    pub use crate::grid::{Column, ColumnHeader, ColumnId, ColumnWidth, GridCore};
    pub use crate::icon::Icon;
    pub use crate::order::ColumnPosition;
    pub use crate::renderer::{CellRenderer, PropertyValue};
}
