//! Row actions: configurable icon buttons rendered in a dedicated column.

mod action;
mod registry;
mod render;

pub use action::Action;
pub use render::ActionColumnWidth;

pub(crate) use action::RefreshHook;
pub(crate) use registry::ActionRegistry;
pub(crate) use render::refresh_action_column;
