//! Renderer compilation for the action column.
//!
//! The action column's renderer is rebuilt from scratch whenever the action
//! set or any action's configuration changes: one button fragment per
//! action, each with per-row properties for icon, class name, accessible
//! name, tooltip, visibility, and enablement, plus a click function.

use std::sync::{Arc, RwLock, Weak};

use log::debug;

use crate::grid::{ColumnWidth, WeakColumn};
use crate::renderer::{CellRenderer, PropertyValue};

use super::action::Action;

/// Wraps the buttons so clicks inside the cell never bubble into a row
/// selection.
const COLUMN_TEMPLATE_PREFIX: &str = "<div\n \
     style=\"width:100%; height:100%;\"\n \
     @click=${(event) => event.stopPropagation()}>";

const COLUMN_TEMPLATE_SUFFIX: &str = "</div>";

/// One icon button per action. Visibility is styled rather than omitted so
/// every row keeps the same button layout.
fn button_fragment(key: &str) -> String {
    format!(
        "\n    <vaadin-button\n     \
         name=\"{key}\"\n     \
         role=\"button\"\n     \
         aria-label=\"${{item.{key}AriaLabel}}\"\n     \
         theme=\"small tertiary-inline icon\"\n     \
         ?disabled=${{!item.{key}Enabled}}\n     \
         style=\"visibility:${{item.{key}Visible ? \"visible\" : \"hidden\"}};\"\n     \
         @click=${{{key}Click}}>\n        \
         <vaadin-icon slot=\"prefix\" icon=\"${{item.{key}IconName}}\"\n         \
         class=\"icon-s ${{item.{key}ClassName}}\"\n         \
         style=\"padding:2px;\"></vaadin-icon>\n        \
         <vaadin-tooltip slot=\"tooltip\" text=\"${{item.{key}Tooltip}}\"></vaadin-tooltip>\n    \
         </vaadin-button>\n"
    )
}

/// Width policy for the action column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionColumnWidth {
    /// Width grows with the number of actions, this many units per action.
    PerAction(u16),
    /// Constant width regardless of action count.
    Fixed(u16),
}

impl Default for ActionColumnWidth {
    fn default() -> Self {
        ActionColumnWidth::PerAction(2)
    }
}

impl ActionColumnWidth {
    /// The concrete column width for the given number of actions.
    pub fn column_width(self, action_count: usize) -> ColumnWidth {
        match self {
            ActionColumnWidth::PerAction(per) => {
                ColumnWidth::Fixed(per.saturating_mul(action_count as u16))
            }
            ActionColumnWidth::Fixed(width) => ColumnWidth::Fixed(width),
        }
    }
}

/// Compile the current action set into a fresh cell renderer.
pub(crate) fn compile<T: 'static>(actions: &[Action<T>]) -> CellRenderer<T> {
    let mut template = String::from(COLUMN_TEMPLATE_PREFIX);
    for action in actions {
        template.push_str(&button_fragment(action.key()));
    }
    template.push_str(COLUMN_TEMPLATE_SUFFIX);

    let mut renderer = CellRenderer::of(template);
    for action in actions {
        let key = action.key().to_string();
        let icon = action.clone();
        let class_name = action.clone();
        let aria_label = action.clone();
        let tooltip = action.clone();
        let visible = action.clone();
        let enabled = action.clone();
        let click = action.clone();
        renderer = renderer
            .with_property(format!("{key}IconName"), move |row: &T| {
                PropertyValue::Text(icon.icon_name_for(row))
            })
            .with_property(format!("{key}ClassName"), move |row: &T| {
                PropertyValue::Text(class_name.class_name_for(row))
            })
            .with_property(format!("{key}AriaLabel"), move |row: &T| {
                PropertyValue::Text(aria_label.accessible_name_for(row))
            })
            .with_property(format!("{key}Tooltip"), move |row: &T| {
                PropertyValue::Text(tooltip.tooltip_for(row))
            })
            .with_property(format!("{key}Visible"), move |row: &T| {
                PropertyValue::Flag(visible.is_visible_for(row))
            })
            .with_property(format!("{key}Enabled"), move |row: &T| {
                PropertyValue::Flag(enabled.is_enabled_for(row))
            })
            .with_function(format!("{key}Click"), move |row: &mut T| {
                click.click_for(row);
            });
    }
    renderer
}

/// Recompile the action column's renderer and width from the current action
/// set.
///
/// Holds only weak handles so the hook stored inside every action does not
/// keep the column or the grid alive. A hook firing after the grid is gone
/// is a no-op.
pub(crate) fn refresh_action_column<T: Clone + Send + Sync + 'static>(
    actions: &Weak<RwLock<Vec<Action<T>>>>,
    column: &WeakColumn<T>,
    width: &Weak<RwLock<ActionColumnWidth>>,
) {
    let Some(actions) = actions.upgrade() else {
        return;
    };
    let Some(column) = column.upgrade() else {
        return;
    };
    let actions = actions.read().map(|g| g.clone()).unwrap_or_default();
    debug!(
        "recompiling action column renderer for {} action(s)",
        actions.len()
    );
    column.set_renderer(compile(&actions));

    let policy = width
        .upgrade()
        .and_then(|w| w.read().map(|g| *g).ok())
        .unwrap_or_default();
    column.set_width(policy.column_width(actions.len()));
}
