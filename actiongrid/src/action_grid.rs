//! Grid with a dedicated, self-maintaining action column.

use std::sync::{Arc, RwLock};

use log::debug;

use crate::actions::{
    Action, ActionColumnWidth, ActionRegistry, RefreshHook, refresh_action_column,
};
use crate::error::ActionGridError;
use crate::grid::{Column, ColumnHeader, GridCore};
use crate::order::{
    ColumnPosition, FrozenGroup, action_index_in_group, splice_action_column, stable_frozen_sort,
};

/// Column key reserved for the action column.
pub const ACTION_COLUMN_KEY: &str = "actions";

fn group_of<T>(column: &Column<T>) -> FrozenGroup {
    if column.is_frozen() {
        FrozenGroup::Beginning
    } else if column.is_frozen_to_end() {
        FrozenGroup::End
    } else {
        FrozenGroup::Unfrozen
    }
}

/// A grid with a dedicated column of per-row action buttons.
///
/// The action column is created up front under the reserved key
/// [`ACTION_COLUMN_KEY`], frozen to the end, excluded from flex growth, and
/// kept at the edge of its frozen group across every column operation. Its
/// renderer is recompiled automatically whenever the action set or any
/// action's configuration changes.
pub struct ActionGrid<T: Clone + Send + Sync + 'static> {
    core: GridCore<T>,
    registry: ActionRegistry<T>,
    action_column: Column<T>,
    width_policy: Arc<RwLock<ActionColumnWidth>>,
    refresh: RefreshHook,
}

impl<T: Clone + Send + Sync + 'static> ActionGrid<T> {
    /// Create an empty grid with its action column installed.
    pub fn new() -> Self {
        let core = GridCore::new();
        let action_column = Column::new(ACTION_COLUMN_KEY).frozen_to_end();
        action_column.set_flex_grow(0);

        let actions: Arc<RwLock<Vec<Action<T>>>> = Arc::new(RwLock::new(Vec::new()));
        let width_policy = Arc::new(RwLock::new(ActionColumnWidth::default()));

        let weak_actions = Arc::downgrade(&actions);
        let weak_column = action_column.downgrade();
        let weak_width = Arc::downgrade(&width_policy);
        let dirty_core = core.clone();
        let refresh: RefreshHook = Arc::new(move || {
            refresh_action_column(&weak_actions, &weak_column, &weak_width);
            dirty_core.mark_dirty();
        });

        let registry = ActionRegistry::new(actions, Arc::clone(&refresh));
        core.add_column(action_column.clone());
        refresh();

        Self {
            core,
            registry,
            action_column,
            width_policy,
            refresh,
        }
    }

    /// The underlying grid view.
    pub fn core(&self) -> &GridCore<T> {
        &self.core
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Add a column and return its handle.
    ///
    /// The key must be non-empty, not the reserved action-column key, and
    /// not already in use. The action column is re-pinned to its frozen
    /// edge afterwards.
    pub fn add_column(&self, key: impl Into<String>) -> Result<Column<T>, ActionGridError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ActionGridError::EmptyKey);
        }
        if key == ACTION_COLUMN_KEY {
            return Err(ActionGridError::ReservedColumnKey(key));
        }
        if self.core.column_by_key(&key).is_some() {
            return Err(ActionGridError::DuplicateColumn(key));
        }
        let column = Column::new(key);
        self.core.add_column(column.clone());
        self.fix_frozen_column_order();
        Ok(column)
    }

    /// All caller-added columns in display order. The action column is not
    /// included.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.core
            .columns()
            .into_iter()
            .filter(|c| c != &self.action_column)
            .collect()
    }

    /// Find a caller-added column by key. The reserved action-column key
    /// never matches.
    pub fn column_by_key(&self, key: &str) -> Option<Column<T>> {
        if key == ACTION_COLUMN_KEY {
            return None;
        }
        self.core.column_by_key(key)
    }

    /// Remove a caller-added column. The action column cannot be removed.
    pub fn remove_column(&self, column: &Column<T>) -> Result<(), ActionGridError> {
        if column == &self.action_column {
            return Err(ActionGridError::ColumnNotFound(column.key()));
        }
        if !self.core.remove_column(column) {
            return Err(ActionGridError::ColumnNotFound(column.key()));
        }
        self.fix_frozen_column_order();
        Ok(())
    }

    /// Remove a caller-added column by key. The reserved action-column key
    /// is reported as not found.
    pub fn remove_column_by_key(&self, key: &str) -> Result<(), ActionGridError> {
        let column = self
            .column_by_key(key)
            .ok_or_else(|| ActionGridError::ColumnNotFound(key.to_string()))?;
        self.remove_column(&column)
    }

    /// Remove every caller-added column.
    pub fn remove_all_columns(&self) {
        for column in self.columns() {
            self.core.remove_column(&column);
        }
        self.fix_frozen_column_order();
    }

    /// Reorder the caller-added columns.
    ///
    /// `columns` must be a permutation of [`Self::columns`]. The action
    /// column keeps its previously-held position within its frozen group,
    /// and the frozen partitioning is re-established.
    pub fn set_column_order(&self, columns: Vec<Column<T>>) -> Result<(), ActionGridError> {
        let current = self.columns();
        if columns.len() != current.len()
            || current.iter().any(|c| !columns.contains(c))
            || columns.iter().any(|c| c == &self.action_column)
        {
            return Err(ActionGridError::ColumnOrderMismatch);
        }

        let full = self.core.columns();
        let index_in_group = action_index_in_group(
            &full,
            self.action_column_position(),
            |c| c == &self.action_column,
            group_of,
        );
        let ordered = splice_action_column(
            &columns,
            self.action_column.clone(),
            self.action_column_position(),
            index_in_group,
            group_of,
        );
        self.core.set_column_order(ordered);
        Ok(())
    }

    /// Re-establish the begin-frozen, unfrozen, end-frozen partitioning of
    /// the full column order. Stable within each group.
    pub fn fix_frozen_column_order(&self) {
        let ordered = stable_frozen_sort(&self.core.columns(), group_of);
        self.core.set_column_order(ordered);
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Register a new action under `key` and return its handle for
    /// configuration.
    pub fn add_action(&self, key: &str) -> Result<Action<T>, ActionGridError> {
        let action = self.registry.add_action(key)?;
        self.fix_frozen_column_order();
        Ok(action)
    }

    /// All actions in registration order.
    pub fn actions(&self) -> Vec<Action<T>> {
        self.registry.actions()
    }

    /// Find an action by key.
    pub fn action_by_key(&self, key: &str) -> Option<Action<T>> {
        self.registry.action_by_key(key)
    }

    /// Remove an action by handle.
    pub fn remove_action(&self, action: &Action<T>) -> Result<(), ActionGridError> {
        self.registry.remove_action(action)?;
        self.fix_frozen_column_order();
        Ok(())
    }

    /// Remove an action by key.
    pub fn remove_action_by_key(&self, key: &str) -> Result<(), ActionGridError> {
        self.registry.remove_action_by_key(key)?;
        self.fix_frozen_column_order();
        Ok(())
    }

    /// Remove all actions.
    pub fn remove_all_actions(&self) {
        self.registry.remove_all_actions();
        self.fix_frozen_column_order();
    }

    /// Number of registered actions.
    pub fn action_count(&self) -> usize {
        self.registry.len()
    }

    // -------------------------------------------------------------------------
    // Action column
    // -------------------------------------------------------------------------

    /// Which frozen edge the action column is pinned to.
    pub fn action_column_position(&self) -> ColumnPosition {
        if self.action_column.is_frozen() {
            ColumnPosition::Beginning
        } else {
            ColumnPosition::End
        }
    }

    /// Pin the action column to the beginning of the grid. No-op when
    /// already there.
    pub fn freeze_action_column_to_beginning(&self) {
        if self.action_column_position() == ColumnPosition::Beginning {
            return;
        }
        debug!("freezing action column to beginning");
        self.action_column.set_frozen_to_end(false);
        self.action_column.set_frozen(true);
        self.fix_frozen_column_order();
    }

    /// Pin the action column to the end of the grid. No-op when already
    /// there.
    pub fn freeze_action_column_to_end(&self) {
        if self.action_column_position() == ColumnPosition::End {
            return;
        }
        debug!("freezing action column to end");
        self.action_column.set_frozen(false);
        self.action_column.set_frozen_to_end(true);
        self.fix_frozen_column_order();
    }

    /// Whether the action column is visible.
    pub fn is_action_column_visible(&self) -> bool {
        self.action_column.is_visible()
    }

    /// Show or hide the action column.
    pub fn set_action_column_visible(&self, visible: bool) {
        self.action_column.set_visible(visible);
        self.core.mark_dirty();
    }

    /// The action column's header content.
    pub fn action_column_header(&self) -> Option<ColumnHeader> {
        self.action_column.header_content()
    }

    /// Set the action column's header.
    pub fn set_action_column_header(&self, header: ColumnHeader) {
        self.action_column.set_header(Some(header));
        self.core.mark_dirty();
    }

    /// Set a plain-text header on the action column.
    pub fn set_action_column_header_text(&self, text: impl Into<String>) {
        self.set_action_column_header(ColumnHeader::Text(text.into()));
    }

    /// The action column's width policy.
    pub fn action_column_width(&self) -> ActionColumnWidth {
        self.width_policy
            .read()
            .map(|g| *g)
            .unwrap_or_default()
    }

    /// Set the action column's width policy.
    pub fn set_action_column_width(&self, policy: ActionColumnWidth) {
        if let Ok(mut guard) = self.width_policy.write() {
            *guard = policy;
        }
        (self.refresh)();
    }

    /// Force a renderer recompilation for the action column.
    ///
    /// Needed when a provider's output depends on state outside the row
    /// object, where no grid mutation would otherwise trigger a refresh.
    pub fn refresh_action_column(&self) {
        (self.refresh)();
    }

    /// The action column handle. Exposed for render integration and test
    /// harnesses; the grid maintains the column itself.
    #[doc(hidden)]
    pub fn action_column_handle(&self) -> Column<T> {
        self.action_column.clone()
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace all rows.
    pub fn set_rows(&self, rows: Vec<T>) {
        self.core.set_rows(rows);
    }

    /// All rows, in order.
    pub fn rows(&self) -> Vec<T> {
        self.core.rows()
    }

    /// A row by index.
    pub fn row(&self, index: usize) -> Option<T> {
        self.core.row(index)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.core.row_count()
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Dispatch a click of the action registered under `key` against the
    /// row at `index`, as a client-side button click would.
    ///
    /// The click still goes through the action's own visibility and
    /// enablement checks, so a hidden or disabled action is a silent no-op.
    pub fn click_action(&self, index: usize, key: &str) -> Result<(), ActionGridError> {
        if self.registry.action_by_key(key).is_none() {
            return Err(ActionGridError::ActionNotFound(key.to_string()));
        }
        self.core
            .invoke_cell_function(&self.action_column, &format!("{key}Click"), index)?;
        Ok(())
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ActionGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}
