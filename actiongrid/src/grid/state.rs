//! Minimal underlying grid view.
//!
//! `GridCore` is the host surface the action subsystem decorates: the full
//! column list (synthetic action column included), the row store, and the
//! client-event round trip that invokes a named function binding of a
//! column's renderer against a row. Virtualization, selection, and sorting
//! belong to the surrounding view component, not here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::error::ActionGridError;

use super::column::Column;

#[derive(Debug)]
struct GridInner<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
}

/// The underlying tabular view state.
#[derive(Debug)]
pub struct GridCore<T> {
    inner: Arc<RwLock<GridInner<T>>>,
    dirty: Arc<AtomicBool>,
}

impl<T: Clone + Send + Sync + 'static> GridCore<T> {
    /// Create an empty grid core.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(GridInner {
                columns: Vec::new(),
                rows: Vec::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// The full column order, synthetic columns included.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Append a column.
    pub fn add_column(&self, column: Column<T>) {
        if let Ok(mut guard) = self.inner.write() {
            debug!("adding column \"{}\"", column.key());
            guard.columns.push(column);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove a column. Returns `false` if the column is not present.
    pub fn remove_column(&self, column: &Column<T>) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let Some(index) = guard.columns.iter().position(|c| c == column) else {
                return false;
            };
            debug!("removing column \"{}\"", column.key());
            guard.columns.remove(index);
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Replace the full column order.
    pub fn set_column_order(&self, columns: Vec<Column<T>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.columns = columns;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Find a column by key. First match wins.
    pub fn column_by_key(&self, key: &str) -> Option<Column<T>> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.columns.iter().find(|c| c.key() == key).cloned())
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace all rows.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// All rows, in order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// A row by index.
    pub fn row(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Client-event round trip
    // -------------------------------------------------------------------------

    /// Invoke a named function binding of `column`'s renderer against the
    /// row at `index`.
    ///
    /// The row is cloned out of the lock for the invocation and written back
    /// afterwards, so the bound function may re-enter the grid (handlers
    /// commonly trigger a renderer refresh). Returns `false` when the column
    /// has no renderer or no binding with that name.
    pub fn invoke_cell_function(
        &self,
        column: &Column<T>,
        name: &str,
        index: usize,
    ) -> Result<bool, ActionGridError> {
        let Some(mut row) = self.row(index) else {
            return Err(ActionGridError::RowOutOfBounds(index));
        };
        let Some(function) = column.cell_renderer().and_then(|r| r.function(name)) else {
            return Ok(false);
        };

        function(&mut row);

        if let Ok(mut guard) = self.inner.write()
            && let Some(slot) = guard.rows.get_mut(index)
        {
            *slot = row;
        }
        self.dirty.store(true, Ordering::SeqCst);
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Whether the grid has changed since the last render pass.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Mark the grid as changed.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl<T: Clone + Send + Sync + 'static> Default for GridCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for GridCore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
