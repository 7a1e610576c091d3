//! Configuration errors raised by grid and action operations.

/// Caller-misuse errors, raised synchronously at the call site.
///
/// Lookup misses are deliberately not part of this enum: `action_by_key`
/// and `column_by_key` return `None` for an unmatched key. A click arriving
/// for a row whose action is currently invisible or disabled is discarded
/// silently and never surfaces here either.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionGridError {
    /// An action or column key was empty.
    #[error("key cannot be empty")]
    EmptyKey,

    /// An action with the same key is already registered.
    #[error("action with key \"{0}\" already exists")]
    DuplicateAction(String),

    /// No action with the given key exists.
    #[error("action with key \"{0}\" not found")]
    ActionNotFound(String),

    /// The key is reserved for the synthetic action column.
    #[error("column key \"{0}\" is reserved")]
    ReservedColumnKey(String),

    /// A column with the same key is already present.
    #[error("column with key \"{0}\" already exists")]
    DuplicateColumn(String),

    /// No caller-visible column with the given key exists.
    #[error("column with key \"{0}\" not found")]
    ColumnNotFound(String),

    /// A row index was outside the current row set.
    #[error("row index {0} is out of bounds")]
    RowOutOfBounds(usize),

    /// `set_column_order` was given a list that is not a permutation of
    /// the grid's caller-visible columns.
    #[error("column order must contain exactly the grid's columns")]
    ColumnOrderMismatch,
}
