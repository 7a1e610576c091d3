//! Column-order invariant.
//!
//! The action column must always sit at the edge of whichever frozen group
//! it belongs to: right after the last begin-frozen column when positioned
//! at the beginning, or at the inner edge of the end-frozen group when
//! positioned at the end. These functions re-derive the full column order
//! after any structural change. They are pure so the invariant can be
//! tested without a grid.

/// Which frozen group the action column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Frozen to the beginning of the grid.
    Beginning,
    /// Frozen to the end of the grid.
    End,
}

/// Frozen-state classification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrozenGroup {
    Beginning,
    Unfrozen,
    End,
}

impl ColumnPosition {
    pub(crate) fn group(self) -> FrozenGroup {
        match self {
            ColumnPosition::Beginning => FrozenGroup::Beginning,
            ColumnPosition::End => FrozenGroup::End,
        }
    }
}

fn sort_value(group: FrozenGroup) -> i8 {
    match group {
        FrozenGroup::Beginning => -1,
        FrozenGroup::Unfrozen => 0,
        FrozenGroup::End => 1,
    }
}

/// Stable begin + unfrozen + end ordering of the caller-visible columns.
pub(crate) fn stable_frozen_sort<C: Clone>(
    columns: &[C],
    group_of: impl Fn(&C) -> FrozenGroup,
) -> Vec<C> {
    let mut sorted = columns.to_vec();
    sorted.sort_by_key(|column| sort_value(group_of(column)));
    sorted
}

/// The action column's index within its frozen group, derived from the
/// current full column order.
pub(crate) fn action_index_in_group<C>(
    full_order: &[C],
    position: ColumnPosition,
    is_action: impl Fn(&C) -> bool,
    group_of: impl Fn(&C) -> FrozenGroup,
) -> usize {
    let group = position.group();
    let mut index = 0;
    for column in full_order {
        if is_action(column) {
            return index;
        }
        if group_of(column) == group {
            index += 1;
        }
    }
    index
}

/// Rebuild the full column order from the caller-supplied visible columns,
/// splicing the action column into its frozen group at `index_in_group`.
///
/// The visible columns are partitioned into begin-frozen, unfrozen, and
/// end-frozen groups (stable), the action column is inserted into its
/// group, and the groups are concatenated.
pub(crate) fn splice_action_column<C: Clone>(
    columns: &[C],
    action: C,
    position: ColumnPosition,
    index_in_group: usize,
    group_of: impl Fn(&C) -> FrozenGroup,
) -> Vec<C> {
    let mut begin = Vec::new();
    let mut unfrozen = Vec::new();
    let mut end = Vec::new();
    for column in columns {
        match group_of(column) {
            FrozenGroup::Beginning => begin.push(column.clone()),
            FrozenGroup::Unfrozen => unfrozen.push(column.clone()),
            FrozenGroup::End => end.push(column.clone()),
        }
    }

    match position {
        ColumnPosition::Beginning => begin.insert(index_in_group.min(begin.len()), action),
        ColumnPosition::End => end.insert(index_in_group.min(end.len()), action),
    }

    let mut ordered = begin;
    ordered.append(&mut unfrozen);
    ordered.append(&mut end);
    ordered
}
