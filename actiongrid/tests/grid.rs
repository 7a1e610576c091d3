use actiongrid::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    name: String,
}

fn item(name: &str) -> Item {
    Item { name: name.into() }
}

fn keys<T>(columns: &[Column<T>]) -> Vec<String> {
    columns.iter().map(|c| c.key()).collect()
}

#[test]
fn action_column_is_installed_on_construction() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    let column = grid
        .core()
        .column_by_key(ACTION_COLUMN_KEY)
        .expect("action column missing");
    assert!(column.is_frozen_to_end());
    assert!(!column.is_frozen());
    assert_eq!(column.flex_grow(), 0);
    assert!(column.is_visible());
    assert!(column.cell_renderer().is_some());
}

#[test]
fn columns_excludes_the_action_column() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("name").unwrap();
    grid.add_column("info").unwrap();

    assert_eq!(keys(&grid.columns()), vec!["name", "info"]);
    assert_eq!(grid.core().columns().len(), 3);
}

#[test]
fn add_column_rejects_bad_keys() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("name").unwrap();

    assert_eq!(grid.add_column(""), Err(ActionGridError::EmptyKey));
    assert_eq!(
        grid.add_column(ACTION_COLUMN_KEY),
        Err(ActionGridError::ReservedColumnKey("actions".into()))
    );
    assert_eq!(
        grid.add_column("name"),
        Err(ActionGridError::DuplicateColumn("name".into()))
    );
}

#[test]
fn column_by_key_never_returns_the_action_column() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("name").unwrap();

    assert!(grid.column_by_key("name").is_some());
    assert!(grid.column_by_key(ACTION_COLUMN_KEY).is_none());
    assert!(grid.column_by_key("missing").is_none());
}

#[test]
fn action_column_stays_last_as_columns_are_added() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("a").unwrap();
    grid.add_column("b").unwrap();
    grid.add_column("c").unwrap();

    assert_eq!(keys(&grid.core().columns()), vec!["a", "b", "c", "actions"]);
}

#[test]
fn begin_frozen_columns_sort_ahead_of_unfrozen() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("a").unwrap();
    let pinned = grid.add_column("pin").unwrap();
    pinned.set_frozen(true);
    grid.fix_frozen_column_order();

    assert_eq!(keys(&grid.core().columns()), vec!["pin", "a", "actions"]);
}

#[test]
fn freeze_to_beginning_moves_action_column_to_front() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("a").unwrap();
    grid.add_column("b").unwrap();

    grid.freeze_action_column_to_beginning();
    assert_eq!(grid.action_column_position(), ColumnPosition::Beginning);
    assert_eq!(keys(&grid.core().columns()), vec!["actions", "a", "b"]);

    // Already at the beginning: nothing changes.
    grid.freeze_action_column_to_beginning();
    assert_eq!(keys(&grid.core().columns()), vec!["actions", "a", "b"]);

    grid.freeze_action_column_to_end();
    assert_eq!(grid.action_column_position(), ColumnPosition::End);
    assert_eq!(keys(&grid.core().columns()), vec!["a", "b", "actions"]);
}

#[test]
fn action_column_follows_begin_frozen_columns_when_frozen_to_beginning() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    let pinned = grid.add_column("pin").unwrap();
    pinned.set_frozen(true);
    grid.add_column("a").unwrap();
    grid.freeze_action_column_to_beginning();

    assert_eq!(keys(&grid.core().columns()), vec!["pin", "actions", "a"]);
}

#[test]
fn set_column_order_reorders_user_columns() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    let a = grid.add_column("a").unwrap();
    let b = grid.add_column("b").unwrap();
    let c = grid.add_column("c").unwrap();

    grid.set_column_order(vec![c, a, b]).unwrap();
    assert_eq!(keys(&grid.core().columns()), vec!["c", "a", "b", "actions"]);
}

#[test]
fn set_column_order_rejects_non_permutations() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    let a = grid.add_column("a").unwrap();
    grid.add_column("b").unwrap();

    assert_eq!(
        grid.set_column_order(vec![a.clone()]),
        Err(ActionGridError::ColumnOrderMismatch)
    );
    assert_eq!(
        grid.set_column_order(vec![a.clone(), a]),
        Err(ActionGridError::ColumnOrderMismatch)
    );
}

#[test]
fn set_column_order_keeps_action_column_at_its_frozen_edge() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    let a = grid.add_column("a").unwrap();
    let b = grid.add_column("b").unwrap();
    grid.freeze_action_column_to_beginning();

    grid.set_column_order(vec![b, a]).unwrap();
    assert_eq!(keys(&grid.core().columns()), vec!["actions", "b", "a"]);
}

#[test]
fn remove_column_refuses_the_action_column() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("name").unwrap();

    assert_eq!(
        grid.remove_column_by_key(ACTION_COLUMN_KEY),
        Err(ActionGridError::ColumnNotFound("actions".into()))
    );
    assert_eq!(
        grid.remove_column_by_key("missing"),
        Err(ActionGridError::ColumnNotFound("missing".into()))
    );

    grid.remove_column_by_key("name").unwrap();
    assert!(grid.columns().is_empty());
}

#[test]
fn remove_all_columns_keeps_the_action_column() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.add_column("a").unwrap();
    grid.add_column("b").unwrap();

    grid.remove_all_columns();
    assert!(grid.columns().is_empty());
    assert_eq!(keys(&grid.core().columns()), vec!["actions"]);
}

#[test]
fn action_column_width_tracks_action_count() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    let column = grid.core().column_by_key(ACTION_COLUMN_KEY).unwrap();
    assert_eq!(grid.action_column_width(), ActionColumnWidth::PerAction(2));
    assert_eq!(column.width(), ColumnWidth::Fixed(0));

    grid.add_action("one").unwrap();
    grid.add_action("two").unwrap();
    assert_eq!(column.width(), ColumnWidth::Fixed(4));

    grid.remove_action_by_key("one").unwrap();
    assert_eq!(column.width(), ColumnWidth::Fixed(2));
}

#[test]
fn fixed_width_policy_ignores_action_count() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.set_action_column_width(ActionColumnWidth::Fixed(10));
    grid.add_action("one").unwrap();
    grid.add_action("two").unwrap();
    grid.add_action("three").unwrap();

    let column = grid.core().column_by_key(ACTION_COLUMN_KEY).unwrap();
    assert_eq!(column.width(), ColumnWidth::Fixed(10));
}

#[test]
fn action_column_visibility_and_header() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    assert!(grid.is_action_column_visible());

    grid.set_action_column_visible(false);
    assert!(!grid.is_action_column_visible());

    grid.set_action_column_header_text("Actions");
    assert_eq!(
        grid.action_column_header(),
        Some(ColumnHeader::Text("Actions".into()))
    );
}

#[test]
fn rows_round_trip() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.set_rows(vec![item("first"), item("second")]);

    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.row(1), Some(item("second")));
    assert_eq!(grid.row(2), None);
    assert_eq!(grid.rows().len(), 2);
}

#[test]
fn mutations_mark_the_grid_dirty() {
    let grid: ActionGrid<Item> = ActionGrid::new();
    grid.core().clear_dirty();

    grid.add_column("name").unwrap();
    assert!(grid.core().is_dirty());

    grid.core().clear_dirty();
    grid.add_action("toggle").unwrap();
    assert!(grid.core().is_dirty());
}
