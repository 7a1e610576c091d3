use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actiongrid::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct ToggleItem {
    name: String,
    on: bool,
    visible: bool,
    enabled: bool,
}

fn toggle_item(name: &str, on: bool, visible: bool, enabled: bool) -> ToggleItem {
    ToggleItem {
        name: name.into(),
        on,
        visible,
        enabled,
    }
}

/// One row per combination of initial state, visibility, and enablement.
fn permutation_rows() -> Vec<ToggleItem> {
    let mut rows = Vec::new();
    for on in [false, true] {
        for visible in [false, true] {
            for enabled in [false, true] {
                let name = format!("on:{on} visible:{visible} enabled:{enabled}");
                rows.push(toggle_item(&name, on, visible, enabled));
            }
        }
    }
    rows
}

fn toggle_grid() -> ActionGrid<ToggleItem> {
    let grid = ActionGrid::new();
    let toggle = grid.add_action("toggle").unwrap();
    toggle
        .set_visible_predicate(|item: &ToggleItem| item.visible)
        .set_enabled_predicate(|item: &ToggleItem| item.enabled)
        .add_click_handler(|item: &mut ToggleItem| item.on = !item.on);
    grid.set_rows(permutation_rows());
    grid
}

#[test]
fn click_flips_only_visible_and_enabled_rows() {
    let grid = toggle_grid();
    let before = grid.rows();

    for index in 0..grid.row_count() {
        grid.click_action(index, "toggle").unwrap();
    }

    for (was, now) in before.iter().zip(grid.rows()) {
        if was.visible && was.enabled {
            assert_eq!(now.on, !was.on, "row {:?} should have flipped", was.name);
        } else {
            assert_eq!(now.on, was.on, "row {:?} should not have flipped", was.name);
        }
    }
}

#[test]
fn click_for_unknown_action_is_an_error() {
    let grid = toggle_grid();
    assert_eq!(
        grid.click_action(0, "missing"),
        Err(ActionGridError::ActionNotFound("missing".into()))
    );
}

#[test]
fn click_for_out_of_bounds_row_is_an_error() {
    let grid = toggle_grid();
    let count = grid.row_count();
    assert_eq!(
        grid.click_action(count, "toggle"),
        Err(ActionGridError::RowOutOfBounds(count))
    );
}

#[test]
fn handlers_run_in_registration_order() {
    let grid: ActionGrid<ToggleItem> = ActionGrid::new();
    let action = grid.add_action("rename").unwrap();
    action
        .add_click_handler(|item: &mut ToggleItem| item.name.push('a'))
        .add_click_handler(|item: &mut ToggleItem| item.name.push('b'));
    grid.set_rows(vec![toggle_item("x-", false, true, true)]);

    grid.click_action(0, "rename").unwrap();
    assert_eq!(grid.row(0).unwrap().name, "x-ab");
}

#[test]
fn disabling_an_action_after_registration_blocks_clicks() {
    let grid: ActionGrid<ToggleItem> = ActionGrid::new();
    let action = grid.add_action("toggle").unwrap();
    action.add_click_handler(|item: &mut ToggleItem| item.on = !item.on);
    grid.set_rows(vec![toggle_item("a", false, true, true)]);

    action.set_enabled(false);
    grid.click_action(0, "toggle").unwrap();
    assert!(!grid.row(0).unwrap().on);

    action.set_enabled(true);
    grid.click_action(0, "toggle").unwrap();
    assert!(grid.row(0).unwrap().on);
}

#[test]
fn hidden_action_clicks_are_discarded_silently() {
    let grid: ActionGrid<ToggleItem> = ActionGrid::new();
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);

    let action = grid.add_action("toggle").unwrap();
    action
        .set_visible(false)
        .add_click_handler(move |_: &mut ToggleItem| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    grid.set_rows(vec![toggle_item("a", false, true, true)]);

    grid.click_action(0, "toggle").unwrap();
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn handlers_may_reconfigure_the_grid_while_dispatching() {
    let grid: ActionGrid<ToggleItem> = ActionGrid::new();
    let action = grid.add_action("arm").unwrap();
    let handle = action.clone();
    action.add_click_handler(move |item: &mut ToggleItem| {
        item.on = true;
        // Re-entrant reconfiguration: the first click disarms the action.
        handle.set_enabled(false);
    });
    grid.set_rows(vec![
        toggle_item("a", false, true, true),
        toggle_item("b", false, true, true),
    ]);

    grid.click_action(0, "arm").unwrap();
    assert!(grid.row(0).unwrap().on);

    grid.click_action(1, "arm").unwrap();
    assert!(!grid.row(1).unwrap().on);
}

#[test]
fn click_mutations_are_written_back_to_the_row_store() {
    let grid = toggle_grid();
    let target = grid
        .rows()
        .iter()
        .position(|r| r.visible && r.enabled && !r.on)
        .unwrap();

    grid.click_action(target, "toggle").unwrap();
    assert!(grid.row(target).unwrap().on);
    assert!(grid.core().is_dirty());
}
