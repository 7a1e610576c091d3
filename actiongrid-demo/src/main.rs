use std::fs::File;

use actiongrid::prelude::*;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Clone, Debug)]
struct ToggleItem {
    name: String,
    info: String,
    on: bool,
    visible: bool,
    enabled: bool,
}

impl ToggleItem {
    fn new(on: bool, visible: bool, enabled: bool) -> Self {
        let name = format!(
            "{}{}{}",
            if on { 'T' } else { 'F' },
            if visible { 'T' } else { 'F' },
            if enabled { 'T' } else { 'F' },
        );
        let info = format!("on:{on} visible:{visible} enabled:{enabled}");
        Self {
            name,
            info,
            on,
            visible,
            enabled,
        }
    }
}

/// One row for every combination of toggle state, visibility, and
/// enablement.
fn permutation_rows() -> Vec<ToggleItem> {
    let mut rows = Vec::new();
    for on in [false, true] {
        for visible in [false, true] {
            for enabled in [false, true] {
                rows.push(ToggleItem::new(on, visible, enabled));
            }
        }
    }
    rows
}

fn build_grid() -> ActionGrid<ToggleItem> {
    let grid = ActionGrid::new();

    grid.add_column("name")
        .expect("name column")
        .set_header_text("Name");
    grid.add_column("info")
        .expect("info column")
        .set_header_text("Info");
    grid.set_action_column_header_text("Actions");

    let toggle = grid.add_action("toggle").expect("toggle action");
    toggle
        .set_icon_provider(|item: &ToggleItem| {
            Some(if item.on {
                Icon::new("vaadin:check")
            } else {
                Icon::new("vaadin:close")
            })
        })
        .set_class_name_provider(|item: &ToggleItem| {
            if item.on { "on".into() } else { "off".into() }
        })
        .set_accessible_name_provider(|item: &ToggleItem| format!("Toggle {}", item.name))
        .set_tooltip_provider(|item: &ToggleItem| format!("Toggle {}", item.info))
        .set_visible_predicate(|item: &ToggleItem| item.visible)
        .set_enabled_predicate(|item: &ToggleItem| item.enabled)
        .add_click_handler(|item: &mut ToggleItem| item.on = !item.on);

    let noop = grid.add_action("noop").expect("noop action");
    noop.set_icon(Icon::new("vaadin:eye"))
        .set_tooltip("Does nothing");

    grid.set_rows(permutation_rows());
    grid
}

fn print_grid(grid: &ActionGrid<ToggleItem>) {
    let renderer = grid
        .action_column_handle()
        .cell_renderer()
        .expect("action column renderer");

    let headers: Vec<String> = grid
        .core()
        .columns()
        .iter()
        .map(|c| c.header_text().unwrap_or_else(|| c.key()))
        .collect();
    println!("{}", headers.join(" | "));

    for item in grid.rows() {
        let icon = renderer
            .property_value("toggleIconName", &item)
            .and_then(|v| v.as_text().map(str::to_string))
            .unwrap_or_default();
        let enabled = renderer
            .property_value("toggleEnabled", &item)
            .and_then(|v| v.as_flag())
            .unwrap_or(true);
        let visible = renderer
            .property_value("toggleVisible", &item)
            .and_then(|v| v.as_flag())
            .unwrap_or(true);
        let marker = match (visible, enabled) {
            (false, _) => "(hidden)".to_string(),
            (true, false) => format!("{icon} (disabled)"),
            (true, true) => icon,
        };
        println!("{} | {} | {}", item.name, item.info, marker);
    }
    println!();
}

fn main() {
    let log_file = File::create("actiongrid-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let grid = build_grid();
    info!("grid built with {} rows", grid.row_count());

    println!("initial state:");
    print_grid(&grid);

    // Click the toggle action on every row. Hidden and disabled rows are
    // left untouched by the dispatch checks.
    for index in 0..grid.row_count() {
        grid.click_action(index, "toggle").expect("dispatch click");
    }

    println!("after clicking toggle on every row:");
    print_grid(&grid);

    grid.freeze_action_column_to_beginning();
    println!("column order with the action column frozen to the beginning:");
    let keys: Vec<String> = grid.core().columns().iter().map(|c| c.key()).collect();
    println!("{}", keys.join(" | "));
}
