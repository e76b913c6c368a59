use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use kbdmini::layouts::{KeySpec, Layout};
use kbdmini::runtime::Frame;

fn key_cell(key: &KeySpec, active: Option<&str>) -> Cell {
    let text = match (&key.role, key.label.is_empty()) {
        (Some(role), true) => role.clone(),
        _ => key.label.clone(),
    };
    let is_active = key.role.is_some() && key.role.as_deref() == active;
    let cell = Cell::new(text).set_alignment(CellAlignment::Center);
    if is_active {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else if key.role.is_none() {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

pub fn print_layout(layout: &Layout, active: Option<&str>) {
    println!("\nLayout: {}", layout.platform);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in &layout.rows {
        let cells: Vec<Cell> = row.keys.iter().map(|k| key_cell(k, active)).collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_frame(layout: &Layout, frame: &Frame) {
    print_layout(layout, Some(&frame.active));
    println!(
        "#{} {}  (pan {:.0}, {:.0})",
        frame.index + 1,
        frame.caption,
        frame.pan.x,
        frame.pan.y
    );
}
