use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use kbdmini::embed::EmbedAttributes;
use kbdmini::layouts::Layout;

pub fn print_roles(layout: &Layout) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Role").add_attribute(Attribute::Bold),
        Cell::new("Shown as").fg(Color::Cyan),
        Cell::new("Row"),
        Cell::new("Col"),
    ]);
    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for role in layout.role_set() {
        let (row, col) = layout.position_of(role).unwrap_or_default();
        table.add_row(vec![
            Cell::new(role).add_attribute(Attribute::Bold),
            Cell::new(layout.platform.pretty_label(role)).fg(Color::Cyan),
            Cell::new(row + 1),
            Cell::new(col + 1),
        ]);
    }
    println!("{}", table);
}

pub fn print_attributes(attrs: &EmbedAttributes) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let rows: Vec<(&str, String)> = vec![
        ("data-os", attrs.os.to_string()),
        ("data-seq", attrs.seq.join(",")),
        ("data-w", attrs.width.to_string()),
        ("data-h", attrs.height.to_string()),
        ("data-interval", format!("{}ms", attrs.interval)),
        ("data-label", attrs.label.clone()),
        ("data-pos", attrs.position.to_string()),
        ("data-draggable", attrs.draggable.to_string()),
    ];
    for (name, value) in rows {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(value).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}
