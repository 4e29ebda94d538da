use comfy_table::presets::ASCII_FULL;
use comfy_table::Table as DisplayTable;

use crate::processor::table::{Row, Table};

/// Grid-bordered rendering of `rows` under `table`'s header.
///
/// Header order is canonical display order; short rows are padded with empty
/// cells.
pub fn render(table: &Table, rows: &[&Row]) -> String {
    let mut display = DisplayTable::new();
    display.load_preset(ASCII_FULL);
    display.set_header(table.headers());

    let width = table.headers().len();
    for row in rows {
        let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
        cells.resize(width, "");
        display.add_row(cells);
    }

    display.to_string()
}
