// src/export/text.rs

use crate::core::sheet::Sheet;
use crate::export::model::{get_headers, rows_to_table, sheet_title, summary_lines};
use crate::utils::formatting::pad_right;
use crate::utils::table::Table;

/// Plain-text print sheet: title, metadata block, then the full table.
/// Used when no PDF viewer can be opened.
pub fn render_text_sheet(sheet: &Sheet) -> String {
    let mut out = String::new();

    let title = sheet_title(sheet);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");

    let summary = summary_lines(sheet);
    let key_w = summary.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 1;
    for (key, value) in &summary {
        out.push_str(&format!("{} {}\n", pad_right(&format!("{key}:"), key_w), value));
    }
    out.push('\n');

    let mut table = Table::new(&get_headers());
    for row in rows_to_table(&sheet.rows) {
        table.add_row(row);
    }
    out.push_str(&table.render());

    out
}
