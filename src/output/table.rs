//! Output formatting for rendered tables

use serde_json::{Map, Value};
use tabled::builder::Builder;

use crate::render::{cell_text, escape_html};
use crate::table::Table;

/// Markup for one display cell: strings are already markup, anything else is text
fn cell_markup(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => escape_html(&cell_text(other)),
    }
}

/// Format the display pass of a table as an HTML `<table>`
pub fn format_table_html(table: &Table) -> String {
    let mut output = String::from("<table>\n  <thead>\n    <tr>");

    for name in table.column_names() {
        output.push_str(&format!("<th>{}</th>", escape_html(name)));
    }
    output.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for row in table.display_rows() {
        output.push_str("    <tr>");
        for cell in &row {
            output.push_str(&format!("<td>{}</td>", cell_markup(cell)));
        }
        output.push_str("</tr>\n");
    }

    output.push_str("  </tbody>\n</table>\n");
    output
}

/// Format the display pass of a table as a text grid
pub fn format_table_text(table: &Table) -> String {
    if table.is_empty() {
        return "No rows.\n".to_string();
    }
    if table.columns().is_empty() {
        return format!("{} row(s) with no columns.\n", table.len());
    }

    let mut builder = Builder::default();
    builder.push_record(table.column_names().map(str::to_string));
    for row in table.display_rows() {
        builder.push_record(row.iter().map(cell_text));
    }

    format!("{}\n", builder.build())
}

/// Format the display pass of a table as a JSON array of objects
pub fn format_table_json(table: &Table) -> String {
    let names: Vec<&str> = table.column_names().collect();
    let rows: Vec<Value> = table
        .display_rows()
        .into_iter()
        .map(|cells| {
            let map: Map<String, Value> = names
                .iter()
                .map(|name| name.to_string())
                .zip(cells)
                .collect();
            Value::Object(map)
        })
        .collect();

    serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
}
