mod table;
mod value;

pub use table::{format_table_html, format_table_json, format_table_text};
pub use value::{format_value, format_value_json};
