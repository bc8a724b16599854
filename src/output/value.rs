use serde::Serialize;
use serde_json::Value;

use crate::render::{EllipsisConfig, RenderContext, cell_text, format_display_value};

/// One value as rendered for a pass
#[derive(Debug, Serialize)]
struct RenderedValue<'a> {
    context: RenderContext,
    input: &'a Value,
    value: Value,
}

/// Render a single value for a pass and return the text to print
pub fn format_value(value: &Value, context: RenderContext, config: &EllipsisConfig) -> String {
    cell_text(&format_display_value(value, context, &Value::Null, config))
}

/// Render a single value for a pass as a JSON object
pub fn format_value_json(value: &Value, context: RenderContext, config: &EllipsisConfig) -> String {
    let rendered = RenderedValue {
        context,
        input: value,
        value: format_display_value(value, context, &Value::Null, config).into_owned(),
    };
    serde_json::to_string_pretty(&rendered).unwrap_or_else(|_| "{}".to_string())
}
