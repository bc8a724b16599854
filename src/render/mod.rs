//! Column renderers: per-pass views of a cell value

mod context;
mod ellipsis;
mod escape;
mod link;
mod value;

use std::borrow::Cow;

use serde_json::Value;

pub use context::RenderContext;
pub use ellipsis::{Ellipsis, EllipsisConfig, format_display_value, shorten};
pub use escape::{escape_html, escape_html_cow};
pub use link::Link;
pub use value::{cell_text, number_text, scalar_text};

/// A column formatter invoked once per cell per render pass.
///
/// `row` is the whole row the cell belongs to. Renderers must be pure: the
/// same inputs always give the same output.
pub trait ColumnRenderer: Send + Sync {
    fn render<'a>(
        &self,
        data: &'a Value,
        context: RenderContext,
        row: &Value,
    ) -> Cow<'a, Value>;

    /// Short name used in diagnostics
    fn name(&self) -> &'static str;
}

/// Default renderer: escapes strings for display, passes everything else through
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl ColumnRenderer for Plain {
    fn render<'a>(
        &self,
        data: &'a Value,
        context: RenderContext,
        _row: &Value,
    ) -> Cow<'a, Value> {
        match (context, data) {
            (RenderContext::Display, Value::String(s)) => match escape_html_cow(s) {
                Cow::Borrowed(_) => Cow::Borrowed(data),
                Cow::Owned(escaped) => Cow::Owned(Value::String(escaped)),
            },
            _ => Cow::Borrowed(data),
        }
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_escapes_display_strings() {
        let value = json!("<i>x</i>");
        let out = Plain.render(&value, RenderContext::Display, &Value::Null);
        assert_eq!(out.as_ref(), &json!("&lt;i&gt;x&lt;/i&gt;"));
    }

    #[test]
    fn test_plain_leaves_other_passes_alone() {
        let value = json!("<i>x</i>");
        for ctx in [RenderContext::Sort, RenderContext::Filter, RenderContext::Export] {
            let out = Plain.render(&value, ctx, &Value::Null);
            assert!(matches!(out, Cow::Borrowed(_)));
        }
        let number = json!(12);
        let out = Plain.render(&number, RenderContext::Display, &Value::Null);
        assert_eq!(out.as_ref(), &number);
    }

    #[test]
    fn test_renderers_are_object_safe() {
        let renderers: Vec<Box<dyn ColumnRenderer>> = vec![
            Box::new(Plain),
            Box::new(Ellipsis::new(EllipsisConfig::new(3))),
        ];
        let value = json!("abcdef");
        let shown: Vec<Value> = renderers
            .iter()
            .map(|r| r.render(&value, RenderContext::Display, &Value::Null).into_owned())
            .collect();
        assert_eq!(shown[0], json!("abcdef"));
        assert_eq!(shown[1], json!("<span title=\"abcdef\">ab&#8230;</span>"));
    }
}
