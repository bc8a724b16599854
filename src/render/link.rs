//! Anchor cells built from URL or path values

use std::borrow::Cow;

use serde_json::Value;

use super::escape::escape_html;
use super::value::scalar_text;
use super::{ColumnRenderer, RenderContext};

/// Column renderer that turns a cell into an `<a href>` link for display.
///
/// The href is `prefix` followed by the cell text. The link text is the fixed
/// `label` when set, otherwise the href itself. Other passes see the raw
/// value, so sorting and filtering work on the path, not the markup.
#[derive(Debug, Clone, Default)]
pub struct Link {
    prefix: String,
    label: Option<String>,
    new_window: bool,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL prepended to every cell value
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Fixed link text, e.g. "Shapefile"
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Open the link in a new window (`target="_blank"`)
    pub fn new_window(mut self, new_window: bool) -> Self {
        self.new_window = new_window;
        self
    }

    /// Anchor markup for one cell value
    pub fn anchor(&self, text: &str) -> String {
        let href = format!("{}{}", self.prefix, text);
        let label = self.label.as_deref().unwrap_or(&href);
        let target = if self.new_window {
            " target=\"_blank\""
        } else {
            ""
        };

        format!(
            "<a{} href=\"{}\">{}</a>",
            target,
            escape_html(&href),
            escape_html(label)
        )
    }
}

impl ColumnRenderer for Link {
    fn render<'a>(
        &self,
        data: &'a Value,
        context: RenderContext,
        _row: &Value,
    ) -> Cow<'a, Value> {
        if !context.is_display() {
            return Cow::Borrowed(data);
        }

        match scalar_text(data) {
            Some(text) if !text.is_empty() => Cow::Owned(Value::String(self.anchor(&text))),
            _ => Cow::Borrowed(data),
        }
    }

    fn name(&self) -> &'static str {
        "link"
    }
}
