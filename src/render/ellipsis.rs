//! Display truncation with an ellipsis and a full-value tooltip

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::escape::escape_html;
use super::value::scalar_text;
use super::{ColumnRenderer, RenderContext};

/// Horizontal ellipsis as an HTML character reference
const ELLIPSIS: &str = "&#8230;";

// Last whitespace character followed by a partial word at the end
static TRAILING_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\s)\S+$").unwrap());

/// Settings for the ellipsis renderer
#[derive(Debug, Clone, Copy)]
pub struct EllipsisConfig {
    /// Values with at least this many characters are truncated
    pub cutoff: usize,
    /// Avoid cutting a word in half at the cutoff
    pub wordbreak: bool,
    /// Escape the visible shortened text
    pub escape_html: bool,
    /// Escaping function for the visible text and the tooltip
    pub escaper: fn(&str) -> String,
}

impl EllipsisConfig {
    pub fn new(cutoff: usize) -> Self {
        Self {
            cutoff,
            wordbreak: false,
            escape_html: false,
            escaper: escape_html,
        }
    }

    pub fn wordbreak(mut self, wordbreak: bool) -> Self {
        self.wordbreak = wordbreak;
        self
    }

    pub fn escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    pub fn escaper(mut self, escaper: fn(&str) -> String) -> Self {
        self.escaper = escaper;
        self
    }
}

/// Format a cell value for a render pass.
///
/// Outside the display pass, and for anything that is not a string or a
/// number, the value comes back untouched. Values shorter than the cutoff are
/// also returned as-is. Longer ones become
/// `<span title="FULL">SHORTENED&#8230;</span>`.
///
/// The result is markup, so feeding it back in truncates the markup itself.
pub fn format_display_value<'a>(
    value: &'a Value,
    context: RenderContext,
    _row: &Value,
    config: &EllipsisConfig,
) -> Cow<'a, Value> {
    if !context.is_display() {
        return Cow::Borrowed(value);
    }

    let Some(full) = scalar_text(value) else {
        return Cow::Borrowed(value);
    };

    match shorten(&full, config) {
        Some(markup) => Cow::Owned(Value::String(markup)),
        None => Cow::Borrowed(value),
    }
}

/// Build the tooltip markup, or `None` when `full` is under the cutoff
pub fn shorten(full: &str, config: &EllipsisConfig) -> Option<String> {
    if full.chars().count() < config.cutoff {
        return None;
    }

    let keep = config.cutoff.saturating_sub(1);
    let end = full
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(full.len());
    let mut shortened = full[..end].to_string();

    if config.wordbreak {
        shortened = TRAILING_WORD.replace(&shortened, "${1}").into_owned();
    }

    if config.escape_html {
        shortened = (config.escaper)(&shortened);
    }

    Some(format!(
        "<span title=\"{}\">{}{}</span>",
        (config.escaper)(full),
        shortened,
        ELLIPSIS
    ))
}

/// Column renderer that truncates long display values
#[derive(Debug, Clone, Copy)]
pub struct Ellipsis {
    config: EllipsisConfig,
}

impl Ellipsis {
    pub fn new(config: EllipsisConfig) -> Self {
        Self { config }
    }
}

impl ColumnRenderer for Ellipsis {
    /// Like [`format_display_value`], except that with `escape_html` set a
    /// display string left under the cutoff is escaped too, so it can go into
    /// markup as-is.
    fn render<'a>(
        &self,
        data: &'a Value,
        context: RenderContext,
        row: &Value,
    ) -> Cow<'a, Value> {
        let rendered = format_display_value(data, context, row, &self.config);
        if context.is_display()
            && self.config.escape_html
            && matches!(rendered, Cow::Borrowed(_))
            && let Value::String(s) = data
        {
            return Cow::Owned(Value::String((self.config.escaper)(s)));
        }
        rendered
    }

    fn name(&self) -> &'static str {
        "ellipsis"
    }
}
