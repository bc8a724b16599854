use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::render::{EllipsisConfig, Link, RenderContext};
use crate::table::SortOrder;

#[derive(Parser, Debug)]
#[command(name = "celltrim")]
#[command(
    author,
    version,
    about = "Truncate table cell values for display with an ellipsis"
)]
#[command(
    long_about = "Renders a JSON array of rows as a table, shortening long cell values \
    to a cutoff and wrapping them in a <span> whose title holds the full value. \
    Sorting and filtering always see the original, untruncated values."
)]
pub struct Args {
    /// JSON file containing an array of row objects ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Format a single value instead of a table
    #[arg(long, value_name = "TEXT")]
    pub value: Option<String>,

    /// Treat --value as a JSON number
    #[arg(long)]
    pub number: bool,

    /// Values with at least this many characters are truncated
    #[arg(short = 'n', long)]
    pub cutoff: usize,

    /// Avoid cutting a word in half at the cutoff
    #[arg(short, long)]
    pub wordbreak: bool,

    /// HTML-escape the shortened text
    #[arg(short, long)]
    pub escape_html: bool,

    /// Columns to truncate (comma-separated, default: all)
    #[arg(short, long = "column", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Columns rendered as links instead of truncated (comma-separated)
    #[arg(short, long = "link", value_delimiter = ',', value_name = "COLUMN")]
    pub links: Vec<String>,

    /// Base URL prepended to link cell values
    #[arg(long, value_name = "URL")]
    pub link_prefix: Option<String>,

    /// Fixed text for link cells (default: the URL)
    #[arg(long, value_name = "TEXT")]
    pub link_label: Option<String>,

    /// Open links in a new window
    #[arg(long)]
    pub link_new_window: bool,

    /// Render pass used with --value: display, sort, filter, type or export
    #[arg(long, value_parser = parse_context)]
    pub context: Option<RenderContext>,

    /// Sort rows by this column (original values)
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Keep only rows containing this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Show verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, default_value = "html")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

fn parse_context(name: &str) -> Result<RenderContext, String> {
    RenderContext::from_name(name).ok_or_else(|| {
        format!(
            "'{}' is not a render pass (display, sort, filter, type, export)",
            name
        )
    })
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.cutoff == 0 {
            return Err("--cutoff must be at least 1".to_string());
        }

        if self.number && self.value.is_none() {
            return Err("--number requires --value".to_string());
        }

        if let Some(ref text) = self.value {
            if self.input.is_some() {
                return Err("--value cannot be combined with an INPUT file".to_string());
            }
            if self.number && !is_json_number(text) {
                return Err(format!("'{}' is not a valid number", text));
            }
            if self.sort.is_some()
                || self.filter.is_some()
                || !self.columns.is_empty()
                || !self.links.is_empty()
            {
                return Err(
                    "--sort, --filter, --column and --link apply to tables, not --value"
                        .to_string(),
                );
            }
        } else if self.context.is_some() {
            return Err("--context requires --value".to_string());
        }

        if self.links.is_empty()
            && (self.link_prefix.is_some() || self.link_label.is_some() || self.link_new_window)
        {
            return Err(
                "--link-prefix, --link-label and --link-new-window require --link".to_string(),
            );
        }

        if let Some(column) = self.links.iter().find(|l| self.columns.contains(l)) {
            return Err(format!(
                "column '{}' cannot be both truncated and a link",
                column
            ));
        }

        if self.desc && self.sort.is_none() {
            return Err("--desc requires --sort".to_string());
        }

        if self.columns.iter().chain(&self.links).any(|c| c.is_empty()) {
            return Err("--column names must not be empty".to_string());
        }

        Ok(())
    }

    pub fn ellipsis_config(&self) -> EllipsisConfig {
        EllipsisConfig::new(self.cutoff)
            .wordbreak(self.wordbreak)
            .escape_html(self.escape_html)
    }

    pub fn link(&self) -> Link {
        let mut link = Link::new().new_window(self.link_new_window);
        if let Some(ref prefix) = self.link_prefix {
            link = link.prefix(prefix.as_str());
        }
        if let Some(ref label) = self.link_label {
            link = link.label(label.as_str());
        }
        link
    }

    /// Render pass for --value, display unless given
    pub fn render_context(&self) -> RenderContext {
        self.context.unwrap_or(RenderContext::Display)
    }

    pub fn sort_order(&self) -> SortOrder {
        if self.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    /// Input path, or `None` for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

fn is_json_number(s: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(s),
        Ok(serde_json::Value::Number(_))
    )
}
