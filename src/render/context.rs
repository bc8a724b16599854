use serde::Serialize;

/// Which rendering pass is asking for a cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderContext {
    /// Human-facing cell text
    Display,
    /// Value used to order rows
    Sort,
    /// Value searched by row filtering
    Filter,
    /// Value used for column type detection
    Type,
    /// Value written out by data export
    Export,
}

impl RenderContext {
    /// Returns true for the human-facing display pass
    pub fn is_display(&self) -> bool {
        matches!(self, RenderContext::Display)
    }

    /// Parse a context name as used by table libraries ("display", "sort", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "display" => Some(RenderContext::Display),
            "sort" => Some(RenderContext::Sort),
            "filter" => Some(RenderContext::Filter),
            "type" => Some(RenderContext::Type),
            "export" => Some(RenderContext::Export),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderContext::Display => "display",
            RenderContext::Sort => "sort",
            RenderContext::Filter => "filter",
            RenderContext::Type => "type",
            RenderContext::Export => "export",
        }
    }
}

impl std::fmt::Display for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_name() {
        for ctx in [
            RenderContext::Display,
            RenderContext::Sort,
            RenderContext::Filter,
            RenderContext::Type,
            RenderContext::Export,
        ] {
            assert_eq!(RenderContext::from_name(ctx.name()), Some(ctx));
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            RenderContext::from_name("DISPLAY"),
            Some(RenderContext::Display)
        );
        assert_eq!(RenderContext::from_name("print"), None);
    }

    #[test]
    fn test_only_display_is_display() {
        assert!(RenderContext::Display.is_display());
        assert!(!RenderContext::Sort.is_display());
        assert!(!RenderContext::Export.is_display());
    }
}
