use std::borrow::Cow;

/// Escape the characters that are unsafe inside HTML text or a quoted attribute
pub fn escape_html(s: &str) -> String {
    escape_html_cow(s).into_owned()
}

/// Like [`escape_html`], but borrows when there is nothing to escape
pub fn escape_html_cow(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_unsafe_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        // An existing entity is escaped again, not preserved
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape_html_cow("plain text"), Cow::Borrowed(_)));
        assert_eq!(escape_html("héllo wörld"), "héllo wörld");
    }
}
