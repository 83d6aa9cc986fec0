//! Utility functions.

/// Escape a string for use in HTML text content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Whether `s` can be written as an HTML tag or attribute name without escaping.
pub fn is_markup_name(s: &str) -> bool {
    !s.is_empty()
        && !s.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Convert a camelCase style property name into its kebab-case CSS form.
///
/// Names that already contain a dash are passed through unchanged, so custom
/// properties like `--accent` survive.
pub fn kebab_case(s: &str) -> String {
    if s.contains('-') {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Collapse a class-name string into single-space separated tokens.
pub fn normalize_class(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_special_chars() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("fish & chips"), "fish &amp; chips");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn markup_names() {
        assert!(is_markup_name("data-id"));
        assert!(is_markup_name("aria-label"));
        assert!(!is_markup_name(""));
        assert!(!is_markup_name("on click"));
        assert!(!is_markup_name("x\"><script>"));
        assert!(!is_markup_name("a=b"));
        assert!(!is_markup_name("a/b"));
        assert!(!is_markup_name("tab\u{7}"));
    }

    #[test]
    fn kebab_case_converts_camel() {
        assert_eq!(kebab_case("paddingTop"), "padding-top");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(kebab_case("color"), "color");
    }

    #[test]
    fn kebab_case_keeps_dashed_names() {
        assert_eq!(kebab_case("--accentColor"), "--accentColor");
        assert_eq!(kebab_case("z-index"), "z-index");
    }

    #[test]
    fn normalize_class_collapses_whitespace() {
        assert_eq!(normalize_class("card "), "card");
        assert_eq!(normalize_class("  card   asd active "), "card asd active");
        assert_eq!(normalize_class(""), "");
    }
}
