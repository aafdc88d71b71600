//! TypeScript literal rendering.

/// Quote a string as a single-quoted TypeScript literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Indentation unit used by the brand module.
pub const INDENT: &str = "  ";

/// Indentation for nesting `depth` levels deep.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("Ribbed Bodysuit"), "'Ribbed Bodysuit'");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Levi's"), r"'Levi\'s'");
        assert_eq!(quote(r"a\b"), r"'a\\b'");
        assert_eq!(quote("two\nlines"), r"'two\nlines'");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(3), "      ");
    }
}
