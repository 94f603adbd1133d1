//! Edge case tests for mathprog-scan

#[cfg(test)]
mod tests {
    use crate::{Scanner, SourceCursor, TokenKind, TokenSet};

    fn number(source: &str) -> Option<&str> {
        let mut cursor = SourceCursor::new(source);
        if Scanner::new().scan_number(&mut cursor) {
            Some(cursor.token_text())
        } else {
            None
        }
    }

    fn string(source: &str) -> Option<&str> {
        let mut cursor = SourceCursor::new(source);
        if Scanner::new().scan_string(&mut cursor) {
            Some(cursor.token_text())
        } else {
            None
        }
    }

    fn boundary(source: &str) -> bool {
        let mut cursor = SourceCursor::new(source);
        Scanner::new().check_end_of_token(&mut cursor)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(number(""), None);
        assert_eq!(string(""), None);
        assert!(boundary(""));
    }

    #[test]
    fn test_edge_single_digit() {
        assert_eq!(number("7"), Some("7"));
    }

    #[test]
    fn test_edge_trailing_dot_commits() {
        assert_eq!(number("1."), Some("1."));
        assert_eq!(number("1. "), Some("1."));
        assert_eq!(number("1.x"), Some("1."));
    }

    #[test]
    fn test_edge_leading_dot_fraction() {
        assert_eq!(number(".5"), Some(".5"));
        assert_eq!(number("."), None);
    }

    #[test]
    fn test_edge_signed_exponent_flush() {
        // The exponent exit has no digit requirement, so a trailing
        // sign still commits when input ends right after it.
        assert_eq!(number("2e+"), Some("2e+"));
        assert_eq!(number("2e-"), Some("2e-"));
    }

    #[test]
    fn test_edge_boundary_at_range_operator() {
        let mut cursor = SourceCursor::new("..5");
        let outcome = Scanner::new().scan(&mut cursor, TokenSet::of(&[TokenKind::EndOfToken]));
        assert_eq!(outcome, Some(TokenKind::EndOfToken));
        assert_eq!(cursor.token_len(), 0);
    }

    #[test]
    fn test_edge_odd_quote_runs() {
        assert_eq!(string("''"), Some("''"));
        assert_eq!(string("'''"), None);
        assert_eq!(string("''''"), Some("''''"));
        assert_eq!(string("'''''"), None);
        assert_eq!(string("''''''"), Some("''''''"));
    }

    #[test]
    fn test_edge_nul_is_content_not_terminator() {
        assert_eq!(string("'a\0b'"), Some("'a\0b'"));
        assert_eq!(number("12\06"), Some("12"));
    }

    #[test]
    fn test_edge_token_len_counts_chars() {
        let mut cursor = SourceCursor::new("'héllo'");
        assert!(Scanner::new().scan_string(&mut cursor));
        assert_eq!(cursor.token_len(), 7);
        assert_eq!(cursor.token_end(), 8);
    }

    #[test]
    fn test_edge_unicode_whitespace_skipped() {
        let mut cursor = SourceCursor::new("\u{a0}\u{2003}42");
        assert!(Scanner::new().scan_number(&mut cursor));
        assert_eq!(cursor.token_text(), "42");
        assert_eq!(cursor.token_start(), 5);
    }

    #[test]
    fn test_edge_crlf_counts_one_line_break() {
        let mut cursor = SourceCursor::new("\r\n9");
        assert!(Scanner::new().scan_number(&mut cursor));
        assert_eq!(cursor.token_text(), "9");
        assert_eq!(cursor.token_line(), 2);
        assert_eq!(cursor.token_column(), 1);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(4096);
        assert_eq!(number(&digits), Some(digits.as_str()));
    }

    #[test]
    fn test_edge_long_string() {
        let literal = format!("'{}'", "x".repeat(8192));
        assert_eq!(string(&literal), Some(literal.as_str()));
    }

    #[test]
    fn test_edge_whitespace_only_input() {
        assert_eq!(number("  \t"), None);
        assert_eq!(string("  \t"), None);
        assert!(boundary(" x"));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_lone_signs_and_dots() {
        assert_eq!(number("+"), None);
        assert_eq!(number("-"), None);
        assert_eq!(number("+."), None);
        assert_eq!(number("-."), None);
    }

    #[test]
    fn test_err_exponent_marker_at_input_end() {
        assert_eq!(number("1e"), None);
        assert_eq!(number("1E"), None);
        assert_eq!(number("12.5e"), None);
        assert_eq!(number(".5e"), None);
    }

    #[test]
    fn test_err_exponent_marker_before_text() {
        assert_eq!(number("2ex"), None);
        assert_eq!(number("3.0e;"), None);
    }

    #[test]
    fn test_err_unterminated_strings() {
        assert_eq!(string("'"), None);
        assert_eq!(string("'abc"), None);
        assert_eq!(string("'abc''"), None);
        assert_eq!(string("\"abc'"), None);
    }

    #[test]
    fn test_err_boundary_inside_name() {
        assert!(!boundary("put"));
        assert!(!boundary("_"));
        assert!(!boundary("9"));
    }
}
