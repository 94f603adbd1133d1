//! Property tests for the recognizers and the dispatch contract.

use proptest::prelude::*;

use crate::{Scanner, SourceCursor, TokenSet};

/// A well-formed quoted literal: either delimiter, content runs free of
/// quote characters, and any number of doubled-delimiter escapes.
fn quoted_literal() -> impl Strategy<Value = String> {
    prop::sample::select(vec!['\'', '"']).prop_flat_map(|delim| {
        let piece = prop_oneof![
            Just(format!("{delim}{delim}")),
            "[a-zA-Z0-9 #/*._+-]{0,6}",
        ];
        prop::collection::vec(piece, 0..6)
            .prop_map(move |pieces| format!("{delim}{}{delim}", pieces.concat()))
    })
}

/// A well-formed numeric literal `[sign] digits [. digits] [e [sign] digits]`.
fn numeric_literal() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "+", "-"]),
        "[0-9]{1,8}",
        prop::option::of("[0-9]{1,6}"),
        prop::option::of(("[eE]", prop::sample::select(vec!["", "+", "-"]), "[0-9]{1,4}")),
    )
        .prop_map(|(sign, int, frac, exp)| {
            let mut literal = format!("{sign}{int}");
            if let Some(frac) = frac {
                literal.push('.');
                literal.push_str(&frac);
            }
            if let Some((marker, exp_sign, digits)) = exp {
                literal.push_str(&marker);
                literal.push_str(exp_sign);
                literal.push_str(&digits);
            }
            literal
        })
}

proptest! {
    #[test]
    fn prop_well_formed_string_commits_full_span(
        lead in "[ \t\n]{0,3}",
        literal in quoted_literal(),
        trail in "[a-z0-9 ;()]{0,5}",
    ) {
        let source = format!("{lead}{literal}{trail}");
        let mut cursor = SourceCursor::new(&source);
        prop_assert!(Scanner::new().scan_string(&mut cursor));
        prop_assert_eq!(cursor.token_text(), literal.as_str());
        prop_assert_eq!(cursor.token_len(), literal.chars().count());
    }

    #[test]
    fn prop_unterminated_string_fails(literal in quoted_literal()) {
        // Dropping the closing delimiter leaves the content unclosed no
        // matter how the inner escapes pair up.
        let unterminated = &literal[..literal.len() - 1];
        let mut cursor = SourceCursor::new(unterminated);
        prop_assert!(!Scanner::new().scan_string(&mut cursor));
    }

    #[test]
    fn prop_well_formed_number_commits_maximal_prefix(
        lead in "[ \t\n]{0,3}",
        literal in numeric_literal(),
        trail in "[ ;xyz()]{0,4}",
    ) {
        let source = format!("{lead}{literal}{trail}");
        let mut cursor = SourceCursor::new(&source);
        prop_assert!(Scanner::new().scan_number(&mut cursor));
        prop_assert_eq!(cursor.token_text(), literal.as_str());
    }

    #[test]
    fn prop_malformed_exponent_fails_entirely(
        mantissa in "[0-9]{1,6}(\\.[0-9]{1,4})?",
        marker in "[eE]",
        trail in "[ ;xyz]{0,3}",
    ) {
        let source = format!("{mantissa}{marker}{trail}");
        let mut cursor = SourceCursor::new(&source);
        prop_assert!(!Scanner::new().scan_number(&mut cursor));
    }

    #[test]
    fn prop_boundary_matches_name_continuation(c in any::<char>()) {
        let source = c.to_string();
        let mut cursor = SourceCursor::new(&source);
        let expected = !(c.is_ascii_alphanumeric() || c == '_');
        prop_assert_eq!(Scanner::new().check_end_of_token(&mut cursor), expected);
        prop_assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn prop_outcome_is_always_a_requested_kind(
        source in ".{0,12}",
        bits in 0u8..8,
    ) {
        let requested = TokenSet::from_bits(bits);
        let mut cursor = SourceCursor::new(&source);
        if let Some(kind) = Scanner::new().scan(&mut cursor, requested) {
            prop_assert!(requested.contains(kind));
        }
    }

    #[test]
    fn prop_outcome_survives_lifecycle_cycling(
        source in ".{0,12}",
        bits in 0u8..8,
    ) {
        let requested = TokenSet::from_bits(bits);

        let first = {
            let mut cursor = SourceCursor::new(&source);
            let outcome = Scanner::new().scan(&mut cursor, requested);
            (outcome, cursor.token_start(), cursor.token_end())
        };

        let mut buffer = [0u8; 4];
        let mut scanner = Scanner::new();
        let written = scanner.serialize(&mut buffer);
        prop_assert_eq!(written, 0);
        scanner.deserialize(&buffer[..written]);

        let second = {
            let mut cursor = SourceCursor::new(&source);
            let outcome = scanner.scan(&mut cursor, requested);
            (outcome, cursor.token_start(), cursor.token_end())
        };

        prop_assert_eq!(first, second);
    }
}

mod regressions {
    use super::*;

    // Shrunken cases that once looked surprising enough to keep.

    #[test]
    fn test_escape_only_literal() {
        let mut cursor = SourceCursor::new("''''");
        assert!(Scanner::new().scan_string(&mut cursor));
        assert_eq!(cursor.token_len(), 4);
    }

    #[test]
    fn test_number_flush_against_input_end() {
        let mut cursor = SourceCursor::new("-12.5E-4");
        assert!(Scanner::new().scan_number(&mut cursor));
        assert_eq!(cursor.token_text(), "-12.5E-4");
    }
}
