//! Numeric literal recognition.
//!
//! MathProg numbers are an optional sign, integer digits, an optional
//! fraction, and an optional exponent. The recognizer must leave `1..5`
//! as the number `1` followed by the range operator `..`, which is why
//! a dot after the integer part stays provisional until something
//! confirms it as a decimal point.

use crate::cursor::Cursor;
use crate::Scanner;

/// States of the number recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    /// Trimming whitespace ahead of the literal.
    SkipWhitespace,
    /// Just past a leading `+` or `-`.
    Sign,
    /// Consuming integer-part digits.
    Integer,
    /// Just past the decimal dot, nothing after it consumed yet.
    Decimal,
    /// Consuming fraction digits.
    Fraction,
    /// Just past `e`/`E`, expecting a sign or a digit.
    ExponentSign,
    /// Consuming exponent digits.
    Exponent,
}

impl Scanner {
    /// Recognizes a numeric literal.
    ///
    /// Accepts `[sign] digits [. digits] [e|E [sign] digits]` with at
    /// least one digit in the integer or fraction part, committing the
    /// maximal such span. Leading whitespace is trimmed; a leading sign
    /// is part of the token. Two special policies apply:
    ///
    /// - A dot followed by another dot is the range operator, never a
    ///   decimal point: neither dot is committed, so `1..5` commits
    ///   exactly `1`.
    /// - An `e`/`E` not followed by a sign or digit fails the entire
    ///   literal, mantissa included: `2e` matches nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use mathprog_scan::{Scanner, SourceCursor};
    ///
    /// let scanner = Scanner::new();
    ///
    /// let mut cursor = SourceCursor::new("3.14e-10");
    /// assert!(scanner.scan_number(&mut cursor));
    /// assert_eq!(cursor.token_text(), "3.14e-10");
    ///
    /// let mut cursor = SourceCursor::new("1..5");
    /// assert!(scanner.scan_number(&mut cursor));
    /// assert_eq!(cursor.token_text(), "1");
    /// ```
    pub fn scan_number(&self, cursor: &mut impl Cursor) -> bool {
        let mut state = NumberState::SkipWhitespace;
        let mut integer_digits: u32 = 0;
        let mut fraction_digits: u32 = 0;

        loop {
            let c = cursor.lookahead();
            match state {
                NumberState::SkipWhitespace => {
                    if c.is_whitespace() {
                        cursor.advance(false);
                    } else if c == '+' || c == '-' {
                        cursor.mark_end();
                        cursor.advance(true);
                        state = NumberState::Sign;
                    } else if c.is_ascii_digit() {
                        cursor.mark_end();
                        state = NumberState::Integer;
                    } else if c == '.' {
                        cursor.mark_end();
                        cursor.advance(true);
                        state = NumberState::Decimal;
                    } else {
                        return false;
                    }
                },
                NumberState::Sign => {
                    if c.is_ascii_digit() {
                        cursor.mark_end();
                        state = NumberState::Integer;
                    } else if c == '.' {
                        cursor.mark_end();
                        cursor.advance(true);
                        state = NumberState::Decimal;
                    } else {
                        // A lone sign is not a number.
                        return false;
                    }
                },
                NumberState::Integer => {
                    if c.is_ascii_digit() {
                        cursor.advance(true);
                        cursor.mark_end();
                        integer_digits += 1;
                    } else if c == '.' {
                        // Provisional: committed only once digits or a
                        // legal exponent follow.
                        cursor.advance(true);
                        state = NumberState::Decimal;
                    } else if c == 'e' || c == 'E' {
                        cursor.advance(true);
                        cursor.mark_end();
                        state = NumberState::ExponentSign;
                    } else {
                        return integer_digits > 0;
                    }
                },
                NumberState::Decimal => {
                    if c == 'e' || c == 'E' {
                        cursor.advance(true);
                        state = NumberState::ExponentSign;
                    } else if c.is_ascii_digit() {
                        state = NumberState::Fraction;
                    } else {
                        if c != '.' {
                            // Two consecutive dots form the range
                            // operator; only a lone dot is committed as
                            // a decimal point.
                            cursor.mark_end();
                        }
                        return integer_digits > 0;
                    }
                },
                NumberState::Fraction => {
                    if c.is_ascii_digit() {
                        cursor.advance(true);
                        fraction_digits += 1;
                    } else if c == 'e' || c == 'E' {
                        cursor.advance(true);
                        state = NumberState::ExponentSign;
                    } else {
                        cursor.mark_end();
                        return integer_digits > 0 || fraction_digits > 0;
                    }
                },
                NumberState::ExponentSign => {
                    if c == '+' || c == '-' {
                        cursor.advance(true);
                        state = NumberState::Exponent;
                    } else if c.is_ascii_digit() {
                        state = NumberState::Exponent;
                    } else {
                        // No sign and no digit after the marker fails
                        // the whole literal, mantissa included.
                        return false;
                    }
                },
                NumberState::Exponent => {
                    if c.is_ascii_digit() {
                        cursor.advance(true);
                    } else {
                        cursor.mark_end();
                        return true;
                    }
                },
            }
        }
    }
}
