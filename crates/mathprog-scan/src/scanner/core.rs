//! Scanner handle, lifecycle operations, and token dispatch.

use crate::cursor::Cursor;
use crate::token::{TokenKind, TokenSet};

/// The supplementary scanner.
///
/// A grammar engine binds five operations: [`new`](Scanner::new),
/// dropping the value, [`serialize`](Scanner::serialize),
/// [`deserialize`](Scanner::deserialize), and [`scan`](Scanner::scan).
/// The scanner keeps no state between calls, so the handle is a unit
/// value and the serialized form is empty; every `scan` call is a
/// complete transaction over the cursor it is given.
///
/// # Example
///
/// ```
/// use mathprog_scan::{Scanner, SourceCursor, TokenKind, TokenSet};
///
/// let scanner = Scanner::new();
/// let mut cursor = SourceCursor::new("3.14e-10");
/// let outcome = scanner.scan(&mut cursor, TokenSet::ALL);
///
/// assert_eq!(outcome, Some(TokenKind::Number));
/// assert_eq!(cursor.token_text(), "3.14e-10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scanner;

impl Scanner {
    /// Creates a scanner handle. Allocates nothing.
    pub fn new() -> Self {
        Scanner
    }

    /// Attempts to recognize one token at the cursor position.
    ///
    /// Recognizers run in a fixed order: the end-of-token check first,
    /// then strings, then numbers, each only when its kind is in
    /// `requested`. The zero-width check must go first because a string
    /// or number attempt may move the cursor off the position it
    /// inspects. The first success wins.
    ///
    /// Returns the recognized kind, or `None` when no requested kind
    /// matches. A failed call may still have consumed input (a string
    /// attempt that runs into end of input, for instance) but never
    /// commits an end mark, so the host discards the movement along
    /// with the attempt.
    pub fn scan(&self, cursor: &mut impl Cursor, requested: TokenSet) -> Option<TokenKind> {
        if requested.contains(TokenKind::EndOfToken) && self.check_end_of_token(cursor) {
            return Some(TokenKind::EndOfToken);
        }
        if requested.contains(TokenKind::String) && self.scan_string(cursor) {
            return Some(TokenKind::String);
        }
        if requested.contains(TokenKind::Number) && self.scan_number(cursor) {
            return Some(TokenKind::Number);
        }
        None
    }

    /// Writes the scanner's persistent state into the host's buffer and
    /// returns the number of bytes written.
    ///
    /// There is no state to persist, so this always writes nothing and
    /// returns 0.
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Restores scanner state from a serialized buffer.
    ///
    /// Accepts the empty buffer [`serialize`](Scanner::serialize)
    /// produces and leaves the scanner unchanged.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        debug_assert!(
            buffer.is_empty(),
            "scanner state always serializes to zero bytes, got {}",
            buffer.len()
        );
    }
}
