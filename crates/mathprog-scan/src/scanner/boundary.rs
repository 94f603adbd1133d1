//! Zero-width end-of-token check.
//!
//! Lets the grammar assert that a keyword is not the prefix of a longer
//! symbolic name, e.g. that `in` in `i in I` is the keyword while the
//! `in` of `input` is not.

use crate::cursor::Cursor;
use crate::Scanner;

/// Whether `c` can continue a symbolic name (`[a-zA-Z0-9_]`).
fn is_symbolic_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Scanner {
    /// Checks that the current position ends a symbolic name.
    ///
    /// Succeeds when the lookahead is not a name-continuation
    /// character, including at end of input. The check consumes
    /// nothing: on success it marks the token end at the current
    /// position, producing a zero-width token.
    ///
    /// # Example
    ///
    /// ```
    /// use mathprog_scan::{Scanner, SourceCursor};
    ///
    /// let scanner = Scanner::new();
    /// // Lookahead after the `in` of `in I` vs. the `in` of `input`.
    /// assert!(scanner.check_end_of_token(&mut SourceCursor::new(" I")));
    /// assert!(!scanner.check_end_of_token(&mut SourceCursor::new("put")));
    /// ```
    pub fn check_end_of_token(&self, cursor: &mut impl Cursor) -> bool {
        if is_symbolic_name_char(cursor.lookahead()) {
            return false;
        }
        cursor.mark_end();
        true
    }
}
