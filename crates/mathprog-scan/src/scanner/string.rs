//! Quoted string literal recognition.
//!
//! MathProg accepts either delimiter style (`'...'` or `"..."`) and
//! escapes an embedded delimiter by doubling it, as in `'it''s'`.
//! Strings are scanned here rather than by the host grammar because
//! quoted content may contain the `#` comment starter as well as the
//! other quote character.

use crate::cursor::Cursor;
use crate::Scanner;

/// States of the string recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    /// Trimming whitespace ahead of the opening delimiter.
    SkipWhitespace,
    /// Inside the literal, opening delimiter consumed.
    Content,
}

impl Scanner {
    /// Recognizes a quoted string literal.
    ///
    /// Leading whitespace is trimmed from the token. The committed span
    /// includes both delimiters, and a doubled delimiter inside the
    /// literal contributes both code points. A string opened with one
    /// delimiter is only closed by the same delimiter. Running out of
    /// input before the closing delimiter fails without committing an
    /// end mark.
    ///
    /// # Example
    ///
    /// ```
    /// use mathprog_scan::{Scanner, SourceCursor};
    ///
    /// let mut cursor = SourceCursor::new("'it''s'");
    /// assert!(Scanner::new().scan_string(&mut cursor));
    /// assert_eq!(cursor.token_text(), "'it''s'");
    /// assert_eq!(cursor.token_len(), 7);
    /// ```
    pub fn scan_string(&self, cursor: &mut impl Cursor) -> bool {
        let mut state = StringState::SkipWhitespace;
        let mut delimiter = '\0';

        loop {
            match state {
                StringState::SkipWhitespace => {
                    let c = cursor.lookahead();
                    if c.is_whitespace() {
                        cursor.advance(false);
                    } else if c == '\'' || c == '"' {
                        delimiter = c;
                        cursor.advance(true);
                        state = StringState::Content;
                    } else {
                        return false;
                    }
                },
                StringState::Content => {
                    // A literal NUL is content; only true end of input
                    // leaves the string unterminated.
                    if cursor.eof() {
                        return false;
                    }
                    let c = cursor.lookahead();
                    cursor.advance(true);
                    if c == delimiter {
                        if cursor.lookahead() != delimiter {
                            cursor.mark_end();
                            return true;
                        }
                        // Doubled delimiter: one escaped quote, stay in
                        // the literal.
                        cursor.advance(true);
                    }
                },
            }
        }
    }
}
