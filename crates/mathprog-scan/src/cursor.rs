//! Cursor abstraction for character-level scanning.
//!
//! Recognizers never touch the input directly; they see it through the
//! [`Cursor`] trait, which models the four capabilities a grammar
//! engine's lexer exposes to an external scanner: one code point of
//! lookahead, consuming with or without including the code point in the
//! token, marking the provisional token end, and an end-of-input test.
//!
//! [`SourceCursor`] is the crate's own in-memory implementation over a
//! string slice, used by the bundled CLI and the test suite. A host with
//! its own input representation implements [`Cursor`] instead.

/// Sentinel returned by [`Cursor::lookahead`] at end of input.
///
/// A NUL byte inside the input also produces `'\0'`; code that must
/// distinguish the two cases checks [`Cursor::eof`].
pub const EOF_CHAR: char = '\0';

/// The scanning capabilities a host lexer hands to the scanner.
///
/// The scanner drives the cursor strictly forward. There is no
/// backtracking: progress is committed by calling [`mark_end`], and a
/// recognizer that fails simply leaves its provisional marks for the
/// host to discard.
///
/// [`mark_end`]: Cursor::mark_end
pub trait Cursor {
    /// The code point at the current position, without consuming it.
    ///
    /// Returns [`EOF_CHAR`] once the input is exhausted.
    fn lookahead(&self) -> char;

    /// Consumes the current code point.
    ///
    /// With `include_in_token` set, the code point belongs to the token
    /// being recognized; otherwise it is trimmed (leading whitespace).
    /// Does nothing at end of input.
    fn advance(&mut self, include_in_token: bool);

    /// Records the current position as the provisional end of the token.
    ///
    /// May be called repeatedly; the last call before a successful
    /// return wins. Marks left behind by a failed recognizer are
    /// discarded by the host.
    fn mark_end(&mut self);

    /// Whether the input is exhausted.
    fn eof(&self) -> bool;
}

/// A [`Cursor`] over an in-memory string slice.
///
/// Tracks byte position, 1-based line/column, and the token span
/// recorded so far: the token starts after any code points consumed
/// with `include_in_token == false` and ends at the last marked
/// position. Span accessors describe the provisional token; after a
/// successful scan that provisional span is the committed token.
///
/// # Example
///
/// ```
/// use mathprog_scan::{Cursor, SourceCursor};
///
/// let mut cursor = SourceCursor::new("  42");
/// cursor.advance(false); // trim
/// cursor.advance(false);
/// cursor.advance(true); // '4'
/// cursor.advance(true); // '2'
/// cursor.mark_end();
///
/// assert_eq!(cursor.token_text(), "42");
/// assert_eq!(cursor.token_start(), 2);
/// assert_eq!(cursor.token_end(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SourceCursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
    token_end: usize,
    token_end_line: u32,
    token_end_column: u32,
}

impl<'a> SourceCursor<'a> {
    /// Creates a cursor at the start of `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use mathprog_scan::{Cursor, SourceCursor};
    ///
    /// let cursor = SourceCursor::new("param x;");
    /// assert_eq!(cursor.lookahead(), 'p');
    /// assert_eq!(cursor.line(), 1);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn new(source: &'a str) -> Self {
        SourceCursor {
            source,
            position: 0,
            line: 1,
            column: 1,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            token_end: 0,
            token_end_line: 1,
            token_end_column: 1,
        }
    }

    /// The full source text this cursor reads from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based, in code points).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset where the token begins.
    ///
    /// Code points consumed with `include_in_token == false` move this
    /// forward, which is how leading whitespace stays out of the span.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Byte offset of the last marked token end.
    ///
    /// Equals [`token_start`](Self::token_start) until an end is marked
    /// past it, so the span is empty rather than inverted.
    pub fn token_end(&self) -> usize {
        self.token_end
    }

    /// Line of the token start (1-based).
    pub fn token_line(&self) -> u32 {
        self.token_start_line
    }

    /// Column of the token start (1-based).
    pub fn token_column(&self) -> u32 {
        self.token_start_column
    }

    /// Line of the marked token end (1-based).
    pub fn token_end_line(&self) -> u32 {
        self.token_end_line
    }

    /// Column of the marked token end (1-based).
    pub fn token_end_column(&self) -> u32 {
        self.token_end_column
    }

    /// The token text recorded so far.
    ///
    /// Empty until an end has been marked beyond the token start.
    ///
    /// # Example
    ///
    /// ```
    /// use mathprog_scan::{Cursor, SourceCursor};
    ///
    /// let mut cursor = SourceCursor::new("ab");
    /// assert_eq!(cursor.token_text(), "");
    /// cursor.advance(true);
    /// cursor.mark_end();
    /// assert_eq!(cursor.token_text(), "a");
    /// ```
    pub fn token_text(&self) -> &'a str {
        &self.source[self.token_start..self.token_end]
    }

    /// Length of the recorded token in code points.
    pub fn token_len(&self) -> usize {
        self.token_text().chars().count()
    }
}

impl Cursor for SourceCursor<'_> {
    fn lookahead(&self) -> char {
        if self.position >= self.source.len() {
            return EOF_CHAR;
        }
        let byte = self.source.as_bytes()[self.position];
        if byte < 0x80 {
            byte as char
        } else {
            self.source[self.position..].chars().next().unwrap_or(EOF_CHAR)
        }
    }

    fn advance(&mut self, include_in_token: bool) {
        if self.position >= self.source.len() {
            return;
        }
        let c = self.lookahead();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        if !include_in_token {
            self.token_start = self.position;
            self.token_start_line = self.line;
            self.token_start_column = self.column;
            // A mark before the new start would invert the span.
            if self.token_end < self.token_start {
                self.token_end = self.token_start;
                self.token_end_line = self.token_start_line;
                self.token_end_column = self.token_start_column;
            }
        }
    }

    fn mark_end(&mut self) {
        self.token_end = self.position;
        self.token_end_line = self.line;
        self.token_end_column = self.column;
    }

    fn eof(&self) -> bool {
        self.position >= self.source.len()
    }
}
