//! mathprog-scan - Supplementary Scanner for the GNU MathProg Language
//!
//! This crate recognizes the token shapes a MathProg grammar engine
//! cannot comfortably express in its own lexical rules. The host engine
//! tokenizes keywords, identifiers, operators, and comments itself and
//! delegates the rest to this scanner, one call per lexical decision
//! point.
//!
//! # Overview
//!
//! Three token kinds are recognized:
//!
//! - **string** - `'...'` or `"..."` with doubled-quote escaping.
//!   Delegated because quoted content may contain the `#` comment
//!   starter and the other quote character.
//! - **number** - `[sign] digits [. digits] [e|E [sign] digits]`.
//!   Delegated because `1..5` must lex as the number `1` followed by
//!   the range operator `..`, never as `1.` and `.5`.
//! - **end-of-token** - a zero-width check that the lookahead cannot
//!   continue a symbolic name, so the keyword `in` is not recognized
//!   inside `input`.
//!
//! The scanner holds no state between calls. Each call receives a
//! [`Cursor`] and the set of kinds that are syntactically valid at the
//! current position, and either commits exactly one token through the
//! cursor or reports that nothing matched.
//!
//! # Example Usage
//!
//! ```
//! use mathprog_scan::{Scanner, SourceCursor, TokenKind, TokenSet};
//!
//! let scanner = Scanner::new();
//! let mut cursor = SourceCursor::new("1..5");
//!
//! let outcome = scanner.scan(&mut cursor, TokenSet::of(&[TokenKind::Number]));
//!
//! assert_eq!(outcome, Some(TokenKind::Number));
//! assert_eq!(cursor.token_text(), "1");
//! // The host resumes at the committed end, leaving `..5` untouched.
//! assert_eq!(cursor.token_end(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and requested-kind sets
//! - [`cursor`] - The cursor capability trait and an in-memory cursor
//! - [`scanner`] - The scanner handle, recognizers, and dispatch

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod properties;

// Re-export main types for convenience
pub use cursor::{Cursor, SourceCursor};
pub use scanner::Scanner;
pub use token::{TokenKind, TokenSet};
