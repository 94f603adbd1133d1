//! Token kinds and requested-kind sets.
//!
//! The grammar engine that embeds this scanner identifies external tokens
//! by their position in its token table, not by name. The order of
//! [`TokenKind`]'s variants is therefore part of the wire contract with
//! the host and is pinned by compile-time assertions below.

use std::fmt;
use std::ops::BitOr;

use static_assertions::const_assert_eq;

/// The kinds of tokens the supplementary scanner can recognize.
///
/// Everything else in the language (keywords, identifiers, operators,
/// comments) is handled by the host's own lexer; these three shapes are
/// the ones it delegates.
///
/// # Example
///
/// ```
/// use mathprog_scan::TokenKind;
///
/// assert_eq!(TokenKind::Number.index(), 1);
/// assert_eq!(TokenKind::from_name("end-of-token"), Some(TokenKind::EndOfToken));
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A quoted string literal, `'...'` or `"..."`, with doubled-quote
    /// escaping for the delimiter.
    String = 0,
    /// A numeric literal: optional sign, digits, optional fraction,
    /// optional exponent.
    Number = 1,
    /// A zero-width assertion that the current position ends a symbolic
    /// name. Consumes nothing.
    EndOfToken = 2,
}

// The host addresses these kinds positionally; the discriminants are
// load-bearing and must not be reordered.
const_assert_eq!(TokenKind::String as u8, 0);
const_assert_eq!(TokenKind::Number as u8, 1);
const_assert_eq!(TokenKind::EndOfToken as u8, 2);

impl TokenKind {
    /// Number of recognized token kinds.
    pub const COUNT: usize = 3;

    /// Every kind, in host table order.
    pub const ALL: [TokenKind; TokenKind::COUNT] =
        [TokenKind::String, TokenKind::Number, TokenKind::EndOfToken];

    /// The position of this kind in the host's external token table.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its host table position.
    ///
    /// Returns `None` for indices outside the table.
    pub const fn from_index(index: u8) -> Option<TokenKind> {
        match index {
            0 => Some(TokenKind::String),
            1 => Some(TokenKind::Number),
            2 => Some(TokenKind::EndOfToken),
            _ => None,
        }
    }

    /// Stable lowercase name, used in CLI flags and log output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::EndOfToken => "end-of-token",
        }
    }

    /// Parses a kind from its stable name.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        match name {
            "string" => Some(TokenKind::String),
            "number" => Some(TokenKind::Number),
            "end-of-token" => Some(TokenKind::EndOfToken),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of token kinds the host marked valid for one scan call.
///
/// Mirrors the per-call validity bitmask the host passes alongside the
/// cursor: bit `i` corresponds to the kind with index `i`. Sets are
/// cheap to copy and can be built in `const` contexts.
///
/// # Example
///
/// ```
/// use mathprog_scan::{TokenKind, TokenSet};
///
/// const LITERALS: TokenSet = TokenSet::of(&[TokenKind::String, TokenKind::Number]);
///
/// assert!(LITERALS.contains(TokenKind::Number));
/// assert!(!LITERALS.contains(TokenKind::EndOfToken));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u8);

impl TokenSet {
    const MASK: u8 = (1 << TokenKind::COUNT) - 1;

    /// The set containing no kinds.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// The set containing every kind.
    pub const ALL: TokenSet = TokenSet(TokenSet::MASK);

    /// Builds a set from a slice of kinds.
    pub const fn of(kinds: &[TokenKind]) -> TokenSet {
        let mut bits = 0u8;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i].index();
            i += 1;
        }
        TokenSet(bits)
    }

    /// Returns this set with `kind` added.
    pub const fn with(self, kind: TokenKind) -> TokenSet {
        TokenSet(self.0 | 1 << kind.index())
    }

    /// Whether `kind` is requested.
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    /// Whether no kind is requested.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The raw bitmask, bit `i` holding the kind with index `i`.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from a host bitmask. Bits beyond the defined kinds
    /// are ignored.
    pub const fn from_bits(bits: u8) -> TokenSet {
        TokenSet(bits & TokenSet::MASK)
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> TokenSet {
        TokenSet::EMPTY.with(kind)
    }
}

impl BitOr for TokenSet {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenSet) -> TokenSet {
        TokenSet(self.0 | rhs.0)
    }
}

impl BitOr<TokenKind> for TokenSet {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenKind) -> TokenSet {
        self.with(rhs)
    }
}

impl BitOr for TokenKind {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenKind) -> TokenSet {
        TokenSet::from(self).with(rhs)
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kind in TokenKind::ALL {
            if self.contains(kind) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(kind.name())?;
                first = false;
            }
        }
        if first {
            f.write_str("(none)")?;
        }
        Ok(())
    }
}
