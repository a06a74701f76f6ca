//! Lexed tokens.
//!
//! A token is immutable once constructed: the lexer builds it at a
//! flush point and nothing downstream may change its value or range.
//! The only way to get a "bigger" token is [`Token::concat`], which
//! produces a fresh one.

use std::fmt;

use weft_span::{LocatedSpan, Span};

/// What a token represents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Verbatim template text.
    Literal,
    /// Template code to be evaluated by a downstream collaborator.
    /// The payload is opaque text to the lexer.
    Interpolation,
}

impl TokenKind {
    /// Returns `true` for [`TokenKind::Literal`].
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Literal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal => f.write_str("literal"),
            TokenKind::Interpolation => f.write_str("interpolation"),
        }
    }
}

/// Error from [`Token::concat`] when two tokens cannot be merged.
///
/// The [`Compressor`](crate::Compressor) checks both conditions before
/// calling `concat`, so in merger operation these are unreachable; the
/// error exists as a defensive contract for direct callers.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum ConcatError {
    /// The tokens have different kinds.
    #[error("cannot concatenate {left} token with {right} token")]
    KindMismatch {
        /// Kind of the earlier token.
        left: TokenKind,
        /// Kind of the later token.
        right: TokenKind,
    },
    /// The tokens are not offset-adjacent.
    #[error("tokens are not adjacent: left ends at offset {left_end}, right starts at offset {right_start}")]
    NotAdjacent {
        /// End offset of the earlier token.
        left_end: u32,
        /// Start offset of the later token.
        right_start: u32,
    },
}

/// A lexed token: kind, value, and the source range it was cut from.
///
/// For escape-produced literals the value is not a verbatim slice of
/// the source (the backslash may be dropped or re-inserted), so
/// `span.len()` does not generally equal the value's character count.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: TokenKind,
    value: String,
    span: LocatedSpan,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: LocatedSpan) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    /// The token's kind.
    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The source range the token covers.
    #[inline]
    pub const fn span(&self) -> LocatedSpan {
        self.span
    }

    /// Consume the token, returning its value.
    pub fn into_value(self) -> String {
        self.value
    }

    /// Concatenate with an adjacent token of the same kind.
    ///
    /// Valid only when both tokens share a kind and `self` ends exactly
    /// where `other` starts. The result spans both inputs and carries
    /// the concatenated value.
    pub fn concat(&self, other: &Token) -> Result<Token, ConcatError> {
        if self.kind != other.kind {
            return Err(ConcatError::KindMismatch {
                left: self.kind,
                right: other.kind,
            });
        }
        if self.span.span.end != other.span.span.start {
            return Err(ConcatError::NotAdjacent {
                left_end: self.span.span.end,
                right_start: other.span.span.start,
            });
        }
        let mut value = String::with_capacity(self.value.len() + other.value.len());
        value.push_str(&self.value);
        value.push_str(&other.value);
        Ok(Token {
            kind: self.kind,
            value,
            span: LocatedSpan::new(
                Span::new(self.span.span.start, other.span.span.end),
                self.span.start,
                other.span.end,
            ),
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.value, self.span.span)
    }
}
