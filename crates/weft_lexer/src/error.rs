//! Lexer error types.
//!
//! Both variants are end-of-input errors: mid-stream there is nothing
//! a character can do wrong, so the only way a session fails is by
//! ending inside an escape or an interpolation. Both are fatal for the
//! session; the input as a whole is malformed and there is no recovery.

use weft_span::Location;

/// Error finalizing a tokenization session.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum LexError {
    /// The input ended immediately after a `\`.
    #[error("unexpected end of input in escape mode (escape started at {at})")]
    UnterminatedEscape {
        /// Where the dangling `\` sits.
        at: Location,
    },
    /// The input ended inside a `{...}` region.
    #[error(
        "unexpected end of input in interpolation mode \
         (opened at {at} with {depth} unmatched '{{')"
    )]
    UnterminatedInterpolation {
        /// Where the interpolation's opening `{` sits.
        at: Location,
        /// Number of still-unmatched `{` at end of input.
        depth: u32,
    },
}
