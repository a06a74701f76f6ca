//! Streaming lexer for the Weft templating language.
//!
//! Weft templates have three regions: plain text, backslash escapes,
//! and brace-delimited interpolation code. The lexer cuts an input
//! character stream into [`Token`]s — [`TokenKind::Literal`] runs of
//! verbatim text and [`TokenKind::Interpolation`] payloads destined
//! for a downstream evaluator — with exact offset/line/column ranges
//! attached.
//!
//! Escaping neutralizes `{` and `\` only: `\{` lexes to the literal
//! `{`, `\\` to `\`, and every other `\x` pair passes through with its
//! backslash preserved. Interpolation bodies may contain balanced
//! nested braces, tracked by a depth counter that is deliberately
//! quote-unaware: a `}` inside a quoted string in the payload closes
//! the region early.
//!
//! # Entry points
//!
//! - [`tokenize`] — whole-string convenience, raw token sequence
//! - [`compress_tokens`] — batch merge of contiguous same-kind tokens
//! - [`Tokenizer`] — the character-driven state machine itself
//! - [`StreamLexer`] — chunked input sink / token source pair
//!
//! ```
//! use weft_lexer::{compress_tokens, tokenize, TokenKind};
//!
//! let raw = tokenize("Hello \\{world} How are you, {firstName{}}?")?;
//! let tokens = compress_tokens(raw);
//!
//! let shape: Vec<(TokenKind, &str)> =
//!     tokens.iter().map(|t| (t.kind(), t.value())).collect();
//! assert_eq!(
//!     shape,
//!     [
//!         (TokenKind::Literal, "Hello {world} How are you, "),
//!         (TokenKind::Interpolation, "firstName{}"),
//!         (TokenKind::Literal, "?"),
//!     ]
//! );
//! # Ok::<(), weft_lexer::LexError>(())
//! ```

mod compress;
mod error;
mod stream;
mod token;
mod tokenizer;
mod tracker;

pub use compress::{compress_tokens, Compressor};
pub use error::LexError;
pub use stream::StreamLexer;
pub use token::{ConcatError, Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use tracker::PositionTracker;

// Position types are part of the public token surface.
pub use weft_span::{LocatedSpan, Location, Snapshot, Span, SpanError};

/// Tokenize a complete input string.
///
/// Returns the raw (unmerged) token sequence; run it through
/// [`compress_tokens`] to collapse adjacent literals. Fails when the
/// input ends inside an escape or an interpolation.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new();
    let mut tokens = Vec::new();
    tokenizer.feed_str(input, &mut tokens);
    if let Some(last) = tokenizer.finish()? {
        tokens.push(last);
    }
    Ok(tokens)
}
