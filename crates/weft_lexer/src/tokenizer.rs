//! Character-driven tokenizer state machine.
//!
//! The tokenizer consumes one character at a time and emits at most one
//! token per character. All context lives in the [`Tokenizer`] value
//! itself (no lookahead beyond the current character), so feeding any
//! partition of the input through [`Tokenizer::feed_str`] produces
//! exactly the same tokens as one whole-string call.
//!
//! # Range semantics
//!
//! Position tracking happens unconditionally before mode handling; the
//! pre-advance snapshot is kept so that a flush triggered by a
//! mode-entering character (`\` or `{`) ends *before* that character,
//! while an emission that consumes its terminating character (the
//! resolved escape character, the depth-0 `}`) ends *after* it. Plain
//! literal tokens therefore satisfy `span.len() == value` char count,
//! escape tokens span their `\x` pair, and interpolation tokens span
//! their braces while the value excludes them.

use std::mem;

use tracing::trace;
use weft_span::Snapshot;

use crate::{LexError, PositionTracker, Token, TokenKind};

/// Lexer mode, tagged with its per-mode state.
///
/// A sum type rather than a bag of optional fields: `Escape` has no
/// buffer at all, and only `Interpolation` carries a brace depth.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    /// Accumulating plain text.
    Literal { buf: String },
    /// Immediately after a `\`; resolved by the very next character.
    Escape,
    /// Inside `{...}`; `depth` counts unmatched `{`.
    Interpolation { buf: String, depth: u32 },
}

impl Mode {
    fn literal() -> Mode {
        Mode::Literal { buf: String::new() }
    }
}

/// One tokenization session.
///
/// Create with [`Tokenizer::new`], feed characters or chunks, then call
/// [`Tokenizer::finish`] exactly once. The session is consumed by
/// `finish`; a failed session cannot be reused.
#[derive(Debug)]
pub struct Tokenizer {
    mode: Mode,
    tracker: PositionTracker,
    /// Position of the last flush point; the next token's range starts
    /// here.
    last_flush: Snapshot,
}

impl Tokenizer {
    /// New session in literal mode at offset 0, line 1, column 0.
    pub fn new() -> Self {
        Tokenizer {
            mode: Mode::literal(),
            tracker: PositionTracker::new(),
            last_flush: Snapshot::START,
        }
    }

    /// Consume one character, emitting at most one token.
    pub fn feed_char(&mut self, ch: char) -> Option<Token> {
        let before = self.tracker.snapshot();
        self.tracker.advance_char(ch);

        let token = match &mut self.mode {
            Mode::Literal { buf } => match ch {
                '\\' | '{' => {
                    let value = mem::take(buf);
                    let token = (!value.is_empty()).then(|| {
                        Token::new(TokenKind::Literal, value, self.last_flush.complete(before))
                    });
                    self.last_flush = before;
                    self.mode = if ch == '\\' {
                        Mode::Escape
                    } else {
                        Mode::Interpolation {
                            buf: String::new(),
                            depth: 1,
                        }
                    };
                    token
                }
                _ => {
                    buf.push(ch);
                    None
                }
            },
            Mode::Escape => {
                // Escaping neutralizes `{` and `\` only; any other
                // character keeps its backslash in the literal value.
                let now = self.tracker.snapshot();
                let mut value = String::new();
                if ch != '{' && ch != '\\' {
                    value.push('\\');
                }
                value.push(ch);
                let token = Token::new(TokenKind::Literal, value, self.last_flush.complete(now));
                self.last_flush = now;
                self.mode = Mode::literal();
                Some(token)
            }
            Mode::Interpolation { buf, depth } => match ch {
                '{' => {
                    *depth += 1;
                    buf.push(ch);
                    None
                }
                '}' => {
                    *depth -= 1;
                    if *depth == 0 {
                        let now = self.tracker.snapshot();
                        let value = mem::take(buf);
                        let token = (!value.is_empty()).then(|| {
                            Token::new(
                                TokenKind::Interpolation,
                                value,
                                self.last_flush.complete(now),
                            )
                        });
                        self.last_flush = now;
                        self.mode = Mode::literal();
                        token
                    } else {
                        buf.push(ch);
                        None
                    }
                }
                _ => {
                    buf.push(ch);
                    None
                }
            },
        };

        if let Some(token) = &token {
            trace!(kind = %token.kind(), span = %token.span().span, "emit");
        }
        token
    }

    /// Feed a chunk of input, appending emitted tokens to `out`.
    pub fn feed_str(&mut self, chunk: &str, out: &mut Vec<Token>) {
        for ch in chunk.chars() {
            if let Some(token) = self.feed_char(ch) {
                out.push(token);
            }
        }
    }

    /// Finalize the session.
    ///
    /// In literal mode this emits a final token if the buffer is
    /// non-empty (an empty buffer is not an error). Ending in escape or
    /// interpolation mode fails; the error carries the location where
    /// the open region began.
    pub fn finish(self) -> Result<Option<Token>, LexError> {
        match self.mode {
            Mode::Literal { buf } => {
                if buf.is_empty() {
                    Ok(None)
                } else {
                    let now = self.tracker.snapshot();
                    Ok(Some(Token::new(
                        TokenKind::Literal,
                        buf,
                        self.last_flush.complete(now),
                    )))
                }
            }
            Mode::Escape => Err(LexError::UnterminatedEscape {
                at: self.last_flush.location(),
            }),
            Mode::Interpolation { depth, .. } => Err(LexError::UnterminatedInterpolation {
                at: self.last_flush.location(),
                depth,
            }),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}
