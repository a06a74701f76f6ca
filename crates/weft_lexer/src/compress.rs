//! Token merging pass.
//!
//! The escape/literal interplay in the tokenizer produces runs of
//! small adjacent literal tokens (`"a"`, `"{"`, `"b"` for `a\{b`).
//! The compressor collapses contiguous same-kind runs into single
//! tokens without changing semantic content. Only literal tokens are
//! held back speculatively; interpolation tokens are standalone units
//! and pass through unmerged, in order.

use crate::Token;

/// Incremental token merger.
///
/// Holds at most one pending literal token. Feed tokens with
/// [`Compressor::push`] and drain the final pending token with
/// [`Compressor::finish`]; output order always matches input order.
#[derive(Debug, Default)]
pub struct Compressor {
    pending: Option<Token>,
}

impl Compressor {
    /// New merger with nothing pending.
    pub fn new() -> Self {
        Compressor { pending: None }
    }

    /// Accept one token, appending zero or more finished tokens to `out`.
    pub fn push(&mut self, token: Token, out: &mut Vec<Token>) {
        if let Some(pending) = &self.pending {
            let contiguous = pending.span().span.end == token.span().span.start;
            if pending.kind() != token.kind() || !contiguous {
                // Not mergeable; the pending token is finished.
                if let Some(done) = self.pending.take() {
                    out.push(done);
                }
            }
        }

        if let Some(pending) = self.pending.take() {
            // Still pending, so kind and contiguity were just verified.
            match pending.concat(&token) {
                Ok(merged) => self.pending = Some(merged),
                Err(err) => unreachable!("concat precondition verified: {err}"),
            }
            return;
        }

        if token.kind().is_literal() {
            self.pending = Some(token);
        } else {
            out.push(token);
        }
    }

    /// Finalize, emitting the pending token if one remains.
    pub fn finish(self, out: &mut Vec<Token>) {
        if let Some(pending) = self.pending {
            out.push(pending);
        }
    }
}

/// Batch merge pass over a complete token sequence.
pub fn compress_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let mut compressor = Compressor::new();
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        compressor.push(token, &mut out);
    }
    compressor.finish(&mut out);
    out
}
