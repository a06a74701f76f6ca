//! Chunked streaming adapter.
//!
//! Pairs an input sink (successive string chunks plus an end-of-input
//! signal) with an output source yielding tokens as they become
//! available. Everything is synchronous and single-session: the
//! adapter suspends only when the caller has not supplied the next
//! chunk, and a finalization error is surfaced on the read side as a
//! terminal fault rather than thrown at the writer.

use std::collections::VecDeque;

use tracing::debug;

use crate::{Compressor, LexError, Token, Tokenizer};

/// Incremental lexer over chunked input.
///
/// ```
/// use weft_lexer::{StreamLexer, TokenKind};
///
/// let mut lexer = StreamLexer::new();
/// lexer.write("Hello {first");
/// lexer.write("Name}!");
/// lexer.close();
///
/// let mut kinds = Vec::new();
/// while let Some(Ok(token)) = lexer.read() {
///     kinds.push(token.kind());
/// }
/// assert_eq!(
///     kinds,
///     [TokenKind::Literal, TokenKind::Interpolation, TokenKind::Literal]
/// );
/// ```
///
/// By default the output is run through the [`Compressor`]; use
/// [`StreamLexer::uncompressed`] for the raw token stream.
#[derive(Debug)]
pub struct StreamLexer {
    /// Taken at close; `None` afterwards.
    tokenizer: Option<Tokenizer>,
    /// `None` in uncompressed mode (and after close).
    compressor: Option<Compressor>,
    /// Tokens ready for the consumer.
    ready: VecDeque<Token>,
    /// Finalization fault, yielded once by `read` after the queue drains.
    fault: Option<LexError>,
    closed: bool,
}

impl StreamLexer {
    /// New session with merging enabled.
    pub fn new() -> Self {
        StreamLexer {
            tokenizer: Some(Tokenizer::new()),
            compressor: Some(Compressor::new()),
            ready: VecDeque::new(),
            fault: None,
            closed: false,
        }
    }

    /// New session yielding the raw token stream, no merging.
    pub fn uncompressed() -> Self {
        StreamLexer {
            compressor: None,
            ..StreamLexer::new()
        }
    }

    /// Feed one chunk of input.
    ///
    /// Chunk boundaries are invisible to the tokenizer; any partition
    /// of the input produces the same token stream. Ignored once the
    /// session is closed.
    pub fn write(&mut self, chunk: &str) {
        if self.closed {
            return;
        }
        let Some(tokenizer) = self.tokenizer.as_mut() else {
            return;
        };
        let mut raw = Vec::new();
        tokenizer.feed_str(chunk, &mut raw);
        match self.compressor.as_mut() {
            Some(compressor) => {
                let mut merged = Vec::new();
                for token in raw {
                    compressor.push(token, &mut merged);
                }
                self.ready.extend(merged);
            }
            None => self.ready.extend(raw),
        }
    }

    /// Signal end-of-input.
    ///
    /// Finalizes the tokenizer and the merger. Tokens completed before
    /// the end of input remain readable; if the input ended mid-escape
    /// or mid-interpolation the fault is delivered by [`read`] after
    /// them, once.
    ///
    /// [`read`]: StreamLexer::read
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let Some(tokenizer) = self.tokenizer.take() else {
            return;
        };

        let mut tail = Vec::new();
        match tokenizer.finish() {
            Ok(Some(last)) => match self.compressor.as_mut() {
                Some(compressor) => compressor.push(last, &mut tail),
                None => tail.push(last),
            },
            Ok(None) => {}
            Err(err) => self.fault = Some(err),
        }
        if let Some(compressor) = self.compressor.take() {
            compressor.finish(&mut tail);
        }
        self.ready.extend(tail);

        debug!(
            ready = self.ready.len(),
            faulted = self.fault.is_some(),
            "stream closed"
        );
    }

    /// Pop the next available token.
    ///
    /// Before [`close`], returns `None` when nothing is ready yet (the
    /// merger may be holding a literal back for a possible merge).
    /// After `close`, drains the remaining tokens, then yields the
    /// stored fault once as `Some(Err(..))`, then `None` forever.
    ///
    /// [`close`]: StreamLexer::close
    pub fn read(&mut self) -> Option<Result<Token, LexError>> {
        if let Some(token) = self.ready.pop_front() {
            return Some(Ok(token));
        }
        if self.closed {
            return self.fault.take().map(Err);
        }
        None
    }

    /// Whether end-of-input has been signaled.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Default for StreamLexer {
    fn default() -> Self {
        StreamLexer::new()
    }
}

/// Token iteration; terminal only after [`StreamLexer::close`].
impl Iterator for StreamLexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read()
    }
}
