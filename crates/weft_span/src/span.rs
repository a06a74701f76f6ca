//! Character-offset spans.
//!
//! Compact 8-byte representation; `start`/`end` are character offsets
//! (exclusive end), not byte offsets.

use std::fmt;

use crate::Location;

/// Error when constructing a span or location that violates its invariant.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum SpanError {
    /// Span end precedes its start.
    #[error("span end {end} precedes start {start}")]
    EndBeforeStart {
        /// Requested start offset.
        start: u32,
        /// Requested end offset.
        end: u32,
    },
    /// Line numbers are 1-based; line 0 does not exist.
    #[error("line numbers are 1-based; got line 0")]
    LineZero,
}

/// A half-open range of character offsets.
///
/// Layout: 8 bytes total
/// - start: u32 - character offset from input start
/// - end: u32 - character offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    ///
    /// Debug-asserts `end >= start`; use [`Span::try_new`] when the
    /// offsets come from untrusted input.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(end >= start, "span end must not precede start");
        Span { start, end }
    }

    /// Checked constructor enforcing `end >= start`.
    #[inline]
    pub const fn try_new(start: u32, end: u32) -> Result<Self, SpanError> {
        if end < start {
            return Err(SpanError::EndBeforeStart { start, end });
        }
        Ok(Span { start, end })
    }

    /// Length of the span in characters.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A [`Span`] paired with the line/column of both endpoints.
///
/// Carries no invariants beyond its parts; produced by completing two
/// [`Snapshot`](crate::Snapshot)s.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatedSpan {
    /// Character-offset range.
    pub span: Span,
    /// Line/column of `span.start`.
    pub start: Location,
    /// Line/column of `span.end`.
    pub end: Location,
}

impl LocatedSpan {
    /// Create from a span and its endpoint locations.
    #[inline]
    pub const fn new(span: Span, start: Location, end: Location) -> Self {
        LocatedSpan { span, start, end }
    }
}

impl fmt::Display for LocatedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.span, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn span_basic() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn span_empty() {
        let span = Span::new(7, 7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn try_new_rejects_reversed_offsets() {
        assert_eq!(
            Span::try_new(5, 3),
            Err(SpanError::EndBeforeStart { start: 5, end: 3 })
        );
    }

    #[test]
    fn try_new_accepts_empty() {
        assert_eq!(Span::try_new(4, 4), Ok(Span::new(4, 4)));
    }

    #[test]
    fn span_debug_display() {
        let span = Span::new(3, 9);
        assert_eq!(format!("{span:?}"), "3..9");
        assert_eq!(format!("{span}"), "3..9");
    }

    #[test]
    fn span_error_display() {
        let err = SpanError::EndBeforeStart { start: 5, end: 3 };
        assert_eq!(format!("{err}"), "span end 3 precedes start 5");
    }

    #[test]
    fn located_span_display() {
        let located = LocatedSpan::new(
            Span::new(0, 5),
            Location::START,
            Location::new(1, 5),
        );
        assert_eq!(format!("{located}"), "0..5 (1:0 - 1:5)");
    }
}
