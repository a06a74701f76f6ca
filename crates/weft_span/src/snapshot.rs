//! Immutable captures of a cursor position.

use std::fmt;

use crate::{LocatedSpan, Location, Span};

/// An immutable capture of `(offset, line, column)` at one instant.
///
/// Snapshots are taken from the lexer's position tracker and later
/// paired up via [`Snapshot::complete`] to form the range of an emitted
/// token. `Copy`, so callers can hold one across arbitrary lexer
/// progress.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    offset: u32,
    line: u32,
    column: u32,
}

impl Snapshot {
    /// Snapshot of the start of any input.
    pub const START: Snapshot = Snapshot {
        offset: 0,
        line: 1,
        column: 0,
    };

    /// Capture a position.
    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        debug_assert!(line >= 1, "line numbers are 1-based");
        Snapshot {
            offset,
            line,
            column,
        }
    }

    /// Character offset of the capture.
    #[inline]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Line/column of the capture.
    #[inline]
    pub const fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Combine this snapshot (the earlier endpoint) with a later one
    /// into the [`LocatedSpan`] between them.
    ///
    /// No ordering validation is performed; the caller is responsible
    /// for passing the endpoints in the order they were captured.
    #[inline]
    pub const fn complete(self, later: Snapshot) -> LocatedSpan {
        LocatedSpan::new(
            Span::new(self.offset, later.offset),
            self.location(),
            later.location(),
        )
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::START
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.offset, self.location())
    }
}
