//! Line/column positions.

use std::fmt;

use crate::SpanError;

/// A line/column position in the input.
///
/// Lines are 1-based, columns 0-based. Column counting follows the
/// lexer's character classification: `\n` starts a new line at column
/// 0, `\r` occupies no column at all, and every other character is one
/// column wide.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// The start of any input: line 1, column 0.
    pub const START: Location = Location { line: 1, column: 0 };

    /// Create a new location.
    ///
    /// Debug-asserts `line >= 1`; use [`Location::try_new`] for
    /// untrusted input.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        debug_assert!(line >= 1, "line numbers are 1-based");
        Location { line, column }
    }

    /// Checked constructor enforcing `line >= 1`.
    #[inline]
    pub const fn try_new(line: u32, column: u32) -> Result<Self, SpanError> {
        if line == 0 {
            return Err(SpanError::LineZero);
        }
        Ok(Location { line, column })
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
