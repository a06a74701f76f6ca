//! Mutable position cursor.
//!
//! One tracker is owned by each [`Tokenizer`](crate::Tokenizer)
//! session. It advances through the input character by character and
//! hands out immutable [`Snapshot`]s on demand; ranges are always
//! computed from snapshot pairs, never by mutating the tracker
//! backwards.

use weft_span::Snapshot;

/// Offset/line/column cursor over a character stream.
///
/// Character classification is uniform across all lexer modes
/// (position tracking is orthogonal to lexical mode):
///
/// - `\n` starts a new line and resets the column to 0
/// - `\r` advances the offset only, occupying no column
/// - everything else advances the column by 1
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionTracker {
    offset: u32,
    line: u32,
    column: u32,
}

impl PositionTracker {
    /// Tracker at the start of the input: offset 0, line 1, column 0.
    pub const fn new() -> Self {
        PositionTracker {
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Advance `n` columns (and `n` offsets).
    #[inline]
    pub fn advance_columns(&mut self, n: u32) {
        self.offset += n;
        self.column += n;
    }

    /// Advance `n` lines (and `n` offsets), resetting the column to 0.
    #[inline]
    pub fn advance_lines(&mut self, n: u32) {
        self.offset += n;
        self.line += n;
        self.column = 0;
    }

    /// Advance the offset by `n` without moving line or column.
    ///
    /// Used for carriage return, which must not count as a column.
    #[inline]
    pub fn advance_offset_only(&mut self, n: u32) {
        self.offset += n;
    }

    /// Advance past one character using the universal classification.
    #[inline]
    pub fn advance_char(&mut self, ch: char) {
        match ch {
            '\n' => self.advance_lines(1),
            '\r' => self.advance_offset_only(1),
            _ => self.advance_columns(1),
        }
    }

    /// Capture the current position.
    #[inline]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.offset, self.line, self.column)
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        PositionTracker::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use weft_span::Location;

    use super::*;

    #[test]
    fn starts_at_origin() {
        let tracker = PositionTracker::new();
        let snap = tracker.snapshot();
        assert_eq!(snap.offset(), 0);
        assert_eq!(snap.location(), Location::START);
    }

    #[test]
    fn columns_move_offset_and_column() {
        let mut tracker = PositionTracker::new();
        tracker.advance_columns(3);
        let snap = tracker.snapshot();
        assert_eq!(snap.offset(), 3);
        assert_eq!(snap.location(), Location::new(1, 3));
    }

    #[test]
    fn lines_reset_column() {
        let mut tracker = PositionTracker::new();
        tracker.advance_columns(5);
        tracker.advance_lines(2);
        let snap = tracker.snapshot();
        assert_eq!(snap.offset(), 7);
        assert_eq!(snap.location(), Location::new(3, 0));
    }

    #[test]
    fn offset_only_leaves_line_and_column() {
        let mut tracker = PositionTracker::new();
        tracker.advance_columns(2);
        tracker.advance_offset_only(1);
        let snap = tracker.snapshot();
        assert_eq!(snap.offset(), 3);
        assert_eq!(snap.location(), Location::new(1, 2));
    }

    #[test]
    fn advance_by_zero_is_a_no_op() {
        let mut tracker = PositionTracker::new();
        tracker.advance_columns(0);
        tracker.advance_lines(0);
        tracker.advance_offset_only(0);
        // advance_lines(0) still resets the column, but from 0 to 0 here.
        assert_eq!(tracker.snapshot(), PositionTracker::new().snapshot());
    }

    #[test]
    fn crlf_counts_one_line_and_two_offsets() {
        let mut tracker = PositionTracker::new();
        for ch in "a\r\nb".chars() {
            tracker.advance_char(ch);
        }
        let snap = tracker.snapshot();
        assert_eq!(snap.offset(), 4);
        assert_eq!(snap.location(), Location::new(2, 1));
    }

    #[test]
    fn classification_is_mode_independent_reference_count() {
        // Manual line/column count of a mixed input, per the
        // classification rules: \r offset-only, \n line+reset,
        // everything else one column.
        let input = "ab\rc\n{x\n}\\q";
        let mut tracker = PositionTracker::new();
        let mut offset = 0u32;
        let mut line = 1u32;
        let mut column = 0u32;
        for ch in input.chars() {
            tracker.advance_char(ch);
            offset += 1;
            match ch {
                '\n' => {
                    line += 1;
                    column = 0;
                }
                '\r' => {}
                _ => column += 1,
            }
            let snap = tracker.snapshot();
            assert_eq!(snap.offset(), offset);
            assert_eq!(snap.location(), Location::new(line, column));
        }
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn tracker_matches_naive_counter(
                chars in proptest::collection::vec(
                    prop_oneof![
                        Just('a'),
                        Just(' '),
                        Just('\n'),
                        Just('\r'),
                        Just('{'),
                        Just('}'),
                        Just('\\'),
                    ],
                    0..128,
                )
            ) {
                let mut tracker = PositionTracker::new();
                let mut line = 1u32;
                let mut column = 0u32;
                for &ch in &chars {
                    tracker.advance_char(ch);
                    match ch {
                        '\n' => {
                            line += 1;
                            column = 0;
                        }
                        '\r' => {}
                        _ => column += 1,
                    }
                }
                let snap = tracker.snapshot();
                prop_assert_eq!(snap.offset() as usize, chars.len());
                prop_assert_eq!(snap.location(), Location::new(line, column));
            }
        }
    }
}
