//! Source location types for the Weft template lexer.
//!
//! Offsets count Unicode scalar values from the start of the input;
//! lines are 1-based and columns 0-based. A carriage return advances
//! the offset without moving the column, so these types make no
//! assumption that `span.len()` equals a column distance.
//!
//! Everything here is an immutable value. The mutable cursor that
//! produces [`Snapshot`]s lives in `weft_lexer`; this crate stays
//! standalone so that tooling can consume token positions without
//! pulling in the lexer.

mod location;
mod snapshot;
mod span;

pub use location::Location;
pub use snapshot::Snapshot;
pub use span::{LocatedSpan, Span, SpanError};
