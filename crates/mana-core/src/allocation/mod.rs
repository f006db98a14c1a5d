//! Parsing and validation of allocation messages.

pub mod parse;
pub mod validate;

pub use parse::{RawAllocation, parse_allocations};
pub use validate::{BatchOutcome, PairError, PairErrorKind, validate_batch};
