//! Error types for Packer

use std::fmt;

use thiserror::Error;

/// An item field that can fail range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Index,
    Weight,
    Cost,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Index => write!(f, "index"),
            Field::Weight => write!(f, "weight"),
            Field::Cost => write!(f, "cost"),
        }
    }
}

/// The reason a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line does not split into exactly two fields around a `:`.
    #[error("line must contain exactly one `:`, found {found}")]
    SeparatorCount { found: usize },

    /// The capacity field is not a decimal within bounds.
    #[error("capacity must be a non-negative decimal with at most 2 fractional digits and at most {max}, got `{field}`")]
    InvalidCapacity { field: String, max: String },

    /// The items field does not match `( (index,weight,€cost))+`.
    #[error("items must be `(index,weight,€cost)` tokens each preceded by a single space; unexpected input at byte {offset}")]
    MalformedItemList { offset: usize },

    /// A well-formed item field carries a value outside its bounds.
    #[error("{field} `{value}` is outside [{min}, {max}]")]
    ValueOutOfRange {
        field: Field,
        value: String,
        min: String,
        max: String,
    },

    /// Item indexes do not run 1, 2, ..., N in declaration order.
    #[error("item indexes must run 1..N in order: expected {expected} at position {position}, found {found}")]
    IndexSequenceInvalid {
        position: usize,
        expected: usize,
        found: usize,
    },
}

/// A rejected input line together with its location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {kind} (in `{line}`)")]
pub struct ParseError {
    /// 0-based number of the offending line.
    pub line_number: u64,
    /// The raw line text.
    pub line: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line_number: u64, line: impl Into<String>, kind: ParseErrorKind) -> Self {
        ParseError {
            line_number,
            line: line.into(),
            kind,
        }
    }
}

/// Errors raised when a [`ProblemInstance`](crate::ProblemInstance) is built
/// from items that break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("item at position {position} has index {found}, expected {expected}")]
    IndexSequence {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("instance holds {count} items, at most {max} are supported")]
    TooManyItems { count: usize, max: usize },
}

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
