//! Error types for similarity scoring.

use std::fmt;

use thiserror::Error;

/// Which argument of a scoring call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// The first string of a pair, or the query string of a batch.
    First,
    /// The second string of a pair.
    Second,
    /// A batch candidate, by position in the input collection.
    Candidate(usize),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first argument"),
            Self::Second => write!(f, "second argument"),
            Self::Candidate(index) => write!(f, "candidate {index}"),
        }
    }
}

/// What was wrong with the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The value was present but contained no characters.
    Empty,
    /// No value was supplied.
    Missing,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty string"),
            Self::Missing => write!(f, "missing value"),
        }
    }
}

/// Raised when either side of a comparison is empty or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input for {argument}: {kind}")]
pub struct InvalidInputError {
    pub argument: Argument,
    pub kind: InputKind,
}

impl InvalidInputError {
    pub fn new(argument: Argument, kind: InputKind) -> Self {
        Self { argument, kind }
    }
}

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, InvalidInputError>;

/// Checks that a value is present and non-empty.
pub(crate) fn require<'a>(value: Option<&'a str>, argument: Argument) -> Result<&'a str> {
    match value {
        None => Err(InvalidInputError::new(argument, InputKind::Missing)),
        Some("") => Err(InvalidInputError::new(argument, InputKind::Empty)),
        Some(text) => Ok(text),
    }
}
