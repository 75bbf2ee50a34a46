//! Jaro and Jaro-Winkler string similarity.
//!
//! Scores lie in `[0, 1]`, where 1.0 means the strings are equal (ignoring
//! case). The Winkler variant adds a bonus for up to four shared leading
//! characters and rounds the result to two decimals.
//!
//! # Example
//!
//! ```
//! use jaro_winkler::{JaroOptions, similarity, similarity_batch};
//!
//! let options = JaroOptions::default();
//! assert_eq!(similarity("DIXON", "DICKSONX", &options).unwrap(), 0.81);
//!
//! let scores = similarity_batch("cat", ["cat", "bat", "xyz"], &options).unwrap();
//! assert_eq!(scores.len(), 3);
//! assert_eq!(scores[0], 1.0);
//! ```
//!
//! # Errors
//!
//! Empty or absent inputs are rejected with [`InvalidInputError`], which names
//! the offending argument:
//!
//! ```
//! use jaro_winkler::{Argument, JaroOptions, similarity};
//!
//! let err = similarity("", "test", &JaroOptions::default()).unwrap_err();
//! assert_eq!(err.argument, Argument::First);
//! ```

#![deny(unsafe_code)]

mod batch;
mod error;
pub mod jaro;
mod options;
mod similarity;
pub mod winkler;

pub use batch::{RankedCandidate, best_match, rank, similarity_batch};
#[cfg(feature = "parallel")]
pub use batch::par_similarity_batch;
pub use error::{Argument, InputKind, InvalidInputError, Result};
pub use options::{DEFAULT_SCALING_FACTOR, JaroOptions, MAX_SCALING_FACTOR};
pub use similarity::similarity;
