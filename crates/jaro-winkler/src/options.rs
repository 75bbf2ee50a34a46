//! Per-call scoring options.

use serde::{Deserialize, Serialize};

/// Standard Winkler prefix scaling constant.
pub const DEFAULT_SCALING_FACTOR: f64 = 0.1;

/// Largest scaling factor that keeps adjusted scores within `[0, 1]`.
pub const MAX_SCALING_FACTOR: f64 = 0.25;

/// Options controlling a similarity computation.
///
/// Deserializing a partial document fills the missing fields with defaults:
///
/// ```
/// use jaro_winkler::JaroOptions;
///
/// let options: JaroOptions = serde_json::from_str(r#"{"winkler": false}"#).unwrap();
/// assert!(!options.winkler);
/// assert_eq!(options.scaling_factor, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroOptions {
    /// Apply the Winkler prefix bonus and round the result to two decimals.
    pub winkler: bool,

    /// Weight given to each shared prefix character (at most four count).
    ///
    /// Values above [`MAX_SCALING_FACTOR`] can push scores past 1.0.
    pub scaling_factor: f64,
}

impl Default for JaroOptions {
    fn default() -> Self {
        Self {
            winkler: true,
            scaling_factor: DEFAULT_SCALING_FACTOR,
        }
    }
}

impl JaroOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the raw, unrounded Jaro score.
    pub fn jaro() -> Self {
        Self {
            winkler: false,
            ..Self::default()
        }
    }

    pub fn with_winkler(mut self, enable: bool) -> Self {
        self.winkler = enable;
        self
    }

    pub fn with_scaling_factor(mut self, scaling_factor: f64) -> Self {
        self.scaling_factor = scaling_factor;
        self
    }

    /// Returns true if the scaling factor keeps adjusted scores within `[0, 1]`.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        (0.0..=MAX_SCALING_FACTOR).contains(&self.scaling_factor)
    }
}
