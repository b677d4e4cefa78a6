use thiserror::Error;

use crate::models::{ECLevel, Mode};

/// Errors returned by the encoder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No version from 1 to 40 can hold the data.
    #[error("data too long: {length} characters in {mode} mode do not fit any version{}", level_suffix(.ec_level))]
    CapacityExceeded {
        /// Encoding mode chosen for the input
        mode: Mode,
        /// Character (or byte) count of the input
        length: usize,
        /// Level that was requested, if any
        ec_level: Option<ECLevel>,
    },

    /// The requested mode cannot represent every character of the input.
    #[error("input contains characters outside the {mode} mode alphabet")]
    ModeMismatch {
        /// Mode that was requested
        mode: Mode,
    },

    /// Internal consistency check failed. Indicates a bug in the encoder.
    #[error("encoder invariant violated: {0}")]
    InvariantViolation(String),
}

fn level_suffix(ec_level: &Option<ECLevel>) -> String {
    match ec_level {
        Some(level) => format!(" at level {}", level),
        None => String::new(),
    }
}
