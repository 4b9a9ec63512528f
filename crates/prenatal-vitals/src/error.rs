//! Error types for input handling around the evaluators.
//!
//! The evaluators themselves never fail. These errors come from the
//! caller-side helpers: reading validation, contraction ordering checks,
//! configuration loading and JSON decoding.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised by validation, configuration and decoding helpers
#[derive(Debug, Error)]
pub enum VitalsError {
    /// Only one half of the blood-pressure pair was supplied
    #[error(
        "blood pressure needs both systolic and diastolic values (systolic: {systolic:?}, diastolic: {diastolic:?})"
    )]
    IncompleteBloodPressure {
        systolic: Option<i32>,
        diastolic: Option<i32>,
    },

    /// A decimal field holds NaN or an infinity
    #[error("{field} must be a finite number")]
    NonFiniteValue { field: &'static str },

    /// The previous reading does not precede the current one
    #[error("previous reading recorded at {recorded_at} is not earlier than {now}")]
    PreviousReadingNotEarlier {
        recorded_at: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    /// Contractions are not in ascending start-time order
    #[error("contraction at index {index} starts before the one preceding it")]
    UnsortedContractions { index: usize },

    /// Analysis window is not a positive, representable number of minutes
    #[error("analysis window must be a positive number of minutes, got {0}")]
    InvalidWindow(i64),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, VitalsError>;
