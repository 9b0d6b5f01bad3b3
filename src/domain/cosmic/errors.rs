//! Cosmic calculation errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidDateFormat | 400 |
//! | DateOutOfRange | 422 |
//! | InvalidInput | 400 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the cosmic calculators.
///
/// A year before the zodiac anchor is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CosmicError {
    /// The input could not be split into year, month and day integers.
    #[error("Invalid date format '{input}': {reason}")]
    InvalidDateFormat { input: String, reason: String },

    /// The components parse but do not name a real calendar day.
    #[error("Date {year:04}-{month:02}-{day:02} does not exist")]
    DateOutOfRange { year: i64, month: u32, day: u32 },

    /// A calculator argument is outside its domain.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CosmicError {
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CosmicError::InvalidDateFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CosmicError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CosmicError::InvalidDateFormat { .. } => ErrorCode::InvalidFormat,
            CosmicError::DateOutOfRange { .. } => ErrorCode::OutOfRange,
            CosmicError::InvalidInput { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<CosmicError> for DomainError {
    fn from(err: CosmicError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            CosmicError::InvalidDateFormat { input, .. } => domain.with_detail("input", input),
            CosmicError::InvalidInput { field, .. } => domain.with_detail("field", field),
            CosmicError::DateOutOfRange { .. } => domain,
        }
    }
}
