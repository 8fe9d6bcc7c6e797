//! Error types for SenML operations
//!
//! Lookups and normalization never fail; absence is reported through
//! `Option`. These errors only surface from the explicitly fallible record
//! helpers such as [`SenMLRecord::try_timestamp`](crate::SenMLRecord::try_timestamp).

use thiserror::Error;

/// Result type alias for SenML operations
pub type Result<T> = std::result::Result<T, SenMLError>;

/// Errors that can occur during SenML operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SenMLError {
    /// Invalid field value
    #[error("Invalid value for field '{field}': {value}")]
    InvalidFieldValue { field: String, value: String },

    /// Time-related error
    #[error("Time error: {message}")]
    TimeError { message: String },
}

impl SenMLError {
    /// Create an invalid field value error
    pub fn invalid_field_value<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a time error
    pub fn time<S: Into<String>>(message: S) -> Self {
        Self::TimeError {
            message: message.into(),
        }
    }
}

impl From<time::error::ComponentRange> for SenMLError {
    fn from(err: time::error::ComponentRange) -> Self {
        Self::TimeError {
            message: err.to_string(),
        }
    }
}
