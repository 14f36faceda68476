//! Custom error types for the tour table renderer
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tour table operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// A currency amount was built (directly or through arithmetic) with a
    /// negative component
    #[error("invalid value while construction, min value is not allowed")]
    InvalidValue,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Writing into the output sink failed
    #[error("Render error: {0}")]
    Render(String),
}

impl TourError {
    /// Check if this is an invalid currency value error
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue)
    }
}

impl From<std::fmt::Error> for TourError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result type alias for tour table operations
pub type TourResult<T> = Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = TourError::InvalidValue;
        assert_eq!(
            err.to_string(),
            "invalid value while construction, min value is not allowed"
        );
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_error_display() {
        let err = TourError::Config("unknown locale".into());
        assert_eq!(err.to_string(), "Configuration error: unknown locale");
        assert!(!err.is_invalid_value());
    }

    #[test]
    fn test_from_fmt_error() {
        let tour_err: TourError = std::fmt::Error.into();
        assert!(matches!(tour_err, TourError::Render(_)));
    }
}
