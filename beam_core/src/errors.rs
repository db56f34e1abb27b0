//! # Error Types
//!
//! Structured error types for beam_core. Validation failures carry the
//! offending values so a caller can re-prompt or reject the case without
//! parsing the message text.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn check_position(position_m: f64, span_m: f64) -> BeamResult<()> {
//!     if position_m > span_m {
//!         return Err(BeamError::PositionOutOfRange { position_m, span_m });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_position(7.0, 6.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam solving and case-file handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// The second load sits beyond the far support (`a + x > L`)
    #[error("Load positions exceed beam length: second load at {position_m} m on a {span_m} m span")]
    PositionOutOfRange { position_m: f64, span_m: f64 },

    /// The span is zero or negative, so the reactions cannot be resolved
    #[error("Invalid span: {span_m} m - span must be positive")]
    InvalidSpan { span_m: f64 },

    /// An input value is invalid (not finite, section off the beam, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Console text that does not parse as a number
    #[error("Invalid numeric input for '{field}': '{text}'")]
    InvalidNumericInput { field: String, text: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Case file schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidNumericInput error
    pub fn invalid_numeric_input(field: impl Into<String>, text: impl Into<String>) -> Self {
        BeamError::InvalidNumericInput {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller can recover by supplying a different case.
    ///
    /// Validation failures are recoverable; I/O and schema failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BeamError::PositionOutOfRange { .. }
                | BeamError::InvalidSpan { .. }
                | BeamError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::PositionOutOfRange { .. } => "POSITION_OUT_OF_RANGE",
            BeamError::InvalidSpan { .. } => "INVALID_SPAN",
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::InvalidNumericInput { .. } => "INVALID_NUMERIC_INPUT",
            BeamError::FileError { .. } => "FILE_ERROR",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BeamError::PositionOutOfRange {
            position_m: 7.5,
            span_m: 6.0,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"PositionOutOfRange\""));
        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BeamError::InvalidSpan { span_m: 0.0 }.error_code(),
            "INVALID_SPAN"
        );
        assert_eq!(
            BeamError::invalid_numeric_input("L", "six").error_code(),
            "INVALID_NUMERIC_INPUT"
        );
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(BeamError::InvalidSpan { span_m: -1.0 }.is_recoverable());
        assert!(BeamError::invalid_input("eval_x_m", "9", "off the beam").is_recoverable());
        assert!(!BeamError::file_error("open", "cases.json", "not found").is_recoverable());
    }

    #[test]
    fn test_position_message_names_the_load() {
        let msg = BeamError::PositionOutOfRange {
            position_m: 7.0,
            span_m: 6.0,
        }
        .to_string();
        assert!(msg.starts_with("Load positions exceed beam length"));
        assert!(msg.contains("7 m"));
    }
}
