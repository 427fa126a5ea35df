//! Domain error types
//!
//! This module defines the error hierarchy for HealthSync. The rule engines
//! themselves are total; errors only arise from session shells, form
//! validation, configuration and I/O.

use thiserror::Error;

/// Main HealthSync error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum HealthSyncError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Form or input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Call session errors
    #[error("Call session error: {0}")]
    Call(#[from] CallError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Call session errors
///
/// Raised when an action is not valid for the current call status.
/// State is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The requested transition is not allowed from the current status
    #[error("cannot {action} while call is {status}")]
    InvalidTransition {
        action: &'static str,
        status: &'static str,
    },

    /// Chat messages can only be sent during an active call
    #[error("chat is only available during an active call (current status: {0})")]
    NotActive(&'static str),
}

// Conversion from std::io::Error
impl From<std::io::Error> for HealthSyncError {
    fn from(err: std::io::Error) -> Self {
        HealthSyncError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HealthSyncError {
    fn from(err: serde_json::Error) -> Self {
        HealthSyncError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HealthSyncError {
    fn from(err: toml::de::Error) -> Self {
        HealthSyncError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HealthSyncError::Validation("Completa todos los campos".to_string());
        assert_eq!(err.to_string(), "Validation error: Completa todos los campos");
    }

    #[test]
    fn test_call_error_conversion() {
        let call_err = CallError::InvalidTransition {
            action: "end",
            status: "waiting",
        };
        let err: HealthSyncError = call_err.clone().into();
        assert!(matches!(err, HealthSyncError::Call(ref e) if *e == call_err));
        assert_eq!(
            err.to_string(),
            "Call session error: cannot end while call is waiting"
        );
    }

    #[test]
    fn test_not_active_display() {
        let err = CallError::NotActive("ended");
        assert!(err.to_string().contains("ended"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: HealthSyncError = io_err.into();
        assert!(matches!(err, HealthSyncError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: HealthSyncError = json_err.into();
        assert!(matches!(err, HealthSyncError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: HealthSyncError = toml_err.into();
        assert!(matches!(err, HealthSyncError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = HealthSyncError::Validation("boom".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
