//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output
//! - Configurable log levels
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use healthsync::logging::init_logging;
//! use healthsync::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log an assistant reply being scheduled for a user message
///
/// # Example
///
/// ```no_run
/// use healthsync::log_reply_scheduled;
/// use healthsync::core::assistant::Intent;
/// use healthsync::domain::{MessageId, SessionId};
/// use std::time::Duration;
///
/// let session = SessionId::generate();
/// log_reply_scheduled!(session, MessageId::FIRST, Intent::Fallback, Duration::from_millis(1200));
/// ```
#[macro_export]
macro_rules! log_reply_scheduled {
    ($session:expr, $message_id:expr, $intent:expr, $delay:expr) => {
        tracing::debug!(
            session_id = %$session,
            message_id = %$message_id,
            intent = ?$intent,
            delay_ms = $delay.as_millis() as u64,
            "Assistant reply scheduled"
        );
    };
}

/// Log a call status change
///
/// # Example
///
/// ```no_run
/// use healthsync::log_call_transition;
/// use healthsync::core::call::CallStatus;
/// use healthsync::domain::SessionId;
///
/// let session = SessionId::generate();
/// log_call_transition!(session, CallStatus::Waiting, CallStatus::Connecting);
/// ```
#[macro_export]
macro_rules! log_call_transition {
    ($session:expr, $from:expr, $to:expr) => {
        tracing::info!(
            session_id = %$session,
            from = $from.as_str(),
            to = $to.as_str(),
            "Call status changed"
        );
    };
}

/// Log the outcome of a symptom analysis
#[macro_export]
macro_rules! log_triage_complete {
    ($session:expr, $symptom_count:expr, $results:expr) => {
        tracing::info!(
            session_id = %$session,
            symptoms = $symptom_count,
            candidates = $results.len(),
            primary = $results.first().map(|c| c.condition.name()).unwrap_or("none"),
            "Symptom analysis completed"
        );
    };
}

/// Log an error with context
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
