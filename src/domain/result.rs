//! Result type alias for HealthSync
//!
//! A convenient Result type alias that uses [`HealthSyncError`] as the error type.

use super::errors::HealthSyncError;

/// Result type alias for HealthSync operations
///
/// # Examples
///
/// ```
/// use healthsync::domain::result::Result;
/// use healthsync::domain::errors::HealthSyncError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HealthSyncError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HealthSyncError>;
