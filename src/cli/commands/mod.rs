//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod chat;
pub mod consult;
pub mod init;
pub mod triage;
pub mod validate;

use crate::config::{load_config_or_default, HealthSyncConfig};
use crate::core::timing::{Clock, ImmediateClock, TokioClock};
use crate::log_error_with_context;
use std::sync::Arc;

/// Loads the configuration for a command, reporting failures on stdout
///
/// Returns `None` when loading failed; callers exit with code 2.
pub(crate) fn load_settings(config_path: Option<&str>) -> Option<HealthSyncConfig> {
    match load_config_or_default(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            log_error_with_context!(&e, "Failed to load configuration");
            println!("❌ Failed to load configuration");
            println!("   Error: {e}");
            None
        }
    }
}

/// Real timers, or none at all when `instant` is set
pub(crate) fn clock_for(instant: bool) -> Arc<dyn Clock> {
    if instant {
        Arc::new(ImmediateClock)
    } else {
        Arc::new(TokioClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_settings_defaults_without_file() {
        let config = load_settings(None).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_settings_missing_file() {
        assert!(load_settings(Some("does-not-exist-healthsync.toml")).is_none());
    }
}
