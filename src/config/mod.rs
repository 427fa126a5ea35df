//! Configuration management for HealthSync.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! HealthSync runs without any configuration file. A file, when given, may set:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Simulated latency for the assistant, the symptom checker and the call
//! - Local JSON file logging
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use healthsync::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("healthsync.toml")?;
//! println!("Connect delay: {} ms", config.latency.connect_ms);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`LatencyConfig`] - Simulated delays, in milliseconds
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [latency]
//! typing_min_ms = 1000
//! typing_max_ms = 2000
//! analysis_ms = 3000
//! connect_ms = 2000
//! tick_ms = 1000
//! doctor_reply_ms = 1500
//!
//! [logging]
//! local_enabled = true
//! local_path = "${HEALTHSYNC_LOG_DIR}"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! Any key can be overridden with `HEALTHSYNC_<SECTION>_<KEY>`:
//!
//! ```bash
//! export HEALTHSYNC_LATENCY_CONNECT_MS=500
//! export HEALTHSYNC_LOGGING_LOCAL_ENABLED=true
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, HealthSyncConfig, LatencyConfig, LoggingConfig};
