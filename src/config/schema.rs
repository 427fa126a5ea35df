//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) yields
//! the product's standard timings and console-only logging.

use serde::{Deserialize, Serialize};

/// Main HealthSync configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthSyncConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Simulated latency settings
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HealthSyncConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.latency.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Simulated latency, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Lower bound (inclusive) of the assistant typing delay
    #[serde(default = "default_typing_min_ms")]
    pub typing_min_ms: u64,

    /// Upper bound (exclusive) of the assistant typing delay
    #[serde(default = "default_typing_max_ms")]
    pub typing_max_ms: u64,

    /// Symptom analysis delay
    #[serde(default = "default_analysis_ms")]
    pub analysis_ms: u64,

    /// Call connection delay
    #[serde(default = "default_connect_ms")]
    pub connect_ms: u64,

    /// Call duration tick interval
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Delay before the doctor answers a chat message
    #[serde(default = "default_doctor_reply_ms")]
    pub doctor_reply_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            typing_min_ms: default_typing_min_ms(),
            typing_max_ms: default_typing_max_ms(),
            analysis_ms: default_analysis_ms(),
            connect_ms: default_connect_ms(),
            tick_ms: default_tick_ms(),
            doctor_reply_ms: default_doctor_reply_ms(),
        }
    }
}

impl LatencyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.typing_min_ms >= self.typing_max_ms {
            return Err(format!(
                "latency.typing_min_ms ({}) must be less than latency.typing_max_ms ({})",
                self.typing_min_ms, self.typing_max_ms
            ));
        }
        if self.tick_ms == 0 {
            return Err("latency.tick_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local_enabled = true".to_string());
        }
        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_typing_min_ms() -> u64 {
    1000
}

fn default_typing_max_ms() -> u64 {
    2000
}

fn default_analysis_ms() -> u64 {
    3000
}

fn default_connect_ms() -> u64 {
    2000
}

fn default_tick_ms() -> u64 {
    1000
}

fn default_doctor_reply_ms() -> u64 {
    1500
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
