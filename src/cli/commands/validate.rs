//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the HealthSync configuration file.

use super::load_settings;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or("(built-in defaults)");
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration: {shown_path}");
        println!();

        // Loading also validates
        let Some(config) = load_settings(config_path) else {
            return Ok(2); // Configuration error exit code
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Typing Delay: {}-{} ms",
            config.latency.typing_min_ms, config.latency.typing_max_ms
        );
        println!("  Analysis Delay: {} ms", config.latency.analysis_ms);
        println!("  Connect Delay: {} ms", config.latency.connect_ms);
        println!("  Tick Interval: {} ms", config.latency.tick_ms);
        println!("  Doctor Reply Delay: {} ms", config.latency.doctor_reply_ms);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}
