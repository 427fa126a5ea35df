//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "healthsync.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing HealthSync configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} to tune the simulated delays", self.output);
                println!(
                    "  2. Validate configuration: healthsync --config {} validate-config",
                    self.output
                );
                println!("  3. Talk to the assistant: healthsync --config {} chat", self.output);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every key at its default
    fn sample_config() -> &'static str {
        r#"# HealthSync Configuration File

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Simulated delays, in milliseconds
[latency]
# Assistant typing delay is drawn from [typing_min_ms, typing_max_ms)
typing_min_ms = 1000
typing_max_ms = 2000

# Symptom analysis
analysis_ms = 3000

# Video call
connect_ms = 2000
tick_ms = 1000
doctor_reply_ms = 1500

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HealthSyncConfig;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_matches_defaults() {
        let config: HealthSyncConfig = toml::from_str(InitArgs::sample_config()).unwrap();
        assert_eq!(config, HealthSyncConfig::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("healthsync.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
        assert_eq!(args.execute().await.unwrap(), 2);

        let forced = InitArgs {
            force: true,
            ..args
        };
        assert_eq!(forced.execute().await.unwrap(), 0);
    }
}
