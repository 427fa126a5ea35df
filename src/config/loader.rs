//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HealthSyncConfig;
use crate::domain::errors::HealthSyncError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HealthSyncConfig
/// 4. Applies environment variable overrides (HEALTHSYNC_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing or substitution
/// fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use healthsync::config::loader::load_config;
///
/// let config = load_config("healthsync.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HealthSyncConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HealthSyncError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HealthSyncError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: HealthSyncConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        HealthSyncError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads `path` when given, otherwise returns validated defaults with
/// environment overrides applied
pub fn load_config_or_default(path: Option<&str>) -> Result<HealthSyncConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = HealthSyncConfig::default();
            apply_env_overrides(&mut config)?;
            config.validate().map_err(|e| {
                HealthSyncError::Configuration(format!("Configuration validation failed: {}", e))
            })?;
            Ok(config)
        }
    }
}

fn env_var_pattern() -> Result<&'static Regex> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = PATTERN.get() {
        return Ok(re);
    }
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| HealthSyncError::Configuration(format!("Invalid regex pattern: {}", e)))?;
    Ok(PATTERN.get_or_init(|| re))
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern()?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HealthSyncError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(val) => val.trim().parse().map(Some).map_err(|_| {
            HealthSyncError::Configuration(format!("Invalid value for {name}: '{val}'"))
        }),
        Err(_) => Ok(None),
    }
}

/// Applies environment variable overrides using HEALTHSYNC_* prefix
///
/// Environment variables follow the pattern: HEALTHSYNC_<SECTION>_<KEY>,
/// for example HEALTHSYNC_LATENCY_CONNECT_MS.
fn apply_env_overrides(config: &mut HealthSyncConfig) -> Result<()> {
    if let Ok(val) = std::env::var("HEALTHSYNC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    let latency = &mut config.latency;
    let numeric_overrides: [(&str, &mut u64); 6] = [
        ("HEALTHSYNC_LATENCY_TYPING_MIN_MS", &mut latency.typing_min_ms),
        ("HEALTHSYNC_LATENCY_TYPING_MAX_MS", &mut latency.typing_max_ms),
        ("HEALTHSYNC_LATENCY_ANALYSIS_MS", &mut latency.analysis_ms),
        ("HEALTHSYNC_LATENCY_CONNECT_MS", &mut latency.connect_ms),
        ("HEALTHSYNC_LATENCY_TICK_MS", &mut latency.tick_ms),
        ("HEALTHSYNC_LATENCY_DOCTOR_REPLY_MS", &mut latency.doctor_reply_ms),
    ];
    for (name, field) in numeric_overrides {
        if let Some(value) = parse_env(name)? {
            *field = value;
        }
    }

    if let Some(enabled) = parse_env("HEALTHSYNC_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = enabled;
    }
    if let Ok(val) = std::env::var("HEALTHSYNC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("HEALTHSYNC_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
