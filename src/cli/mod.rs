//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for HealthSync using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// HealthSync - telehealth assistant, symptom checker and video consultation
#[derive(Parser, Debug)]
#[command(name = "healthsync")]
#[command(version, about, long_about = None)]
#[command(author = "HealthSync Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "HEALTHSYNC_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HEALTHSYNC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with the AI health assistant
    Chat(commands::chat::ChatArgs),

    /// Run the symptom checker
    Triage(commands::triage::TriageArgs),

    /// Start a video consultation with the on-call doctor
    Consult(commands::consult::ConsultArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;

    #[test]
    fn test_cli_parse_chat() {
        let cli = Cli::parse_from(["healthsync", "chat", "-m", "Hola", "--message", "Tengo dolor"]);
        match cli.command {
            Commands::Chat(args) => assert_eq!(args.messages, vec!["Hola", "Tengo dolor"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_quick_action_range() {
        let cli = Cli::parse_from(["healthsync", "chat", "--quick-action", "6"]);
        assert!(matches!(cli.command, Commands::Chat(ref a) if a.quick_actions == vec![6]));
        assert!(Cli::try_parse_from(["healthsync", "chat", "--quick-action", "7"]).is_err());
        assert!(Cli::try_parse_from(["healthsync", "chat", "--quick-action", "0"]).is_err());
    }

    #[test]
    fn test_cli_parse_triage_symptoms() {
        let cli = Cli::parse_from([
            "healthsync",
            "triage",
            "--symptom",
            "Fiebre alta|high|2 días|General",
            "--json",
        ]);
        match cli.command {
            Commands::Triage(args) => {
                assert_eq!(args.symptoms.len(), 1);
                assert_eq!(args.symptoms[0].severity, Severity::High);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_malformed_symptom() {
        assert!(Cli::try_parse_from(["healthsync", "triage", "--symptom", "Fiebre"]).is_err());
    }

    #[test]
    fn test_cli_parse_consult_defaults() {
        let cli = Cli::parse_from(["healthsync", "consult"]);
        match cli.command {
            Commands::Consult(args) => {
                assert_eq!(args.seconds, 5);
                assert!(args.messages.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["healthsync", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["healthsync", "--log-level", "debug", "init"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
