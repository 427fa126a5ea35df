// HealthSync - Telehealth assistant, symptom checker and video consultation
// Copyright (c) 2025 HealthSync Contributors
// Licensed under the MIT License

//! # HealthSync
//!
//! HealthSync is the behavioral core of a Spanish-language telehealth front
//! end: a keyword-driven health assistant, a rule-based symptom checker and a
//! simulated video consultation.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The three engines and their shared timing seam
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use healthsync::core::assistant::AssistantSession;
//! use healthsync::core::timing::{LatencyProfile, TokioClock};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = AssistantSession::new(LatencyProfile::default(), Arc::new(TokioClock));
//!     session.send("Hola, necesito ayuda")?;
//!
//!     let settled = session.wait_for_replies().await;
//!     for message in settled.messages {
//!         println!("{}: {}", message.author, message.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Symptom Triage
//!
//! The rule engine is a pure function over the symptom list:
//!
//! ```rust
//! use healthsync::core::triage::evaluate_symptoms;
//! use healthsync::domain::{BodyRegion, Condition, Severity, SymptomEntry, SymptomId};
//!
//! let entries = vec![SymptomEntry::new(
//!     SymptomId::FIRST,
//!     "Mareos",
//!     Severity::Low,
//!     "1 día",
//!     BodyRegion::Head,
//! )
//! .unwrap()];
//!
//! let candidates = evaluate_symptoms(&entries);
//! assert_eq!(candidates[0].condition, Condition::GeneralMalaise);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] over [`domain::HealthSyncError`]:
//!
//! ```rust,no_run
//! use healthsync::domain::HealthSyncError;
//!
//! fn example() -> Result<(), HealthSyncError> {
//!     let config = healthsync::config::load_config("healthsync.toml")?;
//!     println!("{}", config.latency.connect_ms);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
