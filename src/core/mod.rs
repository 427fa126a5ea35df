//! Core engines for HealthSync.
//!
//! # Modules
//!
//! - [`assistant`] - keyword reply engine and assistant conversation
//! - [`triage`] - symptom rules and the symptom checker workflow
//! - [`call`] - video consultation state machine
//! - [`timing`] - injectable clock and latency profile
//!
//! The rule engines are pure functions. The session types wrap them with
//! in-memory state and simulated latency; nothing is persisted.
//!
//! # Example
//!
//! ```rust,no_run
//! use healthsync::core::call::{CallSession, CallStatus};
//! use healthsync::core::timing::{LatencyProfile, TokioClock};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let call = CallSession::new(LatencyProfile::default(), Arc::new(TokioClock));
//! call.start()?;
//! call.wait_for_status(CallStatus::Active).await;
//! call.send_message("Tengo fiebre desde ayer")?;
//! let snapshot = call.wait_for_replies().await;
//! call.end()?;
//! println!("{} messages", snapshot.messages.len());
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod call;
pub mod timing;
pub mod triage;
