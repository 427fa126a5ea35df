//! Domain models and types for HealthSync.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`MessageId`], [`SymptomId`], [`SessionId`])
//! - **Conversation models** ([`ChatMessage`], [`MessageLog`])
//! - **Triage models** ([`SymptomEntry`], [`SymptomDraft`], [`DiagnosisCandidate`])
//! - **Error types** ([`HealthSyncError`], [`CallError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, HealthSyncError>`]:
//!
//! ```rust
//! use healthsync::domain::{Result, SymptomDraft};
//!
//! fn example() -> Result<()> {
//!     let draft: SymptomDraft = "Tos seca|medium|3 días|Pecho".parse()?;
//!     assert!(draft.is_complete());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod diagnosis;
pub mod errors;
pub mod ids;
pub mod message;
pub mod result;
pub mod symptom;

// Re-export commonly used types for convenience
pub use diagnosis::{Condition, DiagnosisCandidate};
pub use errors::{CallError, HealthSyncError};
pub use ids::{MessageId, SessionId, SymptomId};
pub use message::{AssistantAuthor, CallAuthor, ChatMessage, MessageLog};
pub use result::Result;
pub use symptom::{BodyRegion, PatientInfo, Severity, SymptomDraft, SymptomEntry, COMMON_SYMPTOMS};
