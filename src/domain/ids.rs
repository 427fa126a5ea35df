//! Domain identifier types
//!
//! Newtype wrappers keep message, symptom and session identifiers from being
//! mixed up. Message and symptom identifiers are small sequential integers
//! scoped to one session; session identifiers are random UUIDs used to tie
//! log lines together.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sequential chat message identifier, unique within one session
///
/// # Examples
///
/// ```
/// use healthsync::domain::ids::MessageId;
///
/// let first = MessageId::FIRST;
/// assert_eq!(first.get(), 1);
/// assert!(first.next() > first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// Identifier of the first message in a session
    pub const FIRST: MessageId = MessageId(1);

    /// Returns the raw value
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential symptom entry identifier, unique within one working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomId(u32);

impl SymptomId {
    /// Identifier of the first symptom added to an empty working set
    pub const FIRST: SymptomId = SymptomId(1);

    /// Creates a symptom identifier from a raw value
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the identifier that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session identifier used for log correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random session identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
