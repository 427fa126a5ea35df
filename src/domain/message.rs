//! Chat message model shared by the assistant and the consultation chat

use super::ids::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of an assistant conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantAuthor {
    /// The person typing
    User,
    /// The canned-response assistant
    Assistant,
}

/// Author of a video consultation chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallAuthor {
    /// The patient in the consultation
    Patient,
    /// The doctor, including system notices about the call
    Doctor,
}

impl fmt::Display for AssistantAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantAuthor::User => write!(f, "user"),
            AssistantAuthor::Assistant => write!(f, "assistant"),
        }
    }
}

impl fmt::Display for CallAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallAuthor::Patient => write!(f, "patient"),
            CallAuthor::Doctor => write!(f, "doctor"),
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage<A> {
    /// Sequential identifier within the owning session
    pub id: MessageId,

    /// Who wrote the message
    pub author: A,

    /// Message body
    pub text: String,

    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only message history for one session
///
/// Identifiers are allocated when a message is appended, so they strictly
/// increase in append order.
///
/// # Examples
///
/// ```
/// use healthsync::domain::message::{AssistantAuthor, MessageLog};
///
/// let mut log = MessageLog::new();
/// let first = log.push(AssistantAuthor::User, "hola");
/// let second = log.push(AssistantAuthor::Assistant, "¡Hola!");
/// assert!(second > first);
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog<A> {
    messages: Vec<ChatMessage<A>>,
    next_id: MessageId,
}

impl<A: Copy> MessageLog<A> {
    /// Creates an empty log
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: MessageId::FIRST,
        }
    }

    /// Appends a message stamped with the current time
    pub fn push(&mut self, author: A, text: impl Into<String>) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        self.messages.push(ChatMessage {
            id,
            author,
            text: text.into(),
            timestamp: Utc::now(),
        });
        id
    }

    /// Messages in append order
    pub fn messages(&self) -> &[ChatMessage<A>] {
        &self.messages
    }

    /// Most recently appended message
    pub fn last(&self) -> Option<&ChatMessage<A>> {
        self.messages.last()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<A: Copy> Default for MessageLog<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut log = MessageLog::new();
        for i in 0..5 {
            log.push(CallAuthor::Patient, format!("mensaje {i}"));
        }
        let ids: Vec<u64> = log.messages().iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_last_and_empty() {
        let mut log: MessageLog<CallAuthor> = MessageLog::default();
        assert!(log.is_empty());
        assert!(log.last().is_none());

        log.push(CallAuthor::Doctor, "Gracias por la información.");
        assert_eq!(log.last().unwrap().author, CallAuthor::Doctor);
    }

    #[test]
    fn test_author_serialization() {
        assert_eq!(
            serde_json::to_string(&AssistantAuthor::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&CallAuthor::Patient).unwrap(), "\"patient\"");
    }
}
