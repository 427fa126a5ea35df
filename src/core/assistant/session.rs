//! Assistant conversation with simulated typing latency
//!
//! The user message is appended immediately; the reply is appended by a
//! spawned task after a randomized delay. Replies that overlap settle
//! independently, in completion order. Pending tasks hold only a weak
//! reference to the session, so dropping the session discards them.

use super::responder::{classify_utterance, QuickAction, WELCOME_MESSAGE};
use crate::core::timing::{Clock, LatencyProfile};
use crate::domain::{AssistantAuthor, ChatMessage, HealthSyncError, MessageId, MessageLog, Result, SessionId};
use crate::log_reply_scheduled;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::watch;

/// Renderable view of an assistant conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSnapshot {
    pub messages: Vec<ChatMessage<AssistantAuthor>>,

    /// True while at least one reply is pending
    pub is_typing: bool,

    /// Quick actions are offered until the user says anything
    pub quick_actions_available: bool,
}

struct ConversationState {
    log: MessageLog<AssistantAuthor>,
    pending_replies: usize,
    rng: StdRng,
}

impl ConversationState {
    fn snapshot(&self) -> AssistantSnapshot {
        AssistantSnapshot {
            messages: self.log.messages().to_vec(),
            is_typing: self.pending_replies > 0,
            quick_actions_available: self.log.len() == 1,
        }
    }
}

struct Shared {
    state: Mutex<ConversationState>,
    snapshots: watch::Sender<AssistantSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &ConversationState) {
        self.snapshots.send_replace(state.snapshot());
    }
}

/// One AI assistant conversation
///
/// Must be used from within a Tokio runtime: replies are delivered by
/// spawned tasks.
pub struct AssistantSession {
    id: SessionId,
    shared: Arc<Shared>,
    clock: Arc<dyn Clock>,
    latency: LatencyProfile,
}

impl AssistantSession {
    /// Creates a session seeded with the welcome message
    pub fn new(latency: LatencyProfile, clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(latency, clock, StdRng::from_entropy())
    }

    /// Creates a session whose typing delays come from a fixed seed
    pub fn with_seed(latency: LatencyProfile, clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self::with_rng(latency, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(latency: LatencyProfile, clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        let mut log = MessageLog::new();
        log.push(AssistantAuthor::Assistant, WELCOME_MESSAGE);
        let state = ConversationState {
            log,
            pending_replies: 0,
            rng,
        };
        let (snapshots, _) = watch::channel(state.snapshot());
        let id = SessionId::generate();
        tracing::debug!(session_id = %id, "Assistant session opened");

        Self {
            id,
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                snapshots,
            }),
            clock,
            latency,
        }
    }

    /// Session identifier used in logs
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Submits user text and schedules the assistant's reply
    ///
    /// Returns the identifier of the appended user message.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `text` is blank; nothing is appended.
    pub fn send(&self, text: &str) -> Result<MessageId> {
        if text.trim().is_empty() {
            return Err(HealthSyncError::Validation(
                "Message must not be empty".to_string(),
            ));
        }

        let intent = classify_utterance(text);
        let (message_id, delay) = {
            let mut state = self.shared.lock();
            let message_id = state.log.push(AssistantAuthor::User, text);
            state.pending_replies += 1;
            let delay = self.latency.typing_delay(&mut state.rng);
            self.shared.publish(&state);
            (message_id, delay)
        };
        log_reply_scheduled!(self.id, message_id, intent, delay);

        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        let clock = Arc::clone(&self.clock);
        let session_id = self.id;
        tokio::spawn(async move {
            clock.sleep(delay).await;
            let Some(shared) = weak.upgrade() else {
                tracing::debug!(session_id = %session_id, "Session closed before reply was delivered");
                return;
            };
            let mut state = shared.lock();
            let reply_id = state.log.push(AssistantAuthor::Assistant, intent.reply());
            state.pending_replies = state.pending_replies.saturating_sub(1);
            shared.publish(&state);
            tracing::debug!(session_id = %session_id, message_id = %reply_id, "Assistant reply delivered");
        });

        Ok(message_id)
    }

    /// Submits a preset phrase exactly as if it had been typed
    pub fn quick_action(&self, action: QuickAction) -> Result<MessageId> {
        self.send(action.phrase())
    }

    /// Current state of the conversation
    pub fn snapshot(&self) -> AssistantSnapshot {
        self.shared.snapshots.borrow().clone()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<AssistantSnapshot> {
        self.shared.snapshots.subscribe()
    }

    /// Waits until no reply is pending and returns the settled state
    pub async fn wait_for_replies(&self) -> AssistantSnapshot {
        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so the error arm is unreachable in practice
        let settled = rx
            .wait_for(|s| !s.is_typing)
            .await
            .map(|snapshot| snapshot.clone());
        settled.unwrap_or_else(|_| self.snapshot())
    }
}

impl Drop for AssistantSession {
    fn drop(&mut self) {
        tracing::debug!(session_id = %self.id, "Assistant session closed");
    }
}
