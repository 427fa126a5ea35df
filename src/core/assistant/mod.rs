//! AI assistant
//!
//! - [`responder`] - ordered keyword table mapping an utterance to a canned reply
//! - [`session`] - conversation history with simulated typing delay

pub mod responder;
pub mod session;

pub use responder::{classify_utterance, generate_assistant_reply, Intent, QuickAction, WELCOME_MESSAGE};
pub use session::{AssistantSession, AssistantSnapshot};
