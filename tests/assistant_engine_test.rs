//! Integration tests for the AI assistant
//!
//! These tests verify that:
//! - Keyword routing follows the ordered table, first match wins
//! - Replies arrive after the typing delay and settle in the transcript
//! - Quick actions behave exactly like typed text

use healthsync::core::assistant::{
    classify_utterance, generate_assistant_reply, AssistantSession, Intent, QuickAction,
    WELCOME_MESSAGE,
};
use healthsync::core::timing::{ImmediateClock, LatencyProfile, TokioClock};
use healthsync::domain::AssistantAuthor;
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;

#[test_case("Tengo DOLOR de espalda" ; "uppercase pain")]
#[test_case("tengo dolor y también quiero agendar" ; "pain before appointment")]
#[test_case("siento malestar y quiero consejos" ; "malaise before tips")]
fn test_symptom_keywords_take_priority(utterance: &str) {
    assert_eq!(
        generate_assistant_reply(utterance),
        generate_assistant_reply("síntoma")
    );
}

#[test_case("¿Qué tiempo hace hoy?" ; "weather")]
#[test_case("" ; "empty")]
#[test_case("12345" ; "digits")]
fn test_unmatched_text_gets_fallback(utterance: &str) {
    assert_eq!(classify_utterance(utterance), Intent::Fallback);
    assert_eq!(generate_assistant_reply(utterance), Intent::Fallback.reply());
}

#[test]
fn test_reply_is_deterministic() {
    let text = "Necesito mi medicamento";
    assert_eq!(generate_assistant_reply(text), generate_assistant_reply(text));
}

#[test]
fn test_quick_action_positions() {
    assert_eq!(QuickAction::from_position(1), Some(QuickAction::AnalyzeSymptoms));
    assert_eq!(QuickAction::from_position(6), Some(QuickAction::Telemedicine));
    assert_eq!(QuickAction::from_position(0), None);
    assert_eq!(QuickAction::from_position(7), None);
}

#[test]
fn test_telemedicine_shortcut_routes_to_medication() {
    // "Telemedicina" contains "medicina"
    assert_eq!(
        generate_assistant_reply(QuickAction::Telemedicine.phrase()),
        generate_assistant_reply("medicina")
    );
}

#[tokio::test(start_paused = true)]
async fn test_conversation_transcript() {
    let session = AssistantSession::with_seed(LatencyProfile::default(), Arc::new(TokioClock), 99);

    session.send("Hola").unwrap();
    let first = session.wait_for_replies().await;
    session.send("¿Cuál es mi presión?").unwrap();
    let second = session.wait_for_replies().await;

    assert_eq!(first.messages.len(), 3);
    assert_eq!(second.messages.len(), 5);
    assert_eq!(second.messages[0].text, WELCOME_MESSAGE);

    let authors: Vec<AssistantAuthor> = second.messages.iter().map(|m| m.author).collect();
    assert_eq!(
        authors,
        vec![
            AssistantAuthor::Assistant,
            AssistantAuthor::User,
            AssistantAuthor::Assistant,
            AssistantAuthor::User,
            AssistantAuthor::Assistant,
        ]
    );
    assert_eq!(second.messages[4].text, generate_assistant_reply("presión"));
    assert!(second.messages.windows(2).all(|w| w[0].id < w[1].id));
    assert!(!second.quick_actions_available);
}

#[tokio::test(start_paused = true)]
async fn test_typing_delay_honors_configured_bounds() {
    let latency = LatencyProfile {
        typing_min: Duration::from_millis(100),
        typing_max: Duration::from_millis(200),
        ..LatencyProfile::default()
    };
    let session = AssistantSession::with_seed(latency, Arc::new(TokioClock), 5);

    let start = tokio::time::Instant::now();
    session.send("consejos").unwrap();
    let settled = session.wait_for_replies().await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(100));
    // Timer deadlines round up to the next millisecond
    assert!(elapsed <= Duration::from_millis(201));
    assert_eq!(settled.messages.len(), 3);
}

#[tokio::test]
async fn test_subscriber_sees_typing_indicator() {
    let session = AssistantSession::new(LatencyProfile::default(), Arc::new(ImmediateClock));
    let mut rx = session.subscribe();

    session.send("ayuda").unwrap();
    assert!(rx.borrow_and_update().is_typing);

    let settled = rx.wait_for(|s| !s.is_typing).await.unwrap().clone();
    assert_eq!(settled.messages.len(), 3);
    assert_eq!(settled.messages[2].text, generate_assistant_reply("ayuda"));
}
