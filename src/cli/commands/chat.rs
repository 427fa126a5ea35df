//! Chat command implementation
//!
//! Runs one assistant conversation. Quick actions are sent first, then each
//! `--message` in order. With neither, lines are read from stdin until EOF.

use super::{clock_for, load_settings};
use crate::core::assistant::{AssistantSession, QuickAction};
use crate::core::timing::LatencyProfile;
use crate::domain::{AssistantAuthor, ChatMessage};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Arguments for the chat command
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message to send (repeatable)
    #[arg(short, long = "message")]
    pub messages: Vec<String>,

    /// Quick action to send by position, 1-6 (repeatable)
    #[arg(short, long = "quick-action", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub quick_actions: Vec<u8>,

    /// Skip the simulated typing delay
    #[arg(long)]
    pub instant: bool,
}

impl ChatArgs {
    /// Execute the chat command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let Some(config) = load_settings(config_path) else {
            return Ok(2); // Configuration error exit code
        };

        let session = AssistantSession::new(
            LatencyProfile::from(&config.latency),
            clock_for(self.instant),
        );
        tracing::info!(session_id = %session.id(), "Starting assistant chat");

        let welcome = session.snapshot();
        for message in &welcome.messages {
            print_message(message);
        }
        if welcome.quick_actions_available {
            println!("Acciones rápidas:");
            for (position, action) in QuickAction::ALL.iter().enumerate() {
                println!("  {}. {}", position + 1, action.phrase());
            }
            println!();
        }

        let mut printed = welcome.messages.len();

        if self.messages.is_empty() && self.quick_actions.is_empty() {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                session.send(&line)?;
                printed = print_new(&session, printed).await;
            }
            return Ok(0);
        }

        for position in &self.quick_actions {
            let Some(action) = QuickAction::from_position(usize::from(*position)) else {
                println!("❌ Unknown quick action: {position}");
                return Ok(3); // Validation error exit code
            };
            session.quick_action(action)?;
            printed = print_new(&session, printed).await;
        }

        for text in &self.messages {
            if let Err(e) = session.send(text) {
                println!("❌ {e}");
                return Ok(3); // Validation error exit code
            }
            printed = print_new(&session, printed).await;
        }

        Ok(0)
    }
}

/// Waits for the assistant to finish and prints messages after `printed`
async fn print_new(session: &AssistantSession, printed: usize) -> usize {
    let snapshot = session.wait_for_replies().await;
    for message in snapshot.messages.iter().skip(printed) {
        print_message(message);
    }
    snapshot.messages.len()
}

fn print_message(message: &ChatMessage<AssistantAuthor>) {
    let speaker = match message.author {
        AssistantAuthor::User => "🧑 Tú",
        AssistantAuthor::Assistant => "🤖 Asistente",
    };
    println!("[{}] {}:", message.timestamp.format("%H:%M"), speaker);
    println!("{}", message.text);
    println!();
}
