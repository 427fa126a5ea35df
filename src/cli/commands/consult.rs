//! Consult command implementation
//!
//! Places a simulated video call with the on-call doctor, exchanges the
//! given chat messages and hangs up after the requested time.

use super::load_settings;
use crate::core::call::{CallSession, CallStatus};
use crate::core::timing::{LatencyProfile, TokioClock};
use crate::domain::{CallAuthor, ChatMessage};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Arguments for the consult command
#[derive(Args, Debug)]
pub struct ConsultArgs {
    /// Chat message for the doctor (repeatable)
    #[arg(short, long = "message")]
    pub messages: Vec<String>,

    /// How long the call stays active, in seconds
    #[arg(short, long, default_value_t = 5)]
    pub seconds: u64,

    /// Consultation notes to keep with the call
    #[arg(long)]
    pub notes: Option<String>,

    /// Join with the microphone muted
    #[arg(long)]
    pub muted: bool,

    /// Join with the camera off
    #[arg(long)]
    pub video_off: bool,
}

impl ConsultArgs {
    /// Execute the consult command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let Some(config) = load_settings(config_path) else {
            return Ok(2); // Configuration error exit code
        };

        // The duration ticker needs real timers
        let session = CallSession::new(LatencyProfile::from(&config.latency), Arc::new(TokioClock));
        let doctor = session.snapshot().doctor;

        println!("📞 Llamando a {} ({})...", doctor.name, doctor.specialty);
        session.start()?;
        if self.muted {
            session.toggle_mute();
        }
        if self.video_off {
            session.toggle_video();
        }
        if let Some(notes) = &self.notes {
            session.set_notes(notes.as_str());
        }

        session.wait_for_status(CallStatus::Active).await;
        let active_since = Instant::now();
        println!("✅ Conectado");
        println!();

        for text in &self.messages {
            if let Err(e) = session.send_message(text) {
                println!("❌ {e}");
                session.end()?;
                return Ok(3); // Validation error exit code
            }
        }
        session.wait_for_replies().await;

        let remaining = Duration::from_secs(self.seconds).saturating_sub(active_since.elapsed());
        tokio::time::sleep(remaining).await;

        session.end()?;
        let snapshot = session.snapshot();

        for message in &snapshot.messages {
            print_message(message, doctor.name);
        }
        println!("⏱️  Duración: {}", snapshot.formatted_duration());
        if snapshot.muted || snapshot.video_off {
            println!(
                "   Micrófono: {} | Cámara: {}",
                if snapshot.muted { "silenciado" } else { "activo" },
                if snapshot.video_off { "apagada" } else { "encendida" }
            );
        }
        if !snapshot.notes.is_empty() {
            println!("📝 Notas: {}", snapshot.notes);
        }

        Ok(0)
    }
}

fn print_message(message: &ChatMessage<CallAuthor>, doctor_name: &str) {
    let speaker = match message.author {
        CallAuthor::Patient => "Tú",
        CallAuthor::Doctor => doctor_name,
    };
    println!(
        "[{}] {}: {}",
        message.timestamp.format("%H:%M:%S"),
        speaker,
        message.text
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_consult_missing_config_file() {
        let args = ConsultArgs {
            messages: Vec::new(),
            seconds: 0,
            notes: None,
            muted: false,
            video_off: false,
        };
        assert_eq!(args.execute(Some("missing-healthsync.toml")).await.unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_consult_runs_to_completion() {
        let args = ConsultArgs {
            messages: vec!["Me duele la cabeza".to_string()],
            seconds: 3,
            notes: Some("Control de cefalea".to_string()),
            muted: true,
            video_off: false,
        };
        assert_eq!(args.execute(None).await.unwrap(), 0);
    }
}
