//! Simulated video consultation
//!
//! State machine: `waiting -> connecting -> active -> ended -> waiting`.
//! The connecting step completes on its own after the connect delay; the
//! duration counter ticks only while active. Each call gets a generation
//! number so that a connect timer or ticker left over from an earlier call
//! can never touch a later one.

use crate::core::timing::{Clock, LatencyProfile};
use crate::domain::{
    CallAuthor, CallError, ChatMessage, HealthSyncError, MessageId, MessageLog, Result, SessionId,
};
use crate::log_call_transition;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::watch;

/// Notice appended when the call connects
pub const CONNECTED_NOTICE: &str = "Llamada conectada. La consulta ha comenzado.";

/// Notice appended when the call ends
pub const ENDED_NOTICE: &str = "Llamada finalizada. Gracias por usar HealthSync.";

/// Canned doctor acknowledgements, one picked at random per patient message
pub const DOCTOR_REPLIES: [&str; 4] = [
    "Entiendo, déjame revisar eso.",
    "Gracias por la información.",
    "Te enviaré la receta por este medio.",
    "Voy a enviarte algunas recomendaciones.",
];

/// Lifecycle of a consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    #[default]
    Waiting,
    Connecting,
    Active,
    Ended,
}

impl CallStatus {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Waiting => "waiting",
            CallStatus::Connecting => "connecting",
            CallStatus::Active => "active",
            CallStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Doctor on the other end of the call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorProfile {
    pub name: &'static str,
    pub specialty: &'static str,
}

/// The doctor every simulated consultation connects to
pub const ON_CALL_DOCTOR: DoctorProfile = DoctorProfile {
    name: "Dr. María González",
    specialty: "Medicina General",
};

/// Formats elapsed seconds as `MM:SS`
///
/// ```
/// use healthsync::core::call::format_duration;
///
/// assert_eq!(format_duration(0), "00:00");
/// assert_eq!(format_duration(75), "01:15");
/// assert_eq!(format_duration(6000), "100:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Renderable view of a consultation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSnapshot {
    pub status: CallStatus,
    pub duration_secs: u64,
    pub muted: bool,
    pub video_off: bool,
    pub notes: String,
    pub messages: Vec<ChatMessage<CallAuthor>>,
    pub pending_replies: usize,
    pub doctor: DoctorProfile,
}

impl CallSnapshot {
    /// Elapsed time as `MM:SS`
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }
}

struct CallState {
    status: CallStatus,
    duration_secs: u64,
    muted: bool,
    video_off: bool,
    notes: String,
    log: MessageLog<CallAuthor>,
    pending_replies: usize,
    generation: u64,
    rng: StdRng,
}

impl CallState {
    fn snapshot(&self) -> CallSnapshot {
        CallSnapshot {
            status: self.status,
            duration_secs: self.duration_secs,
            muted: self.muted,
            video_off: self.video_off,
            notes: self.notes.clone(),
            messages: self.log.messages().to_vec(),
            pending_replies: self.pending_replies,
            doctor: ON_CALL_DOCTOR,
        }
    }

    fn require(&self, expected: CallStatus, action: &'static str) -> std::result::Result<(), CallError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(CallError::InvalidTransition {
                action,
                status: self.status.as_str(),
            })
        }
    }
}

struct Shared {
    state: Mutex<CallState>,
    snapshots: watch::Sender<CallSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, CallState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &CallState) {
        self.snapshots.send_replace(state.snapshot());
    }
}

/// One simulated video consultation
///
/// Must be used from within a Tokio runtime: the connect timer, the
/// duration ticker and doctor replies run as spawned tasks holding only a
/// weak reference to the session.
pub struct CallSession {
    id: SessionId,
    shared: Arc<Shared>,
    clock: Arc<dyn Clock>,
    latency: LatencyProfile,
}

impl CallSession {
    /// Creates a session in the waiting state
    pub fn new(latency: LatencyProfile, clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(latency, clock, StdRng::from_entropy())
    }

    /// Creates a session whose doctor replies come from a fixed seed
    pub fn with_seed(latency: LatencyProfile, clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self::with_rng(latency, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(latency: LatencyProfile, clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        let state = CallState {
            status: CallStatus::Waiting,
            duration_secs: 0,
            muted: false,
            video_off: false,
            notes: String::new(),
            log: MessageLog::new(),
            pending_replies: 0,
            generation: 0,
            rng,
        };
        let (snapshots, _) = watch::channel(state.snapshot());

        Self {
            id: SessionId::generate(),
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

    /// Current state of the consultation
    pub fn snapshot(&self) -> CallSnapshot {
        self.shared.snapshots.borrow().clone()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<CallSnapshot> {
        self.shared.snapshots.subscribe()
    }

    /// Places the call: `waiting -> connecting`
    ///
    /// After the connect delay the call becomes active, a connection notice
    /// is appended and the duration ticker starts.
    pub fn start(&self) -> Result<()> {
        let generation = {
            let mut state = self.shared.lock();
            state.require(CallStatus::Waiting, "start")?;
            state.status = CallStatus::Connecting;
            state.generation += 1;
            self.shared.publish(&state);
            state.generation
        };
        log_call_transition!(self.id, CallStatus::Waiting, CallStatus::Connecting);

        tokio::spawn(run_call(
            Arc::downgrade(&self.shared),
            Arc::clone(&self.clock),
            self.latency.clone(),
            self.id,
            generation,
        ));
        Ok(())
    }

    /// Hangs up: `active -> ended`
    ///
    /// The duration counter freezes at its current value.
    pub fn end(&self) -> Result<()> {
        {
            let mut state = self.shared.lock();
            state.require(CallStatus::Active, "end")?;
            state.status = CallStatus::Ended;
            state.log.push(CallAuthor::Doctor, ENDED_NOTICE);
            self.shared.publish(&state);
        }
        log_call_transition!(self.id, CallStatus::Active, CallStatus::Ended);
        Ok(())
    }

    /// Re-arms for a new consultation: `ended -> waiting`
    ///
    /// The duration resets to zero. The chat log is kept.
    pub fn reset(&self) -> Result<()> {
        {
            let mut state = self.shared.lock();
            state.require(CallStatus::Ended, "reset")?;
            state.status = CallStatus::Waiting;
            state.duration_secs = 0;
            self.shared.publish(&state);
        }
        log_call_transition!(self.id, CallStatus::Ended, CallStatus::Waiting);
        Ok(())
    }

    /// Sends a patient chat message and schedules the doctor's reply
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank text, and a call error when the
    /// call is not active.
    pub fn send_message(&self, text: &str) -> Result<MessageId> {
        if text.trim().is_empty() {
            return Err(HealthSyncError::Validation(
                "Message must not be empty".to_string(),
            ));
        }

        let message_id = {
            let mut state = self.shared.lock();
            if state.status != CallStatus::Active {
                return Err(CallError::NotActive(state.status.as_str()).into());
            }
            let id = state.log.push(CallAuthor::Patient, text);
            state.pending_replies += 1;
            self.shared.publish(&state);
            id
        };
        tracing::debug!(session_id = %self.id, message_id = %message_id, "Patient message sent");

        let weak = Arc::downgrade(&self.shared);
        let clock = Arc::clone(&self.clock);
        let delay = self.latency.doctor_reply;
        let session_id = self.id;
        tokio::spawn(async move {
            clock.sleep(delay).await;
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut state = shared.lock();
            let reply = DOCTOR_REPLIES
                .choose(&mut state.rng)
                .copied()
                .unwrap_or(DOCTOR_REPLIES[0]);
            let reply_id = state.log.push(CallAuthor::Doctor, reply);
            state.pending_replies = state.pending_replies.saturating_sub(1);
            shared.publish(&state);
            tracing::debug!(session_id = %session_id, message_id = %reply_id, "Doctor replied");
        });

        Ok(message_id)
    }

    /// Flips the microphone; returns the new muted state
    pub fn toggle_mute(&self) -> bool {
        let mut state = self.shared.lock();
        state.muted = !state.muted;
        self.shared.publish(&state);
        state.muted
    }

    /// Flips the camera; returns the new video-off state
    pub fn toggle_video(&self) -> bool {
        let mut state = self.shared.lock();
        state.video_off = !state.video_off;
        self.shared.publish(&state);
        state.video_off
    }

    /// Replaces the consultation notes
    pub fn set_notes(&self, notes: impl Into<String>) {
        let mut state = self.shared.lock();
        state.notes = notes.into();
        self.shared.publish(&state);
    }

    /// Waits until the session reaches `status`
    pub async fn wait_for_status(&self, status: CallStatus) -> CallSnapshot {
        self.wait_until(|s| s.status == status).await
    }

    /// Waits until every doctor reply has been delivered
    pub async fn wait_for_replies(&self) -> CallSnapshot {
        self.wait_until(|s| s.pending_replies == 0).await
    }

    async fn wait_until(&self, predicate: impl FnMut(&CallSnapshot) -> bool) -> CallSnapshot {
        let mut rx = self.subscribe();
        let reached = rx.wait_for(predicate).await.map(|snapshot| snapshot.clone());
        reached.unwrap_or_else(|_| self.snapshot())
    }
}

/// Connect timer followed by the duration ticker for one call generation
async fn run_call(
    weak: Weak<Shared>,
    clock: Arc<dyn Clock>,
    latency: LatencyProfile,
    session_id: SessionId,
    generation: u64,
) {
    clock.sleep(latency.connect).await;
    {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut state = shared.lock();
        if state.generation != generation || state.status != CallStatus::Connecting {
            return;
        }
        state.status = CallStatus::Active;
        state.log.push(CallAuthor::Doctor, CONNECTED_NOTICE);
        shared.publish(&state);
    }
    log_call_transition!(session_id, CallStatus::Connecting, CallStatus::Active);

    loop {
        clock.sleep(latency.tick).await;
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut state = shared.lock();
        if state.generation != generation || state.status != CallStatus::Active {
            tracing::trace!(session_id = %session_id, generation, "Duration ticker stopped");
            return;
        }
        state.duration_secs += 1;
        shared.publish(&state);
    }
}
