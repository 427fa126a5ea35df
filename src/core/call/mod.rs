//! Simulated video consultation
//!
//! See [`CallSession`] for the state machine.

pub mod session;

pub use session::{
    format_duration, CallSession, CallSnapshot, CallStatus, DoctorProfile, CONNECTED_NOTICE,
    DOCTOR_REPLIES, ENDED_NOTICE, ON_CALL_DOCTOR,
};
