//! Symptom triage
//!
//! - [`rules`] - pure rule engine from symptom entries to diagnosis candidates
//! - [`checker`] - three-step symptom checker workflow around the rules

pub mod checker;
pub mod rules;

pub use checker::{CheckerStep, SymptomChecker};
pub use rules::{evaluate_symptoms, SymptomFlags};
