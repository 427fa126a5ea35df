//! Diagnosis candidate model produced by the triage rules

use super::symptom::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conditions the triage rules can suggest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    AcuteRespiratoryInfection,
    FluSyndrome,
    GeneralMalaise,
    DifferentialDiagnosis,
}

impl Condition {
    /// Canonical English name
    pub fn name(&self) -> &'static str {
        match self {
            Condition::AcuteRespiratoryInfection => "Acute Respiratory Infection",
            Condition::FluSyndrome => "Flu Syndrome",
            Condition::GeneralMalaise => "General Malaise",
            Condition::DifferentialDiagnosis => "Differential Diagnosis",
        }
    }

    /// Spanish label shown to patients
    pub fn label(&self) -> &'static str {
        match self {
            Condition::AcuteRespiratoryInfection => "Infección Respiratoria Aguda",
            Condition::FluSyndrome => "Síndrome Gripal",
            Condition::GeneralMalaise => "Malestar General",
            Condition::DifferentialDiagnosis => "Diagnóstico Diferencial",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One suggested condition with its fixed score and advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCandidate {
    pub condition: Condition,

    /// Integer percent, 0..=100
    pub probability: u8,

    pub severity: Severity,
    pub description: String,
    pub recommendations: Vec<String>,
    pub urgency: String,
}

impl DiagnosisCandidate {
    /// Builds a candidate from static rule text
    pub fn new(
        condition: Condition,
        probability: u8,
        severity: Severity,
        description: &str,
        recommendations: &[&str],
        urgency: &str,
    ) -> Self {
        debug_assert!(probability <= 100, "probability is a percentage");
        Self {
            condition,
            probability,
            severity,
            description: description.to_string(),
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
            urgency: urgency.to_string(),
        }
    }
}
