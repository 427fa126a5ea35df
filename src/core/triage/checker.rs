//! Symptom checker workflow
//!
//! Three steps: patient details, symptom list, results. Analysis shows an
//! "analyzing" state for a fixed delay before the rule output replaces any
//! previous results.

use super::rules::evaluate_symptoms;
use crate::core::timing::{Clock, LatencyProfile};
use crate::domain::{
    DiagnosisCandidate, HealthSyncError, PatientInfo, Result, SessionId, SymptomDraft,
    SymptomEntry, SymptomId,
};
use crate::log_triage_complete;
use std::sync::Arc;

/// Which page of the checker is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckerStep {
    PatientInfo,
    Symptoms,
    Results,
}

/// Working state of one symptom check
pub struct SymptomChecker {
    id: SessionId,
    step: CheckerStep,
    patient: PatientInfo,
    symptoms: Vec<SymptomEntry>,
    next_symptom_id: SymptomId,
    results: Vec<DiagnosisCandidate>,
    analyzing: bool,
    clock: Arc<dyn Clock>,
    latency: LatencyProfile,
}

impl SymptomChecker {
    /// Creates an empty checker on the patient details step
    pub fn new(latency: LatencyProfile, clock: Arc<dyn Clock>) -> Self {
        Self {
            id: SessionId::generate(),
            step: CheckerStep::PatientInfo,
            patient: PatientInfo::default(),
            symptoms: Vec::new(),
            next_symptom_id: SymptomId::FIRST,
            results: Vec::new(),
            analyzing: false,
            clock,
            latency,
        }
    }

    pub fn step(&self) -> CheckerStep {
        self.step
    }

    pub fn patient(&self) -> &PatientInfo {
        &self.patient
    }

    pub fn symptoms(&self) -> &[SymptomEntry] {
        &self.symptoms
    }

    pub fn results(&self) -> &[DiagnosisCandidate] {
        &self.results
    }

    /// The first candidate, which the results page highlights
    pub fn primary(&self) -> Option<&DiagnosisCandidate> {
        self.results.first()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Whether the analyze action is enabled
    pub fn can_analyze(&self) -> bool {
        !self.symptoms.is_empty() && !self.analyzing
    }

    /// Stores patient details and moves on to the symptom list
    ///
    /// # Errors
    ///
    /// Returns a validation error when age or gender is missing.
    pub fn submit_patient_info(&mut self, info: PatientInfo) -> Result<()> {
        if !info.is_complete() {
            return Err(HealthSyncError::Validation(
                "Age and gender are required".to_string(),
            ));
        }
        self.patient = info;
        self.step = CheckerStep::Symptoms;
        Ok(())
    }

    /// Returns to the patient details step, keeping everything entered
    pub fn back_to_patient_info(&mut self) {
        self.step = CheckerStep::PatientInfo;
    }

    /// Adds a completed draft to the working set
    ///
    /// # Errors
    ///
    /// Returns a validation error when any draft field is empty.
    pub fn add_symptom(&mut self, draft: SymptomDraft) -> Result<SymptomId> {
        if !draft.is_complete() {
            return Err(HealthSyncError::Validation(
                "Complete all symptom fields before adding it".to_string(),
            ));
        }
        let id = self.next_symptom_id;
        let entry = draft.into_entry(id)?;
        self.next_symptom_id = id.next();
        tracing::debug!(session_id = %self.id, symptom_id = %id, name = %entry.name, "Symptom added");
        self.symptoms.push(entry);
        Ok(id)
    }

    /// Removes one entry; returns whether it existed
    pub fn remove_symptom(&mut self, id: SymptomId) -> bool {
        let before = self.symptoms.len();
        self.symptoms.retain(|s| s.id != id);
        self.symptoms.len() != before
    }

    /// Runs the rules after the analysis delay
    ///
    /// Shows the results step with the analyzing flag set while waiting,
    /// then replaces the previous results.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no symptom has been added.
    pub async fn analyze(&mut self) -> Result<&[DiagnosisCandidate]> {
        if self.symptoms.is_empty() {
            return Err(HealthSyncError::Validation(
                "Add at least one symptom before analyzing".to_string(),
            ));
        }

        self.step = CheckerStep::Results;
        self.analyzing = true;
        tracing::info!(
            session_id = %self.id,
            symptoms = self.symptoms.len(),
            "Analyzing symptoms"
        );

        self.clock.sleep(self.latency.analysis).await;

        self.results = evaluate_symptoms(&self.symptoms);
        self.analyzing = false;
        log_triage_complete!(self.id, self.symptoms.len(), &self.results);

        Ok(&self.results)
    }

    /// Starts over with an empty form
    pub fn reset(&mut self) {
        self.step = CheckerStep::PatientInfo;
        self.patient = PatientInfo::default();
        self.symptoms.clear();
        self.next_symptom_id = SymptomId::FIRST;
        self.results.clear();
        self.analyzing = false;
        tracing::debug!(session_id = %self.id, "Symptom checker reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timing::{ImmediateClock, TokioClock};
    use crate::domain::{BodyRegion, Condition, Severity};
    use std::time::Duration;

    fn draft(name: &str, severity: Severity) -> SymptomDraft {
        SymptomDraft {
            name: name.to_string(),
            severity,
            duration: "2 días".to_string(),
            body_region: Some(BodyRegion::General),
        }
    }

    fn checker() -> SymptomChecker {
        SymptomChecker::new(LatencyProfile::default(), Arc::new(ImmediateClock))
    }

    #[test]
    fn test_patient_info_gate() {
        let mut checker = checker();
        assert!(checker.submit_patient_info(PatientInfo::default()).is_err());
        assert_eq!(checker.step(), CheckerStep::PatientInfo);

        let info = PatientInfo {
            age: "40".to_string(),
            gender: "masculino".to_string(),
            ..Default::default()
        };
        checker.submit_patient_info(info).unwrap();
        assert_eq!(checker.step(), CheckerStep::Symptoms);
        assert_eq!(checker.patient().age, "40");

        checker.back_to_patient_info();
        assert_eq!(checker.step(), CheckerStep::PatientInfo);
        assert_eq!(checker.patient().gender, "masculino");
    }

    #[test]
    fn test_add_and_remove_symptoms() {
        let mut checker = checker();
        let first = checker.add_symptom(draft("Fiebre", Severity::High)).unwrap();
        let second = checker.add_symptom(draft("Tos", Severity::Low)).unwrap();
        assert_ne!(first, second);
        assert_eq!(checker.symptoms().len(), 2);

        assert!(checker.remove_symptom(first));
        assert!(!checker.remove_symptom(first));
        assert_eq!(checker.symptoms().len(), 1);

        // Identifiers are never reused within a working set
        let third = checker.add_symptom(draft("Mareos", Severity::Low)).unwrap();
        assert!(third > second);
    }

    #[test]
    fn test_incomplete_draft_rejected() {
        let mut checker = checker();
        let mut incomplete = draft("Fiebre", Severity::High);
        incomplete.body_region = None;
        assert!(checker.add_symptom(incomplete).is_err());
        assert!(checker.symptoms().is_empty());
        assert!(!checker.can_analyze());
    }

    #[tokio::test]
    async fn test_analyze_requires_symptoms() {
        let mut checker = checker();
        assert!(checker.analyze().await.is_err());
        assert_eq!(checker.step(), CheckerStep::PatientInfo);
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_waits_for_delay() {
        let mut checker = SymptomChecker::new(LatencyProfile::default(), Arc::new(TokioClock));
        checker.add_symptom(draft("Mareos", Severity::Low)).unwrap();

        let start = tokio::time::Instant::now();
        let results = checker.analyze().await.unwrap().to_vec();
        assert!(start.elapsed() >= Duration::from_millis(3000));

        assert_eq!(results.len(), 2);
        assert_eq!(checker.primary().unwrap().condition, Condition::GeneralMalaise);
        assert_eq!(checker.step(), CheckerStep::Results);
        assert!(!checker.is_analyzing());
    }

    #[tokio::test]
    async fn test_reanalysis_replaces_results() {
        let mut checker = checker();
        checker.add_symptom(draft("Mareos", Severity::Low)).unwrap();
        checker.analyze().await.unwrap();
        assert_eq!(checker.primary().unwrap().condition, Condition::GeneralMalaise);

        checker.add_symptom(draft("Dolor de cabeza", Severity::Medium)).unwrap();
        checker.add_symptom(draft("Fiebre", Severity::Medium)).unwrap();
        checker.analyze().await.unwrap();
        assert_eq!(checker.primary().unwrap().condition, Condition::FluSyndrome);
        assert_eq!(checker.results().len(), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let mut checker = checker();
        checker
            .submit_patient_info(PatientInfo {
                age: "30".to_string(),
                gender: "femenino".to_string(),
                ..Default::default()
            })
            .unwrap();
        checker.add_symptom(draft("Fiebre", Severity::High)).unwrap();
        checker.analyze().await.unwrap();

        checker.reset();
        assert_eq!(checker.step(), CheckerStep::PatientInfo);
        assert!(checker.symptoms().is_empty());
        assert!(checker.results().is_empty());
        assert_eq!(checker.patient(), &PatientInfo::default());
        assert_eq!(
            checker.add_symptom(draft("Tos", Severity::Low)).unwrap(),
            SymptomId::FIRST
        );
    }
}
