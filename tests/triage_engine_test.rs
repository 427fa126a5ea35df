//! Integration tests for the symptom checker and its rule engine

use healthsync::core::timing::{ImmediateClock, LatencyProfile};
use healthsync::core::triage::{evaluate_symptoms, CheckerStep, SymptomChecker};
use healthsync::domain::{
    BodyRegion, Condition, PatientInfo, Severity, SymptomDraft, SymptomEntry, SymptomId,
};
use std::sync::Arc;
use test_case::test_case;

fn entries(symptoms: &[(&str, Severity)]) -> Vec<SymptomEntry> {
    symptoms
        .iter()
        .enumerate()
        .map(|(i, (name, severity))| {
            SymptomEntry::new(
                SymptomId::new(i as u32 + 1),
                *name,
                *severity,
                "3 días",
                BodyRegion::General,
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn test_respiratory_infection_is_primary() {
    let results = evaluate_symptoms(&entries(&[
        ("Fiebre alta", Severity::High),
        ("Tos seca", Severity::Medium),
        ("Dolor de garganta", Severity::Low),
    ]));

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].condition, Condition::AcuteRespiratoryInfection);
    assert_eq!(results[0].probability, 85);
    assert_eq!(results[0].severity, Severity::Medium);
    assert_eq!(results[1].condition, Condition::DifferentialDiagnosis);
}

#[test]
fn test_two_severe_symptoms_escalate_respiratory_infection() {
    let results = evaluate_symptoms(&entries(&[
        ("Fiebre", Severity::High),
        ("Tos", Severity::High),
        ("Garganta irritada", Severity::Low),
    ]));
    assert_eq!(results[0].severity, Severity::High);
}

#[test]
fn test_respiratory_and_flu_fire_together() {
    let results = evaluate_symptoms(&entries(&[
        ("Fiebre", Severity::Medium),
        ("Tos", Severity::Medium),
        ("Dolor de garganta", Severity::Medium),
        ("Dolor de cabeza", Severity::Medium),
    ]));

    let conditions: Vec<Condition> = results.iter().map(|c| c.condition).collect();
    assert_eq!(
        conditions,
        vec![Condition::AcuteRespiratoryInfection, Condition::FluSyndrome]
    );
}

#[test_case(&[("Mareos", Severity::Low)], Condition::GeneralMalaise ; "dizziness")]
#[test_case(&[("Dolor de cabeza", Severity::Medium), ("Fiebre", Severity::Medium)], Condition::FluSyndrome ; "flu")]
#[test_case(&[("Fiebre", Severity::High), ("Tos", Severity::Low)], Condition::GeneralMalaise ; "no sore throat")]
fn test_single_rule_gets_differential(symptoms: &[(&str, Severity)], primary: Condition) {
    let results = evaluate_symptoms(&entries(symptoms));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].condition, primary);
    assert_eq!(results[1].condition, Condition::DifferentialDiagnosis);
}

#[test]
fn test_evaluation_is_repeatable() {
    let input = entries(&[("Dolor de cabeza", Severity::High), ("Fiebre", Severity::Low)]);
    assert_eq!(evaluate_symptoms(&input), evaluate_symptoms(&input));
}

#[test]
fn test_probabilities_are_percentages() {
    let input = entries(&[
        ("Fiebre", Severity::Medium),
        ("Tos", Severity::Medium),
        ("Dolor de garganta", Severity::Medium),
    ]);
    for candidate in evaluate_symptoms(&input) {
        assert!(candidate.probability <= 100);
        assert!(!candidate.recommendations.is_empty());
    }
}

#[tokio::test]
async fn test_checker_full_workflow() {
    let mut checker = SymptomChecker::new(LatencyProfile::default(), Arc::new(ImmediateClock));
    assert_eq!(checker.step(), CheckerStep::PatientInfo);

    checker
        .submit_patient_info(PatientInfo {
            age: "35".to_string(),
            gender: "femenino".to_string(),
            temperature: "38.5".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(checker.step(), CheckerStep::Symptoms);

    for line in [
        "Fiebre alta|high|2 días|General",
        "Tos seca|medium|3 días|Pecho",
        "Dolor de garganta|low|2 días|Garganta",
    ] {
        let draft: SymptomDraft = line.parse().unwrap();
        checker.add_symptom(draft).unwrap();
    }
    assert!(checker.can_analyze());

    let results = checker.analyze().await.unwrap().to_vec();
    assert_eq!(checker.step(), CheckerStep::Results);
    assert_eq!(results[0].condition, Condition::AcuteRespiratoryInfection);
    assert_eq!(checker.primary(), results.first());

    checker.reset();
    assert_eq!(checker.step(), CheckerStep::PatientInfo);
    assert!(!checker.can_analyze());
}

#[test]
fn test_draft_parsing_rejects_bad_input() {
    assert!("Fiebre|high|2 días".parse::<SymptomDraft>().is_err());
    assert!("Fiebre|extreme|2 días|General".parse::<SymptomDraft>().is_err());
    assert!("Fiebre|high|2 días|Cola".parse::<SymptomDraft>().is_err());
}
