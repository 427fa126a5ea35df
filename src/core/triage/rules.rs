//! Symptom-to-diagnosis rules
//!
//! Flags are derived from keyword presence in the case-folded symptom
//! names. Every rule that fires contributes one candidate, in rule order;
//! the first candidate is the primary one. Output is never sorted by
//! probability.

use crate::domain::{Condition, DiagnosisCandidate, Severity, SymptomEntry};

/// Keyword presence across the whole working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymptomFlags {
    pub has_fever: bool,
    pub has_cough: bool,
    pub has_headache: bool,
    pub has_sore_throat: bool,
    pub high_severity_count: usize,
}

impl SymptomFlags {
    /// Scans entry names for the rule keywords
    pub fn from_entries(entries: &[SymptomEntry]) -> Self {
        let names: Vec<String> = entries.iter().map(|e| e.name.to_lowercase()).collect();
        let any = |keyword: &str| names.iter().any(|n| n.contains(keyword));

        Self {
            has_fever: any("fiebre"),
            has_cough: any("tos"),
            has_headache: any("cabeza"),
            has_sore_throat: any("garganta"),
            high_severity_count: entries
                .iter()
                .filter(|e| e.severity == Severity::High)
                .count(),
        }
    }
}

fn acute_respiratory_infection(flags: &SymptomFlags) -> DiagnosisCandidate {
    let severity = if flags.high_severity_count > 1 {
        Severity::High
    } else {
        Severity::Medium
    };
    DiagnosisCandidate::new(
        Condition::AcuteRespiratoryInfection,
        85,
        severity,
        "Probable infección viral del tracto respiratorio superior con síntomas característicos.",
        &[
            "Descanso adecuado (7-8 horas)",
            "Aumentar ingesta de líquidos (2-3 litros al día)",
            "Monitorear temperatura cada 4 horas",
            "Evitar contacto cercano con otras personas",
            "Considerar consulta médica si los síntomas empeoran",
        ],
        "Consulta recomendada en 24-48 horas",
    )
}

fn flu_syndrome() -> DiagnosisCandidate {
    DiagnosisCandidate::new(
        Condition::FluSyndrome,
        72,
        Severity::Medium,
        "Cuadro compatible con influenza o gripe común con manifestaciones sistémicas.",
        &[
            "Reposo en casa",
            "Analgésicos como paracetamol según indicación",
            "Alimentación ligera y nutritiva",
            "Higiene de manos frecuente",
            "Ventilación adecuada de espacios",
        ],
        "Monitoreo en casa, consultar si persiste >3 días",
    )
}

fn general_malaise() -> DiagnosisCandidate {
    DiagnosisCandidate::new(
        Condition::GeneralMalaise,
        65,
        Severity::Low,
        "Los síntomas reportados requieren evaluación para determinar causa específica.",
        &[
            "Observar evolución de síntomas",
            "Mantener hidratación adecuada",
            "Descanso apropiado",
            "Registro de temperatura si es necesario",
            "Consulta médica si síntomas persisten o empeoran",
        ],
        "Seguimiento en 48-72 horas",
    )
}

fn differential_diagnosis() -> DiagnosisCandidate {
    DiagnosisCandidate::new(
        Condition::DifferentialDiagnosis,
        45,
        Severity::Low,
        "Otras posibles causas que deben considerarse según evolución clínica.",
        &[
            "Llevar registro detallado de síntomas",
            "Anotar factores que mejoran o empeoran",
            "Consultar con profesional de salud para evaluación completa",
        ],
        "Evaluación profesional recomendada",
    )
}

/// Turns the working set into an ordered list of candidates
///
/// Callers must not pass an empty slice; the analyze action is gated on at
/// least one entry. Debug builds assert this.
///
/// # Examples
///
/// ```
/// use healthsync::core::triage::evaluate_symptoms;
/// use healthsync::domain::{BodyRegion, Condition, Severity, SymptomEntry, SymptomId};
///
/// let entries = vec![
///     SymptomEntry::new(SymptomId::new(1), "Mareos", Severity::Medium, "2 días", BodyRegion::Head).unwrap(),
/// ];
/// let candidates = evaluate_symptoms(&entries);
/// assert_eq!(candidates[0].condition, Condition::GeneralMalaise);
/// assert_eq!(candidates[1].condition, Condition::DifferentialDiagnosis);
/// ```
pub fn evaluate_symptoms(entries: &[SymptomEntry]) -> Vec<DiagnosisCandidate> {
    debug_assert!(
        !entries.is_empty(),
        "evaluate_symptoms requires at least one symptom entry"
    );

    let flags = SymptomFlags::from_entries(entries);
    let mut candidates = Vec::with_capacity(2);

    if flags.has_fever && flags.has_cough && flags.has_sore_throat {
        candidates.push(acute_respiratory_infection(&flags));
    }

    if flags.has_headache && flags.has_fever {
        candidates.push(flu_syndrome());
    }

    if !entries.is_empty() && candidates.is_empty() {
        candidates.push(general_malaise());
    }

    if candidates.len() == 1 {
        candidates.push(differential_diagnosis());
    }

    debug_assert!(
        entries.is_empty() || !candidates.is_empty(),
        "a non-empty symptom set must always yield a candidate"
    );

    candidates
}
