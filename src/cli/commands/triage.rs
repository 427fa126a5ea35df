//! Triage command implementation
//!
//! Drives the symptom checker from the command line and prints the ranked
//! diagnosis candidates.

use super::{clock_for, load_settings};
use crate::core::timing::LatencyProfile;
use crate::core::triage::SymptomChecker;
use crate::domain::{DiagnosisCandidate, PatientInfo, SymptomDraft};
use clap::Args;

/// Arguments for the triage command
#[derive(Args, Debug)]
pub struct TriageArgs {
    /// Symptom as "name|severity|duration|region" (repeatable)
    #[arg(short, long = "symptom")]
    pub symptoms: Vec<SymptomDraft>,

    /// Patient age
    #[arg(long)]
    pub age: Option<String>,

    /// Patient gender
    #[arg(long)]
    pub gender: Option<String>,

    /// Body temperature, free text
    #[arg(long)]
    pub temperature: Option<String>,

    /// Blood pressure, free text
    #[arg(long)]
    pub blood_pressure: Option<String>,

    /// Print candidates as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the simulated analysis delay
    #[arg(long)]
    pub instant: bool,
}

impl TriageArgs {
    /// Execute the triage command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let Some(config) = load_settings(config_path) else {
            return Ok(2); // Configuration error exit code
        };

        if self.symptoms.is_empty() {
            println!("❌ Add at least one symptom with --symptom \"name|severity|duration|region\"");
            return Ok(3); // Validation error exit code
        }

        let mut checker = SymptomChecker::new(
            LatencyProfile::from(&config.latency),
            clock_for(self.instant),
        );

        if self.age.is_some() || self.gender.is_some() {
            let info = PatientInfo {
                age: self.age.clone().unwrap_or_default(),
                gender: self.gender.clone().unwrap_or_default(),
                temperature: self.temperature.clone().unwrap_or_default(),
                blood_pressure: self.blood_pressure.clone().unwrap_or_default(),
                additional_info: String::new(),
            };
            if let Err(e) = checker.submit_patient_info(info) {
                println!("❌ {e}");
                return Ok(3); // Validation error exit code
            }
        }

        for draft in &self.symptoms {
            if let Err(e) = checker.add_symptom(draft.clone()) {
                println!("❌ {e}");
                return Ok(3); // Validation error exit code
            }
        }

        if !self.json {
            println!("🔍 Analizando {} síntoma(s)...", checker.symptoms().len());
            println!();
        }

        let results = checker.analyze().await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(results)?);
        } else {
            for (rank, candidate) in results.iter().enumerate() {
                print_candidate(rank + 1, candidate);
            }
            println!("⚠️  Este análisis es orientativo y no reemplaza una consulta médica profesional.");
        }

        Ok(0)
    }
}

fn print_candidate(rank: usize, candidate: &DiagnosisCandidate) {
    println!(
        "{}. {} - {}% (gravedad: {})",
        rank,
        candidate.condition.label(),
        candidate.probability,
        candidate.severity.label()
    );
    println!("   {}", candidate.description);
    println!("   Urgencia: {}", candidate.urgency);
    for recommendation in &candidate.recommendations {
        println!("   • {recommendation}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(symptoms: &[&str]) -> TriageArgs {
        TriageArgs {
            symptoms: symptoms.iter().map(|s| s.parse().unwrap()).collect(),
            age: None,
            gender: None,
            temperature: None,
            blood_pressure: None,
            json: false,
            instant: true,
        }
    }

    #[tokio::test]
    async fn test_triage_succeeds() {
        let args = args(&["Fiebre alta|high|2 días|General", "Tos seca|medium|3 días|Pecho"]);
        assert_eq!(args.execute(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_triage_json_output() {
        let mut args = args(&["Mareos|low|1 día|Cabeza"]);
        args.json = true;
        assert_eq!(args.execute(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_triage_without_symptoms() {
        assert_eq!(args(&[]).execute(None).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_triage_incomplete_patient_info() {
        let mut args = args(&["Mareos|low|1 día|Cabeza"]);
        args.age = Some("40".to_string());
        assert_eq!(args.execute(None).await.unwrap(), 3);
    }
}
