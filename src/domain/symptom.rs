//! Symptom entry models used by the symptom checker

use super::errors::HealthSyncError;
use super::ids::SymptomId;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suggested symptom names offered by the symptom form
pub const COMMON_SYMPTOMS: [&str; 10] = [
    "Dolor de cabeza",
    "Fiebre",
    "Tos",
    "Dolor de garganta",
    "Náuseas",
    "Fatiga",
    "Mareos",
    "Dolor muscular",
    "Dificultad para respirar",
    "Dolor abdominal",
];

/// Severity shared by symptom entries and diagnosis candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Mild
    Low,
    /// Moderate
    #[default]
    Medium,
    /// Severe
    High,
}

impl Severity {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Spanish label shown next to a symptom or candidate
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Leve",
            Severity::Medium => "Moderado",
            Severity::High => "Severo",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = HealthSyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "leve" => Ok(Severity::Low),
            "medium" | "moderado" => Ok(Severity::Medium),
            "high" | "severo" => Ok(Severity::High),
            other => Err(HealthSyncError::Validation(format!(
                "Invalid severity '{other}'. Must be one of: low, medium, high"
            ))),
        }
    }
}

/// Body region a symptom is located in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRegion {
    Head,
    Throat,
    Chest,
    Abdomen,
    Back,
    Arms,
    Legs,
    Joints,
    Skin,
    General,
}

impl BodyRegion {
    /// Every region, in the order the form lists them
    pub const ALL: [BodyRegion; 10] = [
        BodyRegion::Head,
        BodyRegion::Throat,
        BodyRegion::Chest,
        BodyRegion::Abdomen,
        BodyRegion::Back,
        BodyRegion::Arms,
        BodyRegion::Legs,
        BodyRegion::Joints,
        BodyRegion::Skin,
        BodyRegion::General,
    ];

    /// Spanish label shown in the region picker
    pub fn label(&self) -> &'static str {
        match self {
            BodyRegion::Head => "Cabeza",
            BodyRegion::Throat => "Garganta",
            BodyRegion::Chest => "Pecho",
            BodyRegion::Abdomen => "Abdomen",
            BodyRegion::Back => "Espalda",
            BodyRegion::Arms => "Brazos",
            BodyRegion::Legs => "Piernas",
            BodyRegion::Joints => "Articulaciones",
            BodyRegion::Skin => "Piel",
            BodyRegion::General => "General",
        }
    }

    fn english_name(&self) -> &'static str {
        match self {
            BodyRegion::Head => "head",
            BodyRegion::Throat => "throat",
            BodyRegion::Chest => "chest",
            BodyRegion::Abdomen => "abdomen",
            BodyRegion::Back => "back",
            BodyRegion::Arms => "arms",
            BodyRegion::Legs => "legs",
            BodyRegion::Joints => "joints",
            BodyRegion::Skin => "skin",
            BodyRegion::General => "general",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BodyRegion {
    type Err = HealthSyncError;

    /// Accepts either the Spanish label or the English name, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        BodyRegion::ALL
            .into_iter()
            .find(|r| r.label().to_lowercase() == wanted || r.english_name() == wanted)
            .ok_or_else(|| HealthSyncError::Validation(format!("Unknown body region '{s}'")))
    }
}

/// A symptom in the checker's working set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: SymptomId,
    pub name: String,
    pub severity: Severity,
    pub duration: String,
    pub body_region: BodyRegion,
}

impl SymptomEntry {
    /// Builds an entry from its parts, rejecting blank free-text fields
    pub fn new(
        id: SymptomId,
        name: impl Into<String>,
        severity: Severity,
        duration: impl Into<String>,
        body_region: BodyRegion,
    ) -> Result<Self> {
        let name = name.into();
        let duration = duration.into();
        if name.trim().is_empty() || duration.trim().is_empty() {
            return Err(HealthSyncError::Validation(
                "Symptom name and duration must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            name,
            severity,
            duration,
            body_region,
        })
    }
}

/// In-progress symptom form
///
/// Severity starts at medium; the other fields start empty and must all be
/// filled before the draft can become a [`SymptomEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomDraft {
    pub name: String,
    pub severity: Severity,
    pub duration: String,
    pub body_region: Option<BodyRegion>,
}

impl SymptomDraft {
    /// Whether every field is filled in
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.duration.trim().is_empty()
            && self.body_region.is_some()
    }

    /// Converts the draft into an entry with the given identifier
    pub fn into_entry(self, id: SymptomId) -> Result<SymptomEntry> {
        let body_region = self.body_region.ok_or_else(|| {
            HealthSyncError::Validation("Select the body region of the symptom".to_string())
        })?;
        SymptomEntry::new(id, self.name, self.severity, self.duration, body_region)
    }
}

impl FromStr for SymptomDraft {
    type Err = HealthSyncError;

    /// Parses `name|severity|duration|region`
    ///
    /// ```
    /// use healthsync::domain::symptom::{BodyRegion, Severity, SymptomDraft};
    ///
    /// let draft: SymptomDraft = "Fiebre alta|high|2 días|General".parse().unwrap();
    /// assert_eq!(draft.severity, Severity::High);
    /// assert_eq!(draft.body_region, Some(BodyRegion::General));
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('|').map(str::trim).collect();
        let [name, severity, duration, region] = parts.as_slice() else {
            return Err(HealthSyncError::Validation(format!(
                "Expected 'name|severity|duration|region', got '{s}'"
            )));
        };
        Ok(Self {
            name: name.to_string(),
            severity: severity.parse()?,
            duration: duration.to_string(),
            body_region: Some(region.parse()?),
        })
    }
}

/// Patient details captured in the first step of the symptom checker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub age: String,
    pub gender: String,
    pub temperature: String,
    pub blood_pressure: String,
    pub additional_info: String,
}

impl PatientInfo {
    /// Age and gender are required; the remaining fields are optional
    pub fn is_complete(&self) -> bool {
        !self.age.trim().is_empty() && !self.gender.trim().is_empty()
    }
}
