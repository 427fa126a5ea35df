//! Keyword-driven reply selection
//!
//! Replies are picked by an ordered table of keyword groups. The first group
//! with any keyword contained in the case-folded utterance wins, even when a
//! later group would also match.

use serde::Serialize;

/// What the assistant decided the user is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SymptomIntake,
    Appointments,
    Medication,
    BloodPressure,
    HealthTips,
    Greeting,
    Fallback,
}

/// Keyword groups in evaluation order
const INTENT_RULES: [(Intent, &[&str]); 6] = [
    (Intent::SymptomIntake, &["síntoma", "dolor", "malestar"]),
    (Intent::Appointments, &["cita", "agendar"]),
    (Intent::Medication, &["medicamento", "medicina"]),
    (Intent::BloodPressure, &["presión", "hipertensión"]),
    (Intent::HealthTips, &["consejos", "recomendaciones"]),
    (Intent::Greeting, &["hola", "buenos", "ayuda"]),
];

const SYMPTOM_INTAKE_REPLY: &str = "Entiendo que tienes algunos síntomas. Para poder ayudarte mejor, ¿podrías describirme qué molestias tienes específicamente? Por ejemplo: ¿dónde sientes el dolor? ¿Desde cuándo? ¿Qué intensidad tiene del 1 al 10?\n\nRecuerda que esta información es orientativa y no reemplaza una consulta médica profesional. Si los síntomas son graves, te recomiendo agendar una cita urgente.";

const APPOINTMENTS_REPLY: &str = "Tienes una consulta general programada para el 15 de noviembre a las 10:00 AM con la Dr. María González (servicio a domicilio).\n\n¿Te gustaría:\n1. Ver detalles de esta cita\n2. Agendar una nueva cita\n3. Modificar una cita existente";

const MEDICATION_REPLY: &str = "Según tu historial, actualmente estás tomando:\n\n💊 Losartán 50mg - 1 vez al día (mañana)\n\n¿Necesitas que te recuerde cuándo tomar tus medicamentos? Puedo configurar recordatorios personalizados para ti.";

const BLOOD_PRESSURE_REPLY: &str = "Tu última medición de presión arterial fue de 120/80 mmHg (11 de noviembre), que está dentro del rango normal.\n\nTu próximo control está programado para el 13 de noviembre. ¿Te gustaría algunos consejos para mantener tu presión arterial saludable?";

const HEALTH_TIPS_REPLY: &str = "Basándome en tu perfil de salud, aquí hay algunas recomendaciones personalizadas:\n\n🥗 Nutrición: Mantén una dieta baja en sodio\n🏃 Ejercicio: 30 minutos de actividad moderada 5 veces por semana\n💤 Descanso: 7-8 horas de sueño diario\n💊 Medicación: Toma tu Losartán en ayunas\n\n¿Te gustaría más detalles sobre alguno de estos temas?";

const GREETING_REPLY: &str = "¡Hola! Estoy aquí para ayudarte. Puedo asistirte con:\n\n✨ Análisis preliminar de síntomas\n📅 Gestión de citas médicas\n💊 Recordatorios de medicamentos\n📊 Información de tu historial médico\n📚 Educación en salud personalizada\n\n¿En qué te puedo ayudar hoy?";

const FALLBACK_REPLY: &str = "Entiendo tu consulta. Como asistente de IA, puedo ayudarte con información general sobre tu salud, gestión de citas y recordatorios. Para diagnósticos específicos o tratamientos, te recomiendo agendar una videoconsulta con uno de nuestros profesionales. ¿Te gustaría que te ayude a programar una?";

/// Message the assistant opens every conversation with
pub const WELCOME_MESSAGE: &str = "¡Hola! Soy tu asistente de salud con inteligencia artificial. Puedo ayudarte con análisis de síntomas, recordatorios de medicamentos, información sobre tus citas y educación en salud. ¿En qué puedo ayudarte hoy?";

impl Intent {
    /// Canned reply bound to this intent
    pub fn reply(&self) -> &'static str {
        match self {
            Intent::SymptomIntake => SYMPTOM_INTAKE_REPLY,
            Intent::Appointments => APPOINTMENTS_REPLY,
            Intent::Medication => MEDICATION_REPLY,
            Intent::BloodPressure => BLOOD_PRESSURE_REPLY,
            Intent::HealthTips => HEALTH_TIPS_REPLY,
            Intent::Greeting => GREETING_REPLY,
            Intent::Fallback => FALLBACK_REPLY,
        }
    }
}

/// Classifies an utterance using the ordered keyword table
pub fn classify_utterance(utterance: &str) -> Intent {
    let folded = utterance.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| folded.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback)
}

/// Maps one utterance to exactly one canned reply
///
/// Total over all input, including empty strings.
///
/// # Examples
///
/// ```
/// use healthsync::core::assistant::generate_assistant_reply;
///
/// let reply = generate_assistant_reply("Tengo DOLOR y también quiero agendar");
/// assert!(reply.starts_with("Entiendo que tienes algunos síntomas"));
/// ```
pub fn generate_assistant_reply(utterance: &str) -> &'static str {
    classify_utterance(utterance).reply()
}

/// Preset phrases offered as one-tap shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    AnalyzeSymptoms,
    UpcomingAppointments,
    MedicationReminders,
    HealthTips,
    StartDiagnosis,
    Telemedicine,
}

impl QuickAction {
    /// All shortcuts in display order
    pub const ALL: [QuickAction; 6] = [
        QuickAction::AnalyzeSymptoms,
        QuickAction::UpcomingAppointments,
        QuickAction::MedicationReminders,
        QuickAction::HealthTips,
        QuickAction::StartDiagnosis,
        QuickAction::Telemedicine,
    ];

    /// Text submitted when the shortcut is selected
    pub fn phrase(&self) -> &'static str {
        match self {
            QuickAction::AnalyzeSymptoms => "Analizar síntomas",
            QuickAction::UpcomingAppointments => "Próximas citas",
            QuickAction::MedicationReminders => "Recordar medicamentos",
            QuickAction::HealthTips => "Consejos de salud",
            QuickAction::StartDiagnosis => "Iniciar diagnóstico IA",
            QuickAction::Telemedicine => "Telemedicina",
        }
    }

    /// Looks up a shortcut by its 1-based display position
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}
