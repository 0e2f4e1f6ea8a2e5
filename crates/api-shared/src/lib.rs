//! # API Shared
//!
//! Wire DTOs shared by the Tropicare REST server (and any future clients):
//! request/response bodies with serde serialisation and utoipa schemas.
//! Field names follow the portal's camelCase wire convention.
//!
//! Domain logic lives in `tropicare-core`; these types only describe the
//! wire shapes and are mapped to/from domain types at the handler boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Health
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

// ============================================================================
// Triage
// ============================================================================

/// Threshold-variant scoring request: the checkbox form payload.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReq {
    /// Symptom labels selected from the catalog.
    pub symptoms: Vec<String>,
    /// Free-text description of unlisted symptoms; not scored.
    #[serde(default)]
    pub other_symptoms: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRes {
    pub malaria_score: u32,
    pub typhoid_score: u32,
    pub diagnosis: String,
    /// Ordinal confidence label: Low, Medium, High or Very High.
    pub confidence: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeverLevelDto {
    High,
    Mild,
    None,
    Unsure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DurationDto {
    UnderTwentyFourHours,
    OneToThreeDays,
    FourToSevenDays,
    OverOneWeek,
}

/// Structured-variant assessment request: the consultation payload.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessReq {
    pub main_symptom: String,
    pub fever_level: FeverLevelDto,
    pub duration: DurationDto,
    #[serde(default)]
    pub additional_symptoms: Vec<String>,
    /// 1-10; out-of-range values are rejected.
    pub severity: i64,
    pub travel_history: bool,
    #[serde(default)]
    pub medications_taken: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecialistDto {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub hospital: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessRes {
    pub malaria_score: u32,
    pub typhoid_score: u32,
    pub diagnosis: String,
    pub diseases: Vec<String>,
    /// Percentage confidence, 0-100.
    pub confidence: u32,
    pub severity_grade: String,
    pub urgency: String,
    pub requires_xray: bool,
    /// Up to two entries, in directory order.
    pub recommended_specialists: Vec<SpecialistDto>,
}

// ============================================================================
// Doctors
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub expertise: Vec<String>,
    pub hospital: String,
    pub working_hours: String,
    pub available: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDoctorsRes {
    pub doctors: Vec<DoctorDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDayDto {
    /// ISO date, e.g. "2026-09-24".
    pub date: String,
    /// Display slots, e.g. "9:00 AM".
    pub slots: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRes {
    pub doctor_id: String,
    pub days: Vec<ScheduleDayDto>,
}

// ============================================================================
// Appointments
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentUrgencyDto {
    High,
    Medium,
    Low,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentReq {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub urgency: AppointmentUrgencyDto,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    /// upcoming, completed, cancelled or in-progress.
    pub status: String,
    pub urgency: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BookAppointmentRes {
    pub appointment: AppointmentDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListAppointmentsRes {
    pub appointments: Vec<AppointmentDto>,
}

// ============================================================================
// Diagnoses
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevelDto {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveDiagnosisReq {
    pub patient_id: String,
    pub patient_name: String,
    pub symptoms: Vec<String>,
    pub malaria_score: u32,
    pub typhoid_score: u32,
    pub diagnosis: String,
    pub confidence: u32,
    pub urgency_level: UrgencyLevelDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveDiagnosisRes {
    pub id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisDto {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub symptoms: Vec<String>,
    pub malaria_score: u32,
    pub typhoid_score: u32,
    pub diagnosis: String,
    pub confidence: u32,
    /// pending, confirmed or rejected.
    pub status: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub doctor_notes: Option<String>,
    pub urgency_level: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDiagnosesRes {
    pub diagnoses: Vec<DiagnosisDto>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecisionDto {
    Confirmed,
    Rejected,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDiagnosisReq {
    pub status: ReviewDecisionDto,
    pub doctor_id: String,
    #[serde(default)]
    pub doctor_notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewDiagnosisRes {
    pub success: bool,
}

// ============================================================================
// Medical records
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordReq {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    #[serde(default)]
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub diagnosis_id: Option<String>,
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub treatment: String,
    pub medications: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRecordRes {
    pub id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordDto {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    #[serde(default)]
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub diagnosis_id: Option<String>,
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub treatment: String,
    pub medications: Vec<String>,
    pub notes: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListRecordsRes {
    pub records: Vec<MedicalRecordDto>,
}

// ============================================================================
// Pharmacy
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrugDto {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub in_stock: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDrugsRes {
    pub drugs: Vec<DrugDto>,
}
