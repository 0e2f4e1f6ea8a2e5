//! Persisted diagnosis outcomes and medical records.
//!
//! Both are append-only facts in the document store. A diagnosis record is
//! the saved outcome of a triage session awaiting doctor review; a medical
//! record is written by a doctor after a visit. Neither is required by the
//! scorers themselves, which stay stateless.

use crate::error::{TriageError, TriageResult};
use crate::scoring::{Confidence, ConditionScores, Urgency};
use crate::store::{DocumentStore, Filter, Order};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

const DIAGNOSES_COLLECTION: &str = "diagnoses";
const RECORDS_COLLECTION: &str = "medicalRecords";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// Doctor's verdict on a pending diagnosis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewDecision {
    Confirmed,
    Rejected,
}

impl ReviewDecision {
    fn status(&self) -> DiagnosisStatus {
        match self {
            ReviewDecision::Confirmed => DiagnosisStatus::Confirmed,
            ReviewDecision::Rejected => DiagnosisStatus::Rejected,
        }
    }
}

/// Coarse urgency bucket stored with a diagnosis record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl From<Urgency> for UrgencyLevel {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Immediate => UrgencyLevel::Critical,
            Urgency::Urgent => UrgencyLevel::High,
            Urgency::Routine => UrgencyLevel::Low,
        }
    }
}

impl From<Confidence> for UrgencyLevel {
    fn from(confidence: Confidence) -> Self {
        match confidence {
            Confidence::VeryHigh => UrgencyLevel::Critical,
            Confidence::High => UrgencyLevel::High,
            Confidence::Medium => UrgencyLevel::Medium,
            Confidence::Low => UrgencyLevel::Low,
        }
    }
}

/// A saved triage outcome awaiting (or past) doctor review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub symptoms: Vec<String>,
    pub malaria_score: u32,
    pub typhoid_score: u32,
    pub diagnosis: String,
    /// Percentage confidence, 0-100.
    pub confidence: u32,
    pub status: DiagnosisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_recommendation: Option<String>,
    pub urgency_level: UrgencyLevel,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

/// Fields captured when saving a fresh triage outcome.
#[derive(Clone, Debug)]
pub struct NewDiagnosis {
    pub patient_id: String,
    pub patient_name: String,
    pub symptoms: Vec<String>,
    pub scores: ConditionScores,
    pub diagnosis: String,
    pub confidence: u32,
    pub urgency_level: UrgencyLevel,
}

/// Diagnosis persistence over the document store.
pub struct DiagnosisService {
    store: Arc<dyn DocumentStore>,
}

impl DiagnosisService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Save a fresh triage outcome with status pending.
    pub fn save(&self, new: NewDiagnosis) -> TriageResult<DiagnosisRecord> {
        let now = Utc::now();
        let mut record = DiagnosisRecord {
            id: String::new(),
            patient_id: new.patient_id,
            patient_name: new.patient_name,
            symptoms: new.symptoms,
            malaria_score: new.scores.malaria,
            typhoid_score: new.scores.typhoid,
            diagnosis: new.diagnosis,
            confidence: new.confidence,
            status: DiagnosisStatus::Pending,
            doctor_id: None,
            doctor_notes: None,
            treatment_recommendation: None,
            urgency_level: new.urgency_level,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&record).map_err(TriageError::Serialization)?;
        record.id = self.store.create(DIAGNOSES_COLLECTION, value)?;
        Ok(record)
    }

    /// All diagnoses for one patient, newest first.
    pub fn for_patient(&self, patient_id: &str) -> TriageResult<Vec<DiagnosisRecord>> {
        let documents = self.store.query(
            DIAGNOSES_COLLECTION,
            &Filter::new().field_eq("patientId", patient_id),
            Some(&Order::desc("createdAt")),
        )?;

        let mut records = Vec::with_capacity(documents.len());
        for document in documents {
            let mut record: DiagnosisRecord = serde_json::from_value(document.value)
                .map_err(TriageError::Deserialization)?;
            record.id = document.id;
            records.push(record);
        }
        Ok(records)
    }

    /// Record a doctor's review of a pending diagnosis.
    pub fn review(
        &self,
        diagnosis_id: &str,
        decision: ReviewDecision,
        doctor_id: &str,
        doctor_notes: Option<String>,
    ) -> TriageResult<()> {
        let mut patch = json!({
            "status": decision.status(),
            "doctorId": doctor_id,
            "updatedAt": Utc::now(),
        });
        if let Some(notes) = doctor_notes {
            patch["doctorNotes"] = json!(notes);
        }
        self.store.update(DIAGNOSES_COLLECTION, diagnosis_id, patch)
    }
}

/// A per-visit medical record written by a doctor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_id: Option<String>,
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub treatment: String,
    pub medications: Vec<String>,
    pub notes: String,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

/// Medical-record persistence over the document store.
pub struct MedicalRecordService {
    store: Arc<dyn DocumentStore>,
}

impl MedicalRecordService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Store a new record; timestamps are set here.
    pub fn create(&self, mut record: MedicalRecord) -> TriageResult<MedicalRecord> {
        let now = Utc::now();
        record.created_at = now;
        record.updated_at = now;
        record.id = String::new();

        let value = serde_json::to_value(&record).map_err(TriageError::Serialization)?;
        record.id = self.store.create(RECORDS_COLLECTION, value)?;
        Ok(record)
    }

    /// All records for one patient, newest first.
    pub fn for_patient(&self, patient_id: &str) -> TriageResult<Vec<MedicalRecord>> {
        let documents = self.store.query(
            RECORDS_COLLECTION,
            &Filter::new().field_eq("patientId", patient_id),
            Some(&Order::desc("createdAt")),
        )?;

        let mut records = Vec::with_capacity(documents.len());
        for document in documents {
            let mut record: MedicalRecord = serde_json::from_value(document.value)
                .map_err(TriageError::Deserialization)?;
            record.id = document.id;
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FsStore;

    fn services() -> (tempfile::TempDir, DiagnosisService, MedicalRecordService) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store: Arc<dyn DocumentStore> = Arc::new(FsStore::new(dir.path().to_path_buf()));
        (
            dir,
            DiagnosisService::new(store.clone()),
            MedicalRecordService::new(store),
        )
    }

    fn new_diagnosis(patient_id: &str) -> NewDiagnosis {
        NewDiagnosis {
            patient_id: patient_id.to_owned(),
            patient_name: "Ama Shikongo".to_owned(),
            symptoms: vec!["Abdominal Pain".to_owned(), "Vomiting".to_owned()],
            scores: ConditionScores {
                malaria: 8,
                typhoid: 4,
            },
            diagnosis: "High Probability of Malaria".to_owned(),
            confidence: 80,
            urgency_level: UrgencyLevel::High,
        }
    }

    #[test]
    fn saved_diagnoses_start_pending() {
        let (_dir, diagnoses, _records) = services();
        let record = diagnoses.save(new_diagnosis("p1")).expect("save");
        assert_eq!(record.status, DiagnosisStatus::Pending);
        assert!(!record.id.is_empty());

        let listed = diagnoses.for_patient("p1").expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].malaria_score, 8);
    }

    #[test]
    fn review_updates_status_and_notes() {
        let (_dir, diagnoses, _records) = services();
        let record = diagnoses.save(new_diagnosis("p1")).expect("save");

        diagnoses
            .review(
                &record.id,
                ReviewDecision::Confirmed,
                "d1",
                Some("Confirmed by blood smear".to_owned()),
            )
            .expect("review");

        let listed = diagnoses.for_patient("p1").expect("list");
        assert_eq!(listed[0].status, DiagnosisStatus::Confirmed);
        assert_eq!(listed[0].doctor_id.as_deref(), Some("d1"));
        assert_eq!(
            listed[0].doctor_notes.as_deref(),
            Some("Confirmed by blood smear")
        );
    }

    #[test]
    fn review_of_unknown_diagnosis_fails() {
        let (_dir, diagnoses, _records) = services();
        let err = diagnoses
            .review("missing", ReviewDecision::Rejected, "d1", None)
            .expect_err("unknown diagnosis");
        assert!(matches!(err, TriageError::DocumentNotFound { .. }));
    }

    #[test]
    fn urgency_level_mappings() {
        assert_eq!(UrgencyLevel::from(Urgency::Immediate), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from(Urgency::Urgent), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from(Urgency::Routine), UrgencyLevel::Low);
        assert_eq!(UrgencyLevel::from(Confidence::VeryHigh), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from(Confidence::Medium), UrgencyLevel::Medium);
    }

    #[test]
    fn medical_records_list_per_patient() {
        let (_dir, _diagnoses, records) = services();
        let record = MedicalRecord {
            id: String::new(),
            patient_id: "p1".to_owned(),
            patient_name: "Ama Shikongo".to_owned(),
            doctor_id: "d1".to_owned(),
            doctor_name: "Dr. Emily Carter".to_owned(),
            appointment_id: None,
            diagnosis_id: None,
            symptoms: vec!["Headache".to_owned()],
            diagnosis: "Possible Malaria".to_owned(),
            treatment: "Artemisinin course".to_owned(),
            medications: vec!["Artemether".to_owned()],
            notes: "Review in one week".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let created = records.create(record).expect("create");
        assert!(!created.id.is_empty());

        let listed = records.for_patient("p1").expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].treatment, "Artemisinin course");
        assert!(records.for_patient("p2").expect("list").is_empty());
    }
}
