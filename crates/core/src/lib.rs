//! # Tropicare Core
//!
//! Core business logic for the Tropicare triage and patient-portal backend:
//! - Static reference data: symptom catalog, doctor directory, drug formulary
//! - The two symptom-scoring strategies (threshold and structured)
//! - The guided consultation state machine
//! - Portal services (appointments, diagnoses, medical records) over a
//!   document-store abstraction
//! - Identity-provider seam
//!
//! **No API concerns**: HTTP servers, wire DTOs, and OpenAPI belong in
//! `api-rest` and `api-shared`.

pub mod appointments;
pub mod catalog;
pub mod config;
pub mod consultation;
pub mod directory;
pub mod error;
pub mod identity;
pub mod pharmacy;
pub mod records;
pub mod scoring;
pub mod store;
pub mod validation;

pub use catalog::{Condition, SymptomCatalog, SymptomEntry};
pub use config::CoreConfig;
pub use consultation::{Answer, Consultation, ConsultationState};
pub use directory::{DoctorDirectory, DoctorProfile};
pub use error::{TriageError, TriageResult};
pub use scoring::structured::{Assessment, StructuredResponse};
pub use scoring::threshold::ThresholdOutcome;
pub use scoring::{Confidence, ConditionScores, SeverityGrade, Urgency};
pub use store::{Document, DocumentStore, Filter, FsStore, Order};

/// Default data directory when none is configured.
pub const DEFAULT_DATA_DIR: &str = "/tropicare_data";
