//! # API REST
//!
//! REST API implementation for Tropicare.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, DTO mapping)
//!
//! Uses `api-shared` for wire types and `tropicare-core` for all domain
//! behaviour. Handlers construct the core services per request from the
//! shared state, in line with the core's startup-resolved configuration.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared as dto;
use tropicare_core::{
    appointments::{AppointmentService, AppointmentStatus, AppointmentUrgency, BookingRequest},
    records::{DiagnosisService, MedicalRecordService, NewDiagnosis, ReviewDecision, UrgencyLevel},
    scoring::structured::{self, DurationBucket, FeverLevel, StructuredResponse},
    scoring::threshold,
    validation, ConditionScores, CoreConfig, DocumentStore, FsStore, TriageError,
};
use tropicare_types::Severity;

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request
/// handlers: the startup-resolved core configuration and the document store.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<dyn DocumentStore>) -> Self {
        Self { cfg, store }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        score,
        assess,
        list_doctors,
        doctor_schedule,
        book_appointment,
        patient_appointments,
        doctor_appointments,
        save_diagnosis,
        patient_diagnoses,
        review_diagnosis,
        create_record,
        patient_records,
        list_drugs,
    ),
    components(schemas(
        dto::HealthRes,
        dto::ScoreReq,
        dto::ScoreRes,
        dto::FeverLevelDto,
        dto::DurationDto,
        dto::AssessReq,
        dto::AssessRes,
        dto::SpecialistDto,
        dto::DoctorDto,
        dto::ListDoctorsRes,
        dto::ScheduleDayDto,
        dto::ScheduleRes,
        dto::AppointmentUrgencyDto,
        dto::BookAppointmentReq,
        dto::BookAppointmentRes,
        dto::AppointmentDto,
        dto::ListAppointmentsRes,
        dto::UrgencyLevelDto,
        dto::SaveDiagnosisReq,
        dto::SaveDiagnosisRes,
        dto::DiagnosisDto,
        dto::ListDiagnosesRes,
        dto::ReviewDecisionDto,
        dto::ReviewDiagnosisReq,
        dto::ReviewDiagnosisRes,
        dto::CreateRecordReq,
        dto::CreateRecordRes,
        dto::MedicalRecordDto,
        dto::ListRecordsRes,
        dto::DrugDto,
        dto::ListDrugsRes,
    ))
)]
struct ApiDoc;

/// Build the REST router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/triage/score", post(score))
        .route("/triage/assess", post(assess))
        .route("/doctors", get(list_doctors))
        .route("/doctors/:id/slots", get(doctor_schedule))
        .route("/appointments", post(book_appointment))
        .route("/appointments/patient/:id", get(patient_appointments))
        .route("/appointments/doctor/:id", get(doctor_appointments))
        .route("/diagnoses", post(save_diagnosis))
        .route("/diagnoses/patient/:id", get(patient_diagnoses))
        .route("/diagnoses/:id/status", put(review_diagnosis))
        .route("/records", post(create_record))
        .route("/records/patient/:id", get(patient_records))
        .route("/pharmacy/drugs", get(list_drugs))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Resolve state from the environment and serve until shutdown.
///
/// # Environment Variables
/// - `TROPICARE_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `TROPICARE_DATA_DIR`: record storage directory (must exist)
///
/// # Errors
/// Returns an error if the data directory is missing, the address cannot be
/// bound, or the HTTP server fails while running.
pub async fn serve_from_env() -> anyhow::Result<()> {
    let addr = std::env::var("TROPICARE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let data_dir = std::env::var("TROPICARE_DATA_DIR")
        .unwrap_or_else(|_| tropicare_core::DEFAULT_DATA_DIR.into());
    let data_path = std::path::PathBuf::from(&data_dir);
    if !data_path.exists() {
        anyhow::bail!("Data directory does not exist: {}", data_path.display());
    }

    let cfg = Arc::new(CoreConfig::new(data_path.clone())?);
    let store: Arc<dyn DocumentStore> = Arc::new(FsStore::new(data_path));
    let state = AppState::new(cfg, store);

    tracing::info!("-- Starting Tropicare REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

fn internal_error(context: &'static str, err: &TriageError) -> (StatusCode, &'static str) {
    tracing::error!("{context}: {err:?}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = dto::HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<dto::HealthRes> {
    Json(dto::HealthRes {
        ok: true,
        message: "Tropicare REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/triage/score",
    request_body = dto::ScoreReq,
    responses(
        (status = 200, description = "Threshold-variant diagnosis", body = dto::ScoreRes),
        (status = 400, description = "No symptoms reported")
    )
)]
/// Run the threshold scoring strategy over selected symptom labels
///
/// # Errors
/// Returns `400 Bad Request` if neither symptoms nor free text are supplied.
#[axum::debug_handler]
async fn score(
    State(state): State<AppState>,
    Json(req): Json<dto::ScoreReq>,
) -> Result<Json<dto::ScoreRes>, (StatusCode, &'static str)> {
    if let Err(err) = validation::require_symptoms(&req.symptoms, &req.other_symptoms) {
        tracing::error!("Score validation error: {:?}", err);
        return Err((
            StatusCode::BAD_REQUEST,
            "Please select or enter at least one symptom",
        ));
    }

    let outcome = threshold::diagnose(state.cfg.catalog(), &req.symptoms);
    Ok(Json(dto::ScoreRes {
        malaria_score: outcome.scores.malaria,
        typhoid_score: outcome.scores.typhoid,
        diagnosis: outcome.diagnosis,
        confidence: outcome.confidence.label().to_owned(),
    }))
}

#[utoipa::path(
    post,
    path = "/triage/assess",
    request_body = dto::AssessReq,
    responses(
        (status = 200, description = "Structured-variant assessment", body = dto::AssessRes),
        (status = 400, description = "Severity out of range")
    )
)]
/// Run the structured scoring strategy over a consultation payload
///
/// # Errors
/// Returns `400 Bad Request` if the severity rating is outside 1-10.
#[axum::debug_handler]
async fn assess(
    State(state): State<AppState>,
    Json(req): Json<dto::AssessReq>,
) -> Result<Json<dto::AssessRes>, (StatusCode, &'static str)> {
    let severity = match Severity::new(req.severity) {
        Ok(severity) => severity,
        Err(err) => {
            tracing::error!("Assess validation error: {:?}", err);
            return Err((StatusCode::BAD_REQUEST, "Severity must be between 1 and 10"));
        }
    };

    let response = StructuredResponse {
        main_symptom: req.main_symptom,
        fever: fever_from_dto(req.fever_level),
        duration: duration_from_dto(req.duration),
        additional_symptoms: req.additional_symptoms,
        severity,
        travel_history: req.travel_history,
        medications_taken: req.medications_taken,
    };

    let assessment = structured::assess(&response);
    let specialists = state
        .cfg
        .directory()
        .recommend(&assessment.diseases)
        .into_iter()
        .map(|profile| dto::SpecialistDto {
            id: profile.id.clone(),
            name: profile.name.clone(),
            specialization: profile.specialization.clone(),
            hospital: profile.hospital.clone(),
        })
        .collect();

    Ok(Json(dto::AssessRes {
        malaria_score: assessment.scores.malaria,
        typhoid_score: assessment.scores.typhoid,
        diagnosis: assessment.diagnosis,
        diseases: assessment
            .diseases
            .iter()
            .map(|condition| condition.label().to_owned())
            .collect(),
        confidence: assessment.confidence,
        severity_grade: assessment.severity_grade.label().to_owned(),
        urgency: assessment.urgency.label().to_owned(),
        requires_xray: assessment.requires_xray,
        recommended_specialists: specialists,
    }))
}

#[utoipa::path(
    get,
    path = "/doctors",
    responses(
        (status = 200, description = "The doctor directory", body = dto::ListDoctorsRes)
    )
)]
/// List the doctor directory
#[axum::debug_handler]
async fn list_doctors(State(state): State<AppState>) -> Json<dto::ListDoctorsRes> {
    let doctors = state
        .cfg
        .directory()
        .profiles()
        .iter()
        .map(|profile| dto::DoctorDto {
            id: profile.id.clone(),
            name: profile.name.clone(),
            specialization: profile.specialization.clone(),
            expertise: profile
                .expertise
                .iter()
                .map(|condition| condition.label().to_owned())
                .collect(),
            hospital: profile.hospital.clone(),
            working_hours: profile.working_hours.clone(),
            available: profile.available,
        })
        .collect();
    Json(dto::ListDoctorsRes { doctors })
}

#[utoipa::path(
    get,
    path = "/doctors/{id}/slots",
    responses(
        (status = 200, description = "Bookable slots for a doctor", body = dto::ScheduleRes),
        (status = 404, description = "Unknown doctor"),
        (status = 500, description = "Internal server error")
    )
)]
/// Generate the bookable weekday slots for a doctor
///
/// # Errors
/// Returns `404 Not Found` for an id absent from the directory.
#[axum::debug_handler]
async fn doctor_schedule(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<dto::ScheduleRes>, (StatusCode, &'static str)> {
    let doctor = state
        .cfg
        .directory()
        .find(&id)
        .ok_or((StatusCode::NOT_FOUND, "Unknown doctor"))?;

    let from = chrono::Utc::now().date_naive();
    let schedule =
        tropicare_core::appointments::generate_schedule(&doctor.working_hours, from)
            .map_err(|err| internal_error("Schedule generation error", &err))?;

    Ok(Json(dto::ScheduleRes {
        doctor_id: doctor.id.clone(),
        days: schedule
            .into_iter()
            .map(|(date, slots)| dto::ScheduleDayDto {
                date: date.to_string(),
                slots,
            })
            .collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body = dto::BookAppointmentReq,
    responses(
        (status = 201, description = "Appointment booked", body = dto::BookAppointmentRes),
        (status = 400, description = "Unknown doctor"),
        (status = 500, description = "Internal server error")
    )
)]
/// Book an appointment with a directory doctor
///
/// # Errors
/// Returns `400 Bad Request` for a doctor id absent from the directory and
/// `500 Internal Server Error` if the record cannot be stored.
#[axum::debug_handler]
async fn book_appointment(
    State(state): State<AppState>,
    Json(req): Json<dto::BookAppointmentReq>,
) -> Result<Json<dto::BookAppointmentRes>, (StatusCode, &'static str)> {
    let service = AppointmentService::new(state.cfg.clone(), state.store.clone());
    let request = BookingRequest {
        patient_id: req.patient_id,
        patient_name: req.patient_name,
        doctor_id: req.doctor_id,
        date: req.date,
        time: req.time,
        appointment_type: req.appointment_type,
        urgency: appointment_urgency_from_dto(req.urgency),
        notes: req.notes,
    };

    match service.book(request) {
        Ok(appointment) => Ok(Json(dto::BookAppointmentRes {
            appointment: appointment_to_dto(appointment),
        })),
        Err(err @ TriageError::UnknownDoctor(_)) => {
            tracing::error!("Book appointment error: {:?}", err);
            Err((StatusCode::BAD_REQUEST, "Unknown doctor"))
        }
        Err(err) => Err(internal_error("Book appointment error", &err)),
    }
}

#[utoipa::path(
    get,
    path = "/appointments/patient/{id}",
    responses(
        (status = 200, description = "Appointments for a patient", body = dto::ListAppointmentsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List a patient's appointments, newest first
#[axum::debug_handler]
async fn patient_appointments(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<dto::ListAppointmentsRes>, (StatusCode, &'static str)> {
    let service = AppointmentService::new(state.cfg.clone(), state.store.clone());
    let appointments = service
        .for_patient(&id)
        .map_err(|err| internal_error("List patient appointments error", &err))?;
    Ok(Json(dto::ListAppointmentsRes {
        appointments: appointments.into_iter().map(appointment_to_dto).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/appointments/doctor/{id}",
    responses(
        (status = 200, description = "Appointments for a doctor", body = dto::ListAppointmentsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List a doctor's appointments, newest first
#[axum::debug_handler]
async fn doctor_appointments(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<dto::ListAppointmentsRes>, (StatusCode, &'static str)> {
    let service = AppointmentService::new(state.cfg.clone(), state.store.clone());
    let appointments = service
        .for_doctor(&id)
        .map_err(|err| internal_error("List doctor appointments error", &err))?;
    Ok(Json(dto::ListAppointmentsRes {
        appointments: appointments.into_iter().map(appointment_to_dto).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/diagnoses",
    request_body = dto::SaveDiagnosisReq,
    responses(
        (status = 201, description = "Diagnosis saved", body = dto::SaveDiagnosisRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Persist a triage outcome for doctor review
#[axum::debug_handler]
async fn save_diagnosis(
    State(state): State<AppState>,
    Json(req): Json<dto::SaveDiagnosisReq>,
) -> Result<Json<dto::SaveDiagnosisRes>, (StatusCode, &'static str)> {
    let service = DiagnosisService::new(state.store.clone());
    let record = service
        .save(NewDiagnosis {
            patient_id: req.patient_id,
            patient_name: req.patient_name,
            symptoms: req.symptoms,
            scores: ConditionScores {
                malaria: req.malaria_score,
                typhoid: req.typhoid_score,
            },
            diagnosis: req.diagnosis,
            confidence: req.confidence,
            urgency_level: urgency_level_from_dto(req.urgency_level),
        })
        .map_err(|err| internal_error("Save diagnosis error", &err))?;
    Ok(Json(dto::SaveDiagnosisRes { id: record.id }))
}

#[utoipa::path(
    get,
    path = "/diagnoses/patient/{id}",
    responses(
        (status = 200, description = "Diagnoses for a patient", body = dto::ListDiagnosesRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List a patient's saved diagnoses, newest first
#[axum::debug_handler]
async fn patient_diagnoses(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<dto::ListDiagnosesRes>, (StatusCode, &'static str)> {
    let service = DiagnosisService::new(state.store.clone());
    let records = service
        .for_patient(&id)
        .map_err(|err| internal_error("List diagnoses error", &err))?;
    Ok(Json(dto::ListDiagnosesRes {
        diagnoses: records
            .into_iter()
            .map(|record| dto::DiagnosisDto {
                id: record.id,
                patient_id: record.patient_id,
                patient_name: record.patient_name,
                symptoms: record.symptoms,
                malaria_score: record.malaria_score,
                typhoid_score: record.typhoid_score,
                diagnosis: record.diagnosis,
                confidence: record.confidence,
                status: diagnosis_status_label(record.status).to_owned(),
                doctor_id: record.doctor_id,
                doctor_notes: record.doctor_notes,
                urgency_level: urgency_level_label(record.urgency_level).to_owned(),
                created_at: record.created_at.to_rfc3339(),
            })
            .collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/diagnoses/{id}/status",
    request_body = dto::ReviewDiagnosisReq,
    responses(
        (status = 200, description = "Diagnosis reviewed", body = dto::ReviewDiagnosisRes),
        (status = 404, description = "Unknown diagnosis"),
        (status = 500, description = "Internal server error")
    )
)]
/// Record a doctor's confirm/reject verdict on a diagnosis
///
/// # Errors
/// Returns `404 Not Found` for an unknown diagnosis id.
#[axum::debug_handler]
async fn review_diagnosis(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<dto::ReviewDiagnosisReq>,
) -> Result<Json<dto::ReviewDiagnosisRes>, (StatusCode, &'static str)> {
    let decision = match req.status {
        dto::ReviewDecisionDto::Confirmed => ReviewDecision::Confirmed,
        dto::ReviewDecisionDto::Rejected => ReviewDecision::Rejected,
    };

    let service = DiagnosisService::new(state.store.clone());
    match service.review(&id, decision, &req.doctor_id, req.doctor_notes) {
        Ok(()) => Ok(Json(dto::ReviewDiagnosisRes { success: true })),
        Err(err @ TriageError::DocumentNotFound { .. }) => {
            tracing::error!("Review diagnosis error: {:?}", err);
            Err((StatusCode::NOT_FOUND, "Unknown diagnosis"))
        }
        Err(err) => Err(internal_error("Review diagnosis error", &err)),
    }
}

#[utoipa::path(
    post,
    path = "/records",
    request_body = dto::CreateRecordReq,
    responses(
        (status = 201, description = "Medical record created", body = dto::CreateRecordRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Create a medical record for a visit
#[axum::debug_handler]
async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<dto::CreateRecordReq>,
) -> Result<Json<dto::CreateRecordRes>, (StatusCode, &'static str)> {
    let service = MedicalRecordService::new(state.store.clone());
    let now = chrono::Utc::now();
    let record = service
        .create(tropicare_core::records::MedicalRecord {
            id: String::new(),
            patient_id: req.patient_id,
            patient_name: req.patient_name,
            doctor_id: req.doctor_id,
            doctor_name: req.doctor_name,
            appointment_id: req.appointment_id,
            diagnosis_id: req.diagnosis_id,
            symptoms: req.symptoms,
            diagnosis: req.diagnosis,
            treatment: req.treatment,
            medications: req.medications,
            notes: req.notes,
            created_at: now,
            updated_at: now,
        })
        .map_err(|err| internal_error("Create record error", &err))?;
    Ok(Json(dto::CreateRecordRes { id: record.id }))
}

#[utoipa::path(
    get,
    path = "/records/patient/{id}",
    responses(
        (status = 200, description = "Medical records for a patient", body = dto::ListRecordsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List a patient's medical records, newest first
#[axum::debug_handler]
async fn patient_records(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<dto::ListRecordsRes>, (StatusCode, &'static str)> {
    let service = MedicalRecordService::new(state.store.clone());
    let records = service
        .for_patient(&id)
        .map_err(|err| internal_error("List records error", &err))?;
    Ok(Json(dto::ListRecordsRes {
        records: records
            .into_iter()
            .map(|record| dto::MedicalRecordDto {
                id: record.id,
                patient_id: record.patient_id,
                patient_name: record.patient_name,
                doctor_id: record.doctor_id,
                doctor_name: record.doctor_name,
                appointment_id: record.appointment_id,
                diagnosis_id: record.diagnosis_id,
                symptoms: record.symptoms,
                diagnosis: record.diagnosis,
                treatment: record.treatment,
                medications: record.medications,
                notes: record.notes,
                created_at: record.created_at.to_rfc3339(),
            })
            .collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/pharmacy/drugs",
    responses(
        (status = 200, description = "The pharmacy drug list", body = dto::ListDrugsRes)
    )
)]
/// List the pharmacy storefront drugs
#[axum::debug_handler]
async fn list_drugs(State(state): State<AppState>) -> Json<dto::ListDrugsRes> {
    let drugs = state
        .cfg
        .formulary()
        .drugs()
        .iter()
        .map(|drug| dto::DrugDto {
            id: drug.id,
            name: drug.name.clone(),
            description: drug.description.clone(),
            price: drug.price,
            in_stock: drug.in_stock,
        })
        .collect();
    Json(dto::ListDrugsRes { drugs })
}

// Mapping helpers

fn fever_from_dto(level: dto::FeverLevelDto) -> FeverLevel {
    match level {
        dto::FeverLevelDto::High => FeverLevel::High,
        dto::FeverLevelDto::Mild => FeverLevel::Mild,
        dto::FeverLevelDto::None => FeverLevel::None,
        dto::FeverLevelDto::Unsure => FeverLevel::Unsure,
    }
}

fn duration_from_dto(duration: dto::DurationDto) -> DurationBucket {
    match duration {
        dto::DurationDto::UnderTwentyFourHours => DurationBucket::UnderTwentyFourHours,
        dto::DurationDto::OneToThreeDays => DurationBucket::OneToThreeDays,
        dto::DurationDto::FourToSevenDays => DurationBucket::FourToSevenDays,
        dto::DurationDto::OverOneWeek => DurationBucket::OverOneWeek,
    }
}

fn appointment_urgency_from_dto(urgency: dto::AppointmentUrgencyDto) -> AppointmentUrgency {
    match urgency {
        dto::AppointmentUrgencyDto::High => AppointmentUrgency::High,
        dto::AppointmentUrgencyDto::Medium => AppointmentUrgency::Medium,
        dto::AppointmentUrgencyDto::Low => AppointmentUrgency::Low,
    }
}

fn urgency_level_from_dto(level: dto::UrgencyLevelDto) -> UrgencyLevel {
    match level {
        dto::UrgencyLevelDto::Critical => UrgencyLevel::Critical,
        dto::UrgencyLevelDto::High => UrgencyLevel::High,
        dto::UrgencyLevelDto::Medium => UrgencyLevel::Medium,
        dto::UrgencyLevelDto::Low => UrgencyLevel::Low,
    }
}

fn appointment_status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Upcoming => "upcoming",
        AppointmentStatus::Completed => "completed",
        AppointmentStatus::Cancelled => "cancelled",
        AppointmentStatus::InProgress => "in-progress",
    }
}

fn appointment_urgency_label(urgency: AppointmentUrgency) -> &'static str {
    match urgency {
        AppointmentUrgency::High => "high",
        AppointmentUrgency::Medium => "medium",
        AppointmentUrgency::Low => "low",
    }
}

fn diagnosis_status_label(status: tropicare_core::records::DiagnosisStatus) -> &'static str {
    use tropicare_core::records::DiagnosisStatus;
    match status {
        DiagnosisStatus::Pending => "pending",
        DiagnosisStatus::Confirmed => "confirmed",
        DiagnosisStatus::Rejected => "rejected",
    }
}

fn urgency_level_label(level: UrgencyLevel) -> &'static str {
    match level {
        UrgencyLevel::Critical => "CRITICAL",
        UrgencyLevel::High => "HIGH",
        UrgencyLevel::Medium => "MEDIUM",
        UrgencyLevel::Low => "LOW",
    }
}

fn appointment_to_dto(
    appointment: tropicare_core::appointments::Appointment,
) -> dto::AppointmentDto {
    dto::AppointmentDto {
        id: appointment.id,
        patient_id: appointment.patient_id,
        patient_name: appointment.patient_name,
        doctor_id: appointment.doctor_id,
        doctor_name: appointment.doctor_name,
        date: appointment.date,
        time: appointment.time,
        appointment_type: appointment.appointment_type,
        status: appointment_status_label(appointment.status).to_owned(),
        urgency: appointment_urgency_label(appointment.urgency).to_owned(),
        notes: appointment.notes,
        created_at: appointment.created_at.to_rfc3339(),
    }
}
