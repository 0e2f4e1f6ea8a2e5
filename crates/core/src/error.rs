#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no symptoms reported: select or describe at least one symptom")]
    NoSymptomsReported,
    #[error("severity rating out of range: {0}")]
    SeverityOutOfRange(#[from] tropicare_types::SeverityError),
    #[error("consultation expected an answer to {expected}, got an answer to {received}")]
    AnswerMismatch {
        expected: &'static str,
        received: &'static str,
    },
    #[error("consultation is already complete")]
    ConsultationComplete,
    #[error("unknown doctor: {0}")]
    UnknownDoctor(String),
    #[error("unknown drug: {0}")]
    UnknownDrug(String),
    #[error("invalid working hours: {0}")]
    InvalidWorkingHours(String),
    #[error("document not found: {collection}/{id}")]
    DocumentNotFound { collection: String, id: String },
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write document: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize document: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize document: {0}")]
    Deserialization(serde_json::Error),
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("session not found")]
    SessionNotFound,
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
