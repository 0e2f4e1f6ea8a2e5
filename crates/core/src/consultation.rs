//! Guided consultation flow.
//!
//! Drives the structured questionnaire as an explicit finite-state machine:
//! each state names the question being asked, and answers are typed enum
//! variants rather than free text, so a mismatched or repeated answer is a
//! typed error instead of a silently misrouted transition.

use crate::error::{TriageError, TriageResult};
use crate::scoring::structured::{DurationBucket, FeverLevel, StructuredResponse};
use tropicare_types::{NonEmptyText, Severity};

/// The question a consultation is currently waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsultationState {
    MainSymptom,
    FeverLevel,
    Duration,
    AdditionalSymptoms,
    SeverityRating,
    TravelHistory,
    Medications,
    Complete,
}

impl ConsultationState {
    fn name(&self) -> &'static str {
        match self {
            ConsultationState::MainSymptom => "main symptom",
            ConsultationState::FeverLevel => "fever level",
            ConsultationState::Duration => "duration",
            ConsultationState::AdditionalSymptoms => "additional symptoms",
            ConsultationState::SeverityRating => "severity rating",
            ConsultationState::TravelHistory => "travel history",
            ConsultationState::Medications => "medications",
            ConsultationState::Complete => "complete",
        }
    }

    /// The question text shown for this state.
    pub fn prompt(&self) -> &'static str {
        match self {
            ConsultationState::MainSymptom => "What is your main symptom?",
            ConsultationState::FeverLevel => "How would you describe your fever?",
            ConsultationState::Duration => "How long have you had these symptoms?",
            ConsultationState::AdditionalSymptoms => {
                "Do you have any other symptoms? List them, or none."
            }
            ConsultationState::SeverityRating => {
                "On a scale of 1 to 10, how severe do your symptoms feel?"
            }
            ConsultationState::TravelHistory => {
                "Have you travelled to a malaria-endemic area in the last month?"
            }
            ConsultationState::Medications => "Have you taken any medication for this?",
            ConsultationState::Complete => "Consultation complete.",
        }
    }
}

/// A typed answer to exactly one consultation question.
#[derive(Clone, Debug)]
pub enum Answer {
    MainSymptom(NonEmptyText),
    FeverLevel(FeverLevel),
    Duration(DurationBucket),
    AdditionalSymptoms(Vec<String>),
    SeverityRating(Severity),
    TravelHistory(bool),
    Medications(Option<String>),
}

impl Answer {
    fn kind(&self) -> &'static str {
        match self {
            Answer::MainSymptom(_) => "main symptom",
            Answer::FeverLevel(_) => "fever level",
            Answer::Duration(_) => "duration",
            Answer::AdditionalSymptoms(_) => "additional symptoms",
            Answer::SeverityRating(_) => "severity rating",
            Answer::TravelHistory(_) => "travel history",
            Answer::Medications(_) => "medications",
        }
    }
}

/// One in-progress consultation session.
///
/// Created fresh per session; once complete it yields the
/// [`StructuredResponse`] to feed into the structured scorer and holds no
/// further use.
#[derive(Clone, Debug)]
pub struct Consultation {
    state: ConsultationState,
    main_symptom: Option<NonEmptyText>,
    fever: Option<FeverLevel>,
    duration: Option<DurationBucket>,
    additional_symptoms: Vec<String>,
    severity: Option<Severity>,
    travel_history: Option<bool>,
    medications_taken: Option<String>,
}

impl Default for Consultation {
    fn default() -> Self {
        Self::new()
    }
}

impl Consultation {
    pub fn new() -> Self {
        Self {
            state: ConsultationState::MainSymptom,
            main_symptom: None,
            fever: None,
            duration: None,
            additional_symptoms: Vec::new(),
            severity: None,
            travel_history: None,
            medications_taken: None,
        }
    }

    pub fn state(&self) -> ConsultationState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == ConsultationState::Complete
    }

    /// Answer the current question and advance to the next state.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::AnswerMismatch` when the answer variant does not
    /// match the pending question, and `TriageError::ConsultationComplete`
    /// when all questions have already been answered.
    pub fn answer(&mut self, answer: Answer) -> TriageResult<ConsultationState> {
        let mismatch = |state: ConsultationState, answer: &Answer| TriageError::AnswerMismatch {
            expected: state.name(),
            received: answer.kind(),
        };

        self.state = match (self.state, answer) {
            (ConsultationState::MainSymptom, Answer::MainSymptom(text)) => {
                self.main_symptom = Some(text);
                ConsultationState::FeverLevel
            }
            (ConsultationState::FeverLevel, Answer::FeverLevel(level)) => {
                self.fever = Some(level);
                ConsultationState::Duration
            }
            (ConsultationState::Duration, Answer::Duration(bucket)) => {
                self.duration = Some(bucket);
                ConsultationState::AdditionalSymptoms
            }
            (ConsultationState::AdditionalSymptoms, Answer::AdditionalSymptoms(entries)) => {
                self.additional_symptoms = entries;
                ConsultationState::SeverityRating
            }
            (ConsultationState::SeverityRating, Answer::SeverityRating(severity)) => {
                self.severity = Some(severity);
                ConsultationState::TravelHistory
            }
            (ConsultationState::TravelHistory, Answer::TravelHistory(travelled)) => {
                self.travel_history = Some(travelled);
                ConsultationState::Medications
            }
            (ConsultationState::Medications, Answer::Medications(text)) => {
                self.medications_taken = text;
                ConsultationState::Complete
            }
            (ConsultationState::Complete, _) => return Err(TriageError::ConsultationComplete),
            (state, ref answer) => return Err(mismatch(state, answer)),
        };

        Ok(self.state)
    }

    /// The completed questionnaire, once every question has been answered.
    pub fn into_response(self) -> TriageResult<StructuredResponse> {
        if self.state != ConsultationState::Complete {
            return Err(TriageError::InvalidInput(format!(
                "consultation still waiting on {}",
                self.state.name()
            )));
        }

        // Every field before Complete was set by the transition that left
        // its state, so these cannot be None.
        Ok(StructuredResponse {
            main_symptom: self
                .main_symptom
                .map(|t| t.as_str().to_owned())
                .unwrap_or_default(),
            fever: self.fever.unwrap_or(FeverLevel::Unsure),
            duration: self.duration.unwrap_or(DurationBucket::UnderTwentyFourHours),
            additional_symptoms: self.additional_symptoms,
            severity: self.severity.unwrap_or_else(|| {
                Severity::new(1).expect("1 is a valid severity")
            }),
            travel_history: self.travel_history.unwrap_or(false),
            medications_taken: self.medications_taken,
        })
    }
}
