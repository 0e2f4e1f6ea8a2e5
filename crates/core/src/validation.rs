//! Input validation utilities.
//!
//! Checks applied before a scoring engine is invoked. The engines themselves
//! have no failure mode for well-formed input; rejecting bad input is the
//! caller's job and happens here.

use crate::error::{TriageError, TriageResult};

/// Validates that a diagnostic session reports at least one symptom.
///
/// A session with no selected symptoms and no free-text description is a
/// validation error; the scoring engine must not be invoked for it. A
/// free-text description alone is acceptable — it is not scored, but it is
/// enough to start a session for human review.
///
/// # Errors
///
/// Returns `TriageError::NoSymptomsReported` when both inputs are empty.
pub fn require_symptoms(selected: &[String], other_symptoms: &str) -> TriageResult<()> {
    if selected.is_empty() && other_symptoms.trim().is_empty() {
        return Err(TriageError::NoSymptomsReported);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_fully_empty_sessions() {
        let err = require_symptoms(&[], "   ").expect_err("empty session");
        assert!(matches!(err, TriageError::NoSymptomsReported));
    }

    #[test]
    fn accepts_selected_symptoms() {
        require_symptoms(&["Headache".to_owned()], "").expect("valid session");
    }

    #[test]
    fn accepts_free_text_alone() {
        require_symptoms(&[], "chills and joint pain").expect("valid session");
    }
}
