//! Symptom-to-diagnosis scoring.
//!
//! Two independent strategies share this module:
//! - [`threshold`]: weight summation over the symptom catalog with a
//!   fixed-threshold confidence ladder (the checkbox form flow).
//! - [`structured`]: richer weighted contributions from a structured
//!   questionnaire, with a severity multiplier and urgency grading (the
//!   consultation flow).
//!
//! The two use different constants and weight tables by design; they are
//! deliberately kept as separately named strategies rather than reconciled.
//! Both are pure: identical input always produces identical output.

pub mod structured;
pub mod threshold;

use serde::{Deserialize, Serialize};

/// Accumulated per-condition weights for one diagnostic session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionScores {
    pub malaria: u32,
    pub typhoid: u32,
}

/// Ordinal confidence bucket produced by the threshold strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
            Confidence::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How quickly the patient should be seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Routine,
    Urgent,
    Immediate,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Urgent => "urgent",
            Urgency::Immediate => "immediate",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity grade attached to a structured assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityGrade {
    Mild,
    MildToModerate,
    Moderate,
    Severe,
    Critical,
}

impl SeverityGrade {
    pub fn label(&self) -> &'static str {
        match self {
            SeverityGrade::Mild => "Mild",
            SeverityGrade::MildToModerate => "Mild to Moderate",
            SeverityGrade::Moderate => "Moderate",
            SeverityGrade::Severe => "Severe",
            SeverityGrade::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for SeverityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
