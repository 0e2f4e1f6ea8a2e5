//! Structured scoring strategy.
//!
//! Scores a structured questionnaire response: keyword increments from the
//! main complaint and additional symptoms, fixed bonuses for fever level and
//! duration, a severity multiplier, and a flat travel-history bonus applied
//! after the multiplier. Classification uses its own thresholds, distinct
//! from the threshold strategy's ladder.

use crate::catalog::Condition;
use crate::scoring::{ConditionScores, SeverityGrade, Urgency};
use serde::{Deserialize, Serialize};
use tropicare_types::Severity;

/// Keyword increments applied when the main complaint mentions them.
/// Tuples are (keyword, malaria, typhoid); every matching row applies.
const MAIN_SYMPTOM_WEIGHTS: &[(&str, u32, u32)] = &[
    ("fever", 3, 3),
    ("headache", 3, 3),
    ("abdominal", 4, 4),
    ("vomiting", 4, 0),
];

/// Keyword increments applied per additional-symptom entry. Rows sharing
/// increments (nausea/vomiting, stomach/abdominal, muscle/joint) are listed
/// separately; an entry matching several rows collects each of them.
const ADDITIONAL_SYMPTOM_WEIGHTS: &[(&str, u32, u32)] = &[
    ("headache", 2, 2),
    ("nausea", 2, 1),
    ("vomiting", 2, 1),
    ("stomach", 1, 3),
    ("abdominal", 1, 3),
    ("weakness", 1, 2),
    ("muscle", 3, 1),
    ("joint", 3, 1),
    ("rash", 1, 2),
];

/// Reported fever level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeverLevel {
    High,
    Mild,
    None,
    Unsure,
}

/// How long the symptoms have been present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    UnderTwentyFourHours,
    OneToThreeDays,
    FourToSevenDays,
    OverOneWeek,
}

/// A completed structured questionnaire for one diagnostic session.
///
/// Transient and request-scoped: built fresh per session (usually by the
/// consultation state machine) and discarded once an [`Assessment`] exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResponse {
    /// Free-text main complaint, matched against a fixed keyword table.
    pub main_symptom: String,
    pub fever: FeverLevel,
    pub duration: DurationBucket,
    /// Free-text additional symptoms, each matched by substring.
    pub additional_symptoms: Vec<String>,
    pub severity: Severity,
    pub travel_history: bool,
    /// Not scored; carried for downstream human review only.
    pub medications_taken: Option<String>,
}

/// Output of the structured strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Final per-condition scores (after multiplier and travel bonus).
    pub scores: ConditionScores,
    pub diagnosis: String,
    /// Conditions implicated by the classification; empty for the fallback.
    pub diseases: Vec<Condition>,
    /// Percentage confidence, 0-100.
    pub confidence: u32,
    pub severity_grade: SeverityGrade,
    pub urgency: Urgency,
    pub requires_xray: bool,
}

fn keyword_contributions(text: &str, table: &[(&str, u32, u32)]) -> (u32, u32) {
    let lowered = text.to_lowercase();
    let mut malaria = 0;
    let mut typhoid = 0;
    for (keyword, m, t) in table {
        if lowered.contains(keyword) {
            malaria += m;
            typhoid += t;
        }
    }
    (malaria, typhoid)
}

/// Accumulate raw (pre-multiplier) scores for a response.
fn raw_scores(response: &StructuredResponse) -> ConditionScores {
    let mut scores = ConditionScores::default();

    let (m, t) = keyword_contributions(&response.main_symptom, MAIN_SYMPTOM_WEIGHTS);
    scores.malaria += m;
    scores.typhoid += t;

    match response.fever {
        FeverLevel::High => {
            scores.malaria += 4;
            scores.typhoid += 4;
        }
        FeverLevel::Mild => {
            scores.malaria += 2;
            scores.typhoid += 2;
        }
        FeverLevel::None | FeverLevel::Unsure => {}
    }

    match response.duration {
        DurationBucket::OverOneWeek => {
            scores.malaria += 2;
            scores.typhoid += 3;
        }
        DurationBucket::FourToSevenDays => {
            scores.malaria += 3;
            scores.typhoid += 2;
        }
        DurationBucket::UnderTwentyFourHours | DurationBucket::OneToThreeDays => {}
    }

    for entry in &response.additional_symptoms {
        let (m, t) = keyword_contributions(entry, ADDITIONAL_SYMPTOM_WEIGHTS);
        scores.malaria += m;
        scores.typhoid += t;
    }

    scores
}

/// Apply the severity multiplier `round(raw * (1 + severity/10))` to one score.
///
/// Rounding happens once, here; threshold comparisons downstream are pure
/// integer comparisons.
fn amplify(raw: u32, severity: Severity) -> u32 {
    let factor = 1.0 + f64::from(severity.get()) / 10.0;
    (f64::from(raw) * factor).round() as u32
}

/// Run the structured strategy over a completed response.
pub fn assess(response: &StructuredResponse) -> Assessment {
    let raw = raw_scores(response);

    let mut malaria = amplify(raw.malaria, response.severity);
    let mut typhoid = amplify(raw.typhoid, response.severity);

    // Travel bonus lands after the multiplier so it is never amplified.
    if response.travel_history {
        malaria += 3;
        typhoid += 2;
    }

    let scores = ConditionScores { malaria, typhoid };
    classify(scores)
}

fn classify(scores: ConditionScores) -> Assessment {
    let m = scores.malaria;
    let t = scores.typhoid;
    let peak = m.max(t);

    if m >= 10 && t >= 10 {
        Assessment {
            scores,
            diagnosis: "High probability of Malaria & Typhoid co-infection".to_owned(),
            diseases: vec![Condition::Malaria, Condition::Typhoid],
            confidence: (peak * 8).min(95),
            severity_grade: SeverityGrade::Critical,
            urgency: Urgency::Immediate,
            requires_xray: true,
        }
    } else if m >= 8 {
        Assessment {
            scores,
            diagnosis: "High probability of Malaria".to_owned(),
            diseases: vec![Condition::Malaria],
            confidence: (m * 10).min(90),
            severity_grade: if m >= 12 {
                SeverityGrade::Severe
            } else {
                SeverityGrade::Moderate
            },
            urgency: if m >= 12 {
                Urgency::Immediate
            } else {
                Urgency::Urgent
            },
            requires_xray: m >= 12,
        }
    } else if t >= 8 {
        Assessment {
            scores,
            diagnosis: "High probability of Typhoid fever".to_owned(),
            diseases: vec![Condition::Typhoid],
            confidence: (t * 10).min(90),
            severity_grade: if t >= 12 {
                SeverityGrade::Severe
            } else {
                SeverityGrade::Moderate
            },
            urgency: if t >= 12 {
                Urgency::Immediate
            } else {
                Urgency::Urgent
            },
            requires_xray: t >= 12,
        }
    } else if m >= 5 || t >= 5 {
        let primary = if m > t {
            Condition::Malaria
        } else {
            Condition::Typhoid
        };
        Assessment {
            scores,
            diagnosis: format!("Possible {} infection", primary.label()),
            diseases: vec![primary],
            confidence: (peak * 12).min(75),
            severity_grade: SeverityGrade::MildToModerate,
            urgency: Urgency::Urgent,
            requires_xray: false,
        }
    } else {
        Assessment {
            scores,
            diagnosis: "Symptoms suggest viral infection or other condition".to_owned(),
            diseases: Vec::new(),
            confidence: 30,
            severity_grade: SeverityGrade::Mild,
            urgency: Urgency::Routine,
            requires_xray: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_response() -> StructuredResponse {
        StructuredResponse {
            main_symptom: "Fever".to_owned(),
            fever: FeverLevel::High,
            duration: DurationBucket::UnderTwentyFourHours,
            additional_symptoms: vec![],
            severity: Severity::new(5).expect("valid severity"),
            travel_history: false,
            medications_taken: None,
        }
    }

    #[test]
    fn high_fever_with_midrange_severity_is_co_infection() {
        // Raw M = 3 (fever keyword) + 4 (high fever) = 7, same for typhoid.
        // Multiplier 1.5 rounds 10.5 up to 11 for both, clearing the
        // co-infection threshold.
        let assessment = assess(&base_response());
        assert_eq!(assessment.scores, ConditionScores { malaria: 11, typhoid: 11 });
        assert_eq!(
            assessment.diagnosis,
            "High probability of Malaria & Typhoid co-infection"
        );
        assert_eq!(assessment.confidence, 88); // min(95, 11 * 8)
        assert_eq!(assessment.urgency, Urgency::Immediate);
        assert_eq!(assessment.severity_grade, SeverityGrade::Critical);
        assert!(assessment.requires_xray);
    }

    #[test]
    fn duration_bonus_raises_scores_and_caps_confidence() {
        let response = StructuredResponse {
            duration: DurationBucket::FourToSevenDays,
            ..base_response()
        };
        // Raw 10/9, multiplied to 15/14; co-infection confidence capped at 95.
        let assessment = assess(&response);
        assert_eq!(assessment.scores, ConditionScores { malaria: 15, typhoid: 14 });
        assert_eq!(assessment.confidence, 95);
    }

    #[test]
    fn vomiting_main_symptom_scores_malaria_only() {
        let response = StructuredResponse {
            main_symptom: "Vomiting".to_owned(),
            fever: FeverLevel::None,
            severity: Severity::new(10).expect("valid severity"),
            ..base_response()
        };
        // Raw 4/0, doubled by the severity-10 multiplier.
        let assessment = assess(&response);
        assert_eq!(assessment.scores, ConditionScores { malaria: 8, typhoid: 0 });
        assert_eq!(assessment.diagnosis, "High probability of Malaria");
        assert_eq!(assessment.confidence, 80);
        assert_eq!(assessment.urgency, Urgency::Urgent);
        assert_eq!(assessment.severity_grade, SeverityGrade::Moderate);
        assert!(!assessment.requires_xray);
    }

    #[test]
    fn twelve_and_above_is_severe_and_immediate() {
        let response = StructuredResponse {
            main_symptom: "vomiting and fever".to_owned(),
            fever: FeverLevel::None,
            duration: DurationBucket::FourToSevenDays,
            severity: Severity::new(3).expect("valid severity"),
            ..base_response()
        };
        // Raw 10/5 -> 13/7 (typhoid 6.5 rounds to 7): malaria branch at >= 12.
        let assessment = assess(&response);
        assert_eq!(assessment.scores.malaria, 13);
        assert_eq!(assessment.severity_grade, SeverityGrade::Severe);
        assert_eq!(assessment.urgency, Urgency::Immediate);
        assert!(assessment.requires_xray);
        assert_eq!(assessment.confidence, 90); // min(90, 130)
    }

    #[test]
    fn travel_bonus_applies_after_the_multiplier() {
        let without_travel = assess(&StructuredResponse {
            fever: FeverLevel::Mild,
            ..base_response()
        });
        let with_travel = assess(&StructuredResponse {
            fever: FeverLevel::Mild,
            travel_history: true,
            ..base_response()
        });
        // Flat +3/+2, not amplified by severity.
        assert_eq!(
            with_travel.scores.malaria,
            without_travel.scores.malaria + 3
        );
        assert_eq!(
            with_travel.scores.typhoid,
            without_travel.scores.typhoid + 2
        );
    }

    #[test]
    fn additional_symptom_matching_is_substring_and_cumulative() {
        let response = StructuredResponse {
            main_symptom: "chills".to_owned(),
            fever: FeverLevel::None,
            additional_symptoms: vec!["Nausea and stomach cramps".to_owned()],
            severity: Severity::new(1).expect("valid severity"),
            ..base_response()
        };
        // One entry matches both the nausea row (2/1) and the stomach row
        // (1/3): raw 3/4, multiplier 1.1 -> 3.3/4.4 -> 3/4.
        let assessment = assess(&response);
        assert_eq!(assessment.scores, ConditionScores { malaria: 3, typhoid: 4 });
        assert_eq!(
            assessment.diagnosis,
            "Symptoms suggest viral infection or other condition"
        );
        assert_eq!(assessment.confidence, 30);
        assert_eq!(assessment.urgency, Urgency::Routine);
        assert!(assessment.diseases.is_empty());
    }

    #[test]
    fn possible_infection_tier_names_the_primary_condition() {
        // Typhoid wins ties: primary is typhoid unless malaria is strictly
        // greater.
        let tie = StructuredResponse {
            main_symptom: "headache".to_owned(),
            fever: FeverLevel::None,
            severity: Severity::new(1).expect("valid severity"),
            ..base_response()
        };
        // Raw 3/3 -> 3.3 -> 3/3: fallback tier, so bump with weakness.
        let possible = StructuredResponse {
            additional_symptoms: vec!["weakness".to_owned()],
            ..tie
        };
        // Raw 4/5 -> 4.4/5.5 -> 4/6 (5.5 rounds up).
        let assessment = assess(&possible);
        assert_eq!(assessment.scores, ConditionScores { malaria: 4, typhoid: 6 });
        assert_eq!(assessment.diagnosis, "Possible Typhoid infection");
        assert_eq!(assessment.diseases, vec![Condition::Typhoid]);
        assert_eq!(assessment.confidence, 72); // min(75, 6 * 12)
        assert_eq!(assessment.severity_grade, SeverityGrade::MildToModerate);
        assert_eq!(assessment.urgency, Urgency::Urgent);
    }

    #[test]
    fn assessment_is_deterministic() {
        let response = StructuredResponse {
            additional_symptoms: vec!["joint pain".to_owned(), "rash".to_owned()],
            travel_history: true,
            ..base_response()
        };
        assert_eq!(assess(&response), assess(&response));
    }
}
