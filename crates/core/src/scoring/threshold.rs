//! Threshold scoring strategy.
//!
//! Sums catalog weights per condition over the selected symptoms, then walks
//! a fixed first-match-wins ladder to produce a diagnosis label and an
//! ordinal confidence. The thresholds and labels are a compatibility
//! contract and must not drift.

use crate::catalog::{Condition, SymptomCatalog};
use crate::scoring::{Confidence, ConditionScores};
use serde::{Deserialize, Serialize};

/// Score at or above which a single condition is reported as high probability.
pub const HIGH_CONFIDENCE_THRESHOLD: u32 = 8;
/// Score at or above which a single condition is reported as possible.
pub const MEDIUM_CONFIDENCE_THRESHOLD: u32 = 5;

/// Result of one threshold-strategy diagnostic session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdOutcome {
    pub scores: ConditionScores,
    pub diagnosis: String,
    pub confidence: Confidence,
}

/// Accumulate per-condition scores for the selected symptom labels.
///
/// Unrecognised labels contribute zero. The only expected callers present
/// labels taken from the catalog itself, so a miss is logged as an
/// internal-consistency warning rather than surfaced as an error.
pub fn score(catalog: &SymptomCatalog, selected: &[String]) -> ConditionScores {
    let mut scores = ConditionScores::default();

    for name in selected {
        let Some(entry) = catalog.lookup(name) else {
            tracing::warn!(symptom = %name, "selected symptom not in catalog, ignoring");
            continue;
        };
        for condition in &entry.conditions {
            match condition {
                Condition::Malaria => scores.malaria += entry.weight,
                Condition::Typhoid => scores.typhoid += entry.weight,
            }
        }
    }

    scores
}

/// Map accumulated scores to a diagnosis label and confidence bucket.
///
/// The ladder is first-match-wins: the co-infection branch at each tier is
/// tested strictly before the single-condition branches at the same tier.
pub fn classify(scores: ConditionScores) -> (&'static str, Confidence) {
    let m = scores.malaria;
    let t = scores.typhoid;

    if m >= HIGH_CONFIDENCE_THRESHOLD && t >= HIGH_CONFIDENCE_THRESHOLD {
        ("High Probability of Malaria & Typhoid", Confidence::VeryHigh)
    } else if m >= HIGH_CONFIDENCE_THRESHOLD {
        ("High Probability of Malaria", Confidence::High)
    } else if t >= HIGH_CONFIDENCE_THRESHOLD {
        ("High Probability of Typhoid Fever", Confidence::High)
    } else if m >= MEDIUM_CONFIDENCE_THRESHOLD && t >= MEDIUM_CONFIDENCE_THRESHOLD {
        ("Possible Malaria & Typhoid Co-infection", Confidence::Medium)
    } else if m >= MEDIUM_CONFIDENCE_THRESHOLD {
        ("Possible Malaria", Confidence::Medium)
    } else if t >= MEDIUM_CONFIDENCE_THRESHOLD {
        ("Possible Typhoid Fever", Confidence::Medium)
    } else if m > 0 || t > 0 {
        ("Symptoms match minor criteria", Confidence::Low)
    } else {
        ("Inconclusive", Confidence::Low)
    }
}

/// Run the full threshold strategy: score then classify.
pub fn diagnose(catalog: &SymptomCatalog, selected: &[String]) -> ThresholdOutcome {
    let scores = score(catalog, selected);
    let (diagnosis, confidence) = classify(scores);
    ThresholdOutcome {
        scores,
        diagnosis: diagnosis.to_owned(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SymptomCatalog {
        SymptomCatalog::builtin()
    }

    fn names(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_owned()).collect()
    }

    /// Rank of the classification ladder, for monotonicity checks.
    fn tier(scores: ConditionScores) -> u32 {
        match classify(scores) {
            (_, Confidence::VeryHigh) => 4,
            (_, Confidence::High) => 3,
            (_, Confidence::Medium) => 2,
            ("Symptoms match minor criteria", Confidence::Low) => 1,
            _ => 0,
        }
    }

    #[test]
    fn empty_set_is_inconclusive() {
        let outcome = diagnose(&catalog(), &[]);
        assert_eq!(outcome.scores, ConditionScores::default());
        assert_eq!(outcome.diagnosis, "Inconclusive");
        assert_eq!(outcome.confidence, Confidence::Low);
    }

    #[test]
    fn unknown_symptoms_contribute_zero() {
        let outcome = diagnose(&catalog(), &names(&["Glowing", "Levitation"]));
        assert_eq!(outcome.diagnosis, "Inconclusive");
    }

    #[test]
    fn abdominal_pain_plus_vomiting_is_high_malaria() {
        // Abdominal Pain: Typhoid+Malaria weight 4; Vomiting: Malaria weight 4.
        let outcome = diagnose(&catalog(), &names(&["Abdominal Pain", "Vomiting"]));
        assert_eq!(outcome.scores.malaria, 8);
        assert_eq!(outcome.scores.typhoid, 4);
        assert_eq!(outcome.diagnosis, "High Probability of Malaria");
        assert_eq!(outcome.confidence, Confidence::High);
    }

    #[test]
    fn exact_high_boundary_for_malaria() {
        let (diagnosis, confidence) = classify(ConditionScores {
            malaria: 8,
            typhoid: 4,
        });
        assert_eq!(diagnosis, "High Probability of Malaria");
        assert_eq!(confidence, Confidence::High);
    }

    #[test]
    fn both_medium_is_co_infection_before_single_condition() {
        let (diagnosis, confidence) = classify(ConditionScores {
            malaria: 7,
            typhoid: 7,
        });
        assert_eq!(diagnosis, "Possible Malaria & Typhoid Co-infection");
        assert_eq!(confidence, Confidence::Medium);
    }

    #[test]
    fn both_high_is_very_high_co_infection() {
        let (diagnosis, confidence) = classify(ConditionScores {
            malaria: 8,
            typhoid: 9,
        });
        assert_eq!(diagnosis, "High Probability of Malaria & Typhoid");
        assert_eq!(confidence, Confidence::VeryHigh);
    }

    #[test]
    fn typhoid_only_branches() {
        let (diagnosis, _) = classify(ConditionScores {
            malaria: 0,
            typhoid: 8,
        });
        assert_eq!(diagnosis, "High Probability of Typhoid Fever");

        let (diagnosis, _) = classify(ConditionScores {
            malaria: 1,
            typhoid: 5,
        });
        assert_eq!(diagnosis, "Possible Typhoid Fever");
    }

    #[test]
    fn minor_criteria_below_medium() {
        let (diagnosis, confidence) = classify(ConditionScores {
            malaria: 2,
            typhoid: 1,
        });
        assert_eq!(diagnosis, "Symptoms match minor criteria");
        assert_eq!(confidence, Confidence::Low);
    }

    #[test]
    fn scoring_is_deterministic() {
        let selected = names(&["Headache", "Fatigue", "Rash"]);
        assert_eq!(diagnose(&catalog(), &selected), diagnose(&catalog(), &selected));
    }

    #[test]
    fn adding_a_symptom_never_lowers_the_tier() {
        let catalog = catalog();
        // All subsets of a mixed slice of the catalog, each extended by one
        // further symptom: the ladder tier must never decrease.
        let base_pool = [
            "Abdominal Pain",
            "Vomiting",
            "Stomach Issues",
            "Headache",
            "Constipation",
            "Chest pain",
            "Weakness",
            "Rash",
        ];
        for mask in 0u32..(1 << base_pool.len()) {
            let selected: Vec<String> = base_pool
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| (*s).to_owned())
                .collect();
            let before = tier(score(&catalog, &selected));

            for extra in catalog.entries() {
                if selected.contains(&extra.name) {
                    continue;
                }
                let mut extended = selected.clone();
                extended.push(extra.name.clone());
                let after = tier(score(&catalog, &extended));
                assert!(
                    after >= before,
                    "adding {} lowered tier {} -> {}",
                    extra.name,
                    before,
                    after
                );
            }
        }
    }
}
