//! Static symptom reference data.
//!
//! The catalog maps a symptom's display label to the conditions it is
//! associated with and the severity weight it contributes to each. It is
//! built once at startup (see [`crate::config::CoreConfig`]) and never
//! mutated afterwards; the display label doubles as the identifier.

use serde::{Deserialize, Serialize};

/// A tracked condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Malaria,
    Typhoid,
}

impl Condition {
    /// Human-readable label, as shown to patients and stored in records.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Malaria => "Malaria",
            Condition::Typhoid => "Typhoid",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One catalog entry: a symptom label with its associated conditions and weight.
///
/// The weight is a static property of the entry, not of a reported instance;
/// it is applied once per associated condition when the symptom is selected.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub name: String,
    pub conditions: Vec<Condition>,
    pub weight: u32,
}

impl SymptomEntry {
    fn new(name: &str, conditions: &[Condition], weight: u32) -> Self {
        Self {
            name: name.to_owned(),
            conditions: conditions.to_vec(),
            weight,
        }
    }
}

/// Read-only lookup table of recognised symptoms.
#[derive(Clone, Debug)]
pub struct SymptomCatalog {
    entries: Vec<SymptomEntry>,
}

impl SymptomCatalog {
    /// The built-in catalog.
    ///
    /// The labels and weights are a fixed compatibility contract; changing
    /// them changes observable diagnoses.
    pub fn builtin() -> Self {
        use Condition::{Malaria, Typhoid};

        let entries = vec![
            // Very strong signs
            SymptomEntry::new("Abdominal Pain", &[Typhoid, Malaria], 4),
            SymptomEntry::new("Vomiting", &[Malaria], 4),
            SymptomEntry::new("Sore Throat", &[Malaria], 4),
            SymptomEntry::new("Stomach Issues", &[Typhoid], 4),
            // Strong signs
            SymptomEntry::new("Headache", &[Typhoid, Malaria], 3),
            SymptomEntry::new("Fatigue", &[Malaria], 3),
            SymptomEntry::new("Cough", &[Malaria], 3),
            SymptomEntry::new("Constipation", &[Typhoid], 3),
            SymptomEntry::new("Persistent High Fever", &[Malaria], 3),
            // Weak signs
            SymptomEntry::new("Chest pain", &[Malaria], 2),
            SymptomEntry::new("Back pain", &[Malaria], 2),
            SymptomEntry::new("Muscle Pain", &[Malaria], 2),
            SymptomEntry::new("Weakness", &[Typhoid], 2),
            SymptomEntry::new("Tiredness", &[Typhoid], 2),
            // Very weak signs
            SymptomEntry::new("Diarrhea", &[Malaria], 1),
            SymptomEntry::new("Sweating", &[Malaria], 1),
            SymptomEntry::new("Rash", &[Malaria, Typhoid], 1),
            SymptomEntry::new("Loss of appetite", &[Malaria, Typhoid], 1),
        ];

        Self { entries }
    }

    /// Look up an entry by its exact label.
    ///
    /// Returns `None` for unrecognised labels. Callers that only pass labels
    /// they generated themselves should treat a miss as an
    /// internal-consistency fault, not a user error.
    pub fn lookup(&self, name: &str) -> Option<&SymptomEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All entries, in catalog order.
    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_all_recognised_symptoms() {
        let catalog = SymptomCatalog::builtin();
        assert_eq!(catalog.entries().len(), 18);
    }

    #[test]
    fn lookup_finds_entry_by_exact_label() {
        let catalog = SymptomCatalog::builtin();
        let entry = catalog.lookup("Abdominal Pain").expect("known symptom");
        assert_eq!(entry.weight, 4);
        assert_eq!(
            entry.conditions,
            vec![Condition::Typhoid, Condition::Malaria]
        );
    }

    #[test]
    fn lookup_misses_unknown_label() {
        let catalog = SymptomCatalog::builtin();
        assert!(catalog.lookup("Unknown Symptom").is_none());
        // labels are exact, not case-folded
        assert!(catalog.lookup("abdominal pain").is_none());
    }
}
