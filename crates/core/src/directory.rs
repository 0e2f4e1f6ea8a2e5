//! Static doctor directory.
//!
//! Reference data for specialist recommendation and appointment booking.
//! Built once at startup and never mutated; directory order is significant
//! because recommendations preserve it.

use crate::catalog::Condition;
use serde::{Deserialize, Serialize};

/// One directory entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: String,
    pub name: String,
    pub specialization: String,
    /// Conditions this doctor has specific expertise in.
    pub expertise: Vec<Condition>,
    pub hospital: String,
    /// e.g. "9am - 3pm"; parsed by the appointment scheduler.
    pub working_hours: String,
    pub available: bool,
}

/// Read-only, ordered collection of doctor profiles.
#[derive(Clone, Debug)]
pub struct DoctorDirectory {
    profiles: Vec<DoctorProfile>,
}

impl DoctorDirectory {
    /// The built-in directory.
    pub fn builtin() -> Self {
        use Condition::{Malaria, Typhoid};

        let profiles = vec![
            DoctorProfile {
                id: "d1".to_owned(),
                name: "Dr. Emily Carter".to_owned(),
                specialization: "Infectious Disease Specialist".to_owned(),
                expertise: vec![Malaria, Typhoid],
                hospital: "Windhoek Central Hospital".to_owned(),
                working_hours: "9am - 3pm".to_owned(),
                available: true,
            },
            DoctorProfile {
                id: "d2".to_owned(),
                name: "Dr. Ben Hanson".to_owned(),
                specialization: "Internal Medicine".to_owned(),
                expertise: vec![Typhoid],
                hospital: "Lady Pohamba Private Hospital".to_owned(),
                working_hours: "10am - 6pm".to_owned(),
                available: true,
            },
            DoctorProfile {
                id: "d3".to_owned(),
                name: "Dr. Olivia Chen".to_owned(),
                specialization: "General Practitioner".to_owned(),
                expertise: vec![],
                hospital: "Rhino Park Private Hospital".to_owned(),
                working_hours: "8am - 4pm".to_owned(),
                available: true,
            },
            DoctorProfile {
                id: "d4".to_owned(),
                name: "Dr. Sarah Jenkins".to_owned(),
                specialization: "Tropical Medicine".to_owned(),
                expertise: vec![Malaria],
                hospital: "Windhoek Central Hospital".to_owned(),
                working_hours: "9am - 5pm".to_owned(),
                available: true,
            },
        ];

        Self { profiles }
    }

    /// All profiles, in directory order.
    pub fn profiles(&self) -> &[DoctorProfile] {
        &self.profiles
    }

    /// Find a profile by id.
    pub fn find(&self, id: &str) -> Option<&DoctorProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    /// Recommend up to two specialists for the given implicated conditions.
    ///
    /// Filters by expertise overlap, preserving directory order. When no
    /// condition is implicated, falls back to general practitioners.
    pub fn recommend(&self, diseases: &[Condition]) -> Vec<&DoctorProfile> {
        let matches = |profile: &DoctorProfile| {
            if diseases.is_empty() {
                profile.specialization == "General Practitioner"
            } else {
                profile
                    .expertise
                    .iter()
                    .any(|condition| diseases.contains(condition))
            }
        };

        self.profiles
            .iter()
            .filter(|profile| matches(profile))
            .take(2)
            .collect()
    }
}
