//! Appointment booking and doctor schedules.
//!
//! Appointments are plain records in the document store, filtered and sorted
//! by creation time. Schedules are generated on demand from a doctor's
//! working hours: hourly slots on weekdays over a rolling window.

use crate::config::CoreConfig;
use crate::error::{TriageError, TriageResult};
use crate::store::{DocumentStore, Filter, Order};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// How far ahead schedules are generated, in days.
const SCHEDULE_WINDOW_DAYS: i64 = 45;

const APPOINTMENTS_COLLECTION: &str = "appointments";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
    InProgress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentUrgency {
    High,
    Medium,
    Low,
}

/// A booked appointment as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Store-assigned id; empty only while the record is being created.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    /// ISO date, e.g. "2026-09-24".
    pub date: String,
    /// Display time slot, e.g. "9:00 AM".
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub urgency: AppointmentUrgency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

/// Details needed to book a new appointment.
#[derive(Clone, Debug)]
pub struct BookingRequest {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
    pub urgency: AppointmentUrgency,
    pub notes: Option<String>,
}

/// Appointment operations over the document store.
pub struct AppointmentService {
    cfg: Arc<CoreConfig>,
    store: Arc<dyn DocumentStore>,
}

impl AppointmentService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<dyn DocumentStore>) -> Self {
        Self { cfg, store }
    }

    /// Book an appointment with a doctor from the directory.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::UnknownDoctor` if the doctor id is not in the
    /// directory, or a store error if the record cannot be written.
    pub fn book(&self, request: BookingRequest) -> TriageResult<Appointment> {
        let doctor = self
            .cfg
            .directory()
            .find(&request.doctor_id)
            .ok_or_else(|| TriageError::UnknownDoctor(request.doctor_id.clone()))?;

        let now = Utc::now();
        let mut appointment = Appointment {
            id: String::new(),
            patient_id: request.patient_id,
            patient_name: request.patient_name,
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            date: request.date,
            time: request.time,
            appointment_type: request.appointment_type,
            status: AppointmentStatus::Upcoming,
            urgency: request.urgency,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&appointment).map_err(TriageError::Serialization)?;
        appointment.id = self.store.create(APPOINTMENTS_COLLECTION, value)?;
        Ok(appointment)
    }

    /// All appointments for one patient, newest first.
    pub fn for_patient(&self, patient_id: &str) -> TriageResult<Vec<Appointment>> {
        self.list(Filter::new().field_eq("patientId", patient_id))
    }

    /// All appointments for one doctor, newest first.
    pub fn for_doctor(&self, doctor_id: &str) -> TriageResult<Vec<Appointment>> {
        self.list(Filter::new().field_eq("doctorId", doctor_id))
    }

    fn list(&self, filter: Filter) -> TriageResult<Vec<Appointment>> {
        let documents = self.store.query(
            APPOINTMENTS_COLLECTION,
            &filter,
            Some(&Order::desc("createdAt")),
        )?;

        let mut appointments = Vec::with_capacity(documents.len());
        for document in documents {
            let mut appointment: Appointment = serde_json::from_value(document.value)
                .map_err(TriageError::Deserialization)?;
            appointment.id = document.id;
            appointments.push(appointment);
        }
        Ok(appointments)
    }
}

/// Parse working hours like "9am - 3pm" into opening and closing hours.
pub fn parse_working_hours(working_hours: &str) -> TriageResult<(u32, u32)> {
    let invalid = || TriageError::InvalidWorkingHours(working_hours.to_owned());

    let (start, end) = working_hours.split_once(" - ").ok_or_else(invalid)?;

    let parse_hour = |text: &str| -> TriageResult<u32> {
        let lowered = text.trim().to_lowercase();
        let digits = lowered
            .trim_end_matches("am")
            .trim_end_matches("pm")
            .trim();
        let mut hour: u32 = digits.parse().map_err(|_| invalid())?;
        if hour == 0 || hour > 12 {
            return Err(invalid());
        }
        if lowered.ends_with("pm") && hour != 12 {
            hour += 12;
        }
        if lowered.ends_with("am") && hour == 12 {
            hour = 0;
        }
        Ok(hour)
    };

    let opening = parse_hour(start)?;
    let closing = parse_hour(end)?;
    if opening >= closing {
        return Err(invalid());
    }
    Ok((opening, closing))
}

/// Generate a doctor's bookable slots from `from` onwards.
///
/// Weekdays only; one slot per working hour, formatted as display times
/// ("9:00 AM"). The map is keyed by date in ascending order.
pub fn generate_schedule(
    working_hours: &str,
    from: NaiveDate,
) -> TriageResult<BTreeMap<NaiveDate, Vec<String>>> {
    let (opening, closing) = parse_working_hours(working_hours)?;

    let mut schedule = BTreeMap::new();
    for offset in 0..SCHEDULE_WINDOW_DAYS {
        let date = from + Duration::days(offset);
        if date.weekday().number_from_monday() > 5 {
            continue;
        }

        let slots: Vec<String> = (opening..closing)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .map(|time| time.format("%-I:%M %p").to_string())
            .collect();
        if !slots.is_empty() {
            schedule.insert(date, slots);
        }
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FsStore;

    fn service() -> (tempfile::TempDir, AppointmentService) {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = Arc::new(CoreConfig::new(dir.path().to_path_buf()).expect("config"));
        let store = Arc::new(FsStore::new(dir.path().to_path_buf()));
        (dir, AppointmentService::new(cfg, store))
    }

    fn booking(patient_id: &str, doctor_id: &str) -> BookingRequest {
        BookingRequest {
            patient_id: patient_id.to_owned(),
            patient_name: "Ama Shikongo".to_owned(),
            doctor_id: doctor_id.to_owned(),
            date: "2026-09-24".to_owned(),
            time: "9:00 AM".to_owned(),
            appointment_type: "Consultation".to_owned(),
            urgency: AppointmentUrgency::Medium,
            notes: None,
        }
    }

    #[test]
    fn booking_resolves_doctor_from_directory() {
        let (_dir, service) = service();
        let appointment = service.book(booking("p1", "d1")).expect("book");
        assert_eq!(appointment.doctor_name, "Dr. Emily Carter");
        assert_eq!(appointment.status, AppointmentStatus::Upcoming);
        assert!(!appointment.id.is_empty());
    }

    #[test]
    fn booking_with_unknown_doctor_fails() {
        let (_dir, service) = service();
        let err = service.book(booking("p1", "d99")).expect_err("unknown doctor");
        assert!(matches!(err, TriageError::UnknownDoctor(_)));
    }

    #[test]
    fn listings_filter_by_party() {
        let (_dir, service) = service();
        service.book(booking("p1", "d1")).expect("book");
        service.book(booking("p1", "d2")).expect("book");
        service.book(booking("p2", "d1")).expect("book");

        let for_p1 = service.for_patient("p1").expect("list");
        assert_eq!(for_p1.len(), 2);
        assert!(for_p1.iter().all(|a| a.patient_id == "p1"));

        let for_d1 = service.for_doctor("d1").expect("list");
        assert_eq!(for_d1.len(), 2);
        assert!(for_d1.iter().all(|a| a.doctor_id == "d1"));
    }

    #[test]
    fn working_hours_parse_into_24h_bounds() {
        assert_eq!(parse_working_hours("9am - 3pm").expect("parse"), (9, 15));
        assert_eq!(parse_working_hours("10am - 6pm").expect("parse"), (10, 18));
        assert_eq!(parse_working_hours("12am - 12pm").expect("parse"), (0, 12));
        assert!(parse_working_hours("3pm - 9am").is_err());
        assert!(parse_working_hours("whenever").is_err());
    }

    #[test]
    fn schedule_covers_weekdays_with_hourly_slots() {
        // 2026-09-24 is a Thursday.
        let from = NaiveDate::from_ymd_opt(2026, 9, 24).expect("valid date");
        let schedule = generate_schedule("9am - 3pm", from).expect("schedule");

        // 45 calendar days contain no more than 33 weekdays.
        assert!(schedule.len() >= 31 && schedule.len() <= 33);
        assert!(schedule.contains_key(&from));
        // Saturday 2026-09-26 must be absent.
        let saturday = NaiveDate::from_ymd_opt(2026, 9, 26).expect("valid date");
        assert!(!schedule.contains_key(&saturday));

        let slots = &schedule[&from];
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0], "9:00 AM");
        assert_eq!(slots[5], "2:00 PM");
    }

    #[test]
    fn schedule_is_deterministic_for_a_fixed_start() {
        let from = NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date");
        assert_eq!(
            generate_schedule("8am - 4pm", from).expect("schedule"),
            generate_schedule("8am - 4pm", from).expect("schedule")
        );
    }
}
