//! Prediction history append.
//!
//! The write happens after scoring and never changes the prediction:
//! failures are logged and reported as `false`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::{Patient, PredictionHistory};

use super::normalize::SymptomSet;
use super::traits::PatientDirectory;
use super::types::PredictionResult;

const DOB_FORMAT: &str = "%Y-%m-%d";

/// Full years between `date_of_birth` and `today`.
/// Missing, malformed or future dates give 0.
pub fn compute_age(date_of_birth: Option<&str>, today: NaiveDate) -> i32 {
    let Some(dob) = date_of_birth
        .map(str::trim)
        .and_then(|s| NaiveDate::parse_from_str(s, DOB_FORMAT).ok())
    else {
        return 0;
    };

    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years.max(0)
}

/// Append one history record for `patient`. Returns whether it was stored.
pub fn record_prediction(
    conn: &Connection,
    directory: &dyn PatientDirectory,
    patient: &Patient,
    symptoms: &SymptomSet,
    result: &PredictionResult,
    disease_id: Option<Uuid>,
    now: NaiveDateTime,
) -> bool {
    let record = PredictionHistory {
        id: Uuid::new_v4(),
        patient_id: patient.id,
        symptoms: symptoms.to_vec(),
        disease_id,
        disease_name: result.disease_name.clone(),
        confidence_score: result.confidence,
        patient_age: compute_age(patient.date_of_birth.as_deref(), now.date()),
        additional_notes: String::new(),
        consulted_doctor: false,
        created_at: now,
    };

    match directory.append_prediction(conn, &record) {
        Ok(()) => {
            tracing::debug!(patient_id = %patient.id, disease = %record.disease_name, "Prediction recorded");
            true
        }
        Err(e) => {
            tracing::error!(patient_id = %patient.id, error = %e, "Failed to record prediction");
            false
        }
    }
}
