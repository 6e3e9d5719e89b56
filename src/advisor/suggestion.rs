//! Patient-submitted symptom suggestions, stored unapproved for review.

use chrono::{Duration, NaiveDateTime};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::repository::{
    catalog_symptom_exists, get_patient, insert_symptom_suggestion, suggestion_submitted_since,
};
use crate::models::CustomSymptomSuggestion;

use super::types::AdvisorError;

const MIN_NAME_CHARS: usize = 2;
const DUPLICATE_WINDOW_DAYS: i64 = 7;

pub fn suggest_symptom(
    conn: &Connection,
    suggested_by: Option<Uuid>,
    name: &str,
    description: &str,
) -> Result<CustomSymptomSuggestion, AdvisorError> {
    suggest_symptom_at(conn, suggested_by, name, description, chrono::Local::now().naive_local())
}

pub fn suggest_symptom_at(
    conn: &Connection,
    suggested_by: Option<Uuid>,
    name: &str,
    description: &str,
    now: NaiveDateTime,
) -> Result<CustomSymptomSuggestion, AdvisorError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AdvisorError::Validation("Please enter a symptom name".into()));
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(AdvisorError::Validation(
            "Symptom name must be at least 2 characters long".into(),
        ));
    }
    if catalog_symptom_exists(conn, name)? {
        return Err(AdvisorError::Validation(
            "This symptom already exists in our database".into(),
        ));
    }
    let window_start = now - Duration::days(DUPLICATE_WINDOW_DAYS);
    if suggestion_submitted_since(conn, name, &window_start)? {
        return Err(AdvisorError::Validation(
            "This symptom suggestion was recently submitted. Thank you for your interest!".into(),
        ));
    }

    let suggested_by = match suggested_by {
        Some(id) => {
            let known = get_patient(conn, &id)?.map(|p| p.id);
            if known.is_none() {
                tracing::warn!(patient_id = %id, "Suggestion from unknown patient stored anonymously");
            }
            known
        }
        None => None,
    };

    let suggestion = CustomSymptomSuggestion {
        id: Uuid::new_v4(),
        symptom_name: name.to_string(),
        symptom_description: description.trim().to_string(),
        suggested_by,
        is_approved: false,
        created_at: now,
    };
    insert_symptom_suggestion(conn, &suggestion)?;
    tracing::info!(symptom = %suggestion.symptom_name, "Symptom suggestion stored");
    Ok(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::vocabulary::sync_symptoms;
    use crate::db::repository::count_symptom_suggestions;
    use crate::db::sqlite::open_memory_database;

    fn message(err: AdvisorError) -> String {
        match err {
            AdvisorError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn stores_trimmed_unapproved_suggestion() {
        let conn = open_memory_database().unwrap();
        let s = suggest_symptom(&conn, None, "  Ear Ringing ", " constant buzz ").unwrap();
        assert_eq!(s.symptom_name, "Ear Ringing");
        assert_eq!(s.symptom_description, "constant buzz");
        assert!(!s.is_approved);
        assert_eq!(count_symptom_suggestions(&conn).unwrap(), 1);
    }

    #[test]
    fn unknown_patient_is_dropped_from_suggestion() {
        let conn = open_memory_database().unwrap();
        let s = suggest_symptom(&conn, Some(Uuid::new_v4()), "Ear Ringing", "").unwrap();
        assert!(s.suggested_by.is_none());
    }

    #[test]
    fn rejects_blank_and_short_names() {
        let conn = open_memory_database().unwrap();
        assert_eq!(
            message(suggest_symptom(&conn, None, "   ", "").unwrap_err()),
            "Please enter a symptom name"
        );
        assert_eq!(
            message(suggest_symptom(&conn, None, "x", "").unwrap_err()),
            "Symptom name must be at least 2 characters long"
        );
    }

    #[test]
    fn rejects_existing_catalog_symptom() {
        let conn = open_memory_database().unwrap();
        sync_symptoms(&conn).unwrap();
        assert_eq!(
            message(suggest_symptom(&conn, None, "chest pain", "").unwrap_err()),
            "This symptom already exists in our database"
        );
    }

    #[test]
    fn duplicate_within_a_week_rejected_then_allowed() {
        let conn = open_memory_database().unwrap();
        let then = chrono::Local::now().naive_local() - Duration::days(10);
        suggest_symptom_at(&conn, None, "Ear Ringing", "", then).unwrap();

        let three_days_later = then + Duration::days(3);
        let err = suggest_symptom_at(&conn, None, "ear ringing", "", three_days_later).unwrap_err();
        assert!(message(err).starts_with("This symptom suggestion was recently submitted"));

        let eight_days_later = then + Duration::days(8);
        assert!(suggest_symptom_at(&conn, None, "ear ringing", "", eight_days_later).is_ok());
    }
}
