use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::{format_timestamp, parse_timestamp, parse_uuid, DatabaseError};
use crate::models::*;

pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO patients (id, full_name, date_of_birth) VALUES (?1, ?2, ?3)",
        params![patient.id.to_string(), patient.full_name, patient.date_of_birth],
    )?;
    Ok(())
}

pub fn get_patient(conn: &Connection, id: &Uuid) -> Result<Option<Patient>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, full_name, date_of_birth FROM patients WHERE id = ?1",
            params![id.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((id, full_name, date_of_birth)) => Ok(Some(Patient {
            id: parse_uuid(&id)?,
            full_name,
            date_of_birth,
        })),
        None => Ok(None),
    }
}

pub fn insert_prediction(conn: &Connection, record: &PredictionHistory) -> Result<(), DatabaseError> {
    let symptoms = serde_json::to_string(&record.symptoms)
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;
    conn.execute(
        "INSERT INTO prediction_history
         (id, patient_id, symptoms, disease_id, disease_name, confidence_score, patient_age,
          additional_notes, consulted_doctor, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            record.id.to_string(),
            record.patient_id.to_string(),
            symptoms,
            record.disease_id.map(|id| id.to_string()),
            record.disease_name,
            record.confidence_score,
            record.patient_age,
            record.additional_notes,
            record.consulted_doctor as i32,
            format_timestamp(&record.created_at),
        ],
    )?;
    Ok(())
}

/// All predictions for a patient, newest first.
pub fn get_predictions_for_patient(
    conn: &Connection,
    patient_id: &Uuid,
) -> Result<Vec<PredictionHistory>, DatabaseError> {
    query_predictions(conn, patient_id, None)
}

pub fn get_latest_prediction(
    conn: &Connection,
    patient_id: &Uuid,
) -> Result<Option<PredictionHistory>, DatabaseError> {
    Ok(query_predictions(conn, patient_id, Some(1))?.into_iter().next())
}

type PredictionRow = (
    String, String, String, Option<String>, String,
    f64, i32, String, i32, String,
);

fn query_predictions(
    conn: &Connection,
    patient_id: &Uuid,
    limit: Option<usize>,
) -> Result<Vec<PredictionHistory>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, symptoms, disease_id, disease_name, confidence_score,
         patient_age, additional_notes, consulted_doctor, created_at
         FROM prediction_history WHERE patient_id = ?1
         ORDER BY created_at DESC, rowid DESC LIMIT ?2",
    )?;

    // SQLite treats a negative LIMIT as unbounded.
    let limit = limit.map(|l| l as i64).unwrap_or(-1);
    let rows = stmt.query_map(params![patient_id.to_string(), limit], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, f64>(5)?,
            row.get::<_, i32>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, i32>(8)?,
            row.get::<_, String>(9)?,
        ))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let row: PredictionRow = row?;
        let (
            id, patient_id, symptoms, disease_id, disease_name,
            confidence_score, patient_age, additional_notes, consulted_doctor, created_at,
        ) = row;
        records.push(PredictionHistory {
            id: parse_uuid(&id)?,
            patient_id: parse_uuid(&patient_id)?,
            // Older rows may hold a non-JSON symptom string; keep the row readable.
            symptoms: serde_json::from_str(&symptoms).unwrap_or_else(|_| vec![symptoms]),
            disease_id: disease_id.and_then(|s| Uuid::parse_str(&s).ok()),
            disease_name,
            confidence_score,
            patient_age,
            additional_notes,
            consulted_doctor: consulted_doctor != 0,
            created_at: parse_timestamp(&created_at),
        });
    }
    Ok(records)
}
