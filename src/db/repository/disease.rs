use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use crate::db::{format_timestamp, parse_timestamp, parse_uuid, DatabaseError};
use crate::models::enums::*;
use crate::models::*;

pub fn insert_disease(conn: &Connection, disease: &Disease) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO diseases (id, name, description, severity_level, specialist_required, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            disease.id.to_string(),
            disease.name,
            disease.description,
            disease.severity_level.as_str(),
            disease.specialist_required,
            format_timestamp(&disease.created_at),
        ],
    )?;
    Ok(())
}

pub fn insert_precaution(conn: &Connection, p: &DiseasePrecaution) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO disease_precautions (id, disease_id, precaution, priority)
         VALUES (?1, ?2, ?3, ?4)",
        params![p.id.to_string(), p.disease_id.to_string(), p.precaution, p.priority],
    )?;
    Ok(())
}

pub fn insert_diet(conn: &Connection, d: &DiseaseDiet) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO disease_diets (id, disease_id, food_item, is_recommended, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            d.id.to_string(),
            d.disease_id.to_string(),
            d.food_item,
            d.is_recommended as i32,
            d.description,
        ],
    )?;
    Ok(())
}

pub fn insert_exercise(conn: &Connection, e: &DiseaseExercise) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO disease_exercises (id, disease_id, exercise_name, description, duration, intensity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            e.id.to_string(),
            e.disease_id.to_string(),
            e.exercise_name,
            e.description,
            e.duration,
            e.intensity.as_str(),
        ],
    )?;
    Ok(())
}

pub fn insert_medicine(conn: &Connection, m: &DiseaseMedicine) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO disease_medicines
         (id, disease_id, medicine_name, generic_name, dosage, description, side_effects, priority)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            m.id.to_string(),
            m.disease_id.to_string(),
            m.medicine_name,
            m.generic_name,
            m.dosage,
            m.description,
            m.side_effects,
            m.priority,
        ],
    )?;
    Ok(())
}

const DISEASE_COLUMNS: &str =
    "id, name, description, severity_level, specialist_required, created_at";

type DiseaseRow = (String, String, String, String, String, String);

fn read_disease_row(row: &Row<'_>) -> rusqlite::Result<DiseaseRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn disease_from_row(row: DiseaseRow) -> Result<Disease, DatabaseError> {
    let (id, name, description, severity, specialist, created_at) = row;
    Ok(Disease {
        id: parse_uuid(&id)?,
        name,
        description,
        severity_level: SeverityLevel::from_str(&severity)?,
        specialist_required: specialist,
        created_at: parse_timestamp(&created_at),
    })
}

/// Exact-name lookup, as used by the scoring engine.
pub fn get_disease_by_name(conn: &Connection, name: &str) -> Result<Option<Disease>, DatabaseError> {
    let row = conn
        .query_row(
            &format!("SELECT {DISEASE_COLUMNS} FROM diseases WHERE name = ?1"),
            params![name],
            read_disease_row,
        )
        .optional()?;
    row.map(disease_from_row).transpose()
}

/// Case-insensitive lookup, as used by the disease detail page.
pub fn find_disease_by_name_nocase(
    conn: &Connection,
    name: &str,
) -> Result<Option<Disease>, DatabaseError> {
    let row = conn
        .query_row(
            &format!(
                "SELECT {DISEASE_COLUMNS} FROM diseases WHERE name = ?1 COLLATE NOCASE
                 ORDER BY name LIMIT 1"
            ),
            params![name.trim()],
            read_disease_row,
        )
        .optional()?;
    row.map(disease_from_row).transpose()
}

pub fn get_disease_by_id(conn: &Connection, id: &Uuid) -> Result<Option<Disease>, DatabaseError> {
    let row = conn
        .query_row(
            &format!("SELECT {DISEASE_COLUMNS} FROM diseases WHERE id = ?1"),
            params![id.to_string()],
            read_disease_row,
        )
        .optional()?;
    row.map(disease_from_row).transpose()
}

/// Precaution texts, highest priority (lowest number) first.
pub fn get_precautions(conn: &Connection, disease_id: &Uuid) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT precaution FROM disease_precautions
         WHERE disease_id = ?1 ORDER BY priority ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![disease_id.to_string()], |row| row.get::<_, String>(0))?;
    let mut precautions = Vec::new();
    for row in rows {
        precautions.push(row?);
    }
    Ok(precautions)
}

pub fn get_diet_items(conn: &Connection, disease_id: &Uuid) -> Result<Vec<DiseaseDiet>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, disease_id, food_item, is_recommended, description
         FROM disease_diets WHERE disease_id = ?1 ORDER BY rowid ASC",
    )?;
    let rows = stmt.query_map(params![disease_id.to_string()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i32>(3)?,
            row.get::<_, Option<String>>(4)?,
        ))
    })?;

    let mut items = Vec::new();
    for row in rows {
        let (id, disease_id, food_item, is_recommended, description) = row?;
        items.push(DiseaseDiet {
            id: parse_uuid(&id)?,
            disease_id: parse_uuid(&disease_id)?,
            food_item,
            is_recommended: is_recommended != 0,
            description,
        });
    }
    Ok(items)
}

pub fn get_exercises(conn: &Connection, disease_id: &Uuid) -> Result<Vec<DiseaseExercise>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, disease_id, exercise_name, description, duration, intensity
         FROM disease_exercises WHERE disease_id = ?1 ORDER BY rowid ASC",
    )?;
    let rows = stmt.query_map(params![disease_id.to_string()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
        ))
    })?;

    let mut exercises = Vec::new();
    for row in rows {
        let (id, disease_id, exercise_name, description, duration, intensity) = row?;
        exercises.push(DiseaseExercise {
            id: parse_uuid(&id)?,
            disease_id: parse_uuid(&disease_id)?,
            exercise_name,
            description,
            duration,
            intensity: ExerciseIntensity::from_str(&intensity)?,
        });
    }
    Ok(exercises)
}

/// First `limit` medicines by ascending priority.
pub fn get_top_medicines(
    conn: &Connection,
    disease_id: &Uuid,
    limit: usize,
) -> Result<Vec<DiseaseMedicine>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, disease_id, medicine_name, generic_name, dosage, description, side_effects, priority
         FROM disease_medicines WHERE disease_id = ?1
         ORDER BY priority ASC, rowid ASC LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![disease_id.to_string(), limit as i64], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, Option<String>>(6)?,
            row.get::<_, i32>(7)?,
        ))
    })?;

    let mut medicines = Vec::new();
    for row in rows {
        let (id, disease_id, medicine_name, generic_name, dosage, description, side_effects, priority) =
            row?;
        medicines.push(DiseaseMedicine {
            id: parse_uuid(&id)?,
            disease_id: parse_uuid(&disease_id)?,
            medicine_name,
            generic_name,
            dosage,
            description,
            side_effects,
            priority,
        });
    }
    Ok(medicines)
}
