use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::{format_timestamp, parse_uuid, DatabaseError};
use crate::models::*;

pub fn insert_catalog_symptom(conn: &Connection, symptom: &CatalogSymptom) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO symptoms (id, name, description) VALUES (?1, ?2, ?3)",
        params![symptom.id.to_string(), symptom.name, symptom.description],
    )?;
    Ok(())
}

pub fn get_catalog_symptoms(conn: &Connection) -> Result<Vec<CatalogSymptom>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM symptoms ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut symptoms = Vec::new();
    for row in rows {
        let (id, name, description) = row?;
        symptoms.push(CatalogSymptom {
            id: parse_uuid(&id)?,
            name,
            description,
        });
    }
    Ok(symptoms)
}

/// Case-insensitive existence check (the `name` column is `COLLATE NOCASE`).
pub fn catalog_symptom_exists(conn: &Connection, name: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM symptoms WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn insert_symptom_suggestion(
    conn: &Connection,
    suggestion: &CustomSymptomSuggestion,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO custom_symptom_suggestions
         (id, symptom_name, symptom_description, suggested_by, is_approved, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            suggestion.id.to_string(),
            suggestion.symptom_name,
            suggestion.symptom_description,
            suggestion.suggested_by.map(|id| id.to_string()),
            suggestion.is_approved as i32,
            format_timestamp(&suggestion.created_at),
        ],
    )?;
    Ok(())
}

/// Whether the same name (case-insensitive) was suggested at or after `since`.
pub fn suggestion_submitted_since(
    conn: &Connection,
    name: &str,
    since: &NaiveDateTime,
) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM custom_symptom_suggestions
         WHERE symptom_name = ?1 COLLATE NOCASE AND created_at >= ?2",
        params![name, format_timestamp(since)],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn count_symptom_suggestions(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM custom_symptom_suggestions",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use chrono::{Duration, Local};

    fn suggestion(name: &str, days_ago: i64) -> CustomSymptomSuggestion {
        CustomSymptomSuggestion {
            id: Uuid::new_v4(),
            symptom_name: name.into(),
            symptom_description: String::new(),
            suggested_by: None,
            is_approved: false,
            created_at: Local::now().naive_local() - Duration::days(days_ago),
        }
    }

    #[test]
    fn symptom_names_unique_ignoring_case() {
        let conn = open_memory_database().unwrap();
        let first = CatalogSymptom {
            id: Uuid::new_v4(),
            name: "Chest Pain".into(),
            description: String::new(),
        };
        insert_catalog_symptom(&conn, &first).unwrap();
        assert!(catalog_symptom_exists(&conn, "chest pain").unwrap());

        let dup = CatalogSymptom { id: Uuid::new_v4(), ..first };
        assert!(insert_catalog_symptom(&conn, &CatalogSymptom { name: "CHEST PAIN".into(), ..dup }).is_err());
    }

    #[test]
    fn recent_suggestion_detected() {
        let conn = open_memory_database().unwrap();
        insert_symptom_suggestion(&conn, &suggestion("Ear Ringing", 2)).unwrap();
        let week_ago = Local::now().naive_local() - Duration::days(7);
        assert!(suggestion_submitted_since(&conn, "ear ringing", &week_ago).unwrap());
    }

    #[test]
    fn old_suggestion_ignored() {
        let conn = open_memory_database().unwrap();
        insert_symptom_suggestion(&conn, &suggestion("Ear Ringing", 30)).unwrap();
        let week_ago = Local::now().naive_local() - Duration::days(7);
        assert!(!suggestion_submitted_since(&conn, "Ear Ringing", &week_ago).unwrap());
        assert_eq!(count_symptom_suggestions(&conn).unwrap(), 1);
    }
}
