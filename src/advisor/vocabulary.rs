//! Symptom vocabulary derived from the profile table.
//!
//! The symptom checker lists display names (`Chest Pain`) while the scorer
//! matches canonical keys (`chest_pain`). `sync_symptoms` keeps the catalog's
//! symptom table in step with every key a profile can match.

use std::collections::BTreeSet;

use rusqlite::Connection;
use serde::Serialize;
use uuid::Uuid;

use crate::db::repository::{catalog_symptom_exists, insert_catalog_symptom};
use crate::db::DatabaseError;
use crate::models::CatalogSymptom;

use super::profiles::disease_profiles;

/// One selectable symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub key: &'static str,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub total: usize,
    pub created: usize,
}

/// Every canonical key used by any profile, sorted, without duplicates.
pub fn all_profile_symptoms() -> Vec<&'static str> {
    disease_profiles()
        .iter()
        .flat_map(|p| p.symptoms())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `chest_pain` → `Chest Pain`.
pub fn to_display(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(title_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn vocabulary() -> Vec<VocabularyEntry> {
    all_profile_symptoms()
        .into_iter()
        .map(|key| VocabularyEntry {
            key,
            display: to_display(key),
        })
        .collect()
}

/// Insert a catalog symptom for each profile key whose display name is not
/// already present (case-insensitive). Safe to run on every start.
pub fn sync_symptoms(conn: &Connection) -> Result<SyncReport, DatabaseError> {
    let keys = all_profile_symptoms();
    let mut created = 0;

    for key in &keys {
        let display = to_display(key);
        if catalog_symptom_exists(conn, &display)? {
            continue;
        }
        insert_catalog_symptom(
            conn,
            &CatalogSymptom {
                id: Uuid::new_v4(),
                name: display,
                description: String::new(),
            },
        )?;
        created += 1;
    }

    let report = SyncReport {
        total: keys.len(),
        created,
    };
    tracing::info!(total = report.total, created = report.created, "Symptom vocabulary synced");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::get_catalog_symptoms;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn display_names_are_title_cased() {
        assert_eq!(to_display("chest_pain"), "Chest Pain");
        assert_eq!(to_display("fever"), "Fever");
        assert_eq!(to_display("_runny__nose_"), "Runny Nose");
    }

    #[test]
    fn profile_symptoms_sorted_and_unique() {
        let keys = all_profile_symptoms();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(keys.contains(&"headache"));
        assert!(keys.contains(&"regurgitation"));
    }

    #[test]
    fn sync_is_idempotent() {
        let conn = open_memory_database().unwrap();
        let first = sync_symptoms(&conn).unwrap();
        assert_eq!(first.created, first.total);

        let second = sync_symptoms(&conn).unwrap();
        assert_eq!(second.total, first.total);
        assert_eq!(second.created, 0);
        assert_eq!(get_catalog_symptoms(&conn).unwrap().len(), first.total);
    }

    #[test]
    fn sync_skips_existing_names_ignoring_case() {
        let conn = open_memory_database().unwrap();
        insert_catalog_symptom(
            &conn,
            &CatalogSymptom {
                id: Uuid::new_v4(),
                name: "HEADACHE".into(),
                description: "Pain in the head".into(),
            },
        )
        .unwrap();
        let report = sync_symptoms(&conn).unwrap();
        assert_eq!(report.created, report.total - 1);
    }
}
