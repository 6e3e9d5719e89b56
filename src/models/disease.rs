use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ExerciseIntensity, SeverityLevel};

/// A disease curated in the structured catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disease {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub severity_level: SeverityLevel,
    /// e.g. Cardiologist, Gastroenterologist
    pub specialist_required: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseasePrecaution {
    pub id: Uuid,
    pub disease_id: Uuid,
    pub precaution: String,
    /// 1 = highest priority
    pub priority: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseDiet {
    pub id: Uuid,
    pub disease_id: Uuid,
    pub food_item: String,
    /// true = eat, false = avoid
    pub is_recommended: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseExercise {
    pub id: Uuid,
    pub disease_id: Uuid,
    pub exercise_name: String,
    pub description: String,
    pub duration: String,
    pub intensity: ExerciseIntensity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseMedicine {
    pub id: Uuid,
    pub disease_id: Uuid,
    pub medicine_name: String,
    pub generic_name: Option<String>,
    pub dosage: String,
    pub description: String,
    pub side_effects: Option<String>,
    /// 1 = first choice
    pub priority: i32,
}

/// Display-form symptom offered by the symptom checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSymptom {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}
