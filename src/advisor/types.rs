//! Value types shared by the advisor pipeline and serialised to API clients.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DatabaseError;
use crate::models::enums::SeverityLevel;

// ═══════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Payload is not a list of symptoms at all.
    #[error("Invalid symptoms payload")]
    InvalidInput,

    #[error("Please select at least one symptom")]
    EmptyInput,

    #[error("Could not predict disease. Please select at least two symptoms for a reliable prediction.")]
    NoEvidence,

    /// Disease known to neither the catalog nor the fallback base.
    #[error("{0}")]
    LookupMiss(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

// ═══════════════════════════════════════════
// Prediction
// ═══════════════════════════════════════════

/// Best-guess diagnosis for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub disease_name: String,
    /// Percentage in [5.0, 99.0], two decimals.
    pub confidence: f64,
    pub severity: String,
    pub specialist_required: String,
}

/// Scoring breakdown for one disease with at least one matching symptom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    pub disease_name: &'static str,
    pub match_count: usize,
    pub specificity: f64,
    pub coverage: f64,
    /// Weighted score before evidence shaping.
    pub raw_score: f64,
    /// Score after boost and single-symptom penalty.
    pub score: f64,
}

// ═══════════════════════════════════════════
// Recommendations
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietItem {
    pub food_item: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    #[serde(default)]
    pub recommended: Vec<DietItem>,
    #[serde(default)]
    pub avoid: Vec<DietItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseItem {
    pub exercise_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub intensity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicineItem {
    pub medicine_name: String,
    pub generic_name: String,
    pub dosage: String,
    pub description: String,
    pub side_effects: String,
}

/// Care recommendations for one disease. Every field is always present;
/// "no recommendations" is an empty bundle, never a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub precautions: Vec<String>,
    pub diet: DietPlan,
    pub exercises: Vec<ExerciseItem>,
    pub medicines: Vec<MedicineItem>,
}

impl RecommendationBundle {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.precautions.is_empty()
            && self.diet.recommended.is_empty()
            && self.diet.avoid.is_empty()
            && self.exercises.is_empty()
            && self.medicines.is_empty()
    }
}

/// Disease summary shown on detail pages, whichever source it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub name: String,
    pub description: String,
    pub severity_level: SeverityLevel,
    pub specialist_required: String,
}

// ═══════════════════════════════════════════
// Request / response payloads
// ═══════════════════════════════════════════

/// Symptom-selection request. `symptoms` is kept loosely typed: clients
/// send plain strings, `{value|name|text}` records, or worse.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub patient_id: Option<uuid::Uuid>,
    #[serde(default)]
    pub symptoms: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub disease_name: String,
    pub confidence: f64,
    pub severity: String,
    pub specialist: String,
    pub patient_name: String,
    pub patient_age: i32,
    pub recommendations: RecommendationBundle,
    /// False when the history write failed or no patient was identified.
    pub history_recorded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseDetail {
    pub disease: DiseaseInfo,
    /// "catalog" or "fallback"
    pub source: &'static str,
    pub recommendations: RecommendationBundle,
}

/// Latest history entry joined with its disease view.
#[derive(Debug, Clone, Serialize)]
pub struct LatestResult {
    pub prediction: crate::models::PredictionHistory,
    pub disease: DiseaseInfo,
    pub source: &'static str,
    pub recommendations: RecommendationBundle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bundle_has_every_key() {
        let json = serde_json::to_value(RecommendationBundle::empty()).unwrap();
        for key in ["precautions", "diet", "exercises", "medicines"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["diet"]["recommended"].as_array().unwrap().is_empty());
        assert!(json["diet"]["avoid"].as_array().unwrap().is_empty());
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(AdvisorError::EmptyInput.to_string(), "Please select at least one symptom");
        assert!(AdvisorError::NoEvidence.to_string().contains("at least two symptoms"));
    }
}
