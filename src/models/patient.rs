use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
    /// Raw `YYYY-MM-DD` text as stored; may be missing or malformed.
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionHistory {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// Canonical symptom keys in submission order.
    pub symptoms: Vec<String>,
    /// Set when the predicted disease is catalogued.
    pub disease_id: Option<Uuid>,
    pub disease_name: String,
    pub confidence_score: f64,
    pub patient_age: i32,
    pub additional_notes: String,
    pub consulted_doctor: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomSymptomSuggestion {
    pub id: Uuid,
    pub symptom_name: String,
    pub symptom_description: String,
    pub suggested_by: Option<Uuid>,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}
