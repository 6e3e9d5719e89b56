//! Symptom vocabulary and suggestion endpoints.
//!
//! - `GET /api/symptoms`: every selectable symptom
//! - `POST /api/symptoms/suggestions`: submit a new symptom for review

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::suggestion::suggest_symptom;
use crate::advisor::vocabulary::{vocabulary, VocabularyEntry};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::CustomSymptomSuggestion;

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<VocabularyEntry>,
}

pub async fn list() -> Json<SymptomsResponse> {
    Json(SymptomsResponse {
        symptoms: vocabulary(),
    })
}

#[derive(Deserialize)]
pub struct SuggestionRequest {
    pub patient_id: Option<Uuid>,
    #[serde(default)]
    pub symptom_name: String,
    #[serde(default)]
    pub symptom_description: String,
}

#[derive(Serialize)]
pub struct SuggestionResponse {
    pub success: bool,
    pub message: &'static str,
    pub suggestion: CustomSymptomSuggestion,
}

pub async fn suggest(
    State(ctx): State<ApiContext>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SuggestionResponse>), ApiError> {
    let Json(req) = payload?;
    let suggestion = ctx.with_conn(|conn| {
        Ok(suggest_symptom(
            conn,
            req.patient_id,
            &req.symptom_name,
            &req.symptom_description,
        )?)
    })?;
    Ok((
        StatusCode::CREATED,
        Json(SuggestionResponse {
            success: true,
            message: "Thank you for your suggestion!",
            suggestion,
        }),
    ))
}
