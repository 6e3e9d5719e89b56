//! Prediction history endpoints.
//!
//! - `GET /api/patients/:id/history`: all predictions, newest first
//! - `GET /api/patients/:id/latest`: latest prediction with its disease view

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::advisor::{self, LatestResult};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::PredictionHistory;

#[derive(Serialize)]
pub struct HistoryResponse {
    pub patient_id: Uuid,
    pub predictions: Vec<PredictionHistory>,
}

fn parse_patient_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError::BadRequest(format!("Invalid patient ID: {e}")))
}

pub async fn history(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let patient_id = parse_patient_id(&patient_id)?;
    let predictions = ctx.with_conn(|conn| {
        Ok(advisor::prediction_history(conn, ctx.directory.as_ref(), &patient_id)?)
    })?;
    Ok(Json(HistoryResponse {
        patient_id,
        predictions,
    }))
}

pub async fn latest(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
) -> Result<Json<LatestResult>, ApiError> {
    let patient_id = parse_patient_id(&patient_id)?;
    let latest = ctx.with_conn(|conn| {
        Ok(advisor::latest_result(
            conn,
            ctx.catalog.as_ref(),
            ctx.directory.as_ref(),
            &patient_id,
        )?)
    })?;
    Ok(Json(latest))
}
