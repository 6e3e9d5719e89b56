//! `POST /api/predict`: symptom check.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::advisor::{self, PredictionRequest, PredictionResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

pub async fn predict(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(request) = payload?;
    let response = ctx.with_conn(|conn| {
        Ok(advisor::predict(
            conn,
            ctx.catalog.as_ref(),
            ctx.directory.as_ref(),
            &request,
        )?)
    })?;
    Ok(Json(response))
}
