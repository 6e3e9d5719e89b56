//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use crate::advisor::profiles::disease_profiles;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub diseases: usize,
}

/// `GET /api/health`: liveness plus the number of scorable diseases.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        diseases: disease_profiles().len(),
    })
}
