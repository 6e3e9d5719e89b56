//! `GET /api/diseases/:name`: disease detail with recommendations.

use axum::extract::{Path, State};
use axum::Json;

use crate::advisor::{self, DiseaseDetail};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Json<DiseaseDetail>, ApiError> {
    let detail = ctx.with_conn(|conn| Ok(advisor::disease_detail(conn, ctx.catalog.as_ref(), &name)?))?;
    Ok(Json(detail))
}
