//! Advisor API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/` and wrapped by the access logger.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the advisor API router over `ctx`.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn advisor_api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/symptoms", get(endpoints::symptoms::list))
        .route("/symptoms/suggestions", post(endpoints::symptoms::suggest))
        .route("/predict", post(endpoints::predict::predict))
        .route("/diseases/:name", get(endpoints::diseases::detail))
        .route("/patients/:id/history", get(endpoints::history::history))
        .route("/patients/:id/latest", get(endpoints::history::latest))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access));

    Router::new().nest("/api", routes)
}
