//! HTTP API for the symptom advisor.
//!
//! Routes are nested under `/api/` and wrapped by access logging. The
//! router is composable: `advisor_api_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::advisor_api_router;
pub use server::{start_advisor_api_server, AdvisorApiServer, ApiSession};
pub use types::{ApiContext, DatabaseHandle};
