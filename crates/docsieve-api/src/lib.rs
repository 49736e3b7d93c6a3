//! # docsieve-api: Request Binding and Validation Service
//!
//! Connects the validation engine to HTTP request handling:
//!
//! - [`extractors`]: the [`Validatable`](extractors::Validatable) trait and
//!   helpers that deserialize a JSON body or query string, validate it
//!   against the schema the type declares, and map failures to
//!   [`AppError`].
//! - [`dto`]: request shapes for the account service with their schemas.
//! - [`catalog`]: every DTO schema under a stable name.
//! - [`routes`]: an Axum API validating documents against catalog schemas.
//!
//! ## API Surface
//!
//! | Prefix | Module | Purpose |
//! |--------|--------|---------|
//! | `/v1/schemas` | [`routes::validation`] | Catalog listing |
//! | `/v1/validate/*` | [`routes::validation`] | Document validation |
//! | `/health/liveness` | this crate | Liveness probe |
//!
//! ## Failure payload
//!
//! A request that fails validation is answered with 400 and
//!
//! ```json
//! {"message": "validation failed", "errors": {"<dotted.path>": ["<message>", ...]}}
//! ```
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - No validation logic in route handlers; schemas live with their DTOs.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod catalog;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use catalog::SchemaCatalog;
pub use error::AppError;
pub use extractors::{
    extract_json, extract_validated_json, extract_validated_query, validate_struct, Validatable,
};
pub use state::{AppConfig, AppState};

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::validation::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new().route("/health/liveness", axum::routing::get(liveness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}
