//! # Validation API
//!
//! Validates arbitrary JSON documents against schemas from the catalog.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET` | `/v1/schemas` | `{"schemas": [...]}` |
//! | `POST` | `/v1/validate/{schema}` | 200 `{"valid": true}`, 400 failure payload, 404 unknown schema |

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use docsieve_core::document_from_json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Catalog listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SchemaList {
    pub schemas: Vec<String>,
}

/// Body returned for a passing document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidResponse {
    pub valid: bool,
}

/// Build the validation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/schemas", get(list_schemas))
        .route("/v1/validate/{schema}", post(validate_document))
}

/// GET /v1/schemas: List catalog schema names.
async fn list_schemas(State(state): State<AppState>) -> Json<SchemaList> {
    Json(SchemaList {
        schemas: state.catalog.names().map(str::to_string).collect(),
    })
}

/// POST /v1/validate/{schema}: Validate the body against a named schema.
async fn validate_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ValidResponse>, AppError> {
    let schema = state
        .catalog
        .get(&name)
        .ok_or_else(|| AppError::NotFound(format!("schema '{name}'")))?;

    let document = document_from_json(extract_json(body)?)?;
    schema.check(&document).map_err(AppError::ValidationFailed)?;

    tracing::debug!(schema = %name, "document accepted");
    Ok(Json(ValidResponse { valid: true }))
}
