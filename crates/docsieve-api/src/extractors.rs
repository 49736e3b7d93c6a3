//! # Custom Extractors & Validation
//!
//! Provides the [`Validatable`] trait for request DTOs and helpers that
//! extract and validate JSON bodies and query strings in handlers.
//!
//! A request is validated by round-tripping it through `serde_json` into a
//! [`Document`](docsieve_core::Document) and running the schema the DTO
//! declares. Validation failures become [`AppError::ValidationFailed`], which
//! renders the 400 failure payload.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use docsieve_core::to_document;
use docsieve_schema::{MapValidator, Schema};
use serde::Serialize;

use crate::error::AppError;

/// Request types that declare their validation schema.
///
/// The schema may depend on the instance, so a DTO can register a field only
/// when another field is set.
pub trait Validatable {
    /// Register this type's fields on `v`.
    fn validate(&self, v: &mut MapValidator);
}

/// Build the schema `data` declares for itself.
pub fn schema_for<T: Validatable>(data: &T) -> Result<Schema, AppError> {
    Ok(Schema::new(|v| data.validate(v))?)
}

/// Validate `data` against its own schema.
///
/// # Errors
///
/// [`AppError::ValidationFailed`] carrying every failing field, or an
/// internal error if the schema does not build or `data` cannot be
/// serialized.
pub fn validate_struct<T: Validatable + Serialize>(data: &T) -> Result<(), AppError> {
    let schema = schema_for(data)?;
    let document = to_document(data)?;
    schema.check(&document).map_err(AppError::ValidationFailed)
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it with [`validate_struct`].
pub fn extract_validated_json<T: Validatable + Serialize>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    validate_struct(&value)?;
    Ok(value)
}

/// Extract a query string and validate it with [`validate_struct`].
pub fn extract_validated_query<T: Validatable + Serialize>(
    result: Result<Query<T>, QueryRejection>,
) -> Result<T, AppError> {
    let value = result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))?;
    validate_struct(&value)?;
    Ok(value)
}
