//! # Validate Subcommand
//!
//! Checks a JSON or YAML document against a named catalog schema.
//!
//! A failing document prints the same payload the HTTP API answers with,
//! `{"message": "validation failed", "errors": {...}}`, and exits 1.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use docsieve_api::error::ValidationErrorBody;
use docsieve_api::SchemaCatalog;
use docsieve_core::MessageRecord;

use crate::document::load_document;

/// Arguments for the `docsieve validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog schema name (see `docsieve schemas`).
    #[arg(value_name = "SCHEMA")]
    pub schema: String,

    /// Document to validate (.json, .yaml or .yml).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the document passes, 1 when it fails.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let catalog = SchemaCatalog::builtin().context("failed to build schema catalog")?;

    match check_document(&catalog, &args.schema, &args.path)? {
        None => {
            println!("valid");
            Ok(0)
        }
        Some(errors) => {
            let body = ValidationErrorBody::new(errors);
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(1)
        }
    }
}

/// Validate the document at `path` against the catalog schema `schema`.
///
/// Returns `None` when the document passes and the failure record
/// otherwise.
pub fn check_document(
    catalog: &SchemaCatalog,
    schema: &str,
    path: &Path,
) -> Result<Option<MessageRecord>> {
    let Some(schema_def) = catalog.get(schema) else {
        anyhow::bail!("unknown schema '{schema}' (run `docsieve schemas` to list names)");
    };

    let document = load_document(path)?;
    tracing::debug!(schema, path = %path.display(), fields = document.len(), "loaded document");

    match schema_def.check(&document) {
        Ok(()) => {
            tracing::info!(schema, "document passed");
            Ok(None)
        }
        Err(errors) => {
            tracing::info!(schema, failing_paths = errors.len(), "document failed validation");
            Ok(Some(errors))
        }
    }
}
