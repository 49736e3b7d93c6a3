//! # Schema Construction Errors
//!
//! Developer errors detected while a schema is being built. They never arise
//! while validating a document.

use thiserror::Error;

/// Error raised while building a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A `regex` rule was given a pattern that does not compile.
    #[error("invalid pattern '{pattern}' on field '{field}': {source}")]
    InvalidPattern {
        /// Dotted key of the field the rule was registered on.
        field: String,
        /// The pattern as written.
        pattern: String,
        /// Compiler diagnostic.
        #[source]
        source: regex::Error,
    },

    /// More than one construction error was found.
    #[error("{} schema construction errors:\n{}", .0.len(), join_errors(.0))]
    Multiple(Vec<SchemaError>),
}

impl SchemaError {
    /// Fold collected errors into one. Returns `None` when there are none.
    pub(crate) fn collect(mut errors: Vec<SchemaError>) -> Option<SchemaError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(SchemaError::Multiple(errors)),
        }
    }
}

fn join_errors(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
