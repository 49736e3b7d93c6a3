//! # Error Types
//!
//! Errors raised while turning caller data into a [`Document`](crate::Document).
//! Validation failures are never errors; they are reported as
//! [`MessageRecord`](crate::MessageRecord) data.

use thiserror::Error;

/// Error converting caller data into a document.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The value could not be serialized into the JSON data model.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document root was not a string-keyed map.
    #[error("document root must be an object, found {found}")]
    NotAnObject {
        /// Kind of the value found at the root.
        found: &'static str,
    },
}
