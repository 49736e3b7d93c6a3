//! # docsieve-core: Foundational Types for docsieve
//!
//! This crate defines the data model every other docsieve crate builds on.
//! It depends on nothing internal.
//!
//! ## Key Types
//!
//! 1. **[`Path`]**: an immutable breadcrumb of segments locating a value in a
//!    document tree. Joined with `.` it becomes the key under which failure
//!    messages are reported (`address.city`, `children.0.id`).
//!
//! 2. **[`MessageRecord`]**: path key → ordered list of human-readable
//!    messages. An empty record is the "passed" signal.
//!
//! 3. **[`Value`]**: the dynamically-typed datum a rule inspects: absent,
//!    null, bool, any-width number, string, sequence, string-keyed map, a map
//!    keyed by dynamic values, or an optional reference around any of these.
//!
//! 4. **[`Document`]**: the string-keyed root map handed to a schema.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `docsieve-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod path;
pub mod record;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use document::{document_from_json, to_document, Document};
pub use error::CoreError;
pub use path::Path;
pub use record::MessageRecord;
pub use value::{Number, Value};
