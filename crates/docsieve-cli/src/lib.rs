//! # docsieve-cli: Document Validation from the Command Line
//!
//! Provides the `docsieve` command-line interface over the schema catalog.
//!
//! ## Subcommands
//!
//! - `docsieve validate <SCHEMA> <FILE>`: validate a JSON or YAML document.
//! - `docsieve schemas`: list catalog schema names.
//!
//! ```bash
//! docsieve validate auth.sign-up request.json
//! docsieve validate user.create fixtures/user.yaml
//! ```
//!
//! Exit codes: 0 when the document passes, 1 when it fails validation,
//! 2 on operational errors (unreadable file, unknown schema).

pub mod document;
pub mod schemas;
pub mod validate;
