//! # docsieve-schema: Declarative Document Validation
//!
//! A fluent, composable engine for validating dynamically-typed, nested
//! documents against a schema assembled at runtime.
//!
//! ## Building a schema
//!
//! ```
//! use docsieve_schema::Schema;
//!
//! let schema = Schema::new(|v| {
//!     v.field("email").required().string().email();
//!     v.field("address").map(|v| {
//!         v.field("city").required().string();
//!     });
//!     v.field("tags").slice(|v| {
//!         v.string().max_s(32);
//!     });
//! })
//! .expect("schema builds");
//! # let _ = schema;
//! ```
//!
//! ## Evaluation model
//!
//! - A [`FieldValidator`] runs its rule chain in registration order and stops
//!   at the first failing rule: at most one failure is reported per field.
//! - A [`MapValidator`] runs every field, never stopping early, and merges the
//!   per-field [`MessageRecord`]s.
//! - `map` and `slice` rules delegate to a nested validator with the path
//!   extended by the field name or the element index, so failures are keyed
//!   like `one.two.children.0.id`.
//! - Every rule except `required`, `min_rune` and `max_rune` passes an absent
//!   value; presence is decided by `required` alone.
//!
//! ## Build-time errors
//!
//! Schema construction is where configuration mistakes surface: an invalid
//! regular expression is recorded while building and [`Schema::new`] returns
//! [`SchemaError`]. Validation itself never fails; it returns data.
//!
//! ## Thread safety
//!
//! A built [`Schema`] is immutable, `Send + Sync`, and cheap to clone.

pub mod error;
pub mod field;
pub mod map;
pub mod rule;
pub mod rules;

pub use docsieve_core::{Document, MessageRecord, Path, Value};
pub use error::SchemaError;
pub use field::FieldValidator;
pub use map::{MapValidator, Schema};
pub use rule::{Outcome, Rule};
