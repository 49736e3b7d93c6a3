//! # API Route Modules
//!
//! - `validation`: the schema catalog listing and ad-hoc document
//!   validation against a named schema.

pub mod validation;
