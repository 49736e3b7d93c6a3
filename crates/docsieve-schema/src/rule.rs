//! # Rules
//!
//! A [`Rule`] is one atomic check in a field's chain: it receives the field's
//! path and current value and returns an [`Outcome`] carrying the value for
//! the next rule, the failures it found, and a pass flag.
//!
//! Rules are pure. Any closure of the right shape is a rule:
//!
//! ```
//! use docsieve_schema::{Outcome, Path, Schema, Value};
//!
//! let schema = Schema::new(|v| {
//!     v.field("handle").rule(|path: &Path, value: Value| {
//!         let prefixed = matches!(value.unwrap_optional(), Value::String(s) if s.starts_with('@'));
//!         if prefixed {
//!             Outcome::fail_at(value, path, format!("{} must not start with @", path.last()))
//!         } else {
//!             Outcome::pass(value)
//!         }
//!     });
//! })
//! .expect("schema builds");
//! # let _ = schema;
//! ```

use docsieve_core::{MessageRecord, Path, Value};

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Value handed to the next rule in the chain.
    pub value: Value,
    /// Failures found by this rule; empty when it passed.
    pub messages: MessageRecord,
    /// Whether the rule passed.
    pub passed: bool,
}

impl Outcome {
    /// A passing outcome forwarding `value`.
    pub fn pass(value: Value) -> Self {
        Self {
            value,
            messages: MessageRecord::new(),
            passed: true,
        }
    }

    /// A failing outcome with one message at `path`.
    pub fn fail_at(value: Value, path: &Path, message: impl Into<String>) -> Self {
        Self {
            value,
            messages: MessageRecord::single(path, message),
            passed: false,
        }
    }

    /// An outcome whose verdict is derived from `messages`: it passes exactly
    /// when the record is empty.
    pub fn from_record(value: Value, messages: MessageRecord) -> Self {
        let passed = messages.is_empty();
        Self {
            value,
            messages,
            passed,
        }
    }
}

/// One unit of validation logic.
pub trait Rule: Send + Sync {
    /// Check `value` located at `path`.
    fn apply(&self, path: &Path, value: Value) -> Outcome;
}

impl<F> Rule for F
where
    F: Fn(&Path, Value) -> Outcome + Send + Sync,
{
    fn apply(&self, path: &Path, value: Value) -> Outcome {
        self(path, value)
    }
}
