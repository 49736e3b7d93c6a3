//! Presence: the only rule that fails an absent value.

use docsieve_core::{Path, Value};

use crate::rule::{Outcome, Rule};

/// Fail when the unwrapped value is absent, null, or the empty string.
///
/// `0`, `false`, and empty sequences or maps are present.
pub fn required() -> impl Rule {
    |path: &Path, value: Value| {
        let missing = match value.unwrap_optional() {
            Value::Absent | Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };

        if missing {
            let msg = format!("{} is required", path.last());
            Outcome::fail_at(value, path, msg)
        } else {
            Outcome::pass(value)
        }
    }
}
