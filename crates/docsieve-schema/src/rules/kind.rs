//! Kind checks: string, number, boolean.

use docsieve_core::{Path, Value};

use super::check;
use crate::rule::{Outcome, Rule};

/// Require a string.
pub fn string() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| matches!(v, Value::String(_)),
            |last| format!("{last} must be a string"),
        )
    }
}

/// Require a number of any integer or float width.
pub fn num() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| matches!(v, Value::Number(_)),
            |last| format!("{last} must be a number"),
        )
    }
}

/// Require a boolean.
pub fn boolean() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| matches!(v, Value::Bool(_)),
            |last| format!("{last} must be true or false"),
        )
    }
}
