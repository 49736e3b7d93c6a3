//! Numeric bounds and integer membership.
//!
//! Bounds widen every number to `f64` before comparing, so `min(10)` accepts
//! `10u8`, `10i64` and `10.5f32` alike. Non-numbers pass.

use docsieve_core::{Path, Value};

use super::{check, join_list};
use crate::rule::{Outcome, Rule};

/// Numbers below `n` fail.
pub fn min(n: f64) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| v.as_number().map_or(true, |num| num.as_f64() >= n),
            |last| format!("{last} must be at least {n}"),
        )
    }
}

/// Numbers above `n` fail.
pub fn max(n: f64) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| v.as_number().map_or(true, |num| num.as_f64() <= n),
            |last| format!("{last} may not be greater than {n}"),
        )
    }
}

/// Integers must be one of `allowed`. Floats and integers outside the `i64`
/// range are not checked.
pub fn within(allowed: Vec<i64>) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| {
                v.as_number()
                    .and_then(|num| num.as_i64())
                    .map_or(true, |i| allowed.contains(&i))
            },
            |last| format!("{last} may only contain {}", join_list(&allowed)),
        )
    }
}
