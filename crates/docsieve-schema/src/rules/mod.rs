//! # Rule Library
//!
//! Constructors for the built-in rules. Each returns an `impl Rule` and is
//! wired to a fluent method on [`FieldValidator`](crate::FieldValidator).
//!
//! | Module | Rules |
//! |--------|-------|
//! | [`presence`] | `required` |
//! | [`kind`] | `string`, `num`, `boolean` |
//! | [`text`] | `alpha`, `regex`, `email`, `date`, `base64`, `uuid`, `min_s`, `max_s`, `min_rune`, `max_rune`, `within_s` |
//! | [`numeric`] | `min`, `max`, `within` |
//! | [`collection`] | `max_len`, `map`, `slice` |
//!
//! ## Shared contract
//!
//! Unless a rule states otherwise, it unwraps optional references first and
//! passes an absent or null value untouched. Messages are prefixed with the
//! final segment of the field's path.

pub mod collection;
pub mod kind;
pub mod numeric;
pub mod presence;
pub mod text;

use docsieve_core::{Path, Value};

use crate::rule::Outcome;

/// Apply a predicate under the shared contract: nil values pass, others pass
/// when `valid` holds and otherwise fail with `message(last_segment)`.
pub(crate) fn check<V, M>(path: &Path, value: Value, valid: V, message: M) -> Outcome
where
    V: FnOnce(&Value) -> bool,
    M: FnOnce(&str) -> String,
{
    let inner = value.unwrap_optional();
    if inner.is_nil() || valid(inner) {
        Outcome::pass(value)
    } else {
        let msg = message(path.last());
        Outcome::fail_at(value, path, msg)
    }
}

/// Join listed values the way membership messages print them.
pub(crate) fn join_list<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
