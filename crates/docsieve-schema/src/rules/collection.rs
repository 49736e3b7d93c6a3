//! # Collection Rules
//!
//! `map` and `slice` are the recursion points of the engine. Each holds a
//! nested validator built once with the schema and runs it with the path of
//! the value being checked, so the same nested validator serves every
//! element and every nesting depth.

use docsieve_core::{Document, MessageRecord, Path, Value};

use super::check;
use crate::field::FieldValidator;
use crate::map::MapValidator;
use crate::rule::{Outcome, Rule};

/// Sequences with more than `n` items fail; other kinds pass.
pub fn max_len(n: usize) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| match v {
                Value::Seq(items) => items.len() <= n,
                _ => true,
            },
            |last| format!("{last} may not contain more than {n} items"),
        )
    }
}

/// Nested-map rule. Built through [`map`].
#[derive(Debug)]
pub struct NestedMap {
    schema: MapValidator,
}

/// Require a string-keyed map and validate it with `schema`.
pub fn map(schema: MapValidator) -> NestedMap {
    NestedMap { schema }
}

impl Rule for NestedMap {
    fn apply(&self, path: &Path, value: Value) -> Outcome {
        let document = match value.into_unwrapped() {
            nil @ (Value::Absent | Value::Null) => return Outcome::pass(nil),
            Value::Map(document) => document,
            Value::Dict(entries) => match string_keyed(entries) {
                Some(document) => document,
                None => {
                    let msg = format!("{} is not a map with string keys", path.last());
                    return Outcome::fail_at(Value::Absent, path, msg);
                }
            },
            _ => {
                let msg = format!("{} is not a map", path.last());
                return Outcome::fail_at(Value::Absent, path, msg);
            }
        };

        let (record, _) = self.schema.validate_at(path, &document);
        Outcome::from_record(Value::Map(document), record)
    }
}

/// Re-key a dynamically keyed map. `None` when any key is not a string.
fn string_keyed(entries: Vec<(Value, Value)>) -> Option<Document> {
    entries
        .into_iter()
        .map(|(key, value)| match key.into_unwrapped() {
            Value::String(key) => Some((key, value)),
            _ => None,
        })
        .collect()
}

/// Sequence rule. Built through [`slice`].
#[derive(Debug)]
pub struct Elements {
    element: FieldValidator,
}

/// Require a sequence and validate every element with `element`, reporting
/// each failure at the element's index.
pub fn slice(element: FieldValidator) -> Elements {
    Elements { element }
}

impl Rule for Elements {
    fn apply(&self, path: &Path, value: Value) -> Outcome {
        if value.is_nil() {
            return Outcome::pass(value);
        }
        let Value::Seq(items) = value.unwrap_optional() else {
            let msg = format!("{} is not a slice", path.last());
            return Outcome::fail_at(Value::Absent, path, msg);
        };

        let mut record = MessageRecord::new();
        for (index, item) in items.iter().enumerate() {
            let (failures, passed) = self.element.validate_at(&path.append_index(index), item);
            if !passed {
                record.extend(failures);
            }
        }

        Outcome::from_record(value, record)
    }
}
