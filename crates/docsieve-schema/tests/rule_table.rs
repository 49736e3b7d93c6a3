//! # Rule behavior through a schema
//!
//! Each rule is registered on a single field of a root schema and fed a
//! table of values. Covers plain values, optional references, and the
//! collection rules with their element validators.

use docsieve_core::{Document, Value};
use docsieve_schema::{MapValidator, Schema};
use std::collections::BTreeMap;

const FIELD: &str = "test";

fn schema(build: impl FnOnce(&mut MapValidator)) -> Schema {
    Schema::new(build).unwrap()
}

fn single(value: Value) -> Document {
    let mut doc = Document::new();
    doc.insert(FIELD.to_string(), value);
    doc
}

/// Run every `(label, value, expected)` row and report all mismatches.
fn run_table(schema: &Schema, rows: Vec<(&str, Value, bool)>) {
    let mut mismatches = Vec::new();
    for (label, value, want) in rows {
        let (record, passed) = schema.validate(&single(value));
        if passed != want {
            mismatches.push(format!("{label}: want {want}, got {passed} ({record:?})"));
        }
        assert_eq!(passed, record.is_empty(), "{label}: verdict must match record");
    }
    assert!(mismatches.is_empty(), "table mismatches:\n{}", mismatches.join("\n"));
}

fn map_of(pairs: &[(&str, Value)]) -> Value {
    Value::Map(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

// =========================================================================
// Presence and kind
// =========================================================================

#[test]
fn required() {
    let s = schema(|v| {
        v.field(FIELD).required();
    });
    run_table(
        &s,
        vec![
            ("string", Value::from("x"), true),
            ("empty string", Value::from(""), false),
            ("optional string", Value::some("x"), true),
            ("optional sequence", Value::some(vec![1]), true),
            ("optional map", Value::some(map_of(&[("a", Value::from(1))])), true),
            ("empty optional", Value::none(), false),
            ("sequence", Value::from(vec![1, 2]), true),
            ("empty sequence", Value::Seq(Vec::new()), true),
            ("map", map_of(&[]), true),
            ("null", Value::Null, false),
            ("zero", Value::from(0), true),
            ("false", Value::from(false), true),
        ],
    );

    let (record, _) = s.validate(&Document::new());
    assert_eq!(record.get(FIELD), Some(&["test is required".to_string()][..]));
}

#[test]
fn alpha() {
    let s = schema(|v| {
        v.field(FIELD).alpha();
    });
    run_table(
        &s,
        vec![
            ("letters", Value::from("abcDEF"), true),
            ("includes numbers", Value::from("abc123"), false),
            ("not a string", Value::from(1), false),
            ("absent", Value::Absent, true),
        ],
    );
}

#[test]
fn num() {
    let s = schema(|v| {
        v.field(FIELD).num();
    });
    run_table(
        &s,
        vec![
            ("integers", Value::from(12), true),
            ("floats", Value::from(1.5), true),
            ("unsigned", Value::from(7u32), true),
            ("string", Value::from("12"), false),
        ],
    );
}

#[test]
fn string() {
    let s = schema(|v| {
        v.field(FIELD).string();
    });
    run_table(
        &s,
        vec![
            ("pure string", Value::from("hello"), true),
            ("string of integers", Value::from("123"), true),
            ("integer", Value::from(123), false),
        ],
    );
}

#[test]
fn regex() {
    let s = schema(|v| {
        v.field(FIELD).regex("[a-z]+[0-9]{2}");
    });
    run_table(
        &s,
        vec![
            ("matches", Value::from("abc12"), true),
            ("partial match only", Value::from("abc123"), false),
            ("no match", Value::from("12abc"), false),
        ],
    );
}

#[test]
fn email() {
    let s = schema(|v| {
        v.field(FIELD).email();
    });
    run_table(
        &s,
        vec![
            ("valid", Value::from("test@example.com"), true),
            ("invalid email", Value::from("test@example"), false),
            ("not a string", Value::from(42), false),
        ],
    );
}

#[test]
fn bool() {
    let s = schema(|v| {
        v.field(FIELD).bool();
    });
    run_table(
        &s,
        vec![
            ("true", Value::from(true), true),
            ("false", Value::from(false), true),
            ("string", Value::from("true"), false),
        ],
    );
}

#[test]
fn date() {
    let s = schema(|v| {
        v.field(FIELD).date();
    });
    run_table(
        &s,
        vec![
            ("valid date format", Value::from("2024-10-01T12:30:00Z"), true),
            ("not datetime string", Value::from(2024), false),
            ("invalid date format", Value::from("01/10/2024"), false),
        ],
    );
}

// =========================================================================
// Numeric and length bounds
// =========================================================================

#[test]
fn min() {
    let s = schema(|v| {
        v.field(FIELD).min(10);
    });
    run_table(
        &s,
        vec![
            ("at boundary", Value::from(10), true),
            ("float above boundary", Value::from(10.5), true),
            ("below boundary", Value::from(9), false),
            ("not a number", Value::from("1"), true),
        ],
    );
}

#[test]
fn max() {
    let s = schema(|v| {
        v.field(FIELD).max(10);
    });
    run_table(
        &s,
        vec![
            ("at boundary", Value::from(10), true),
            ("float below boundary", Value::from(9.5), true),
            ("above boundary", Value::from(11), false),
        ],
    );
}

#[test]
fn string_byte_bounds() {
    let s = schema(|v| {
        v.field(FIELD).min_s(3).max_s(5);
    });
    run_table(
        &s,
        vec![
            ("at lower boundary", Value::from("abc"), true),
            ("at upper boundary", Value::from("abcde"), true),
            ("below", Value::from("ab"), false),
            ("above", Value::from("abcdef"), false),
            ("not a string", Value::from(1), true),
        ],
    );
}

#[test]
fn string_rune_bounds() {
    let s = schema(|v| {
        v.field(FIELD).min_rune(2).max_rune(3);
    });
    run_table(
        &s,
        vec![
            ("multibyte within bounds", Value::from("日本語"), true),
            ("too short", Value::from("日"), false),
            ("too long", Value::from("日本語だ"), false),
            ("absent", Value::Absent, false),
        ],
    );
}

#[test]
fn within() {
    let s = schema(|v| {
        v.field(FIELD).within([1, 2, 3]);
    });
    run_table(
        &s,
        vec![
            ("member", Value::from(2), true),
            ("not a member", Value::from(4), false),
            ("float is unchecked", Value::from(4.0), true),
        ],
    );
}

#[test]
fn within_s() {
    let s = schema(|v| {
        v.field(FIELD).within_s(["asc", "desc"]);
    });
    run_table(
        &s,
        vec![
            ("member", Value::from("asc"), true),
            ("not a member", Value::from("up"), false),
        ],
    );
}

#[test]
fn base64_and_uuid() {
    let s = schema(|v| {
        v.field(FIELD).base64();
    });
    run_table(
        &s,
        vec![
            ("padded", Value::from("dGVzdA=="), true),
            ("not base64", Value::from("not base64!"), false),
            ("not a string", Value::from(1), false),
        ],
    );

    let s = schema(|v| {
        v.field(FIELD).uuid();
    });
    run_table(
        &s,
        vec![
            ("valid", Value::from("e4eaaaf2-d142-11e1-b3e4-080027620cdd"), true),
            ("invalid", Value::from("e4eaaaf2"), false),
        ],
    );
}

// =========================================================================
// Collections
// =========================================================================

#[test]
fn slice() {
    let s = schema(|v| {
        v.field(FIELD).slice(|v| {
            v.num();
        });
    });
    run_table(
        &s,
        vec![
            ("slice of integers", Value::from(vec![1, 2, 3]), true),
            ("slice of strings", Value::from(vec!["1", "2", "3"]), false),
            ("not a slice", Value::from("{}"), false),
            ("empty value", Value::Absent, true),
            ("optional slice is valid", Value::some(vec![1, 2, 3]), true),
            ("optional slice is invalid", Value::some(vec!["1"]), false),
        ],
    );
}

#[test]
fn max_len() {
    let s = schema(|v| {
        v.field(FIELD)
            .slice(|v| {
                v.num();
            })
            .max_len(3);
    });
    run_table(
        &s,
        vec![
            ("three items", Value::from(vec![1, 2, 3]), true),
            ("six items", Value::from(vec![1, 2, 3, 4, 5, 6]), false),
        ],
    );
}

#[test]
fn any_slice() {
    let s = schema(|v| {
        v.field(FIELD).any_slice();
    });
    run_table(
        &s,
        vec![
            ("slice of integers", Value::from(vec![1, 2, 3]), true),
            ("slice of strings", Value::from(vec!["1", "2", "3"]), true),
            ("not a slice", Value::from("{}"), false),
        ],
    );
}

#[test]
fn map() {
    let s = schema(|v| {
        v.field(FIELD).map(|v| {
            v.field("status").bool();
            v.field("message").required().string();
        });
    });
    let good = map_of(&[("status", Value::from(true)), ("message", Value::from("test"))]);
    run_table(
        &s,
        vec![
            ("matches schema", good.clone(), true),
            (
                "accepted missing field",
                map_of(&[("message", Value::from("status is not required"))]),
                true,
            ),
            ("missing field", map_of(&[("status", Value::from(true))]), false),
            (
                "wrong type",
                map_of(&[("status", Value::from("true")), ("message", Value::from("test"))]),
                false,
            ),
            ("nil value", Value::Absent, true),
            ("optional map is valid", Value::some(good), true),
            (
                "string-keyed dict",
                Value::Dict(vec![(Value::from("message"), Value::from("hi"))]),
                true,
            ),
            (
                "integer-keyed dict",
                Value::Dict(vec![(Value::from(1), Value::from("hi"))]),
                false,
            ),
        ],
    );
}

// =========================================================================
// Chaining
// =========================================================================

fn only_message(schema: &Schema, value: Value) -> Option<String> {
    let (record, _) = schema.validate(&single(value));
    record
        .iter()
        .flat_map(|(_, messages)| messages.iter().cloned())
        .next()
}

#[test]
fn simple_chain_reports_required() {
    let s = schema(|v| {
        v.field(FIELD).required().string();
    });
    let message = only_message(&s, Value::from("")).unwrap();
    assert!(message.contains("is required"));
}

#[test]
fn irrational_chain_fails_on_uuid() {
    let s = schema(|v| {
        v.field(FIELD).required().num().uuid().string();
    });
    let (record, passed) = s.validate(&single(Value::from(42)));
    assert!(!passed);
    assert_eq!(record.get(FIELD), Some(&["test must be a valid UUID".to_string()][..]));
}

#[test]
fn nested_map_field_is_required() {
    let s = schema(|v| {
        v.field(FIELD).map(|v| {
            v.field("status").required().bool();
        });
    });
    let (record, _) = s.validate(&single(map_of(&[])));
    assert_eq!(
        record.get("test.status"),
        Some(&["status is required".to_string()][..])
    );
}

#[test]
fn long_chain_passes() {
    let s = schema(|v| {
        v.field(FIELD)
            .required()
            .string()
            .min_s(3)
            .max_s(10)
            .min_rune(3)
            .max_rune(10);
    });
    assert_eq!(only_message(&s, Value::from("test!")), None);
}
