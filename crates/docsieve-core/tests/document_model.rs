//! Cross-module behavior of the document model: typed structs and raw JSON
//! entering as documents, paths keying records, and records serializing to
//! the failure payload shape.

use std::collections::BTreeMap;

use docsieve_core::{document_from_json, to_document, CoreError, MessageRecord, Number, Path, Value};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Address {
    city: String,
    zip: Option<String>,
}

#[derive(Serialize)]
struct Profile {
    name: String,
    age: u8,
    tags: Vec<String>,
    address: Address,
    scores: BTreeMap<String, f64>,
}

#[test]
fn nested_struct_becomes_nested_maps() {
    let doc = to_document(&Profile {
        name: "Ada".into(),
        age: 36,
        tags: vec!["math".into(), "engines".into()],
        address: Address {
            city: "London".into(),
            zip: None,
        },
        scores: BTreeMap::from([("logic".to_string(), 9.5)]),
    })
    .unwrap();

    assert_eq!(doc["name"], Value::from("Ada"));
    assert_eq!(doc["age"], Value::Number(Number::I64(36)));
    assert_eq!(doc["tags"], Value::from(vec!["math", "engines"]));

    let Value::Map(address) = &doc["address"] else {
        panic!("address should be a map");
    };
    assert_eq!(address["city"], Value::from("London"));
    assert_eq!(address["zip"], Value::Null);

    let Value::Map(scores) = &doc["scores"] else {
        panic!("scores should be a map");
    };
    assert_eq!(scores["logic"], Value::Number(Number::F64(9.5)));
}

#[test]
fn scalar_struct_root_is_rejected() {
    let err = to_document(&"just a string").unwrap_err();
    assert!(matches!(err, CoreError::NotAnObject { found: "string" }));
}

#[test]
fn document_serializes_back_to_equivalent_json() {
    let input = json!({
        "offset": 0,
        "limit": 25,
        "filters": {"active": true, "ids": [1, 2, 3]},
        "cursor": null
    });
    let doc = document_from_json(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&doc).unwrap(), input);
}

#[test]
fn optional_wrappers_serialize_transparently() {
    let value = Value::from(BTreeMap::from([
        ("present".to_string(), Value::some("x")),
        ("missing".to_string(), Value::none()),
    ]));
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({"present": "x", "missing": null})
    );
}

#[test]
fn record_keys_follow_paths() {
    let base = Path::root().append("children");
    let first = base.append_index(0).append("id");
    let second = base.append_index(1).append("id");

    let mut record = MessageRecord::new();
    record.insert(&second, "id is required");
    record.insert(&first, "id must be a valid UUID");
    record.insert(&first, "id is too long");

    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["children.0.id", "children.1.id"]);
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "children.0.id": ["id must be a valid UUID", "id is too long"],
            "children.1.id": ["id is required"]
        })
    );
}

#[test]
fn appending_records_keeps_message_order() {
    let email = Path::new(["email"]);
    let left = MessageRecord::single(&email, "email is required");
    let right = MessageRecord::single(&email, "email must be a string");

    let merged = left.append(&right);
    assert_eq!(
        merged.get("email"),
        Some(&["email is required".to_string(), "email must be a string".to_string()][..])
    );
    assert_eq!(left.len(), 1);
    assert_eq!(left.get("email").map(<[String]>::len), Some(1));
}
