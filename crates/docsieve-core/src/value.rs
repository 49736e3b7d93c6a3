//! # Dynamic Document Values
//!
//! [`Value`] is the dynamically-typed datum that validation rules inspect. It
//! is an explicit sum type so rule dispatch is an exhaustive `match`: a new
//! kind of value cannot be added without every rule deciding how to treat it.
//!
//! ## Optional references
//!
//! [`Value::Optional`] models a nullable reference around another value (a
//! typed `Option<T>` field, for instance). [`Value::unwrap_optional`] collapses
//! it to [`Value::Absent`] when empty and to the wrapped value otherwise. Rules
//! call it once before inspecting a value; it is the single normalization
//! point that lets the `required` rule alone decide presence.
//!
//! ## Numbers
//!
//! [`Number`] keeps the width and signedness the value was produced with.
//! Bound checks widen every width to `f64` via [`Number::as_f64`].

use std::collections::{BTreeMap, HashMap};

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

static ABSENT: Value = Value::Absent;

/// A number of any primitive integer or float width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Number {
    /// Widen to `f64`. Every width takes this path before a bound comparison.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I8(n) => n as f64,
            Number::I16(n) => n as f64,
            Number::I32(n) => n as f64,
            Number::I64(n) => n as f64,
            Number::U8(n) => n as f64,
            Number::U16(n) => n as f64,
            Number::U32(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F32(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// The value as `i64` for integer widths that fit; `None` for floats and
    /// for `u64` values above `i64::MAX`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I8(n) => Some(n.into()),
            Number::I16(n) => Some(n.into()),
            Number::I32(n) => Some(n.into()),
            Number::I64(n) => Some(n),
            Number::U8(n) => Some(n.into()),
            Number::U16(n) => Some(n.into()),
            Number::U32(n) => Some(n.into()),
            Number::U64(n) => i64::try_from(n).ok(),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    /// True for every integer width.
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::F32(_) | Number::F64(_))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I8(n) => serializer.serialize_i8(n),
            Number::I16(n) => serializer.serialize_i16(n),
            Number::I32(n) => serializer.serialize_i32(n),
            Number::I64(n) => serializer.serialize_i64(n),
            Number::U8(n) => serializer.serialize_u8(n),
            Number::U16(n) => serializer.serialize_u16(n),
            Number::U32(n) => serializer.serialize_u32(n),
            Number::U64(n) => serializer.serialize_u64(n),
            Number::F32(n) => serializer.serialize_f32(n),
            Number::F64(n) => serializer.serialize_f64(n),
        }
    }
}

/// A dynamically-typed document value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Nothing at all: a missing map key or an empty optional.
    #[default]
    Absent,
    /// An explicit null (also stands in for a nil sequence or map).
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Seq(Vec<Value>),
    /// A map with string keys.
    Map(BTreeMap<String, Value>),
    /// A map whose keys are themselves dynamic values, in source order.
    Dict(Vec<(Value, Value)>),
    /// A nullable reference around another value.
    Optional(Option<Box<Value>>),
}

impl Value {
    /// Collapse optional references: an empty optional becomes
    /// [`Value::Absent`], a filled one becomes the wrapped value (recursively).
    pub fn unwrap_optional(&self) -> &Value {
        match self {
            Value::Optional(None) => &ABSENT,
            Value::Optional(Some(inner)) => inner.unwrap_optional(),
            other => other,
        }
    }

    /// Owned form of [`unwrap_optional`](Self::unwrap_optional).
    pub fn into_unwrapped(self) -> Value {
        match self {
            Value::Optional(None) => Value::Absent,
            Value::Optional(Some(inner)) => inner.into_unwrapped(),
            other => other,
        }
    }

    /// True when the unwrapped value carries nothing to check (absent or null).
    pub fn is_nil(&self) -> bool {
        matches!(self.unwrap_optional(), Value::Absent | Value::Null)
    }

    /// Short name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_integer() => "integer",
            Value::Number(_) => "float",
            Value::String(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Map(_) | Value::Dict(_) => "map",
            Value::Optional(_) => "optional",
        }
    }

    /// The string slice, if this value is a string (optional references are
    /// not looked through).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this value is a number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Wrap `value` in a filled optional reference.
    pub fn some(value: impl Into<Value>) -> Value {
        Value::Optional(Some(Box::new(value.into())))
    }

    /// An empty optional reference.
    pub fn none() -> Value {
        Value::Optional(None)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent | Value::Null | Value::Optional(None) => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Optional(Some(inner)) => inner.serialize(serializer),
        }
    }
}

// -- Conversions --------------------------------------------------------------

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n)
                }
            }

            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::$variant(n))
                }
            }
        )*
    };
}

number_from! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f32 => F32, f64 => F64,
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        Value::Optional(opt.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(map: HashMap<String, T>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::U64(u))
                } else {
                    // serde_json numbers are always one of i64, u64 or f64.
                    Value::Number(Number::F64(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
