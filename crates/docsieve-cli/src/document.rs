//! # Document Loading
//!
//! Reads a document file and converts it into the engine's value model.
//! The format is chosen by extension: `.json`, or `.yaml`/`.yml`.
//!
//! YAML mappings may have non-string keys. Those mappings are kept as
//! [`Value::Dict`] so a `map` rule can report them, instead of being
//! rejected while loading. The document root itself must be string-keyed.

use std::path::Path;

use anyhow::{bail, Context, Result};
use docsieve_core::{document_from_json, Document, Number, Value};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => bail!(
                "unsupported document format for {} (expected .json, .yaml or .yml)",
                path.display()
            ),
        }
    }
}

/// Read and convert the document at `path`.
pub fn load_document(path: &Path) -> Result<Document> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&content, format).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse document text in the given format.
pub fn parse_document(content: &str, format: Format) -> Result<Document> {
    match format {
        Format::Json => {
            let json: serde_json::Value = serde_json::from_str(content)?;
            Ok(document_from_json(json)?)
        }
        Format::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
            match yaml_to_value(yaml) {
                Value::Map(map) => Ok(map),
                Value::Dict(_) => bail!("document root must be a mapping with string keys"),
                other => bail!("document root must be a mapping, found {}", other.kind()),
            }
        }
    }
}

/// Convert a YAML value. Tags are dropped; the tagged value is kept.
pub fn yaml_to_value(yaml: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            let number = if let Some(i) = n.as_i64() {
                Number::I64(i)
            } else if let Some(u) = n.as_u64() {
                Number::U64(u)
            } else {
                Number::F64(n.as_f64().unwrap_or(f64::NAN))
            };
            Value::Number(number)
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Seq(items.into_iter().map(yaml_to_value).collect()),
        Yaml::Mapping(mapping) => {
            let entries: Vec<(Value, Value)> = mapping
                .into_iter()
                .map(|(k, v)| (yaml_to_value(k), yaml_to_value(v)))
                .collect();

            if entries.iter().all(|(k, _)| matches!(k, Value::String(_))) {
                Value::Map(
                    entries
                        .into_iter()
                        .filter_map(|(k, v)| match k {
                            Value::String(k) => Some((k, v)),
                            _ => None,
                        })
                        .collect(),
                )
            } else {
                Value::Dict(entries)
            }
        }
        Yaml::Tagged(tagged) => yaml_to_value(tagged.value),
    }
}
