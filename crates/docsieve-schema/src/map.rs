//! # Map Validators and Schemas
//!
//! A [`MapValidator`] groups field validators by name and checks a whole
//! [`Document`]. Unlike a field's rule chain it never stops early: every
//! registered field is evaluated and the failures are merged, so a caller
//! sees every problem in one pass.
//!
//! A [`Schema`] is the frozen root of a validator tree. It is built once,
//! surfaces construction errors, and is then shared freely across threads.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use docsieve_core::{Document, MessageRecord, Path, Value};

use crate::error::SchemaError;
use crate::field::FieldValidator;

/// Field validators keyed by field name.
#[derive(Debug, Default)]
pub struct MapValidator {
    path: Path,
    fields: BTreeMap<String, FieldValidator>,
}

impl MapValidator {
    /// A root-level validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator whose fields are registered below `path`.
    pub fn with_path(path: Path) -> Self {
        Self {
            path,
            fields: BTreeMap::new(),
        }
    }

    /// Register the field `name` and return its rule chain.
    ///
    /// Registering the same name again replaces the earlier chain. Its
    /// construction errors are kept and still fail [`Schema::new`].
    pub fn field(&mut self, name: &str) -> &mut FieldValidator {
        let mut fv = FieldValidator::new(self.path.append(name));
        match self.fields.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                fv.extend_errors(slot.get_mut().take_errors());
                slot.insert(fv);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(fv),
        }
    }

    /// Registered field names, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The validator registered for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&FieldValidator> {
        self.fields.get(name)
    }

    /// Validate `document` at this validator's own path.
    pub fn validate(&self, document: &Document) -> (MessageRecord, bool) {
        self.validate_at(&self.path, document)
    }

    /// Validate `document` as if it were located at `path`.
    ///
    /// A missing key is validated as [`Value::Absent`].
    pub fn validate_at(&self, path: &Path, document: &Document) -> (MessageRecord, bool) {
        let mut record = MessageRecord::new();

        for (name, fv) in &self.fields {
            let field_path = path.append(name.as_str());
            let value = document.get(name).unwrap_or(&Value::Absent);

            let (failures, passed) = fv.validate_at(&field_path, value);
            if !passed {
                tracing::trace!(field = %field_path, "field failed validation");
                record.extend(failures);
            }
        }

        let passed = record.is_empty();
        (record, passed)
    }

    /// Drain construction errors from every registered field.
    pub(crate) fn take_errors(&mut self) -> Vec<SchemaError> {
        self.fields
            .values_mut()
            .flat_map(FieldValidator::take_errors)
            .collect()
    }
}

/// A built, immutable validator tree.
///
/// Cloning is cheap; clones share the same tree.
#[derive(Debug, Clone)]
pub struct Schema {
    root: Arc<MapValidator>,
}

impl Schema {
    /// Build a schema by registering fields on a fresh root validator.
    ///
    /// Returns every construction error found anywhere in the tree, for
    /// instance a `regex` rule whose pattern does not compile.
    pub fn new<F>(build: F) -> Result<Self, SchemaError>
    where
        F: FnOnce(&mut MapValidator),
    {
        let mut root = MapValidator::new();
        build(&mut root);
        Self::from_validator(root)
    }

    /// Freeze an already populated validator.
    pub fn from_validator(mut root: MapValidator) -> Result<Self, SchemaError> {
        match SchemaError::collect(root.take_errors()) {
            Some(err) => Err(err),
            None => Ok(Self {
                root: Arc::new(root),
            }),
        }
    }

    /// Validate `document`, returning the merged failures and the verdict.
    pub fn validate(&self, document: &Document) -> (MessageRecord, bool) {
        let (record, passed) = self.root.validate(document);
        if !passed {
            tracing::debug!(fields = record.len(), "document rejected");
        }
        (record, passed)
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self, document: &Document) -> Result<(), MessageRecord> {
        match self.validate(document) {
            (_, true) => Ok(()),
            (record, false) => Err(record),
        }
    }

    /// The root validator.
    pub fn validator(&self) -> &MapValidator {
        &self.root
    }
}
