//! # Field Validators
//!
//! A [`FieldValidator`] is the ordered rule chain bound to one document
//! location. It is built with chained method calls and then frozen:
//!
//! ```text
//! v.field("password").required().string().min_s(8).max_s(72);
//! ```
//!
//! ## Short-circuit contract
//!
//! [`FieldValidator::validate`] evaluates rules in registration order and
//! stops at the first failure, returning only that rule's messages. A field
//! therefore reports at most one failure per validation.

use std::fmt;
use std::sync::Arc;

use docsieve_core::{MessageRecord, Path, Value};

use crate::error::SchemaError;
use crate::map::MapValidator;
use crate::rule::Rule;
use crate::rules::{collection, kind, numeric, presence, text};

/// Segment used for the build-time path of a slice's element validator. The
/// real index replaces it at validation time.
pub(crate) const ELEMENT_SEGMENT: &str = "*";

/// Ordered chain of rules bound to one path.
pub struct FieldValidator {
    path: Path,
    rules: Vec<Arc<dyn Rule>>,
    errors: Vec<SchemaError>,
}

impl FieldValidator {
    /// An empty chain at `path`.
    pub fn new(path: Path) -> Self {
        Self {
            path,
            rules: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Path this validator was registered at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Construction errors recorded on this field and its nested schemas.
    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }

    pub(crate) fn take_errors(&mut self) -> Vec<SchemaError> {
        std::mem::take(&mut self.errors)
    }

    pub(crate) fn extend_errors(&mut self, errors: Vec<SchemaError>) {
        self.errors.extend(errors);
    }

    /// Validate `value` at this validator's own path.
    pub fn validate(&self, value: &Value) -> (MessageRecord, bool) {
        self.validate_at(&self.path, value)
    }

    /// Validate `value` as if it were located at `path`.
    ///
    /// Nested validators are built once and reused for every element or
    /// nesting level; the path they report under is supplied here.
    pub fn validate_at(&self, path: &Path, value: &Value) -> (MessageRecord, bool) {
        let mut current = value.clone();

        for rule in &self.rules {
            let outcome = rule.apply(path, current);

            if !outcome.passed {
                return (outcome.messages, false);
            }

            current = outcome.value;
        }

        (MessageRecord::new(), true)
    }

    /// Register a custom rule at the end of the chain.
    pub fn rule(&mut self, rule: impl Rule + 'static) -> &mut Self {
        self.rules.push(Arc::new(rule));
        self
    }

    // -- Presence and kind ----------------------------------------------------

    /// Fail when the value is absent, null, or an empty string.
    pub fn required(&mut self) -> &mut Self {
        self.rule(presence::required())
    }

    /// Require a string.
    pub fn string(&mut self) -> &mut Self {
        self.rule(kind::string())
    }

    /// Require a number of any width.
    pub fn num(&mut self) -> &mut Self {
        self.rule(kind::num())
    }

    /// Require a boolean.
    pub fn bool(&mut self) -> &mut Self {
        self.rule(kind::boolean())
    }

    // -- Text -----------------------------------------------------------------

    /// Require a string of alphabetic characters only.
    pub fn alpha(&mut self) -> &mut Self {
        self.rule(text::alpha())
    }

    /// Require a string fully matched by `pattern`.
    ///
    /// A pattern that does not compile is recorded as a construction error
    /// and surfaces from [`Schema::new`](crate::Schema::new). A validator
    /// used without building a schema rejects every value of the field.
    pub fn regex(&mut self, pattern: &str) -> &mut Self {
        match text::regex(pattern) {
            Ok(rule) => self.rule(rule),
            Err(source) => {
                self.errors.push(SchemaError::InvalidPattern {
                    field: self.path.key(),
                    pattern: pattern.to_string(),
                    source,
                });
                self.rule(text::invalid_pattern(pattern.to_string()))
            }
        }
    }

    /// Require an e-mail address.
    pub fn email(&mut self) -> &mut Self {
        self.rule(text::email())
    }

    /// Require an RFC 3339 date-time string.
    pub fn date(&mut self) -> &mut Self {
        self.rule(text::date())
    }

    /// Require standard, padded base64.
    pub fn base64(&mut self) -> &mut Self {
        self.rule(text::base64())
    }

    /// Require a UUID string.
    pub fn uuid(&mut self) -> &mut Self {
        self.rule(text::uuid())
    }

    /// Minimum string length in bytes.
    pub fn min_s(&mut self, n: usize) -> &mut Self {
        self.rule(text::min_s(n))
    }

    /// Maximum string length in bytes.
    pub fn max_s(&mut self, n: usize) -> &mut Self {
        self.rule(text::max_s(n))
    }

    /// Minimum string length in Unicode scalar values.
    pub fn min_rune(&mut self, n: usize) -> &mut Self {
        self.rule(text::min_rune(n))
    }

    /// Maximum string length in Unicode scalar values.
    pub fn max_rune(&mut self, n: usize) -> &mut Self {
        self.rule(text::max_rune(n))
    }

    /// Restrict strings to `values`.
    pub fn within_s<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(text::within_s(values.into_iter().map(Into::into).collect()))
    }

    // -- Numbers --------------------------------------------------------------

    /// Lower numeric bound, inclusive.
    pub fn min(&mut self, n: impl Into<f64>) -> &mut Self {
        self.rule(numeric::min(n.into()))
    }

    /// Upper numeric bound, inclusive.
    pub fn max(&mut self, n: impl Into<f64>) -> &mut Self {
        self.rule(numeric::max(n.into()))
    }

    /// Restrict integers to `values`.
    pub fn within(&mut self, values: impl IntoIterator<Item = i64>) -> &mut Self {
        self.rule(numeric::within(values.into_iter().collect()))
    }

    // -- Collections ----------------------------------------------------------

    /// Bound the number of items in a sequence.
    pub fn max_len(&mut self, n: usize) -> &mut Self {
        self.rule(collection::max_len(n))
    }

    /// Require a string-keyed map and validate it with a nested schema.
    ///
    /// The nested fields are keyed under this field's path, so
    /// `v.field("address").map(|v| { v.field("city"); })` reports at
    /// `address.city`.
    pub fn map<F>(&mut self, schema: F) -> &mut Self
    where
        F: FnOnce(&mut MapValidator),
    {
        let mut nested = MapValidator::with_path(self.path.clone());
        schema(&mut nested);
        self.errors.extend(nested.take_errors());
        self.rule(collection::map(nested))
    }

    /// Require a sequence and validate each element with the chain built by
    /// `schema`. Element failures are keyed by index: `tags.3`.
    pub fn slice<F>(&mut self, schema: F) -> &mut Self
    where
        F: FnOnce(&mut FieldValidator),
    {
        let mut element = FieldValidator::new(self.path.append(ELEMENT_SEGMENT));
        schema(&mut element);
        self.errors.extend(element.take_errors());
        self.rule(collection::slice(element))
    }

    /// Require a sequence without checking its elements.
    pub fn any_slice(&mut self) -> &mut Self {
        self.slice(|_| {})
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("path", &self.path.key())
            .field("rules", &self.rules.len())
            .field("errors", &self.errors.len())
            .finish()
    }
}
