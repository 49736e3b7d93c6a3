//! # Schema Catalog
//!
//! Named, prebuilt schemas for every request DTO. The catalog backs the
//! `/v1/validate/{schema}` endpoint and the `docsieve validate` command, so
//! a document can be checked against a request shape without a typed
//! handler.
//!
//! Each entry is built from the DTO's default instance. Schemas that depend
//! on the instance have a document form instead: `user-oauth.create` checks
//! `expires_at` whenever the document carries a non-empty string there.

use std::collections::BTreeMap;

use docsieve_schema::{Schema, SchemaError};

use crate::dto;
use crate::extractors::Validatable;

/// Immutable map from schema name to built schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    entries: BTreeMap<String, Schema>,
}

impl SchemaCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of every request DTO in [`crate::dto`].
    pub fn builtin() -> Result<Self, SchemaError> {
        let mut catalog = Self::new();

        catalog.register::<dto::AuthSignUp>("auth.sign-up")?;
        catalog.register::<dto::AuthSignIn>("auth.sign-in")?;
        catalog.register::<dto::AuthVerifyRegistration>("auth.verify-registration")?;
        catalog.register::<dto::AuthRefreshToken>("auth.refresh-token")?;

        catalog.register::<dto::UserPagination>("user.pagination")?;
        catalog.register::<dto::UserCreate>("user.create")?;
        catalog.register::<dto::UserUpdate>("user.update")?;

        catalog.register::<dto::RolePagination>("role.pagination")?;
        catalog.register::<dto::RoleCreate>("role.create")?;
        catalog.register::<dto::RoleUpdate>("role.update")?;

        catalog.register::<dto::SessionPagination>("session.pagination")?;

        catalog.register::<dto::UserOAuthPagination>("user-oauth.pagination")?;
        catalog.insert(
            "user-oauth.create",
            Schema::new(dto::UserOAuthCreate::document_schema)?,
        );
        catalog.register::<dto::UserOAuthUpdate>("user-oauth.update")?;

        catalog.register::<dto::RefreshTokenPagination>("refresh-token.pagination")?;
        catalog.register::<dto::RefreshTokenCreate>("refresh-token.create")?;
        catalog.register::<dto::RefreshTokenUpdate>("refresh-token.update")?;

        tracing::debug!(schemas = catalog.len(), "schema catalog built");
        Ok(catalog)
    }

    /// Build and register the schema of `T`'s default instance.
    pub fn register<T: Validatable + Default>(&mut self, name: &str) -> Result<(), SchemaError> {
        let instance = T::default();
        let schema = Schema::new(|v| instance.validate(v))?;
        self.insert(name, schema);
        Ok(())
    }

    /// Register an already built schema, replacing any entry of that name.
    pub fn insert(&mut self, name: &str, schema: Schema) {
        self.entries.insert(name.to_string(), schema);
    }

    /// The schema registered as `name`.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.entries.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsieve_core::document_from_json;
    use serde_json::json;

    #[test]
    fn builtin_catalog_builds() {
        let catalog = SchemaCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 17);
        assert!(catalog.get("auth.sign-up").is_some());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let catalog = SchemaCatalog::builtin().unwrap();
        let names: Vec<_> = catalog.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn cataloged_schema_validates_documents() {
        let catalog = SchemaCatalog::builtin().unwrap();
        let schema = catalog.get("role.create").unwrap();

        let doc = document_from_json(json!({"name": "editor"})).unwrap();
        assert!(schema.validate(&doc).1);

        let doc = document_from_json(json!({"name": 7})).unwrap();
        let (record, _) = schema.validate(&doc);
        assert_eq!(record.get("name"), Some(&["name must be a string".to_string()][..]));
    }

    #[test]
    fn oauth_create_checks_expiry_when_given() {
        let catalog = SchemaCatalog::builtin().unwrap();
        let schema = catalog.get("user-oauth.create").unwrap();
        let base = json!({"provider": "github", "access_token": "tok"});

        let mut doc = document_from_json(base.clone()).unwrap();
        doc.insert("expires_at".into(), "garbage".into());
        let (record, passed) = schema.validate(&doc);
        assert!(!passed);
        assert_eq!(
            record.get("expires_at"),
            Some(&["expires_at must be a valid date-time in the RFC 3339 format".to_string()][..])
        );

        let mut doc = document_from_json(base.clone()).unwrap();
        doc.insert("expires_at".into(), "2030-01-01T00:00:00Z".into());
        assert!(schema.validate(&doc).1);

        let mut doc = document_from_json(base.clone()).unwrap();
        doc.insert("expires_at".into(), "".into());
        assert!(schema.validate(&doc).1);

        assert!(schema.validate(&document_from_json(base).unwrap()).1);
    }

    #[test]
    fn insert_replaces_entry() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert("x", Schema::new(|_| {}).unwrap());
        catalog.insert("x", Schema::new(|v| {
            v.field("a").required();
        })
        .unwrap());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("x").unwrap().validator().get("a").is_some());
    }
}
