//! Linked OAuth account requests.

use docsieve_schema::rules::text;
use docsieve_schema::{MapValidator, Outcome, Path, Rule, Value};
use serde::{Deserialize, Serialize};

use crate::extractors::Validatable;

/// Listing parameters for linked OAuth accounts.
pub type UserOAuthPagination = super::Pagination;

/// Link of an OAuth provider account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserOAuthCreate {
    pub provider: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Empty when the provider issues non-expiring tokens.
    pub expires_at: String,
}

impl Validatable for UserOAuthCreate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("provider").required().string();
        v.field("access_token").required().string();
        v.field("refresh_token").string();

        if !self.expires_at.is_empty() {
            v.field("expires_at").required().string().date();
        }
    }
}

impl UserOAuthCreate {
    /// Schema for raw documents, where there is no instance to inspect:
    /// `expires_at` is checked whenever it is a non-empty string.
    pub fn document_schema(v: &mut MapValidator) {
        Self::default().validate(v);

        let date = text::date();
        v.field("expires_at")
            .string()
            .rule(move |path: &Path, value: Value| {
                let empty = matches!(value.unwrap_optional(), Value::String(s) if s.is_empty());
                if empty {
                    Outcome::pass(value)
                } else {
                    date.apply(path, value)
                }
            });
    }
}

/// Partial update of a linked OAuth account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserOAuthUpdate {
    pub provider: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_at: Option<String>,
}

impl Validatable for UserOAuthUpdate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("provider").string();
        v.field("access_token").string();
        v.field("refresh_token").string();
        v.field("expires_at").string().date();
    }
}
