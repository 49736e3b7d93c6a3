//! Refresh token administration requests.

use docsieve_schema::MapValidator;
use serde::{Deserialize, Serialize};

use crate::extractors::Validatable;

/// Listing parameters for refresh tokens.
pub type RefreshTokenPagination = super::Pagination;

/// Issue of a refresh token for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshTokenCreate {
    pub user_id: String,
    pub token: String,
    /// RFC 3339 timestamp.
    pub expires_at: String,
}

impl Validatable for RefreshTokenCreate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("user_id").required().string().uuid();
        v.field("token").required().string();
        v.field("expires_at").required().date();
    }
}

/// Rotation or extension of a refresh token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshTokenUpdate {
    pub token: Option<String>,
    pub expires_at: Option<String>,
}

impl Validatable for RefreshTokenUpdate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("token").string();
        v.field("expires_at").string().date();
    }
}
