//! # Request DTOs
//!
//! Typed request shapes for the account service endpoints, each declaring
//! its validation schema through [`Validatable`].
//!
//! Structs deserialize with `#[serde(default)]`: a missing string field
//! arrives as `""` and a missing optional as `None`, so absence is reported
//! by the `required` rule as a validation failure instead of a parse error.

pub mod auth;
pub mod refresh_token;
pub mod role;
pub mod session;
pub mod user;
pub mod user_oauth;

use docsieve_schema::MapValidator;
use serde::{Deserialize, Serialize};

use crate::extractors::Validatable;

pub use auth::{AuthRefreshToken, AuthSignIn, AuthSignUp, AuthVerifyRegistration};
pub use refresh_token::{RefreshTokenCreate, RefreshTokenPagination, RefreshTokenUpdate};
pub use role::{RoleCreate, RolePagination, RoleUpdate};
pub use session::SessionPagination;
pub use user::{UserCreate, UserPagination, UserUpdate};
pub use user_oauth::{UserOAuthCreate, UserOAuthPagination, UserOAuthUpdate};

/// Offset/limit listing parameters, shared by every paginated listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Validatable for Pagination {
    fn validate(&self, v: &mut MapValidator) {
        v.field("offset").required().num().min(0);
        v.field("limit").required().num().min(1);
    }
}
