//! Role management requests.

use docsieve_schema::MapValidator;
use serde::{Deserialize, Serialize};

use crate::extractors::Validatable;

/// Listing parameters for roles.
pub type RolePagination = super::Pagination;

/// Creation of a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleCreate {
    pub name: String,
}

impl Validatable for RoleCreate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("name").required().string().max_rune(64);
    }
}

/// Rename of a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleUpdate {
    pub name: String,
}

impl Validatable for RoleUpdate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("name").required().string().max_rune(64);
    }
}
