//! User management requests.

use docsieve_schema::MapValidator;
use serde::{Deserialize, Serialize};

use crate::extractors::Validatable;

/// Listing parameters for users.
pub type UserPagination = super::Pagination;

/// Creation of a user by an administrator.
///
/// Identifiers are carried as strings so a malformed UUID is reported by the
/// schema rather than rejected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCreate {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role_id: String,
    pub upload_id: Option<String>,
}

impl Validatable for UserCreate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("first_name").required().string();
        v.field("last_name").string();
        v.field("email").required().string().email();
        v.field("phone").string();
        v.field("password").string().min_s(8);
        v.field("role_id").required().uuid();
        v.field("upload_id").uuid();
    }
}

/// Partial update of a user. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<String>,
    pub upload_id: Option<String>,
}

impl Validatable for UserUpdate {
    fn validate(&self, v: &mut MapValidator) {
        v.field("first_name").string();
        v.field("last_name").string();
        v.field("email").string().email();
        v.field("phone").string();
        v.field("password").string().min_s(8);
        v.field("role_id").uuid();
        v.field("upload_id").uuid();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::extractors::validate_struct;

    #[test]
    fn create_requires_role_uuid() {
        let req = UserCreate {
            first_name: "Grace".into(),
            email: "grace@example.com".into(),
            role_id: "admin".into(),
            ..Default::default()
        };
        let Err(AppError::ValidationFailed(record)) = validate_struct(&req) else {
            panic!("expected ValidationFailed");
        };
        assert_eq!(
            record.get("role_id"),
            Some(&["role_id must be a valid UUID".to_string()][..])
        );
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn empty_update_passes() {
        assert!(validate_struct(&UserUpdate::default()).is_ok());
    }

    #[test]
    fn update_checks_present_fields() {
        let req = UserUpdate {
            upload_id: Some("nope".into()),
            ..Default::default()
        };
        assert!(validate_struct(&req).is_err());
    }
}
