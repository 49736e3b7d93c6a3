//! Authentication requests.

use docsieve_schema::MapValidator;
use serde::{Deserialize, Serialize};

use crate::extractors::Validatable;

/// Registration of a new account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSignUp {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

impl Validatable for AuthSignUp {
    fn validate(&self, v: &mut MapValidator) {
        v.field("first_name").required().string().max_rune(100);
        v.field("last_name").string();
        v.field("email").required().string().email();
        v.field("phone").string();
        v.field("password").required().string().min_s(8).max_s(72);
    }
}

/// Credential sign-in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSignIn {
    pub email: String,
    pub password: String,
}

impl Validatable for AuthSignIn {
    fn validate(&self, v: &mut MapValidator) {
        v.field("email").required().string();
        v.field("password").required().string();
    }
}

/// Confirmation of a registration link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthVerifyRegistration {
    pub token: String,
}

impl Validatable for AuthVerifyRegistration {
    fn validate(&self, v: &mut MapValidator) {
        v.field("token").required().string();
    }
}

/// Exchange of a refresh token for a new session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthRefreshToken {
    pub token: String,
}

impl Validatable for AuthRefreshToken {
    fn validate(&self, v: &mut MapValidator) {
        v.field("token").required().string();
    }
}
