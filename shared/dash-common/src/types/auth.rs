//! Authentication Types

use serde::{Deserialize, Serialize};

use crate::Validate;

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Login endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}

impl Validate for LoginResponse {
    fn validate(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("token is empty".into());
        }
        Ok(())
    }
}

/// Token validation endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Validate for ValidateResponse {}

/// Admin role carried in the token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    SuperAdmin,
    Admin,
    Staff,
    User,
}

/// Identity of the signed-in admin, persisted next to the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: String,
    pub role: AdminRole,
}
