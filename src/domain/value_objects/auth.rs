use serde::{Deserialize, Serialize};

use crate::domain::{entities::users::User, value_objects::enums::user_roles::UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

/// Demo credential shown in the login UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MockCredential {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Unsigned pseudo-JWT: base64-encoded JSON, never verified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MockToken {
    pub header: TokenHeader,
    pub payload: TokenClaims,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}
