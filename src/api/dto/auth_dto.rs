//! Authentication DTOs for login and registration.

use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Request body for `POST /api/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// Account e-mail address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Id of the authenticated user.
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// Request body for `POST /api/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    /// Display name of the new account.
    pub name: String,
    /// Account e-mail address.
    pub email: String,
    /// Account password.
    pub password: String,
}
