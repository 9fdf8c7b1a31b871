//! Authenticated session state.
//!
//! A [`Session`] is the explicit credential parameter for every
//! authenticated API call. It is produced by
//! [`crate::api::ApiClient::login`] and owned by the caller; the crate
//! never stashes it in globals or ambient state.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::UserId;

/// The current user's identity and bearer token.
///
/// The token is wrapped in [`SecretString`] so it is redacted from
/// `Debug` output and never logged by accident.
#[derive(Debug, Clone)]
pub struct Session {
    user_id: UserId,
    token: SecretString,
}

impl Session {
    /// Creates a session from a user id and a raw bearer token.
    #[must_use]
    pub fn new(user_id: UserId, token: impl Into<String>) -> Self {
        Self {
            user_id,
            token: SecretString::new(token.into()),
        }
    }

    /// Returns the authenticated user's id.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Exposes the bearer token for the `Authorization` header.
    pub(crate) fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }
}
