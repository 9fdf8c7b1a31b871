//! Profile endpoints for the authenticated user.

use super::ApiClient;
use super::dto::{ProfileDto, UpdateProfileRequest};
use crate::domain::UserProfile;
use crate::error::ClientError;
use crate::session::Session;

impl ApiClient {
    /// `GET /api/profile` — the caller's own profile.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn profile(&self, session: &Session) -> Result<UserProfile, ClientError> {
        let dto: ProfileDto = self.get_json("/api/profile", session).await?;
        Ok(UserProfile::from(dto))
    }

    /// `PUT /api/profile` — updates the caller's profile.
    ///
    /// On success the caller should re-fetch via [`Self::profile`] for
    /// authoritative state; the backend response body is not relied
    /// upon.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn update_profile(
        &self,
        session: &Session,
        update: &UpdateProfileRequest,
    ) -> Result<(), ClientError> {
        self.put_json_no_content("/api/profile", update, session)
            .await
    }
}
