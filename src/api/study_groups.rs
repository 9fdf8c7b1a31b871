//! Study group endpoints: browsing and membership.

use super::ApiClient;
use super::dto::StudyGroupDto;
use crate::domain::{GroupId, StudyGroup};
use crate::error::ClientError;
use crate::session::Session;

impl ApiClient {
    /// `GET /study-groups` — lists study groups as a bare array.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn study_groups(&self, session: &Session) -> Result<Vec<StudyGroup>, ClientError> {
        let dtos: Vec<StudyGroupDto> = self.get_json("/study-groups", session).await?;
        Ok(dtos.into_iter().map(StudyGroup::from).collect())
    }

    /// `POST /study-groups/{id}/join` — joins a group.
    ///
    /// The backend rejects full or cancelled groups; check
    /// [`StudyGroup::is_joinable`] first to avoid a round trip.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure,
    /// including the backend's message for non-joinable groups.
    pub async fn join_study_group(
        &self,
        session: &Session,
        id: &GroupId,
    ) -> Result<(), ClientError> {
        self.post_no_content(&format!("/study-groups/{id}/join"), session)
            .await
    }

    /// `POST /study-groups/{id}/leave` — leaves a group.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn leave_study_group(
        &self,
        session: &Session,
        id: &GroupId,
    ) -> Result<(), ClientError> {
        self.post_no_content(&format!("/study-groups/{id}/leave"), session)
            .await
    }
}
