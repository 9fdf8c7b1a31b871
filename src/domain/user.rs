//! The current user's own profile.

use serde::Serialize;

use super::UserId;

/// Profile of the authenticated user.
///
/// Separate from [`super::Connection`]: a connection is a lookup
/// record about *another* user, while this is the caller's own
/// editable profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    /// The user's id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account e-mail address.
    pub email: String,
    /// Enrolled course, if set during onboarding.
    pub course: Option<String>,
    /// Current semester, if set during onboarding.
    pub semester: Option<u32>,
    /// Self-selected interest tags.
    pub interests: Vec<String>,
}
