//! Client error types with HTTP status code mapping.
//!
//! [`ClientError`] is the central error type for the client. Non-success
//! responses are mapped from their HTTP status code and the backend's
//! JSON error body into a specific variant.

use reqwest::StatusCode;
use serde::Deserialize;

/// Error body shape returned by the backend on non-success responses.
///
/// All backend errors follow this shape:
/// ```json
/// { "message": "Evento não encontrado" }
/// ```
/// The field is optional defensively; older endpoints return an empty
/// body on some failures.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable server message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Client-side error enum with HTTP status mapping.
///
/// | Variant          | Source                                |
/// |------------------|---------------------------------------|
/// | `InvalidRequest` | 400 Bad Request                       |
/// | `Unauthorized`   | 401 Unauthorized                      |
/// | `Forbidden`      | 403 Forbidden                         |
/// | `NotFound`       | 404 Not Found                         |
/// | `Conflict`       | 409 Conflict                          |
/// | `Api`            | any other non-success status          |
/// | `Transport`      | connection, timeout, or decode failure |
/// | `InvalidBaseUrl` | malformed base URL in configuration   |
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend rejected the request as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Missing, expired, or rejected credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The authenticated user may not perform this operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request conflicts with current backend state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-success response.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Server message, or a generic fallback when the body had none.
        message: String,
    },

    /// Network-level failure: connection, timeout, or body decoding.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// Maps a non-success HTTP status and server message to a variant.
    #[must_use]
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(message),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Returns `true` for credential failures, which callers handle by
    /// re-authenticating rather than retrying.
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_specific_variants() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, "no such event".to_string());
        assert!(matches!(err, ClientError::NotFound(_)));

        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "expired".to_string());
        assert!(err.is_auth_error());

        let err = ClientError::from_status(StatusCode::CONFLICT, "already joined".to_string());
        assert!(matches!(err, ClientError::Conflict(_)));
    }

    #[test]
    fn unknown_statuses_keep_code_and_message() {
        let err =
            ClientError::from_status(StatusCode::SERVICE_UNAVAILABLE, "maintenance".to_string());
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let Some(body) = serde_json::from_str::<ApiErrorBody>("{}").ok() else {
            panic!("empty object must decode");
        };
        assert!(body.message.is_none());
    }
}
