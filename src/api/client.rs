//! HTTP plumbing shared by all endpoint groups.
//!
//! [`ApiClient`] owns the [`reqwest::Client`], joins endpoint paths
//! onto the configured base URL, injects the bearer token from an
//! explicitly passed [`Session`], and maps non-success responses to
//! [`ClientError`] variants. Endpoint methods live in the sibling
//! modules, one per resource group.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiErrorBody, ClientError};
use crate::session::Session;

/// Typed client for the UniConnect REST backend.
///
/// Cheap to clone is not a goal; wrap it in an `Arc` and share it
/// between services, as `main` does.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the configured base
    /// URL does not parse, or [`ClientError::Transport`] if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Joins an endpoint path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Authenticated GET returning decoded JSON.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: &Session,
    ) -> Result<T, ClientError> {
        let builder = self
            .http
            .get(self.url(path))
            .bearer_auth(session.bearer_token());
        Self::request_json(builder).await
    }

    /// Authenticated GET with query parameters, returning decoded JSON.
    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        session: &Session,
    ) -> Result<T, ClientError> {
        let builder = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(session.bearer_token());
        Self::request_json(builder).await
    }

    /// Unauthenticated POST with a JSON body, returning decoded JSON.
    /// Only the login and registration endpoints are reachable without
    /// a session.
    pub(crate) async fn post_json_unauthenticated<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let builder = self.http.post(self.url(path)).json(body);
        Self::request_json(builder).await
    }

    /// Authenticated POST without a body, discarding the response body.
    pub(crate) async fn post_no_content(
        &self,
        path: &str,
        session: &Session,
    ) -> Result<(), ClientError> {
        let builder = self
            .http
            .post(self.url(path))
            .bearer_auth(session.bearer_token());
        Self::request_no_content(builder).await
    }

    /// Authenticated POST with a JSON body, discarding the response body.
    pub(crate) async fn post_json_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        session: &Session,
    ) -> Result<(), ClientError> {
        let builder = self
            .http
            .post(self.url(path))
            .json(body)
            .bearer_auth(session.bearer_token());
        Self::request_no_content(builder).await
    }

    /// Authenticated PUT with a JSON body, discarding the response body.
    pub(crate) async fn put_json_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        session: &Session,
    ) -> Result<(), ClientError> {
        let builder = self
            .http
            .put(self.url(path))
            .json(body)
            .bearer_auth(session.bearer_token());
        Self::request_no_content(builder).await
    }

    /// Authenticated DELETE, discarding the response body.
    pub(crate) async fn delete_no_content(
        &self,
        path: &str,
        session: &Session,
    ) -> Result<(), ClientError> {
        let builder = self
            .http
            .delete(self.url(path))
            .bearer_auth(session.bearer_token());
        Self::request_no_content(builder).await
    }

    async fn request_json<T: DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let response = Self::into_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn request_no_content(builder: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = builder.send().await?;
        Self::into_success(response).await?;
        Ok(())
    }

    /// Passes success responses through; decodes the backend's error
    /// body and maps the status code otherwise.
    async fn into_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Err(ClientError::from_status(status, message))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::Json;
    use axum::http::StatusCode;
    use axum::routing::get;
    use serde_json::json;

    use super::*;
    use crate::domain::UserId;

    async fn spawn(router: axum::Router) -> String {
        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("ephemeral bind failed");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("no local addr");
        };
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}")
    }

    fn test_session() -> Session {
        Session::new(UserId::from("u1"), "test-token")
    }

    fn client_for(base_url: &str) -> ApiClient {
        let Ok(client) = ApiClient::new(&ClientConfig::for_base_url(base_url)) else {
            panic!("client construction failed");
        };
        client
    }

    #[test]
    fn rejects_malformed_base_url() {
        let result = ApiClient::new(&ClientConfig::for_base_url("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = client_for("http://localhost:9/");
        assert_eq!(client.url("/api/eventos"), "http://localhost:9/api/eventos");
    }

    #[tokio::test]
    async fn decodes_success_json() {
        let router = axum::Router::new().route("/ping", get(|| async { Json(json!({"ok": true})) }));
        let base = spawn(router).await;

        let client = client_for(&base);
        let result: Result<serde_json::Value, _> =
            client.get_json("/ping", &test_session()).await;

        let Ok(value) = result else {
            panic!("request failed");
        };
        assert_eq!(value.get("ok").and_then(|v| v.as_bool()), Some(true));
    }

    #[tokio::test]
    async fn maps_error_status_and_server_message() {
        let router = axum::Router::new().route(
            "/missing",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"message": "Evento não encontrado"})),
                )
            }),
        );
        let base = spawn(router).await;

        let client = client_for(&base);
        let result: Result<serde_json::Value, _> =
            client.get_json("/missing", &test_session()).await;

        match result {
            Err(ClientError::NotFound(message)) => {
                assert_eq!(message, "Evento não encontrado");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn falls_back_to_status_reason_on_empty_error_body() {
        let router = axum::Router::new()
            .route("/teapot", get(|| async { StatusCode::IM_A_TEAPOT }));
        let base = spawn(router).await;

        let client = client_for(&base);
        let result: Result<serde_json::Value, _> =
            client.get_json("/teapot", &test_session()).await;

        match result {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 418);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
