//! Authentication endpoints.

use super::ApiClient;
use super::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::error::ClientError;
use crate::session::Session;

impl ApiClient {
    /// `POST /api/login` — exchanges credentials for a [`Session`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthorized`] on rejected credentials,
    /// or another [`ClientError`] on transport/backend failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .post_json_unauthenticated("/api/login", &request)
            .await?;

        tracing::info!(user_id = %response.user_id, "login succeeded");
        Ok(Session::new(response.user_id, response.token))
    }

    /// `POST /api/register` — creates a new account.
    ///
    /// Returns the server's confirmation message when it sends one.
    /// Registration does not log the user in; call [`Self::login`]
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] when the backend rejects
    /// the payload (e.g. an already-registered e-mail), or another
    /// [`ClientError`] on transport/backend failure.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, ClientError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: MessageResponse = self
            .post_json_unauthenticated("/api/register", &request)
            .await?;
        Ok(response.message)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::Json;
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::json;

    use super::*;
    use crate::config::ClientConfig;

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

    fn client_for(base_url: &str) -> ApiClient {
        let Ok(client) = ApiClient::new(&ClientConfig::for_base_url(base_url)) else {
            panic!("client construction failed");
        };
        client
    }

    #[tokio::test]
    async fn login_builds_a_session_from_the_response() {
        let router = axum::Router::new().route(
            "/api/login",
            post(|| async { Json(json!({"token": "jwt-abc", "userId": "u42"})) }),
        );
        let base = spawn(router).await;

        let result = client_for(&base).login("a@uni.example", "pw").await;

        let Ok(session) = result else {
            panic!("login failed");
        };
        assert_eq!(session.user_id().as_str(), "u42");
    }

    #[tokio::test]
    async fn rejected_credentials_surface_as_unauthorized() {
        let router = axum::Router::new().route(
            "/api/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"message": "Credenciais inválidas"})),
                )
            }),
        );
        let base = spawn(router).await;

        let result = client_for(&base).login("a@uni.example", "wrong").await;

        let Err(err) = result else {
            panic!("login must fail");
        };
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn register_returns_the_server_message() {
        let router = axum::Router::new().route(
            "/api/register",
            post(|| async { Json(json!({"message": "Usuário registrado com sucesso!"})) }),
        );
        let base = spawn(router).await;

        let result = client_for(&base).register("Bia", "b@uni.example", "pw").await;

        let Ok(message) = result else {
            panic!("register failed");
        };
        assert_eq!(message.as_deref(), Some("Usuário registrado com sucesso!"));
    }
}
