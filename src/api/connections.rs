//! Connection endpoints: the caller's network and suggestions.

use super::ApiClient;
use super::dto::{ConnectionDto, ListEnvelope};
use crate::domain::Connection;
use crate::error::ClientError;
use crate::session::Session;

impl ApiClient {
    /// `GET /api/users/{id}/conexoes` — the caller's accepted
    /// connections, resolved against the session's own user id.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn connections(&self, session: &Session) -> Result<Vec<Connection>, ClientError> {
        let path = format!("/api/users/{}/conexoes", session.user_id());
        let envelope: ListEnvelope<ConnectionDto> = self.get_json(&path, session).await?;
        Ok(envelope.data.into_iter().map(Connection::from).collect())
    }

    /// `GET /api/users/{id}/sugestoes` — suggested new connections.
    /// Unlike `conexoes`, this endpoint returns a bare array.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn connection_suggestions(
        &self,
        session: &Session,
    ) -> Result<Vec<Connection>, ClientError> {
        let path = format!("/api/users/{}/sugestoes", session.user_id());
        let dtos: Vec<ConnectionDto> = self.get_json(&path, session).await?;
        Ok(dtos.into_iter().map(Connection::from).collect())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::Json;
    use axum::routing::get;
    use serde_json::json;

    use super::*;
    use crate::config::ClientConfig;
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

    fn client_for(base_url: &str) -> ApiClient {
        let Ok(client) = ApiClient::new(&ClientConfig::for_base_url(base_url)) else {
            panic!("client construction failed");
        };
        client
    }

    #[tokio::test]
    async fn connections_resolve_against_the_session_user() {
        let router = axum::Router::new().route(
            "/api/users/u42/conexoes",
            get(|| async {
                Json(json!({"data": [
                    {"id": "u1", "name": "Alice", "curso": "ADS", "semestre": 3},
                    {"id": "u2"}
                ]}))
            }),
        );
        let base = spawn(router).await;
        let session = Session::new(UserId::from("u42"), "tok");

        let result = client_for(&base).connections(&session).await;

        let Ok(connections) = result else {
            panic!("connections failed");
        };
        assert_eq!(connections.len(), 2);
        let Some(first) = connections.first() else {
            panic!("first connection expected");
        };
        assert_eq!(first.display_name.as_deref(), Some("Alice"));
        let Some(second) = connections.get(1) else {
            panic!("second connection expected");
        };
        assert!(second.display_name.is_none());
    }

    #[tokio::test]
    async fn suggestions_decode_a_bare_array() {
        let router = axum::Router::new().route(
            "/api/users/u42/sugestoes",
            get(|| async { Json(json!([{"id": "u3", "name": "Carol"}])) }),
        );
        let base = spawn(router).await;
        let session = Session::new(UserId::from("u42"), "tok");

        let result = client_for(&base).connection_suggestions(&session).await;

        let Ok(suggestions) = result else {
            panic!("suggestions failed");
        };
        assert_eq!(suggestions.len(), 1);
    }
}
