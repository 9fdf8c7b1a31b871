//! uniconnect-client CLI entry point.
//!
//! Authenticates against the configured backend, refreshes the event
//! feed once, and logs each annotated entry.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use uniconnect_client::api::ApiClient;
use uniconnect_client::config::ClientConfig;
use uniconnect_client::service::FeedService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ClientConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!(base_url = %config.api_base_url, "starting uniconnect client");

    let email = std::env::var("UNICONNECT_EMAIL").context("UNICONNECT_EMAIL must be set")?;
    let password =
        std::env::var("UNICONNECT_PASSWORD").context("UNICONNECT_PASSWORD must be set")?;

    // Build client and authenticate
    let client = Arc::new(ApiClient::new(&config)?);
    let session = client
        .login(&email, &password)
        .await
        .context("login failed")?;
    tracing::info!(user_id = %session.user_id(), "authenticated");

    // Refresh the feed once and log it
    let feed_service = FeedService::new(Arc::clone(&client));
    let feed = feed_service
        .refresh(&session)
        .await
        .context("feed refresh failed")?;

    for entry in &feed {
        tracing::info!(
            event_id = %entry.event.id,
            name = %entry.event.name,
            starts_at = %entry.event.starts_at,
            participating = entry.participating,
            connections_attending = %entry.connections_attending.join(", "),
            "event"
        );
    }
    tracing::info!(events = feed.len(), "done");

    Ok(())
}
