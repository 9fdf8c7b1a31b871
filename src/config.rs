//! Client configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The configuration is built once at
//! startup and passed explicitly to [`crate::api::ApiClient::new`];
//! nothing in this crate reads the environment after that.

/// Top-level client configuration.
///
/// Loaded once at startup via [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the UniConnect backend (e.g. `https://api.uniconnect.example`).
    ///
    /// Endpoint paths are joined onto this; a trailing slash is ignored.
    pub api_base_url: String,

    /// Total timeout in seconds for a single request.
    pub request_timeout_secs: u64,

    /// Timeout in seconds for establishing a connection.
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    /// Timeouts fall back to sensible defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `UNICONNECT_API_URL` is not set. There is no
    /// default backend address.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let api_base_url = std::env::var("UNICONNECT_API_URL")
            .map_err(|_| "UNICONNECT_API_URL must be set to the backend base URL")?;

        let request_timeout_secs = parse_env("UNICONNECT_REQUEST_TIMEOUT_SECS", 10);
        let connect_timeout_secs = parse_env("UNICONNECT_CONNECT_TIMEOUT_SECS", 5);

        Ok(Self {
            api_base_url,
            request_timeout_secs,
            connect_timeout_secs,
        })
    }

    /// Builds a configuration directly from a base URL with default
    /// timeouts. Intended for tests and embedding callers that do not
    /// use environment configuration.
    #[must_use]
    pub fn for_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
