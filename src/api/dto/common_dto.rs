//! Shared DTO types used across multiple endpoints.

use serde::Deserialize;

/// Envelope for list endpoints that wrap their payload in a `data` key.
///
/// The events, participation-history, and connections endpoints all
/// respond with `{ "data": [...] }`; study groups, suggestions, and
/// the profile endpoint return bare JSON.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    /// The wrapped list. Decodes to empty when the key is missing.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Generic message-only response used by mutation endpoints.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    /// Human-readable server message, when the backend sends one.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn envelope_defaults_to_empty_on_missing_key() {
        let Some(envelope) = serde_json::from_str::<ListEnvelope<u32>>("{}").ok() else {
            panic!("empty object must decode");
        };
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn envelope_unwraps_data_key() {
        let Some(envelope) = serde_json::from_str::<ListEnvelope<u32>>(r#"{"data":[1,2]}"#).ok()
        else {
            panic!("envelope must decode");
        };
        assert_eq!(envelope.data, vec![1, 2]);
    }
}
