//! API key handling for Sonarr requests.
//!
//! Sonarr authenticates every call with a static API key. The key is always
//! sent in the `X-Api-Key` header and never appended to the URL, so it does
//! not end up in access logs or in the URLs we log ourselves.

use reqwest::RequestBuilder;

use crate::config::Credentials;

/// Header Sonarr reads the API key from.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Attaches the API key to outgoing requests.
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.api_key.clone())
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        tracing::trace!("Using API key: {}", self.key_preview());
        request.header(API_KEY_HEADER, &self.api_key)
    }

    /// First few characters of the key, safe to log.
    pub fn key_preview(&self) -> String {
        let visible: String = self.api_key.chars().take(4).collect();
        format!("{}...", visible)
    }
}
