use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::client::{
    auth::ApiKeyAuth,
    error::ApiError,
    request::ApiRequest,
    types::*,
};
use crate::config::{ConfigError, SonarrConfig};

/// Client for a single Sonarr server.
///
/// Every operation comes in two flavours:
///
/// - `try_*` returns `Result<T, ApiError>` and keeps the cause of a failure.
/// - The plain methods are fail-soft: transport errors, non-2xx statuses and
///   undecodable bodies are logged and turned into `Ok(None)`. Only a
///   configuration problem is returned as an error, and it is detected before
///   any request is sent.
pub struct SonarrClient {
    config: SonarrConfig,
    client: Client,
}

impl SonarrClient {
    pub fn new(config: SonarrConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: SonarrConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &SonarrConfig {
        &self.config
    }

    /// Sends one request and returns the decoded JSON body.
    pub async fn try_request(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let credentials = self.config.credentials()?;
        let auth = ApiKeyAuth::from_credentials(&credentials);
        let method = request.effective_method();
        let url = request.url(&credentials.base_url);

        tracing::debug!("Making {} request to: {}", method, url);

        let mut builder = auth.apply(self.client.request(method.clone(), &url));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|source| ApiError::Transport {
            method: method.clone(),
            path: request.path.clone(),
            source,
        })?;

        let status = response.status();
        tracing::debug!("{} {} response status: {}", method, request.path, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(ApiError::Status {
                method,
                path: request.path,
                status,
                body,
            });
        }

        let body = response.text().await.map_err(|source| ApiError::Transport {
            method: method.clone(),
            path: request.path.clone(),
            source,
        })?;

        if self.config.debug {
            tracing::debug!("Raw response from {} {}: {}", method, request.path, body);
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            method,
            path: request.path,
            source,
        })
    }

    /// Fail-soft version of [`SonarrClient::try_request`].
    pub async fn request(&self, request: ApiRequest) -> Result<Option<Value>, ConfigError> {
        soften(self.try_request(request).await)
    }

    async fn try_request_as<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let method = request.effective_method();
        let path = request.path.clone();
        let value = self.try_request(request).await?;

        serde_json::from_value(value).map_err(|source| ApiError::Decode {
            method,
            path,
            source,
        })
    }

    // Health
    pub async fn try_get_health(&self) -> Result<Vec<HealthCheck>, ApiError> {
        self.try_request_as(ApiRequest::get("/health")).await
    }

    pub async fn get_health(&self) -> Result<Option<Vec<HealthCheck>>, ConfigError> {
        soften(self.try_get_health().await)
    }

    // Tags
    pub async fn try_get_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.try_request_as(ApiRequest::get("/tag")).await
    }

    pub async fn get_tags(&self) -> Result<Option<Vec<Tag>>, ConfigError> {
        soften(self.try_get_tags().await)
    }

    pub async fn try_create_tag(&self, label: &str) -> Result<Tag, ApiError> {
        let request = ApiRequest::post("/tag", json!({ "label": label }));
        let tag: Tag = self.try_request_as(request).await?;
        tracing::info!("Created tag {} with id {}", tag.label, tag.id);
        Ok(tag)
    }

    pub async fn create_tag(&self, label: &str) -> Result<Option<Tag>, ConfigError> {
        soften(self.try_create_tag(label).await)
    }

    // Series
    pub async fn try_get_media_item(&self, id: i64) -> Result<SeriesDetails, ApiError> {
        self.try_request_as(ApiRequest::new(format!("/series/{}", id)).method(Method::GET))
            .await
    }

    pub async fn get_media_item(&self, id: i64) -> Result<Option<SeriesDetails>, ConfigError> {
        soften(self.try_get_media_item(id).await)
    }
}

fn soften<T>(result: Result<T, ApiError>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::Config(e)) => Err(e),
        Err(e) => {
            tracing::error!("Sonarr request failed: {}", e);
            Ok(None)
        }
    }
}
