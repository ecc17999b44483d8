//! Request descriptors for the Sonarr API.
//!
//! An [`ApiRequest`] describes a call before the base URL and API key are
//! merged in: a path relative to `/api/v3`, an optional method (GET when
//! unset), query parameters and an optional JSON body.

use reqwest::Method;
use serde_json::Value;

/// Version prefix every Sonarr v3 endpoint lives under.
pub const API_PREFIX: &str = "/api/v3";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: Option<Method>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path).method(Method::GET)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(path).method(Method::POST).json(body)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn effective_method(&self) -> Method {
        self.method.clone().unwrap_or(Method::GET)
    }

    /// Percent-encoded query string without the leading `?`, or `None` when
    /// there are no parameters.
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }

        let params: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        Some(params.join("&"))
    }

    /// Full URL for this request against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let mut url = if self.path.starts_with('/') {
            format!("{}{}{}", base, API_PREFIX, self.path)
        } else {
            format!("{}{}/{}", base, API_PREFIX, self.path)
        };

        if let Some(query) = self.query_string() {
            url.push(if self.path.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }
        url
    }
}
