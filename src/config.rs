//! Configuration for talking to a Sonarr server.
//!
//! [`SonarrConfig`] is built once at startup and handed to
//! [`SonarrClient::new`](crate::client::SonarrClient::new). The client never
//! reads the environment itself, which keeps tests free to inject fake
//! credentials.
//!
//! ## Environment
//!
//! | Variable              | Required | Meaning                                      |
//! |-----------------------|----------|----------------------------------------------|
//! | `SONARR_URL`          | yes      | Base URL, e.g. `http://localhost:8989`       |
//! | `SONARR_API_KEY`      | yes      | API key sent as `X-Api-Key`                  |
//! | `SONARR_ENV`          | no       | `development` enables raw response tracing   |
//! | `SONARR_TIMEOUT_SECS` | no       | Per-request timeout, transport default if unset |

use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const SONARR_URL_VAR: &str = "SONARR_URL";
pub const SONARR_API_KEY_VAR: &str = "SONARR_API_KEY";
pub const SONARR_ENV_VAR: &str = "SONARR_ENV";
pub const SONARR_TIMEOUT_VAR: &str = "SONARR_TIMEOUT_SECS";

/// Problems with the configuration that make every Sonarr call impossible.
///
/// These are raised before any network I/O and should be treated as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Sonarr base URL is not configured (set SONARR_URL)")]
    MissingBaseUrl,
    #[error("Sonarr API key is not configured (set SONARR_API_KEY)")]
    MissingApiKey,
    #[error("invalid SONARR_TIMEOUT_SECS value '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Validated base URL and API key for a single call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_url: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Process-wide Sonarr settings.
///
/// Missing values are kept as `None` rather than rejected up front so that
/// each operation can report a [`ConfigError`] on its own.
#[derive(Clone, Default)]
pub struct SonarrConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// Trace raw response bodies at debug level.
    pub debug: bool,
    pub timeout: Option<Duration>,
}

impl SonarrConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_key: Some(api_key.into()),
            debug: false,
            timeout: None,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// Only a malformed timeout is an error here; missing URL or key surface
    /// later through [`SonarrConfig::credentials`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout = match env::var(SONARR_TIMEOUT_VAR) {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: env::var(SONARR_URL_VAR).ok(),
            api_key: env::var(SONARR_API_KEY_VAR).ok(),
            debug: env::var(SONARR_ENV_VAR)
                .map(|value| is_development(&value))
                .unwrap_or(false),
            timeout,
        })
    }

    /// Returns the credentials, failing if either part is missing or blank.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let base_url = non_blank(self.base_url.as_deref()).ok_or(ConfigError::MissingBaseUrl)?;
        let api_key = non_blank(self.api_key.as_deref()).ok_or(ConfigError::MissingApiKey)?;

        Ok(Credentials {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl fmt::Debug for SonarrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SonarrConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_development(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "development" | "dev")
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn credentials_require_base_url() {
        let config = SonarrConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        assert_eq!(config.credentials(), Err(ConfigError::MissingBaseUrl));
    }

    #[test]
    fn blank_api_key_is_missing() {
        let config = SonarrConfig::new("http://sonarr:8989", "   ");
        assert_eq!(config.credentials(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn credentials_strip_trailing_slash() {
        let config = SonarrConfig::new("http://sonarr:8989/", "key");
        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.base_url, "http://sonarr:8989");
        assert_eq!(credentials.api_key, "key");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = SonarrConfig::new("http://sonarr:8989", "super-secret");
        let rendered = format!("{:?} {:?}", config, config.credentials().unwrap());
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn development_flag_values() {
        assert!(is_development("development"));
        assert!(is_development(" Dev "));
        assert!(!is_development("production"));
        assert!(!is_development(""));
    }

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(parse_timeout("30"), Ok(Duration::from_secs(30)));
        assert_eq!(
            parse_timeout("0"),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
        assert!(parse_timeout("soon").is_err());
    }
}
