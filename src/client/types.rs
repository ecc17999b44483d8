//! Type definitions for the Sonarr v3 API.
//!
//! The vendor schema is large and changes between Sonarr releases, so these
//! types only describe the fields this crate reads. Anything else passes
//! through untouched.
//!
//! ## Key Types
//!
//! - [`Tag`] - Server-assigned tag with its label
//! - [`HealthCheck`] - One entry from the `/health` report
//! - [`SeriesDetails`] - A full series record, kept as raw JSON

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tag that can be attached to series, indexers and download clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Identifier assigned by Sonarr
    pub id: i64,
    /// Tag label. Sonarr keeps these unique, the client does not check.
    pub label: String,
}

/// A single health check result.
///
/// An empty health report means Sonarr found nothing to complain about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    /// Check that produced this entry, e.g. `IndexerStatusCheck`
    #[serde(default)]
    pub source: Option<String>,
    /// Severity: `ok`, `notice`, `warning` or `error`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Link to the Servarr wiki page describing the problem
    #[serde(default)]
    pub wiki_url: Option<String>,
}

/// A series record exactly as Sonarr returned it.
///
/// Serializes back to the same JSON it was decoded from. The accessors below
/// only read from the underlying value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesDetails(pub Value);

impl SeriesDetails {
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn year(&self) -> Option<i64> {
        self.0.get("year").and_then(Value::as_i64)
    }

    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn seasons(&self) -> &[Value] {
        self.0
            .get("seasons")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn statistics(&self) -> Option<&Value> {
        self.0.get("statistics")
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}
