//! # Sonarr HTTP Client
//!
//! This module provides a direct HTTP client for the Sonarr v3 API: health
//! checks, tags, series lookups and a generic request helper for any other
//! endpoint.
//!
//! ## Modules
//!
//! - [`auth`] - API key header handling
//! - [`client`] - Main HTTP client implementation with all API methods
//! - [`error`] - Typed errors for the `try_*` methods
//! - [`request`] - Request descriptors and URL construction
//! - [`types`] - Type definitions for API responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_sonarr::{SonarrClient, SonarrConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SonarrClient::new(SonarrConfig::new("http://localhost:8989", "api-key"));
//!
//! // Fail-soft: `None` means the call failed and the cause was logged
//! if let Some(tags) = client.get_tags().await? {
//!     println!("Found {} tags", tags.len());
//! }
//!
//! // Typed: keep the error
//! let series = client.try_get_media_item(133).await?;
//! println!("{:?}", series.title());
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod request;
pub mod types;

pub use client::SonarrClient;
pub use error::ApiError;
pub use request::ApiRequest;
pub use types::*;
