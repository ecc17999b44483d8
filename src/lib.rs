//! # Sonarr MCP Library
//!
//! This library provides tools for integrating with Sonarr (a TV series
//! management server) through the Model Context Protocol (MCP). It consists
//! of three components:
//!
//! ## Config Module
//!
//! The [`config`] module holds the base URL, API key and tracing flag, read
//! once from the environment or built directly.
//!
//! ## Client Module
//!
//! The [`client`] module provides a direct HTTP client for the Sonarr API,
//! handling API key authentication, health checks, tags and series.
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that exposes Sonarr
//! functionality as standardized tools that AI assistants can use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_sonarr::{SonarrClient, SonarrConfig, SonarrMcpServer};
//!
//! let config = SonarrConfig::new("http://localhost:8989", "api-key");
//!
//! // Use the client directly
//! let client = SonarrClient::new(config.clone());
//!
//! // Or create an MCP server
//! let server = SonarrMcpServer::new(config);
//! ```

pub mod client;
pub mod config;
pub mod server;

pub use client::{ApiError, SonarrClient};
pub use config::{ConfigError, SonarrConfig};
pub use server::SonarrMcpServer;
