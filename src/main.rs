use mcp_sonarr::{config::SonarrConfig, server::SonarrMcpServer};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Get configuration from environment variables
    let config = SonarrConfig::from_env()?;

    // Initialize tracing
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    // Missing credentials make every tool useless, so refuse to start
    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Testing API access to Sonarr at {}...", credentials.base_url);
    let test_server = SonarrMcpServer::new(config.clone());
    match test_server.test_api_access().await {
        Ok(_) => {
            tracing::info!("API access test passed");
        }
        Err(e) if e.is_unauthorized() => {
            tracing::error!("Sonarr rejected the API key: {}", e);
            tracing::error!("Please verify SONARR_API_KEY matches Settings > General in Sonarr");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::warn!("API access test failed: {}", e);
            tracing::warn!("The server will continue, but tools will fail until Sonarr is reachable.");
        }
    }

    // Create server configuration and start SSE server
    let sse_config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("Sonarr MCP Server listening on {}", sse_config.bind);

    // serve_with_config handles binding, axum server setup, and graceful shutdown internally
    let sse_server = SseServer::serve_with_config(sse_config).await?;

    let ct = sse_server.with_service(move || SonarrMcpServer::new(config.clone()));

    tracing::info!("Sonarr MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
