use std::sync::Arc;
use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::{json, Value};

use crate::client::{ApiError, SonarrClient};
use crate::config::SonarrConfig;

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateTagParams {
    pub label: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetSeriesParams {
    pub id: i64,
}

#[derive(Clone)]
pub struct SonarrMcpServer {
    client: Arc<SonarrClient>,
    tool_router: ToolRouter<SonarrMcpServer>,
}

#[tool_router]
impl SonarrMcpServer {
    pub fn new(config: SonarrConfig) -> Self {
        Self::with_client(SonarrClient::new(config))
    }

    pub fn with_client(client: SonarrClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    /// Makes one cheap call to confirm the URL and API key are accepted.
    pub async fn test_api_access(&self) -> Result<(), ApiError> {
        tracing::debug!("Testing API access by fetching health...");
        match self.client.try_get_health().await {
            Ok(checks) => {
                tracing::info!("API access test successful - {} health issues reported", checks.len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("API access test failed: {}", e);
                Err(e)
            }
        }
    }

    #[tool(description = "Get Sonarr health check results (indexer, download client and disk problems)")]
    async fn get_health(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: get_health");

        match self.client.try_get_health().await {
            Ok(checks) => {
                let count_of = |kind: &str| {
                    checks
                        .iter()
                        .filter(|check| check.kind.as_deref() == Some(kind))
                        .count()
                };

                let result = json!({
                    "healthy": checks.is_empty(),
                    "issues": checks,
                    "total_count": checks.len(),
                    "errors": count_of("error"),
                    "warnings": count_of("warning"),
                    "notices": count_of("notice")
                });

                Ok(CallToolResult::success(json_content(&result)))
            }
            Err(e) => Ok(error_result("Failed to get health", &e)),
        }
    }

    #[tool(description = "Get all tags defined in Sonarr")]
    async fn list_tags(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: list_tags");

        match self.client.try_get_tags().await {
            Ok(tags) => {
                let result = json!({
                    "total_count": tags.len(),
                    "tags": tags
                });

                Ok(CallToolResult::success(json_content(&result)))
            }
            Err(e) => Ok(error_result("Failed to get tags", &e)),
        }
    }

    #[tool(description = "Create a new tag with the given label")]
    async fn create_tag(
        &self,
        Parameters(params): Parameters<CreateTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let label = params.label.trim();
        if label.is_empty() {
            let error = json!({
                "error": "Invalid Parameters",
                "message": "Tag label must not be empty",
                "suggestion": "Provide a non-empty label such as 'anime' or '4k'"
            });
            return Ok(CallToolResult::error(json_content(&error)));
        }

        match self.client.try_create_tag(label).await {
            Ok(tag) => {
                let result = json!({
                    "tag": tag,
                    "message": format!("Created tag '{}' with id {}", tag.label, tag.id)
                });

                Ok(CallToolResult::success(json_content(&result)))
            }
            Err(e) => Ok(error_result("Failed to create tag", &e)),
        }
    }

    #[tool(description = "Get the full Sonarr record for a series by its Sonarr id")]
    async fn get_series(
        &self,
        Parameters(params): Parameters<GetSeriesParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.try_get_media_item(params.id).await {
            Ok(series) => {
                let result = json!({
                    "summary": {
                        "id": series.id(),
                        "title": series.title(),
                        "year": series.year(),
                        "status": series.status(),
                        "season_count": series.seasons().len()
                    },
                    "series": series
                });

                Ok(CallToolResult::success(json_content(&result)))
            }
            Err(e) if e.is_not_found() => {
                let error = json!({
                    "error": "Not Found",
                    "message": format!("No series with id {}", params.id),
                    "details": e.to_string(),
                    "suggestion": "Series ids are Sonarr's internal ids, not TVDB or IMDb ids"
                });
                Ok(CallToolResult::error(json_content(&error)))
            }
            Err(e) => Ok(error_result("Failed to get series", &e)),
        }
    }
}

fn json_content(value: &Value) -> Vec<Content> {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    vec![Content::text(text)]
}

fn error_result(context: &str, e: &ApiError) -> CallToolResult {
    tracing::error!("{}: {}", context, e);

    let error = match e {
        ApiError::Config(_) => json!({
            "error": "Configuration Error",
            "message": "Sonarr URL or API key is not configured",
            "details": e.to_string(),
            "suggestion": "Set SONARR_URL and SONARR_API_KEY and restart the MCP server"
        }),
        ApiError::Transport { .. } => json!({
            "error": "Connection Error",
            "message": "Unable to connect to Sonarr server",
            "details": e.to_string(),
            "suggestion": "Check that Sonarr is running and accessible at the configured URL"
        }),
        _ if e.is_unauthorized() => json!({
            "error": "Authentication Error",
            "message": "Sonarr rejected the API key",
            "details": e.to_string(),
            "suggestion": "Copy the API key from Sonarr's Settings > General page"
        }),
        _ => json!({
            "error": context,
            "message": "An unexpected error occurred while talking to Sonarr",
            "details": e.to_string(),
            "suggestion": "Check server logs for more details"
        }),
    };

    CallToolResult::error(json_content(&error))
}

#[tool_handler]
impl ServerHandler for SonarrMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server provides tools for the Sonarr TV series manager. Available tools include: health checks, listing and creating tags, and fetching full series records by id.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
