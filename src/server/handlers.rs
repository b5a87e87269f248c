//! MCP tool handlers for the advocate directory.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::search::{highlight, tokenize, SearchField};
use crate::services::SearchService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes advocate search as tools.
#[derive(Clone)]
pub struct AdvocateSearchServer {
    search_service: Arc<dyn SearchService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for AdvocateSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "advocate-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(format!(
                "Advocate directory search. Every query word must appear in one of: {}. Results carry highlighted display fields.",
                SearchField::ALL
                    .iter()
                    .map(SearchField::display_name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchAdvocatesParams {
    /// Free-text query; blank returns every advocate
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAdvocateParams {
    pub id: i64,
    /// Optional query to highlight against
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct HighlightTextParams {
    pub text: String,
    #[serde(default)]
    pub query: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl AdvocateSearchServer {
    /// Create a new server backed by `search_service`.
    pub fn new(search_service: Arc<dyn SearchService>) -> Self {
        Self {
            search_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Search the directory.
    #[tool(
        description = "Search advocates by free text. Every whitespace-separated word must appear (case-insensitive substring) in the name, city, degree, years of experience, phone number or a specialty. Returns all matches in directory order with highlighted fields."
    )]
    pub async fn search_advocates(
        &self,
        params: Parameters<SearchAdvocatesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!("MCP Handler: search_advocates query={:?}", params.query);

        let response = self
            .search_service
            .search(&params.query)
            .await
            .map_err(|e| {
                tracing::error!("Search failed: {:?}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({
            "query": response.query,
            "tokens": response.tokens,
            "backend": response.backend,
            "result_count": response.results.len(),
            "results": response.results,
        }))
    }

    /// Insert the seed directory.
    #[tool(description = "Insert the built-in advocate directory and return the stored records")]
    pub async fn seed_advocates(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: seed_advocates called");

        let inserted = self.search_service.seed().await.map_err(|e| {
            tracing::error!("Seeding failed: {:?}", e);
            to_mcp_error(e)
        })?;

        json_result(&serde_json::json!({
            "inserted": inserted.len(),
            "data": inserted,
        }))
    }

    /// Retrieve one advocate.
    #[tool(description = "Retrieve one advocate by ID, optionally highlighted against a query")]
    pub async fn get_advocate(
        &self,
        params: Parameters<GetAdvocateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let found = self
            .search_service
            .get_advocate(params.id, &params.query)
            .await
            .map_err(to_mcp_error)?;

        json_result(&found)
    }

    /// Split text into matched and plain segments.
    #[tool(
        description = "Split text into matched and plain segments for a query. Concatenating the segment texts reproduces the input exactly."
    )]
    pub async fn highlight_text(
        &self,
        params: Parameters<HighlightTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let tokens = tokenize(&params.query);
        let segments = highlight(&params.text, &tokens);

        json_result(&serde_json::json!({
            "text": params.text,
            "tokens": tokens,
            "segments": segments,
        }))
    }
}
