//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool and resource domains.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`, grouped by Canvas API
//! area. Both the rmcp `ToolRouter` (STDIO) and the `ToolRegistry` (HTTP)
//! are built from the same catalog, so adding a tool never touches this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as ServerResult;
use crate::canvas::CanvasClient;
use crate::domains::{resources::ResourceService, tools::build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Canvas LMS access for students and instructors. \
Use the canvas_* tools to read and update courses, assignments, submissions, \
modules, discussions and more. Read canvas:// resources for the course list, \
the current user's profile and per-course syllabus, assignments and modules.";

/// The main MCP server handler.
///
/// All domain services share one [`CanvasClient`].
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    client: Arc<CanvasClient>,

    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,

    #[cfg(feature = "http")]
    tool_registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the Canvas token cannot be used as a request header.
    pub fn new(config: Config) -> ServerResult<Self> {
        let client = Arc::new(CanvasClient::new(
            &config.canvas.api_token,
            &config.canvas.domain,
            config.canvas.client_options(),
        )?);
        Ok(Self::with_client(config, client))
    }

    /// Create a server around an existing client.
    pub fn with_client(config: Config, client: Arc<CanvasClient>) -> Self {
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new(
            client.clone(),
            config.server.name.clone(),
        ));

        info!("Canvas API base: {}", client.base_url());

        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            #[cfg(feature = "http")]
            tool_registry: Arc::new(ToolRegistry::new(client.clone())),
            config,
            client,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn client(&self) -> &Arc<CanvasClient> {
        &self.client
    }

    /// Instructions sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        self.tool_registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| e.to_string())
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(McpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;

    fn test_server() -> McpServer {
        let mut config = Config::default();
        config.canvas.api_token = "token".into();
        config.canvas.domain = "canvas.test".into();
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_server_identity() {
        let server = test_server();
        assert_eq!(server.name(), "canvas-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.client().base_url(), "https://canvas.test/api/v1");
    }

    #[test]
    fn test_capabilities_exclude_prompts() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("Canvas"));
    }

    #[test]
    fn test_list_tools_has_schemas() {
        let tools = test_server().list_tools();
        assert!(!tools.is_empty());
        for tool in &tools {
            assert!(tool["name"].as_str().unwrap().starts_with("canvas_"));
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_list_resources_and_templates() {
        let server = McpServer::with_client(
            Config::default(),
            Arc::new(
                CanvasClient::with_base_url(
                    "https://canvas.test/api/v1".to_string(),
                    "token",
                    ClientOptions::default(),
                )
                .unwrap(),
            ),
        );
        let resources = server.list_resources().await;
        assert!(resources.iter().any(|r| r["uri"] == "canvas://courses"));

        let templates = server.list_resource_templates().await;
        assert!(
            templates
                .iter()
                .any(|t| t["uriTemplate"] == "canvas://course/{course_id}/syllabus")
        );
    }

    #[test]
    fn test_read_unknown_resource_is_error() {
        let server = test_server();
        let err = tokio_test::assert_err!(tokio_test::block_on(
            server.read_resource("canvas://nowhere")
        ));
        assert!(err.contains("canvas://nowhere"));
    }

    #[test]
    fn test_course_uri_without_id_is_rejected() {
        let server = test_server();
        tokio_test::assert_err!(tokio_test::block_on(
            server.read_resource("canvas://course/abc/syllabus")
        ));
    }
}
