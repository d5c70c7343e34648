//! Tool Registry - central registration and dispatch for all tools.
//!
//! [`definitions::all`](super::definitions::all) is the single source of
//! truth for the catalog. The STDIO router and the HTTP dispatch below are
//! both built from it.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use std::sync::Arc;

use super::definitions;
use super::error::ToolError;
use super::tool::{CanvasTool, execute};
use crate::canvas::CanvasClient;

/// Type-erased entry point of one tool.
pub type ToolHandler =
    for<'a> fn(&'a CanvasClient, JsonObject) -> BoxFuture<'a, Result<CallToolResult, ToolError>>;

/// A tool's metadata paired with its handler.
#[derive(Clone)]
pub struct ToolEntry {
    pub tool: Tool,
    pub handler: ToolHandler,
}

impl ToolEntry {
    pub fn of<T: CanvasTool>() -> Self {
        Self {
            tool: T::to_tool(),
            handler: execute::<T>,
        }
    }

    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn into_route<S>(self, client: Arc<CanvasClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let handler = self.handler;
        ToolRoute::new_dyn(self.tool, move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { handler(&client, args).await.map_err(McpError::from) }.boxed()
        })
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - lists and dispatches every Canvas tool.
pub struct ToolRegistry {
    client: Arc<CanvasClient>,
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<CanvasClient>) -> Self {
        Self {
            client,
            entries: definitions::all(),
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(ToolEntry::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        definitions::all().into_iter().map(|entry| entry.tool).collect()
    }

    /// Dispatch a tool call by name.
    ///
    /// Returns the MCP `tools/call` result object (`content`, `isError`).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| ToolError::not_found(name))?;

        let args = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "expected an object, got {}",
                    other
                )));
            }
        };

        let result = (entry.handler)(&self.client, args).await?;
        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}
