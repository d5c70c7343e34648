//! Tool Router - builds the rmcp ToolRouter from the tool catalog.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions;
use crate::canvas::CanvasClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<CanvasClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    definitions::all()
        .into_iter()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(entry.into_route(client.clone()))
        })
}
