//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each registered handler becomes one dynamic route; the route closure only
//! holds an `Arc` to its handler.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use super::handlers::ToolHandler;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .handlers()
        .fold(ToolRouter::new(), |router, handler| {
            router.with_route(create_route(handler.clone()))
        })
}

/// Create a ToolRoute dispatching to `handler`.
fn create_route<S>(handler: Arc<dyn ToolHandler>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(handler.tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let handler = handler.clone();
        async move { handler.call(args).await.map_err(|e| e.into_mcp()) }.boxed()
    })
}
