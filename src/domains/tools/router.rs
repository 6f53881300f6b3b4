//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only collects
//! them.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::ListZonesTool;
use super::definitions::cloudflare::CloudflareClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(cloudflare: CloudflareClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(ListZonesTool::create_route(cloudflare))
}
