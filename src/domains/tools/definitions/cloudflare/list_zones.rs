//! Cloudflare zone listing tool.
//!
//! Lists the zones (domains) visible to the configured API token, with
//! optional filtering by name and page selection. The provider's `result`
//! array is returned verbatim as pretty-printed JSON.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::core::config::API_TOKEN_ENV;
use crate::domains::tools::{ToolError, ToolOutcome};

use super::client::CloudflareClient;
use super::common::{CloudflareError, interpret_body};

/// Parameters for zone listing.
///
/// Absent, zero or empty values are left out of the request.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListZonesParams {
    #[schemars(description = "A domain name to filter zones by")]
    #[serde(default)]
    pub name: Option<String>,

    #[schemars(description = "Page number of paginated results (default: 1)")]
    #[serde(default)]
    pub page: Option<i64>,

    #[schemars(description = "Number of zones per page (default: 20, max: 50)")]
    #[serde(default)]
    pub per_page: Option<i64>,
}

impl ListZonesParams {
    /// Query pairs for the present fields, in `name, page, per_page` order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page.filter(|p| *p > 0) {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

/// Cloudflare List Zones Tool implementation.
#[derive(Debug, Clone)]
pub struct ListZonesTool;

impl ListZonesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_zones";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List zones in your Cloudflare account. Returns zone details such as ID, name, status, and plan.";

    /// API path of the zones collection.
    const PATH: &'static str = "/zones";

    /// Execute the tool logic.
    ///
    /// A missing token or a `success: false` envelope is returned as an
    /// error outcome; transport, parse and formatting failures are raised.
    pub async fn execute(
        client: &CloudflareClient,
        params: &ListZonesParams,
        ct: &CancellationToken,
    ) -> Result<ToolOutcome, CloudflareError> {
        info!(
            zone_name = ?params.name,
            page = ?params.page,
            per_page = ?params.per_page,
            "List zones tool called"
        );

        let Some(token) = client.token() else {
            warn!("{} is not configured", API_TOKEN_ENV);
            return Ok(ToolOutcome::error(format!(
                "Error: {} environment variable is not set",
                API_TOKEN_ENV
            )));
        };

        let url = client.endpoint_url(Self::PATH, &params.query_pairs())?;
        debug!("Requesting {}", url);

        let request = client.get_request(&url, token)?;
        let body = client.execute(request, ct).await?;

        let outcome = interpret_body(&body)?;
        if outcome.is_error() {
            warn!("{}", outcome.text());
        } else {
            info!("Zones listed successfully");
        }
        Ok(outcome)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListZonesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("List Cloudflare zones".into()),
        }
    }

    /// Create a ToolRoute for the rmcp tool router.
    pub fn create_route<S>(client: CloudflareClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let ct = ctx.request_context.ct.clone();
            let client = client.clone();
            async move {
                let params: ListZonesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

                let outcome = Self::execute(&client, &params, &ct).await.map_err(|e| {
                    error!("List zones failed: {}", e);
                    ToolError::from(e)
                })?;

                Ok(CallToolResult::from(outcome))
            }
            .boxed()
        })
    }
}
