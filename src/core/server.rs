//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are dispatched through the `ToolRouter` built in
//! `domains/tools/router.rs`; adding a tool does not require changes here.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{build_tool_router, definitions::cloudflare::CloudflareClient};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It holds no
/// per-call state, so the host may run tool calls concurrently.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the HTTP client cannot be built.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let cloudflare = CloudflareClient::new(config.cloudflare.clone())
            .map_err(crate::domains::tools::ToolError::from)?;

        Ok(Self {
            tool_router: build_tool_router::<Self>(cloudflare),
            config: Arc::new(config),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List the names of all routed tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Cloudflare MCP server. Use list_zones to list the zones visible to the \
                 configured API token, optionally filtered by name."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CloudflareConfig;
    use rmcp::{ServiceExt, service::ServiceError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_server_exposes_list_zones() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.tool_names(), vec!["list_zones".to_string()]);
    }

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert_eq!(info.server_info.name, server.name());
        assert_eq!(info.server_info.name, "cloudflare-mcp-server");
        assert_eq!(info.server_info.version, server.version());
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }

    /// Mount `body` as the zones response and return a server pointed at it.
    async fn server_for(mock: &MockServer, body: &'static str) -> McpServer {
        Mock::given(method("GET"))
            .and(path("/client/v4/zones"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(mock)
            .await;

        let mut config = Config::default();
        config.cloudflare =
            CloudflareConfig::new("test-token", format!("{}/client/v4", mock.uri()));
        McpServer::new(config).unwrap()
    }

    /// Call `list_zones` through a connected MCP client.
    async fn call_list_zones(
        server: McpServer,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, ServiceError> {
        let (server_io, client_io) = tokio::io::duplex(64 * 1024);
        tokio::spawn(async move {
            if let Ok(running) = server.serve(server_io).await {
                let _ = running.waiting().await;
            }
        });

        let client = ().serve(client_io).await.unwrap();
        let request: CallToolRequestParam = serde_json::from_value(serde_json::json!({
            "name": "list_zones",
            "arguments": arguments,
        }))
        .unwrap();
        let result = client.call_tool(request).await;
        let _ = client.cancel().await;
        result
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_call_list_zones_success() {
        let mock = MockServer::start().await;
        let server = server_for(&mock, r#"{"success":true,"result":{"id":"abc"}}"#).await;

        let result = call_list_zones(server, serde_json::json!({"name": "example.com"}))
            .await
            .unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "{\n  \"id\": \"abc\"\n}");
    }

    #[tokio::test]
    async fn test_call_list_zones_api_error_is_tool_result() {
        let mock = MockServer::start().await;
        let server = server_for(
            &mock,
            r#"{"success":false,"errors":[{"code":1003,"message":"Invalid filters"}]}"#,
        )
        .await;

        let result = call_list_zones(server, serde_json::json!({})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Cloudflare API error: [1003] Invalid filters");
    }

    #[tokio::test]
    async fn test_call_list_zones_malformed_body_is_internal_error() {
        let mock = MockServer::start().await;
        let server = server_for(&mock, "<html>Bad Gateway</html>").await;

        let err = call_list_zones(server, serde_json::json!({}))
            .await
            .unwrap_err();

        match err {
            ServiceError::McpError(e) => {
                assert_eq!(e.code, ErrorCode::INTERNAL_ERROR);
                assert!(e.message.starts_with("parsing response: "));
            }
            other => panic!("Expected an MCP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_list_zones_bad_arguments_are_invalid_params() {
        let mock = MockServer::start().await;
        let server = server_for(&mock, r#"{"success":true,"result":[]}"#).await;

        let err = call_list_zones(server, serde_json::json!({"page": "x"}))
            .await
            .unwrap_err();

        match err {
            ServiceError::McpError(e) => assert_eq!(e.code, ErrorCode::INVALID_PARAMS),
            other => panic!("Expected an MCP error, got {:?}", other),
        }
        assert!(mock.received_requests().await.unwrap().is_empty());
    }
}
