//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use super::definitions::cloudflare::CloudflareError;

/// Errors that abort a tool call instead of producing a tool result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A Cloudflare API call failed below the application level.
    #[error(transparent)]
    Cloudflare(#[from] CloudflareError),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidArguments(_) => McpError::invalid_params(err.to_string(), None),
            ToolError::Cloudflare(_) => McpError::internal_error(err.to_string(), None),
        }
    }
}
