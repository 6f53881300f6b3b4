//! Cloudflare MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! Cloudflare API operations as tools. It currently offers `list_zones`.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudflare_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
