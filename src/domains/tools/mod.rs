//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, grouped by provider
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp server
//! - `handlers.rs` - The `ToolOutcome` returned by completed calls
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/<provider>/` (e.g., `list_dns_records.rs`)
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it from the provider's `mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
mod handlers;
pub mod router;

pub use error::ToolError;
pub use handlers::ToolOutcome;
pub use router::build_tool_router;
