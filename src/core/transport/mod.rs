//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output: the host launches the
//! process and exchanges JSON-RPC messages on its stdin/stdout. Logs go to
//! stderr so they never interleave with protocol traffic.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
