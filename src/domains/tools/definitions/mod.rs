//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by the
//! upstream API they call.

pub mod cloudflare;

pub use cloudflare::{ListZonesParams, ListZonesTool};
