//! Cloudflare tools module.
//!
//! This module provides tools backed by the Cloudflare REST API (v4):
//! - `client`: Authenticated, cancellable HTTP access to the API
//! - `common`: The response envelope and error types shared by all calls
//! - `list_zones`: List the zones visible to the configured API token

pub mod client;
pub mod common;
pub mod list_zones;

pub use client::CloudflareClient;
pub use common::{CloudflareApiError, CloudflareError, CloudflareResponse};
pub use list_zones::{ListZonesParams, ListZonesTool};
