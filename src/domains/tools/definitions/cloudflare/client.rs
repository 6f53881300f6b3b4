//! Authenticated HTTP access to the Cloudflare API.

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Request};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::config::CloudflareConfig;

use super::common::CloudflareError;

/// Cloudflare API client: configuration plus a pooled HTTP client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    config: CloudflareConfig,
    http: Client,
}

impl CloudflareClient {
    /// Create a client, building the HTTP client from the configuration.
    pub fn new(config: CloudflareConfig) -> Result<Self, CloudflareError> {
        let http = config.build_client().map_err(CloudflareError::ClientBuild)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Create a client around an existing HTTP client.
    pub fn with_http_client(config: CloudflareConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// The API token, if one is configured and non-blank.
    pub fn token(&self) -> Option<&str> {
        self.config.token()
    }

    /// Build the URL for `path` with the given query pairs.
    ///
    /// Pairs are encoded in order; an empty slice yields no `?`.
    pub fn endpoint_url(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<String, CloudflareError> {
        let mut url = format!("{}{}", self.config.api_base, path);
        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query)
                .map_err(|e| CloudflareError::CreateRequest(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }
        Ok(url)
    }

    /// Build an authenticated GET request.
    pub fn get_request(&self, url: &str, token: &str) -> Result<Request, CloudflareError> {
        let mut headers = HeaderMap::new();

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| CloudflareError::CreateRequest(e.to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        self.http
            .get(url)
            .headers(headers)
            .build()
            .map_err(|e| CloudflareError::CreateRequest(e.to_string()))
    }

    /// Send a request and read the whole body, aborting on cancellation.
    ///
    /// The HTTP status is not checked: Cloudflare wraps failures in the
    /// same envelope as successes.
    pub async fn execute(
        &self,
        request: Request,
        ct: &CancellationToken,
    ) -> Result<Vec<u8>, CloudflareError> {
        tokio::select! {
            biased;
            _ = ct.cancelled() => {
                debug!("Cloudflare request cancelled by caller");
                Err(CloudflareError::Cancelled)
            }
            body = self.send(request) => body,
        }
    }

    async fn send(&self, request: Request) -> Result<Vec<u8>, CloudflareError> {
        let response = self
            .http
            .execute(request)
            .await
            .map_err(CloudflareError::Send)?;

        debug!("Cloudflare responded with status {}", response.status());

        let body = response.bytes().await.map_err(CloudflareError::ReadBody)?;
        Ok(body.to_vec())
    }
}
