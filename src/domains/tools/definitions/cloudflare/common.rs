//! Common types shared across Cloudflare tools.
//!
//! Every Cloudflare v4 endpoint answers with the same envelope; this module
//! parses it and turns it into a [`ToolOutcome`].

use serde::Deserialize;
use thiserror::Error;

use crate::domains::tools::ToolOutcome;

/// Prefix of every provider-reported error message.
pub const API_ERROR_PREFIX: &str = "Cloudflare API error: ";

/// Failures that abort a Cloudflare call instead of producing a tool result.
#[derive(Debug, Error)]
pub enum CloudflareError {
    #[error("building HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("creating request: {0}")]
    CreateRequest(String),

    #[error("calling Cloudflare API: {0}")]
    Send(#[source] reqwest::Error),

    #[error("reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("parsing response: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("formatting result: {0}")]
    Format(#[source] serde_json::Error),

    #[error("request cancelled")]
    Cancelled,
}

/// The uniform Cloudflare response envelope.
///
/// `result` is kept as untyped JSON so that schema changes on the provider
/// side pass straight through to the client. `messages` is informational
/// and not read. `null` or absent `success` and `errors` read as `false`
/// and empty.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub errors: Option<Vec<CloudflareApiError>>,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// A single entry of the envelope's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct CloudflareApiError {
    pub code: i64,
    pub message: String,
}

impl CloudflareResponse {
    /// Parse a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, CloudflareError> {
        serde_json::from_slice(body).map_err(CloudflareError::Parse)
    }

    /// Whether the provider reported success.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }

    /// The reported errors, in provider order.
    pub fn errors(&self) -> &[CloudflareApiError] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// Join the reported errors as `[code] message`, separated by `; `.
    pub fn error_summary(&self) -> String {
        self.errors()
            .iter()
            .map(|e| format!("[{}] {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Convert the envelope into a tool outcome.
    ///
    /// `success: false` is an application error and never fails; only
    /// re-serializing the `result` payload can.
    pub fn into_outcome(self) -> Result<ToolOutcome, CloudflareError> {
        if !self.is_success() {
            return Ok(ToolOutcome::error(format!(
                "{}{}",
                API_ERROR_PREFIX,
                self.error_summary()
            )));
        }

        let formatted =
            serde_json::to_string_pretty(&self.result).map_err(CloudflareError::Format)?;
        Ok(ToolOutcome::success(formatted))
    }
}

/// Parse a response body and interpret it in one step.
pub fn interpret_body(body: &[u8]) -> Result<ToolOutcome, CloudflareError> {
    CloudflareResponse::from_slice(body)?.into_outcome()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_pretty_printed() {
        let body = br#"{"success":true,"errors":[],"messages":[],"result":{"id":"abc"}}"#;
        let outcome = interpret_body(body).unwrap();
        assert!(!outcome.is_error());
        assert_eq!(outcome.text(), "{\n  \"id\": \"abc\"\n}");
    }

    #[test]
    fn test_success_preserves_key_order() {
        let body = br#"{"success":true,"result":[{"name":"example.com","id":"z1","status":"active"}]}"#;
        let outcome = interpret_body(body).unwrap();
        let text = outcome.text();
        let name = text.find("\"name\"").unwrap();
        let id = text.find("\"id\"").unwrap();
        let status = text.find("\"status\"").unwrap();
        assert!(name < id && id < status);
    }

    #[test]
    fn test_missing_result_formats_as_null() {
        let outcome = interpret_body(br#"{"success":true}"#).unwrap();
        assert!(!outcome.is_error());
        assert_eq!(outcome.text(), "null");
    }

    #[test]
    fn test_single_api_error() {
        let body = br#"{"success":false,"errors":[{"code":1003,"message":"Invalid filters"}]}"#;
        let outcome = interpret_body(body).unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.text(), "Cloudflare API error: [1003] Invalid filters");
    }

    #[test]
    fn test_multiple_api_errors_keep_order() {
        let body = br#"{
            "success": false,
            "errors": [
                {"code": 9109, "message": "Invalid access token"},
                {"code": 6003, "message": "Invalid request headers"}
            ],
            "messages": [],
            "result": null
        }"#;
        let outcome = interpret_body(body).unwrap();
        assert!(outcome.is_error());
        assert_eq!(
            outcome.text(),
            "Cloudflare API error: [9109] Invalid access token; [6003] Invalid request headers"
        );
    }

    #[test]
    fn test_failure_without_errors() {
        let outcome = interpret_body(br#"{"success":false}"#).unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.text(), API_ERROR_PREFIX);
    }

    #[test]
    fn test_null_messages_are_ignored() {
        let body = br#"{"success":true,"errors":[],"messages":null,"result":{"id":"abc"}}"#;
        let outcome = interpret_body(body).unwrap();
        assert!(!outcome.is_error());
        assert_eq!(outcome.text(), "{\n  \"id\": \"abc\"\n}");
    }

    #[test]
    fn test_non_array_messages_are_ignored() {
        let body = br#"{"success":true,"messages":{"note":"x"},"result":[]}"#;
        let outcome = interpret_body(body).unwrap();
        assert_eq!(outcome.text(), "[]");
    }

    #[test]
    fn test_null_errors_read_as_empty() {
        let body = br#"{"success":false,"errors":null,"messages":null,"result":null}"#;
        let outcome = interpret_body(body).unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.text(), API_ERROR_PREFIX);
    }

    #[test]
    fn test_null_success_reads_as_failure() {
        let body = br#"{"success":null,"errors":[{"code":10000,"message":"Authentication error"}]}"#;
        let outcome = interpret_body(body).unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.text(), "Cloudflare API error: [10000] Authentication error");
    }

    #[test]
    fn test_malformed_body_is_raised() {
        let err = interpret_body(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CloudflareError::Parse(_)));
        assert!(err.to_string().starts_with("parsing response: "));
    }

    #[test]
    fn test_wrong_error_shape_is_raised() {
        let body = br#"{"success":false,"errors":[{"code":"x","message":1}]}"#;
        assert!(matches!(
            interpret_body(body),
            Err(CloudflareError::Parse(_))
        ));
    }
}
