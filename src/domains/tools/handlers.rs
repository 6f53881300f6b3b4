//! Tool outcome types.
//!
//! A tool call that completes produces exactly one of two outcomes: a
//! success text or an error text. Failures that prevent an outcome
//! altogether are reported through [`ToolError`](super::ToolError) instead.

use rmcp::model::{CallToolResult, Content};

/// The result of a completed tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The call succeeded; the text is returned to the client.
    Success(String),

    /// The call completed with a user-facing error (`isError: true`).
    Error(String),
}

impl ToolOutcome {
    /// Create a successful outcome.
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    /// Create an error outcome.
    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    /// Whether this outcome carries the error flag.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The text content of the outcome.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

impl From<ToolOutcome> for CallToolResult {
    fn from(outcome: ToolOutcome) -> Self {
        match outcome {
            ToolOutcome::Success(text) => CallToolResult::success(vec![Content::text(text)]),
            ToolOutcome::Error(text) => CallToolResult::error(vec![Content::text(text)]),
        }
    }
}
