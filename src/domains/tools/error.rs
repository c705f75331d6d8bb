//! Tool-specific error types.
//!
//! Every failure mode of a tool invocation is normalized into one of these
//! variants at the dispatcher boundary; callers only ever see the display
//! string, never a raw transport fault.

use thiserror::Error;

/// Errors that can occur while dispatching a tool call upstream.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not in the endpoint registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument was missing or had an unusable type.
    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    /// The request never produced a usable response (connection refused,
    /// timeout, DNS failure, malformed body).
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The upstream service responded with a non-success status code.
    #[error("Upstream returned HTTP {status}")]
    Upstream { status: u16 },
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new upstream status error.
    pub fn upstream(status: u16) -> Self {
        Self::Upstream { status }
    }
}
