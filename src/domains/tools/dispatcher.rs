//! Dispatcher - executes one tool invocation end-to-end.
//!
//! The dispatcher owns the single shared HTTP client for the server session.
//! Each invocation is one lookup in the endpoint registry, one request build,
//! and exactly one upstream round-trip; the outcome is normalized into a
//! [`ToolError`] or the upstream JSON payload passed through unchanged.
//!
//! Invocations are independent: any number may be in flight concurrently on
//! the shared client, and no completion ordering is guaranteed. There is no
//! retry and no caching. When the server session ends the dispatcher is
//! dropped, which aborts outstanding calls and releases the client once.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::config::UpstreamConfig;
use crate::core::error::{Error, Result};

use super::endpoints::ToolName;
use super::error::ToolError;
use super::request::{self, ArgumentBag, RequestBody};

/// Gateway dispatcher for the pvfUtility WebApi.
pub struct Dispatcher {
    /// Shared connection-pooling client, created once per session.
    client: reqwest::Client,

    /// Upstream base URL without a trailing slash.
    base_url: String,
}

impl Dispatcher {
    /// Create a dispatcher with its session-scoped HTTP client.
    ///
    /// The per-request deadline comes from configuration; the upstream
    /// contract specifies none, so this is the only timeout in play.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured upstream base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one tool invocation: resolve the name, build the request,
    /// make a single round-trip, and decode the response.
    #[instrument(skip(self, args), fields(tool = name))]
    pub async fn invoke(&self, name: &str, args: &ArgumentBag) -> std::result::Result<Value, ToolError> {
        let Some(tool) = ToolName::parse(name) else {
            return Err(ToolError::unknown_tool(name));
        };

        let prepared = request::prepare(tool.spec(), args)?;
        let url = prepared.url(&self.base_url)?;
        debug!(%url, "dispatching upstream request");

        let request = match prepared.body {
            RequestBody::None => self.client.get(&url),
            RequestBody::Text(content) => self
                .client
                .get(&url)
                .header(CONTENT_TYPE, "text/plain")
                .body(content),
            RequestBody::Json(body) => self.client.post(&url).json(&body),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ToolError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::upstream(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ToolError::transport(format!("invalid JSON from upstream: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher(base_url: &str) -> Dispatcher {
        Dispatcher::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let d = dispatcher("http://localhost:27000/");
        assert_eq!(d.base_url(), "http://localhost:27000");
    }

    #[tokio::test]
    async fn test_unknown_tool_rejected_locally() {
        // A base URL that cannot resolve proves no network call is made.
        let d = dispatcher("http://pvfutility.invalid");
        let err = d
            .invoke("not_a_tool", &ArgumentBag::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(_)));
        assert_eq!(err.to_string(), "Unknown tool: not_a_tool");
    }

    #[tokio::test]
    async fn test_invalid_arguments_rejected_locally() {
        let d = dispatcher("http://pvfutility.invalid");
        let err = d
            .invoke("get_file_content", &ArgumentBag::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
    }
}
