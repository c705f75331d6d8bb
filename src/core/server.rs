//! MCP server implementation and lifecycle management.
//!
//! The server handler owns the gateway dispatcher (and with it the single
//! shared HTTP client for the session) and exposes the tool catalog through
//! rmcp. Tool routing is built once in `domains/tools/router.rs`; this file
//! never changes when a tool is added.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as ServerResult;
use crate::domains::tools::{Dispatcher, build_tool_router};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp; every tool call is routed
/// through the shared [`Dispatcher`] to the upstream WebApi.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Gateway dispatcher holding the session's HTTP client.
    dispatcher: Arc<Dispatcher>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new server with the given configuration.
    ///
    /// This is where the session-scoped HTTP client is created; it lives
    /// until the server (and every clone of it) is dropped.
    pub fn new(config: Config) -> ServerResult<Self> {
        let config = Arc::new(config);
        let dispatcher = Arc::new(Dispatcher::new(&config.upstream)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(dispatcher.clone()),
            config,
            dispatcher,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the gateway dispatcher.
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "MCP gateway for the pvfUtility WebApi. Tools browse, search, and edit \
                 the currently loaded PVF pack through the local pvfUtility instance."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
