//! pvfUtility MCP Gateway
//!
//! This crate exposes the pvfUtility WebApi (a local REST service for
//! browsing and editing PVF game-data packs) as a fixed catalog of MCP
//! tools. Every tool invocation maps to exactly one upstream HTTP call; the
//! upstream JSON response is relayed verbatim, and every failure is
//! normalized into a short human-readable error result.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and the
//!   stdio/tcp transports
//! - **domains::tools**: the gateway itself - a static endpoint registry,
//!   a pure request builder, and the dispatcher owning the session's shared
//!   HTTP client
//!
//! # Example
//!
//! ```rust,no_run
//! use pvfutility_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::tools::{ArgumentBag, Dispatcher, ToolError, ToolName};
