//! Tools domain module.
//!
//! This module is the whole gateway surface of the server: a fixed catalog
//! of tools, each translated into exactly one pvfUtility WebApi call.
//!
//! ## Architecture
//!
//! - `endpoints.rs` - static endpoint registry (tool name -> request shape)
//! - `request.rs` - pure request construction from an argument bag
//! - `dispatcher.rs` - executes one invocation over the shared HTTP client
//! - `definitions/` - declarative tool metadata and input schemas
//! - `router.rs` - ToolRouter builder wiring every tool to the dispatcher
//! - `error.rs` - the normalized error taxonomy
//!
//! ## Adding a New Tool
//!
//! 1. Add the variant to `ToolName` and its `EndpointSpec` in `endpoints.rs`
//! 2. Add a params struct + tool type in the matching `definitions/` file
//! 3. Add the route in `router.rs` using `with_route()`

pub mod definitions;
pub mod dispatcher;
pub mod endpoints;
mod error;
pub mod request;
pub mod router;

pub use dispatcher::Dispatcher;
pub use endpoints::{EndpointSpec, RequestShape, ToolName};
pub use error::ToolError;
pub use request::{ArgumentBag, PreparedRequest, RequestBody};
pub use router::build_tool_router;
