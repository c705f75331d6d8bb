//! Shared plumbing for gateway tool definitions.
//!
//! Every tool in this server is a thin declarative wrapper around the
//! dispatcher: a parameters struct (for the MCP input schema), a name, and a
//! description. The helpers here turn that into rmcp metadata and routes so
//! the per-tool files stay pure data.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domains::tools::dispatcher::Dispatcher;

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, serde::Deserialize, JsonSchema)]
pub struct EmptyParams {}

/// Default encoding for file-content tools.
pub fn default_encoding() -> String {
    "UTF8".to_string()
}

/// Default search type for search_pvf.
pub fn default_search_type() -> i64 {
    1
}

/// Build the rmcp Tool metadata for a gateway tool.
pub(crate) fn gateway_tool<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Build the ToolRoute for a gateway tool.
///
/// The route validates the argument bag against `P`, then forwards the raw
/// arguments to the dispatcher. All failures become a uniform error result;
/// no tool call ever surfaces a protocol-level fault.
pub(crate) fn gateway_route<S, P>(tool: Tool, dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + JsonSchema + Send + 'static,
{
    let name = tool.name.to_string();
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let dispatcher = dispatcher.clone();
        let name = name.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            if let Err(e) = serde_json::from_value::<P>(Value::Object(args.clone())) {
                return Ok(error_result(&format!("Invalid arguments: {e}")));
            }
            match dispatcher.invoke(&name, &args).await {
                Ok(value) => Ok(success_result(&value)),
                Err(e) => Ok(error_result(&e.to_string())),
            }
        }
        .boxed()
    })
}

/// Render an upstream payload as a success result.
pub(crate) fn success_result(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error result with a short human-readable message.
pub(crate) fn error_result(message: &str) -> CallToolResult {
    warn!("{message}");
    CallToolResult::error(vec![Content::text(message.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_params_accept_empty_object() {
        let params: EmptyParams = serde_json::from_value(json!({})).unwrap();
        let _ = params;
    }

    #[test]
    fn test_success_result_pretty_prints() {
        let result = success_result(&json!({"a": 1}));
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_error_result_flagged() {
        let result = error_result("Upstream returned HTTP 500");
        assert_eq!(result.is_error, Some(true));
    }
}
