//! Pack search tool.
//!
//! The upstream search endpoint takes a large composed request object; the
//! caller only supplies the keyword, folder, type, and regex flag. The
//! remaining fields are constants owned by the endpoint registry.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{default_search_type, gateway_route, gateway_tool};
use crate::domains::tools::dispatcher::Dispatcher;

/// Parameters for pack searches.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPvfParams {
    /// The search keyword.
    #[schemars(description = "Search keyword")]
    pub keyword: String,

    /// Folder to restrict the search to.
    #[schemars(description = "Folder to search in (default: whole pack)")]
    #[serde(default)]
    pub search_folder: String,

    /// Upstream search mode selector.
    #[schemars(description = "Search type (default: 1)")]
    #[serde(default = "default_search_type")]
    pub search_type: i64,

    /// Interpret the keyword as a regular expression.
    #[schemars(description = "Treat the keyword as a regular expression (default: false)")]
    #[serde(default)]
    pub use_regex: bool,
}

#[derive(Debug, Clone)]
pub struct SearchPvfTool;

impl SearchPvfTool {
    pub const NAME: &'static str = "search_pvf";
    pub const DESCRIPTION: &'static str = "Search the PVF pack for files matching a keyword.";

    pub fn to_tool() -> Tool {
        gateway_tool::<SearchPvfParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, SearchPvfParams>(Self::to_tool(), dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_defaults() {
        let json = r#"{"keyword": "sword"}"#;
        let params: SearchPvfParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.search_folder, "");
        assert_eq!(params.search_type, 1);
        assert!(!params.use_regex);
    }

    #[test]
    fn test_keyword_required() {
        assert!(serde_json::from_str::<SearchPvfParams>("{}").is_err());
    }
}
