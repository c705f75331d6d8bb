//! Item lookup tools.
//!
//! Item files carry a game-facing code and display name; these tools expose
//! the upstream lookups in both directions (file path to item info, item
//! code to file info).

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{gateway_route, gateway_tool};
use super::files::FilePathParams;
use crate::domains::tools::dispatcher::Dispatcher;

#[derive(Debug, Clone)]
pub struct GetItemInfoTool;

impl GetItemInfoTool {
    pub const NAME: &'static str = "get_item_info";
    pub const DESCRIPTION: &'static str = "Get the item code and name for an item file.";

    pub fn to_tool() -> Tool {
        gateway_tool::<FilePathParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, FilePathParams>(Self::to_tool(), dispatcher)
    }
}

/// Parameters for reverse lookups by item code.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ItemCodeToFileInfoParams {
    /// LST names to search, e.g. ["equipment", "stackable"]. Sent upstream
    /// as one comma-joined value.
    #[schemars(description = "LST names to search, e.g. ['equipment', 'stackable']")]
    pub lst_names: Vec<String>,

    /// The item code to look up.
    #[schemars(description = "Item code")]
    pub item_code: i64,
}

#[derive(Debug, Clone)]
pub struct ItemCodeToFileInfoTool;

impl ItemCodeToFileInfoTool {
    pub const NAME: &'static str = "item_code_to_file_info";
    pub const DESCRIPTION: &'static str = "Find the file information for an item code.";

    pub fn to_tool() -> Tool {
        gateway_tool::<ItemCodeToFileInfoParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, ItemCodeToFileInfoParams>(Self::to_tool(), dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_code_params() {
        let json = r#"{"lst_names": ["equipment"], "item_code": 1001}"#;
        let params: ItemCodeToFileInfoParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.lst_names, vec!["equipment"]);
        assert_eq!(params.item_code, 1001);
    }

    #[test]
    fn test_item_code_required() {
        let json = r#"{"lst_names": ["equipment"]}"#;
        assert!(serde_json::from_str::<ItemCodeToFileInfoParams>(json).is_err());
    }

    #[test]
    fn test_names_match_registry() {
        use crate::domains::tools::endpoints::ToolName;
        assert!(ToolName::parse(GetItemInfoTool::NAME).is_some());
        assert!(ToolName::parse(ItemCodeToFileInfoTool::NAME).is_some());
    }
}
