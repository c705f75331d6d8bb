//! Pack-level query tools.
//!
//! These tools take no arguments and map to the upstream's parameterless
//! GET endpoints: version, root directory, loaded pack path, LST catalog,
//! and the string table.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};

use super::common::{EmptyParams, gateway_route, gateway_tool};
use crate::domains::tools::dispatcher::Dispatcher;

/// Report the pvfUtility version.
#[derive(Debug, Clone)]
pub struct GetVersionTool;

impl GetVersionTool {
    pub const NAME: &'static str = "get_version";
    pub const DESCRIPTION: &'static str = "Get the pvfUtility version number.";

    pub fn to_tool() -> Tool {
        gateway_tool::<EmptyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, EmptyParams>(Self::to_tool(), dispatcher)
    }
}

/// List the root directories of the loaded PVF pack.
#[derive(Debug, Clone)]
pub struct GetPvfRootDirectoryTool;

impl GetPvfRootDirectoryTool {
    pub const NAME: &'static str = "get_pvf_root_directory";
    pub const DESCRIPTION: &'static str = "Get the list of PVF root directories.";

    pub fn to_tool() -> Tool {
        gateway_tool::<EmptyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, EmptyParams>(Self::to_tool(), dispatcher)
    }
}

/// Report the path of the currently loaded pack file.
#[derive(Debug, Clone)]
pub struct GetPvfPackFilePathTool;

impl GetPvfPackFilePathTool {
    pub const NAME: &'static str = "get_pvf_pack_file_path";
    pub const DESCRIPTION: &'static str = "Get the path of the currently loaded PVF pack file.";

    pub fn to_tool() -> Tool {
        gateway_tool::<EmptyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, EmptyParams>(Self::to_tool(), dispatcher)
    }
}

/// List every LST file in the pack.
#[derive(Debug, Clone)]
pub struct GetAllLstFileListTool;

impl GetAllLstFileListTool {
    pub const NAME: &'static str = "get_all_lst_file_list";
    pub const DESCRIPTION: &'static str = "Get the list of all LST files in the pack.";

    pub fn to_tool() -> Tool {
        gateway_tool::<EmptyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, EmptyParams>(Self::to_tool(), dispatcher)
    }
}

/// Fetch the pack's string table.
#[derive(Debug, Clone)]
pub struct GetStringTableTool;

impl GetStringTableTool {
    pub const NAME: &'static str = "get_string_table";
    pub const DESCRIPTION: &'static str = "Get the string table data of the pack.";

    pub fn to_tool() -> Tool {
        gateway_tool::<EmptyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, EmptyParams>(Self::to_tool(), dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_metadata() {
        let tool = GetVersionTool::to_tool();
        assert_eq!(tool.name, "get_version");
        assert!(tool.description.is_some());
    }

    #[test]
    fn test_names_match_registry() {
        use crate::domains::tools::endpoints::ToolName;
        for name in [
            GetVersionTool::NAME,
            GetPvfRootDirectoryTool::NAME,
            GetPvfPackFilePathTool::NAME,
            GetAllLstFileListTool::NAME,
            GetStringTableTool::NAME,
        ] {
            assert!(ToolName::parse(name).is_some(), "{name} not in registry");
        }
    }
}
