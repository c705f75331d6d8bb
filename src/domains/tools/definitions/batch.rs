//! Batch operation tools.
//!
//! Each batch tool carries a whole collection in one invocation and maps to
//! exactly one upstream POST whose body is the entire batch. The dispatcher
//! never decomposes a batch into per-item calls; that contract belongs to
//! the upstream service.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{default_encoding, gateway_route, gateway_tool};
use crate::domains::tools::dispatcher::Dispatcher;

/// Parameters for batch content reads.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileContentsBatchParams {
    /// Paths of the files to read.
    #[schemars(description = "File paths to read")]
    pub file_list: Vec<String>,

    /// Use the compatibility decompiler for old script formats.
    #[schemars(description = "Use the compatibility decompiler (default: false)")]
    #[serde(default)]
    pub use_compatible_decompiler: bool,

    /// Text encoding: TW/CN/KR/JP/UTF8/Unicode.
    #[schemars(description = "Encoding type (default: UTF8)")]
    #[serde(default = "default_encoding")]
    pub encoding_type: String,
}

#[derive(Debug, Clone)]
pub struct GetFileContentsBatchTool;

impl GetFileContentsBatchTool {
    pub const NAME: &'static str = "get_file_contents_batch";
    pub const DESCRIPTION: &'static str = "Get the content of multiple files in one call.";

    pub fn to_tool() -> Tool {
        gateway_tool::<GetFileContentsBatchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, GetFileContentsBatchParams>(Self::to_tool(), dispatcher)
    }
}

/// Parameters for tools that take a list of pack-file paths.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FilePathsParams {
    /// Paths of the files to operate on.
    #[schemars(description = "File paths inside the pack")]
    pub file_paths: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteFilesBatchTool;

impl DeleteFilesBatchTool {
    pub const NAME: &'static str = "delete_files_batch";
    pub const DESCRIPTION: &'static str = "Delete multiple files from the pack in one call.";

    pub fn to_tool() -> Tool {
        gateway_tool::<FilePathsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, FilePathsParams>(Self::to_tool(), dispatcher)
    }
}

/// One file entry of a batch import, using the upstream's field names.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImportFileEntry {
    /// Path of the file inside the pack.
    #[serde(rename = "FilePath")]
    pub file_path: String,

    /// New file content.
    #[serde(rename = "FileContent")]
    pub file_content: String,
}

/// Parameters for batch imports.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImportFilesBatchParams {
    /// Files to import, each with FilePath and FileContent.
    #[schemars(description = "Files to import, each with FilePath and FileContent")]
    pub files: Vec<ImportFileEntry>,
}

#[derive(Debug, Clone)]
pub struct ImportFilesBatchTool;

impl ImportFilesBatchTool {
    pub const NAME: &'static str = "import_files_batch";
    pub const DESCRIPTION: &'static str = "Import or overwrite multiple files in one call.";

    pub fn to_tool() -> Tool {
        gateway_tool::<ImportFilesBatchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, ImportFilesBatchParams>(Self::to_tool(), dispatcher)
    }
}

#[derive(Debug, Clone)]
pub struct GetItemInfosBatchTool;

impl GetItemInfosBatchTool {
    pub const NAME: &'static str = "get_item_infos_batch";
    pub const DESCRIPTION: &'static str = "Get item codes and names for multiple item files.";

    pub fn to_tool() -> Tool {
        gateway_tool::<FilePathsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, FilePathsParams>(Self::to_tool(), dispatcher)
    }
}

/// Parameters for batch reverse lookups by item code.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ItemCodesToFileInfosBatchParams {
    /// LST names to search.
    #[schemars(description = "LST names to search")]
    pub lst_names: Vec<String>,

    /// Item codes to look up.
    #[schemars(description = "Item codes to look up")]
    pub item_codes: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct ItemCodesToFileInfosBatchTool;

impl ItemCodesToFileInfosBatchTool {
    pub const NAME: &'static str = "item_codes_to_file_infos_batch";
    pub const DESCRIPTION: &'static str = "Find file information for multiple item codes.";

    pub fn to_tool() -> Tool {
        gateway_tool::<ItemCodesToFileInfosBatchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, ItemCodesToFileInfosBatchParams>(Self::to_tool(), dispatcher)
    }
}
