//! Single-file operation tools.
//!
//! Listing, reading, importing, deleting, and existence checks for files and
//! folders inside the loaded PVF pack, plus the save-as operation for the
//! pack itself. Each tool is one upstream GET; import_file additionally
//! carries the file content as a raw text body.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{default_encoding, gateway_route, gateway_tool};
use crate::domains::tools::dispatcher::Dispatcher;

/// Parameters for directory listings.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileListParams {
    /// Directory name, e.g. "equipment".
    #[schemars(description = "Directory name, e.g. 'equipment'")]
    pub dir_name: String,

    /// Listing format flag, 0 or 1.
    #[schemars(description = "Return type, 0 or 1 (default: 0)")]
    #[serde(default)]
    pub return_type: i64,

    /// File extension filter, e.g. ".equ".
    #[schemars(description = "File extension filter, e.g. '.equ' (default: none)")]
    #[serde(default)]
    pub file_type: String,
}

#[derive(Debug, Clone)]
pub struct GetFileListTool;

impl GetFileListTool {
    pub const NAME: &'static str = "get_file_list";
    pub const DESCRIPTION: &'static str = "Get the file list of a directory in the pack.";

    pub fn to_tool() -> Tool {
        gateway_tool::<GetFileListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, GetFileListParams>(Self::to_tool(), dispatcher)
    }
}

/// Parameters for single-file content reads.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileContentParams {
    /// Path of the file inside the pack.
    #[schemars(description = "File path inside the pack")]
    pub file_path: String,

    /// Use the compatibility decompiler for old script formats.
    #[schemars(description = "Use the compatibility decompiler (default: false)")]
    #[serde(default)]
    pub use_compatible_decompiler: bool,

    /// Text encoding: TW/CN/KR/JP/UTF8/Unicode.
    #[schemars(description = "Encoding type: TW/CN/KR/JP/UTF8/Unicode (default: UTF8)")]
    #[serde(default = "default_encoding")]
    pub encoding_type: String,
}

#[derive(Debug, Clone)]
pub struct GetFileContentTool;

impl GetFileContentTool {
    pub const NAME: &'static str = "get_file_content";
    pub const DESCRIPTION: &'static str = "Get the decompiled content of a file in the pack.";

    pub fn to_tool() -> Tool {
        gateway_tool::<GetFileContentParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, GetFileContentParams>(Self::to_tool(), dispatcher)
    }
}

/// Parameters for tools that take a single pack-file path.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FilePathParams {
    /// Path of the file inside the pack.
    #[schemars(description = "File path inside the pack")]
    pub file_path: String,
}

#[derive(Debug, Clone)]
pub struct GetFileDataJsonTool;

impl GetFileDataJsonTool {
    pub const NAME: &'static str = "get_file_data_json";
    pub const DESCRIPTION: &'static str = "Get the content of a PVF file as structured JSON.";

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

#[derive(Debug, Clone)]
pub struct DeleteFileTool;

impl DeleteFileTool {
    pub const NAME: &'static str = "delete_file";
    pub const DESCRIPTION: &'static str = "Delete a file from the pack.";

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

/// Parameters for single-file imports.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImportFileParams {
    /// Path of the file inside the pack.
    #[schemars(description = "File path inside the pack")]
    pub file_path: String,

    /// New file content, sent as the raw request body.
    #[schemars(description = "File content to import")]
    pub file_content: String,
}

#[derive(Debug, Clone)]
pub struct ImportFileTool;

impl ImportFileTool {
    pub const NAME: &'static str = "import_file";
    pub const DESCRIPTION: &'static str = "Import or overwrite the content of a file in the pack.";

    pub fn to_tool() -> Tool {
        gateway_tool::<ImportFileParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, ImportFileParams>(Self::to_tool(), dispatcher)
    }
}

#[derive(Debug, Clone)]
pub struct FileExistsTool;

impl FileExistsTool {
    pub const NAME: &'static str = "file_exists";
    pub const DESCRIPTION: &'static str = "Check whether a file exists in the pack.";

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

/// Parameters for folder existence checks.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FolderExistsParams {
    /// Path of the folder inside the pack.
    #[schemars(description = "Folder path inside the pack")]
    pub folder_path: String,
}

#[derive(Debug, Clone)]
pub struct FolderExistsTool;

impl FolderExistsTool {
    pub const NAME: &'static str = "folder_exists";
    pub const DESCRIPTION: &'static str = "Check whether a folder exists in the pack.";

    pub fn to_tool() -> Tool {
        gateway_tool::<FolderExistsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, FolderExistsParams>(Self::to_tool(), dispatcher)
    }
}

/// Parameters for saving the pack to a new location.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveAsPvfParams {
    /// Destination path on disk; may contain characters that are unsafe in
    /// a URL, so it is percent-encoded before dispatch.
    #[schemars(description = "Destination path for the saved pack")]
    pub file_path: String,
}

#[derive(Debug, Clone)]
pub struct SaveAsPvfTool;

impl SaveAsPvfTool {
    pub const NAME: &'static str = "save_as_pvf";
    pub const DESCRIPTION: &'static str = "Save the loaded PVF pack to a new file.";

    pub fn to_tool() -> Tool {
        gateway_tool::<SaveAsPvfParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        gateway_route::<S, SaveAsPvfParams>(Self::to_tool(), dispatcher)
    }
}

#[derive(Debug, Clone)]
pub struct GetLstFileInfoTool;

impl GetLstFileInfoTool {
    pub const NAME: &'static str = "get_lst_file_info";
    pub const DESCRIPTION: &'static str = "Get the entries of an LST file.";

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

#[derive(Debug, Clone)]
pub struct GetFileIconTool;

impl GetFileIconTool {
    pub const NAME: &'static str = "get_file_icon";
    pub const DESCRIPTION: &'static str = "Get the icon of a file as Base64 image data.";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_list_params_defaults() {
        let json = r#"{"dir_name": "equipment"}"#;
        let params: GetFileListParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.return_type, 0);
        assert_eq!(params.file_type, "");
    }

    #[test]
    fn test_file_content_params_defaults() {
        let json = r#"{"file_path": "equipment/sword.equ"}"#;
        let params: GetFileContentParams = serde_json::from_str(json).unwrap();
        assert!(!params.use_compatible_decompiler);
        assert_eq!(params.encoding_type, "UTF8");
    }

    #[test]
    fn test_import_requires_content() {
        let json = r#"{"file_path": "equipment/sword.equ"}"#;
        assert!(serde_json::from_str::<ImportFileParams>(json).is_err());
    }

    #[test]
    fn test_names_match_registry() {
        use crate::domains::tools::endpoints::ToolName;
        for name in [
            GetFileListTool::NAME,
            GetFileContentTool::NAME,
            GetFileDataJsonTool::NAME,
            DeleteFileTool::NAME,
            ImportFileTool::NAME,
            FileExistsTool::NAME,
            FolderExistsTool::NAME,
            SaveAsPvfTool::NAME,
            GetLstFileInfoTool::NAME,
            GetFileIconTool::NAME,
        ] {
            assert!(ToolName::parse(name).is_some(), "{name} not in registry");
        }
    }
}
