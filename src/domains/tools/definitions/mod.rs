//! Tool definitions module.
//!
//! Each tool here is declarative: a parameters struct for the input schema
//! plus name and description constants. The request translation itself lives
//! in the endpoint registry; the dispatcher executes it.

pub mod batch;
pub(crate) mod common;
pub mod files;
pub mod info;
pub mod items;
pub mod search;

pub use batch::{
    DeleteFilesBatchTool, GetFileContentsBatchTool, GetItemInfosBatchTool, ImportFilesBatchTool,
    ItemCodesToFileInfosBatchTool,
};
pub use files::{
    DeleteFileTool, FileExistsTool, FolderExistsTool, GetFileContentTool, GetFileDataJsonTool,
    GetFileIconTool, GetFileListTool, GetLstFileInfoTool, ImportFileTool, SaveAsPvfTool,
};
pub use info::{
    GetAllLstFileListTool, GetPvfPackFilePathTool, GetPvfRootDirectoryTool, GetStringTableTool,
    GetVersionTool,
};
pub use items::{GetItemInfoTool, ItemCodeToFileInfoTool};
pub use search::SearchPvfTool;
