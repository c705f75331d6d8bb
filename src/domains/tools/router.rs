//! Tool Router - builds the rmcp ToolRouter over the gateway dispatcher.
//!
//! Every route shares the same dispatcher (and therefore the same HTTP
//! client); the routes differ only in their declared input schemas and the
//! tool name they hand to the dispatcher.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    DeleteFileTool, DeleteFilesBatchTool, FileExistsTool, FolderExistsTool,
    GetAllLstFileListTool, GetFileContentTool, GetFileContentsBatchTool, GetFileDataJsonTool,
    GetFileIconTool, GetFileListTool, GetItemInfoTool, GetItemInfosBatchTool,
    GetLstFileInfoTool, GetPvfPackFilePathTool, GetPvfRootDirectoryTool, GetStringTableTool,
    GetVersionTool, ImportFileTool, ImportFilesBatchTool, ItemCodeToFileInfoTool,
    ItemCodesToFileInfosBatchTool, SaveAsPvfTool, SearchPvfTool,
};
use super::dispatcher::Dispatcher;

/// Build the tool router with every tool in the catalog.
pub fn build_tool_router<S>(dispatcher: Arc<Dispatcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetVersionTool::create_route(dispatcher.clone()))
        .with_route(GetFileListTool::create_route(dispatcher.clone()))
        .with_route(GetPvfRootDirectoryTool::create_route(dispatcher.clone()))
        .with_route(GetFileContentTool::create_route(dispatcher.clone()))
        .with_route(GetFileContentsBatchTool::create_route(dispatcher.clone()))
        .with_route(GetFileDataJsonTool::create_route(dispatcher.clone()))
        .with_route(DeleteFileTool::create_route(dispatcher.clone()))
        .with_route(DeleteFilesBatchTool::create_route(dispatcher.clone()))
        .with_route(ImportFileTool::create_route(dispatcher.clone()))
        .with_route(ImportFilesBatchTool::create_route(dispatcher.clone()))
        .with_route(GetItemInfoTool::create_route(dispatcher.clone()))
        .with_route(GetItemInfosBatchTool::create_route(dispatcher.clone()))
        .with_route(SearchPvfTool::create_route(dispatcher.clone()))
        .with_route(ItemCodeToFileInfoTool::create_route(dispatcher.clone()))
        .with_route(ItemCodesToFileInfosBatchTool::create_route(dispatcher.clone()))
        .with_route(GetFileIconTool::create_route(dispatcher.clone()))
        .with_route(FileExistsTool::create_route(dispatcher.clone()))
        .with_route(FolderExistsTool::create_route(dispatcher.clone()))
        .with_route(SaveAsPvfTool::create_route(dispatcher.clone()))
        .with_route(GetPvfPackFilePathTool::create_route(dispatcher.clone()))
        .with_route(GetAllLstFileListTool::create_route(dispatcher.clone()))
        .with_route(GetLstFileInfoTool::create_route(dispatcher.clone()))
        .with_route(GetStringTableTool::create_route(dispatcher))
}
