//! Endpoint registry - the fixed catalog of upstream endpoints.
//!
//! Every tool exposed by this server maps 1:1 to one pvfUtility WebApi
//! endpoint. The mapping is pure data: a [`ToolName`] resolves to a static
//! [`EndpointSpec`] describing the upstream path, the request shape, and how
//! caller arguments become query parameters or a request body.
//!
//! The registry is constructed at compile time and never mutated. Because
//! `ToolName::spec` is an exhaustive match, every tool in the enumeration is
//! guaranteed to have exactly one spec.
//!
//! Upstream paths are reproduced byte-for-byte from the WebApi contract,
//! including its own `PvfUtiltiy` spelling and mixed-case method names.

use serde_json::Value;

/// The closed set of tools this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetVersion,
    GetFileList,
    GetPvfRootDirectory,
    GetFileContent,
    GetFileContentsBatch,
    GetFileDataJson,
    DeleteFile,
    DeleteFilesBatch,
    ImportFile,
    ImportFilesBatch,
    GetItemInfo,
    GetItemInfosBatch,
    SearchPvf,
    ItemCodeToFileInfo,
    ItemCodesToFileInfosBatch,
    GetFileIcon,
    FileExists,
    FolderExists,
    SaveAsPvf,
    GetPvfPackFilePath,
    GetAllLstFileList,
    GetLstFileInfo,
    GetStringTable,
}

impl ToolName {
    /// Every tool in the catalog, in wire-name order.
    pub const ALL: [ToolName; 23] = [
        Self::GetVersion,
        Self::GetFileList,
        Self::GetPvfRootDirectory,
        Self::GetFileContent,
        Self::GetFileContentsBatch,
        Self::GetFileDataJson,
        Self::DeleteFile,
        Self::DeleteFilesBatch,
        Self::ImportFile,
        Self::ImportFilesBatch,
        Self::GetItemInfo,
        Self::GetItemInfosBatch,
        Self::SearchPvf,
        Self::ItemCodeToFileInfo,
        Self::ItemCodesToFileInfosBatch,
        Self::GetFileIcon,
        Self::FileExists,
        Self::FolderExists,
        Self::SaveAsPvf,
        Self::GetPvfPackFilePath,
        Self::GetAllLstFileList,
        Self::GetLstFileInfo,
        Self::GetStringTable,
    ];

    /// Parse a wire-format tool name. Returns `None` for anything outside
    /// the catalog.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// The wire-format name of this tool.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetVersion => "get_version",
            Self::GetFileList => "get_file_list",
            Self::GetPvfRootDirectory => "get_pvf_root_directory",
            Self::GetFileContent => "get_file_content",
            Self::GetFileContentsBatch => "get_file_contents_batch",
            Self::GetFileDataJson => "get_file_data_json",
            Self::DeleteFile => "delete_file",
            Self::DeleteFilesBatch => "delete_files_batch",
            Self::ImportFile => "import_file",
            Self::ImportFilesBatch => "import_files_batch",
            Self::GetItemInfo => "get_item_info",
            Self::GetItemInfosBatch => "get_item_infos_batch",
            Self::SearchPvf => "search_pvf",
            Self::ItemCodeToFileInfo => "item_code_to_file_info",
            Self::ItemCodesToFileInfosBatch => "item_codes_to_file_infos_batch",
            Self::GetFileIcon => "get_file_icon",
            Self::FileExists => "file_exists",
            Self::FolderExists => "folder_exists",
            Self::SaveAsPvf => "save_as_pvf",
            Self::GetPvfPackFilePath => "get_pvf_pack_file_path",
            Self::GetAllLstFileList => "get_all_lst_file_list",
            Self::GetLstFileInfo => "get_lst_file_info",
            Self::GetStringTable => "get_string_table",
        }
    }

    /// Resolve this tool to its endpoint spec.
    pub fn spec(self) -> &'static EndpointSpec {
        match self {
            Self::GetVersion => &GET_VERSION,
            Self::GetFileList => &GET_FILE_LIST,
            Self::GetPvfRootDirectory => &GET_PVF_ROOT_DIRECTORY,
            Self::GetFileContent => &GET_FILE_CONTENT,
            Self::GetFileContentsBatch => &GET_FILE_CONTENTS_BATCH,
            Self::GetFileDataJson => &GET_FILE_DATA_JSON,
            Self::DeleteFile => &DELETE_FILE,
            Self::DeleteFilesBatch => &DELETE_FILES_BATCH,
            Self::ImportFile => &IMPORT_FILE,
            Self::ImportFilesBatch => &IMPORT_FILES_BATCH,
            Self::GetItemInfo => &GET_ITEM_INFO,
            Self::GetItemInfosBatch => &GET_ITEM_INFOS_BATCH,
            Self::SearchPvf => &SEARCH_PVF,
            Self::ItemCodeToFileInfo => &ITEM_CODE_TO_FILE_INFO,
            Self::ItemCodesToFileInfosBatch => &ITEM_CODES_TO_FILE_INFOS_BATCH,
            Self::GetFileIcon => &GET_FILE_ICON,
            Self::FileExists => &FILE_EXISTS,
            Self::FolderExists => &FOLDER_EXISTS,
            Self::SaveAsPvf => &SAVE_AS_PVF,
            Self::GetPvfPackFilePath => &GET_PVF_PACK_FILE_PATH,
            Self::GetAllLstFileList => &GET_ALL_LST_FILE_LIST,
            Self::GetLstFileInfo => &GET_LST_FILE_INFO,
            Self::GetStringTable => &GET_STRING_TABLE,
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The HTTP shape of one upstream endpoint.
#[derive(Debug)]
pub struct EndpointSpec {
    /// Upstream path, appended verbatim to the configured base URL.
    pub path: &'static str,

    /// How the request is built from the argument bag.
    pub shape: RequestShape,
}

/// The three structural categories of outbound requests.
#[derive(Debug)]
pub enum RequestShape {
    /// GET with URL query parameters only.
    QueryGet { params: &'static [QueryParam] },

    /// GET with URL query parameters plus a raw `text/plain` body taken
    /// from one caller argument.
    TextGet {
        params: &'static [QueryParam],
        body_source: &'static str,
    },

    /// POST whose entire body is one JSON value; no query string.
    StructuredPost { body: BodyRule },
}

/// Mapping rule for one upstream query parameter.
#[derive(Debug)]
pub struct QueryParam {
    /// Parameter name as the upstream expects it.
    pub upstream: &'static str,

    /// Argument bag key the value is read from.
    pub source: &'static str,

    /// Whether an absent argument is an error rather than an omission.
    pub required: bool,

    /// Fallback value used when the argument is absent.
    pub default: Option<ConstValue>,

    /// Percent-encode the value before generic query serialization. The
    /// upstream expects the save-as path doubly encoded, so the value goes
    /// through `urlencoding::encode` first and the query encoder second.
    pub percent_encode: bool,
}

impl QueryParam {
    /// A parameter whose source argument must be present.
    pub const fn required(upstream: &'static str, source: &'static str) -> Self {
        Self {
            upstream,
            source,
            required: true,
            default: None,
            percent_encode: false,
        }
    }

    /// An optional parameter with a declared fallback value.
    pub const fn defaulted(
        upstream: &'static str,
        source: &'static str,
        default: ConstValue,
    ) -> Self {
        Self {
            upstream,
            source,
            required: false,
            default: Some(default),
            percent_encode: false,
        }
    }

    /// A required parameter whose value is percent-encoded before insertion.
    pub const fn percent_encoded(upstream: &'static str, source: &'static str) -> Self {
        Self {
            upstream,
            source,
            required: true,
            default: None,
            percent_encode: true,
        }
    }
}

/// How a Structured-POST body is built from the argument bag.
#[derive(Debug)]
pub enum BodyRule {
    /// The body is one caller-supplied array, forwarded as-is (empty array
    /// when absent). Used by the bare-list batch endpoints.
    ArgArray { source: &'static str },

    /// The body is a JSON object with fixed upstream field names.
    Object(&'static [BodyField]),
}

/// One field of a composed Structured-POST body.
#[derive(Debug)]
pub struct BodyField {
    /// Field name as the upstream expects it.
    pub upstream: &'static str,

    /// Where the field value comes from.
    pub value: FieldSource,
}

/// Source of a composed body field.
#[derive(Debug)]
pub enum FieldSource {
    /// Taken from the argument bag, with an optional fallback. Without a
    /// fallback an absent argument is sent as JSON null.
    Arg {
        source: &'static str,
        default: Option<ConstValue>,
    },

    /// A constant the upstream requires regardless of caller input.
    Const(ConstValue),
}

impl BodyField {
    pub const fn arg(upstream: &'static str, source: &'static str) -> Self {
        Self {
            upstream,
            value: FieldSource::Arg {
                source,
                default: None,
            },
        }
    }

    pub const fn arg_or(
        upstream: &'static str,
        source: &'static str,
        default: ConstValue,
    ) -> Self {
        Self {
            upstream,
            value: FieldSource::Arg {
                source,
                default: Some(default),
            },
        }
    }

    pub const fn constant(upstream: &'static str, value: ConstValue) -> Self {
        Self {
            upstream,
            value: FieldSource::Const(value),
        }
    }
}

/// A constant JSON value expressible in static endpoint data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstValue {
    Int(i64),
    Bool(bool),
    Str(&'static str),
    Null,
    EmptyList,
}

impl ConstValue {
    /// Render as a JSON value (for request bodies).
    pub fn to_json(self) -> Value {
        match self {
            Self::Int(i) => Value::from(i),
            Self::Bool(b) => Value::from(b),
            Self::Str(s) => Value::from(s),
            Self::Null => Value::Null,
            Self::EmptyList => Value::Array(Vec::new()),
        }
    }

    /// Render as a query-string value. `Null` and `EmptyList` have no
    /// query representation and behave like an absent argument.
    pub(crate) fn render(self) -> Option<String> {
        match self {
            Self::Int(i) => Some(i.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Str(s) => Some(s.to_string()),
            Self::Null | Self::EmptyList => None,
        }
    }
}

// ============================================================================
// The endpoint table
// ============================================================================

static GET_VERSION: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/getVersion",
    shape: RequestShape::QueryGet { params: &[] },
};

static GET_FILE_LIST: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/GetFileList",
    shape: RequestShape::QueryGet {
        params: &[
            QueryParam::required("dirName", "dir_name"),
            QueryParam::defaulted("returnType", "return_type", ConstValue::Int(0)),
            QueryParam::defaulted("fileType", "file_type", ConstValue::Str("")),
        ],
    },
};

static GET_PVF_ROOT_DIRECTORY: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/getPvfRootDirectory",
    shape: RequestShape::QueryGet { params: &[] },
};

static GET_FILE_CONTENT: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/GetFileContent",
    shape: RequestShape::QueryGet {
        params: &[
            QueryParam::required("filePath", "file_path"),
            QueryParam::defaulted(
                "useCompatibleDecompiler",
                "use_compatible_decompiler",
                ConstValue::Bool(false),
            ),
            QueryParam::defaulted("encodingType", "encoding_type", ConstValue::Str("UTF8")),
        ],
    },
};

static GET_FILE_CONTENTS_BATCH: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/GetFileContents",
    shape: RequestShape::StructuredPost {
        body: BodyRule::Object(&[
            BodyField::arg_or("FileList", "file_list", ConstValue::EmptyList),
            BodyField::arg_or(
                "UseCompatibleDecompiler",
                "use_compatible_decompiler",
                ConstValue::Bool(false),
            ),
            BodyField::arg_or("EncodingType", "encoding_type", ConstValue::Str("UTF8")),
        ]),
    },
};

static GET_FILE_DATA_JSON: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/getFileData",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::required("filePath", "file_path")],
    },
};

static DELETE_FILE: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/DeleteFile",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::required("filePath", "file_path")],
    },
};

static DELETE_FILES_BATCH: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/DeleteFiles",
    shape: RequestShape::StructuredPost {
        body: BodyRule::ArgArray {
            source: "file_paths",
        },
    },
};

static IMPORT_FILE: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/ImportFile",
    shape: RequestShape::TextGet {
        params: &[QueryParam::required("filePath", "file_path")],
        body_source: "file_content",
    },
};

static IMPORT_FILES_BATCH: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/ImportFiles",
    shape: RequestShape::StructuredPost {
        body: BodyRule::ArgArray { source: "files" },
    },
};

static GET_ITEM_INFO: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/GetItemInfo",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::required("filePath", "file_path")],
    },
};

static GET_ITEM_INFOS_BATCH: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/GetItemInfos",
    shape: RequestShape::StructuredPost {
        body: BodyRule::ArgArray {
            source: "file_paths",
        },
    },
};

// The upstream search contract requires every one of these fields present,
// even though callers only ever supply keyword, folder, type, and regex.
static SEARCH_PVF: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/SearchPvf",
    shape: RequestShape::StructuredPost {
        body: BodyRule::Object(&[
            BodyField::arg_or("SearchFolder", "search_folder", ConstValue::Str("")),
            BodyField::arg("Keyword", "keyword"),
            BodyField::arg_or("Type", "search_type", ConstValue::Int(1)),
            BodyField::constant("SourceType", ConstValue::Int(0)),
            BodyField::constant("NormalUsing", ConstValue::Int(1)),
            BodyField::constant("IsStartMatch", ConstValue::Bool(false)),
            BodyField::constant("SearchResult", ConstValue::Null),
            BodyField::constant("ScriptContentSearchMode", ConstValue::Int(1)),
            BodyField::constant("IsUseLikeSearchPath", ConstValue::Bool(false)),
            BodyField::constant("Trait", ConstValue::Bool(false)),
            BodyField::arg_or("UseRegularExpression", "use_regex", ConstValue::Bool(false)),
            BodyField::constant("WholeWordMatch", ConstValue::Bool(false)),
            BodyField::constant("RemoveOrKeep", ConstValue::Int(1)),
            BodyField::constant("FileTypesString", ConstValue::Null),
            BodyField::constant("ScriptContent", ConstValue::Str("")),
            BodyField::constant("ScriptContentStart", ConstValue::Str("")),
            BodyField::constant("ScriptContentStop", ConstValue::Str("")),
        ]),
    },
};

static ITEM_CODE_TO_FILE_INFO: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/ItemCodeToFileInfo",
    shape: RequestShape::QueryGet {
        params: &[
            QueryParam::required("lstNames", "lst_names"),
            QueryParam::required("itemCode", "item_code"),
        ],
    },
};

static ITEM_CODES_TO_FILE_INFOS_BATCH: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/ItemCodesToFileInfos",
    shape: RequestShape::StructuredPost {
        body: BodyRule::Object(&[
            BodyField::arg_or("lstNames", "lst_names", ConstValue::EmptyList),
            BodyField::arg_or("ItemCodes", "item_codes", ConstValue::EmptyList),
        ]),
    },
};

static GET_FILE_ICON: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/getFileIcon",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::required("filePath", "file_path")],
    },
};

static FILE_EXISTS: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/FileIsExists",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::required("filePath", "file_path")],
    },
};

static FOLDER_EXISTS: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/FolderIsExists",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::required("folderPath", "folder_path")],
    },
};

static SAVE_AS_PVF: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/SaveAsPvfFile",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::percent_encoded("filePath", "file_path")],
    },
};

static GET_PVF_PACK_FILE_PATH: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/GetPvfPackFilePath",
    shape: RequestShape::QueryGet { params: &[] },
};

static GET_ALL_LST_FILE_LIST: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/GetAllLstFileList",
    shape: RequestShape::QueryGet { params: &[] },
};

static GET_LST_FILE_INFO: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/getLstFileInfo",
    shape: RequestShape::QueryGet {
        params: &[QueryParam::required("filePath", "file_path")],
    },
};

static GET_STRING_TABLE: EndpointSpec = EndpointSpec {
    path: "/Api/PvfUtiltiy/getStringTable",
    shape: RequestShape::QueryGet { params: &[] },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_resolves() {
        for tool in ToolName::ALL {
            let spec = tool.spec();
            assert!(
                spec.path.starts_with("/Api/PvfUtiltiy/"),
                "unexpected path for {}: {}",
                tool,
                spec.path
            );
        }
    }

    #[test]
    fn test_name_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::parse(tool.as_str()), Some(tool));
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!(ToolName::parse("not_a_tool"), None);
        assert_eq!(ToolName::parse(""), None);
        assert_eq!(ToolName::parse("GET_VERSION"), None);
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(ToolName::ALL.len(), 23);
    }

    #[test]
    fn test_upstream_paths_exact() {
        assert_eq!(
            ToolName::GetVersion.spec().path,
            "/Api/PvfUtiltiy/getVersion"
        );
        assert_eq!(
            ToolName::SaveAsPvf.spec().path,
            "/Api/PvfUtiltiy/SaveAsPvfFile"
        );
        assert_eq!(
            ToolName::SearchPvf.spec().path,
            "/Api/PvfUtiltiy/SearchPvf"
        );
        assert_eq!(
            ToolName::ItemCodesToFileInfosBatch.spec().path,
            "/Api/PvfUtiltiy/ItemCodesToFileInfos"
        );
    }

    #[test]
    fn test_batch_tools_are_structured_post() {
        let batch = [
            ToolName::GetFileContentsBatch,
            ToolName::DeleteFilesBatch,
            ToolName::ImportFilesBatch,
            ToolName::GetItemInfosBatch,
            ToolName::SearchPvf,
            ToolName::ItemCodesToFileInfosBatch,
        ];
        for tool in batch {
            assert!(
                matches!(tool.spec().shape, RequestShape::StructuredPost { .. }),
                "{} should be a structured POST",
                tool
            );
        }
    }

    #[test]
    fn test_import_file_carries_text_body() {
        match &ToolName::ImportFile.spec().shape {
            RequestShape::TextGet { body_source, .. } => {
                assert_eq!(*body_source, "file_content");
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_save_as_path_is_percent_encoded() {
        match &ToolName::SaveAsPvf.spec().shape {
            RequestShape::QueryGet { params } => {
                assert_eq!(params.len(), 1);
                assert!(params[0].percent_encode);
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn test_search_body_has_fixed_fields() {
        let RequestShape::StructuredPost {
            body: BodyRule::Object(fields),
        } = &ToolName::SearchPvf.spec().shape
        else {
            panic!("search must be a composed POST");
        };
        assert_eq!(fields.len(), 17);
        let constants = fields
            .iter()
            .filter(|f| matches!(f.value, FieldSource::Const(_)))
            .count();
        assert_eq!(constants, 13);
    }
}
