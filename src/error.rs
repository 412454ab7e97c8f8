use serde::Serialize;
use wordwise_lists::WordListError;
use wordwise_mt::MtError;

/// Caller-visible error category
///
/// Lets a caller decide between re-prompting the user (bad argument, too
/// many words requested) and reporting a data or service problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    ResourceNotFound,
    MalformedResource,
    InvalidArgument,
    InsufficientData,
    UnparsableResponse,
    /// Transport, credential, or I/O failure outside the core contract
    Service,
}

/// Errors surfaced by the toolbox operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    WordList(WordListError),
    Translation(MtError),
}

impl ToolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::WordList(e) => match e {
                WordListError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
                WordListError::MalformedResource { .. } => ErrorKind::MalformedResource,
                WordListError::InvalidArgument(_) => ErrorKind::InvalidArgument,
                WordListError::InsufficientData { .. } => ErrorKind::InsufficientData,
                WordListError::Io { .. } => ErrorKind::Service,
            },
            ToolError::Translation(e) => match e {
                MtError::InvalidArgument(_) => ErrorKind::InvalidArgument,
                MtError::UnparsableResponse(_) => ErrorKind::UnparsableResponse,
                MtError::ConfigError(_)
                | MtError::NetworkError(_)
                | MtError::GenerationError(_) => ErrorKind::Service,
            },
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ToolError::WordList(WordListError::InvalidArgument(msg.into()))
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::WordList(e) => write!(f, "{}", e),
            ToolError::Translation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolError::WordList(e) => Some(e),
            ToolError::Translation(e) => Some(e),
        }
    }
}

impl From<WordListError> for ToolError {
    fn from(e: WordListError) -> Self {
        ToolError::WordList(e)
    }
}

impl From<MtError> for ToolError {
    fn from(e: MtError) -> Self {
        ToolError::Translation(e)
    }
}

/// Result type for toolbox operations
pub type ToolResult<T> = Result<T, ToolError>;
