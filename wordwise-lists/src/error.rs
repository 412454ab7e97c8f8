use crate::entry::Difficulty;

/// Error types for word-list loading and sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// No backing word list exists for the requested language
    ResourceNotFound { language: String },
    /// The word list exists but a record (or the whole file) has the wrong shape
    MalformedResource {
        language: String,
        key: String,
        reason: String,
    },
    /// Difficulty tier outside the fixed set, bad count, or bad language identifier
    InvalidArgument(String),
    /// More words were requested than the eligible entries can provide
    InsufficientData {
        requested: usize,
        available: usize,
        difficulty: Option<Difficulty>,
    },
    /// The word list could not be read for a reason other than absence
    Io { path: String, message: String },
}

impl std::fmt::Display for WordListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordListError::ResourceNotFound { language } => {
                write!(f, "No word list found for language '{}'", language)
            }
            WordListError::MalformedResource {
                language,
                key,
                reason,
            } => write!(
                f,
                "Malformed word list for '{}' at key '{}': {}",
                language, key, reason
            ),
            WordListError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            WordListError::InsufficientData {
                requested,
                available,
                difficulty: Some(tier),
            } => write!(
                f,
                "Requested {} {} words but only {} are available",
                requested, tier, available
            ),
            WordListError::InsufficientData {
                requested,
                available,
                difficulty: None,
            } => write!(
                f,
                "Requested {} words but only {} are available",
                requested, available
            ),
            WordListError::Io { path, message } => {
                write!(f, "Failed to read '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for WordListError {}

/// Result type for word-list operations
pub type WordListResult<T> = Result<T, WordListError>;
