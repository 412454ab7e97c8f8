/// Error types for the translation module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Empty word batch or empty language name
    InvalidArgument(String),
    /// Missing or rejected credentials, bad model name, other client-side setup problems
    ConfigError(String),
    /// The text-generation service could not be reached
    NetworkError(String),
    /// The service answered, but not with usable generated text
    GenerationError(String),
    /// The generated text holds no recoverable translation structure
    UnparsableResponse(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::GenerationError(msg) => write!(f, "Generation error: {}", msg),
            MtError::UnparsableResponse(msg) => write!(f, "Unparsable response: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            MtError::GenerationError(format!("Failed to decode service response: {}", e))
        } else {
            MtError::NetworkError(e.to_string())
        }
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;
