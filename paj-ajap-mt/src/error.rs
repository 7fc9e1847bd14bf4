/// Error types for the completion fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Missing or invalid configuration (API key, model, client error status)
    ConfigError(String),
    /// Transport failure talking to the completion service
    NetworkError(String),
    /// The service answered with an error or an empty completion
    CompletionError(String),
    /// The completion was not the expected JSON object
    ParseError(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::CompletionError(msg) => write!(f, "Completion error: {}", msg),
            MtError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for MtError {
    fn from(err: serde_json::Error) -> Self {
        MtError::ParseError(err.to_string())
    }
}

/// Result type for completion operations
pub type MtResult<T> = Result<T, MtError>;
