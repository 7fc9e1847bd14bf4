/// Error types for building and loading vocabulary tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// A Paj Ajap word or compound phrase was blank
    EmptyWord(String),
    /// An entry listed no English meanings
    EmptyMeanings(String),
    /// Reading a vocabulary file failed
    Io(String),
    /// A vocabulary file was not valid JSON or had the wrong shape
    Parse(String),
}

impl std::fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyError::EmptyWord(msg) => write!(f, "Empty word: {}", msg),
            VocabularyError::EmptyMeanings(word) => {
                write!(f, "Entry '{}' has no English meanings", word)
            }
            VocabularyError::Io(msg) => write!(f, "I/O error: {}", msg),
            VocabularyError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// Result type for vocabulary operations
pub type VocabularyResult<T> = Result<T, VocabularyError>;
