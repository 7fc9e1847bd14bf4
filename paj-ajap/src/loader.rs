use crate::error::{VocabularyError, VocabularyResult};
use crate::vocabulary::{VocabularyConfig, VocabularyStore};
use std::fs;
use std::path::Path;

/// Load vocabulary tables from a JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "entries": [
///         { "word": "kson", "meanings": ["boy"], "pos": "noun" },
///         { "word": "þaßo", "meanings": ["leg", "legs"], "pos": "noun", "primary": "leg" }
///     ],
///     "compounds": [
///         { "english": "happy", "paj": "фok фeþ" }
///     ]
/// }
/// ```
///
/// `compounds` may be omitted.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON or missing fields
pub fn load_vocabulary_from_file(path: &Path) -> VocabularyResult<VocabularyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        VocabularyError::Io(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        VocabularyError::Parse(format!(
            "Failed to parse vocabulary from '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a JSON vocabulary file and build a store from it
///
/// Same as [`load_vocabulary_from_file`] followed by
/// [`VocabularyStore::from_config`], so blank words and entries without
/// meanings are rejected too.
pub fn load_store_from_file(path: &Path) -> VocabularyResult<VocabularyStore> {
    let config = load_vocabulary_from_file(path)?;
    let store = VocabularyStore::from_config(&config)?;
    tracing::debug!(
        entries = store.len(),
        compounds = store.compound_count(),
        "Loaded vocabulary from {}",
        path.display()
    );
    Ok(store)
}
