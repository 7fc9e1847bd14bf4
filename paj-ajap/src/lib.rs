//! Rule-based translation between Paj Ajap and English
//!
//! The crate is fully deterministic: a fixed vocabulary, a numeral codec, a
//! handful of English suffix heuristics and two token-walking pipelines.
//! Anything the rules cannot resolve is marked in the output rather than
//! reported as an error.

pub mod data;
pub mod error;
pub mod loader;
pub mod morphology;
pub mod normalize;
pub mod numerals;
pub mod translator;
pub mod vocabulary;

// Re-export the types most callers need
pub use error::{VocabularyError, VocabularyResult};
pub use loader::{load_store_from_file, load_vocabulary_from_file};
pub use numerals::{from_paj_ajap, is_numeral_text, to_paj_ajap, to_paj_ajap_unsigned};
pub use translator::{Direction, TranslationResult, Translator};
pub use vocabulary::{Candidates, Entry, VocabularyConfig, VocabularyStore};
