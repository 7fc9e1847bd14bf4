//! Completion fallback for the Paj Ajap translator
//!
//! Wraps the rule-based [`paj_ajap::Translator`] with an LRU cache and an
//! optional completion provider that fills in words the rules could not
//! resolve.
//!
//! # Workflow Example
//!
//! ```ignore
//! use paj_ajap::Translator;
//! use paj_ajap_mt::{GroqProvider, HybridTranslator};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = Arc::new(Translator::default());
//!     let provider = GroqProvider::from_env(translator.store())?;
//!     let hybrid = HybridTranslator::new(translator).with_provider(Arc::new(provider));
//!
//!     // Confident inputs never leave the process
//!     let answer = hybrid.translate("the boys are happy").await;
//!     println!("{} ({:?})", answer.translated, answer.source);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod completer;
pub mod data;
pub mod error;
pub mod groq;
pub mod hybrid;
pub mod mock;


// Re-export main types for convenient access
pub use cache::{CachedTranslation, DEFAULT_CAPACITY, TranslationCache, cache_key};
pub use completer::CompletionProvider;
pub use data::{Completion, CompletionRequest};
pub use error::{MtError, MtResult};
pub use groq::{GroqProvider, build_system_prompt};
pub use hybrid::{CONFIDENCE_THRESHOLD, HybridTranslation, HybridTranslator, Source};
pub use mock::{MockCompleter, MockMode};
