//! Hybrid translation: cache, then rules, then a completion provider
//!
//! The deterministic [`Translator`] answers whenever it is confident. Only
//! inputs with unknown words or low confidence reach the provider, and any
//! provider failure falls back to the deterministic output. Every answer is
//! cached under its normalized input, and the output is cached pointing back
//! to the input so the reverse lookup is free.

use crate::cache::{CachedTranslation, TranslationCache, cache_key};
use crate::completer::CompletionProvider;
use crate::data::CompletionRequest;
use paj_ajap::Translator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Minimum deterministic confidence accepted without calling the provider
pub const CONFIDENCE_THRESHOLD: f64 = 0.85;

/// Where a hybrid answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Deterministic,
    Completion,
}

/// Answer of [`HybridTranslator::translate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridTranslation {
    pub translated: String,
    pub explanation: String,
    pub source: Source,
}

impl HybridTranslation {
    fn new(translated: String, explanation: String, source: Source) -> Self {
        Self {
            translated,
            explanation,
            source,
        }
    }
}

pub struct HybridTranslator {
    translator: Arc<Translator>,
    provider: Option<Arc<dyn CompletionProvider>>,
    cache: Arc<TranslationCache>,
    threshold: f64,
}

impl HybridTranslator {
    /// Rules-only translator with a default-sized cache
    pub fn new(translator: Arc<Translator>) -> Self {
        Self {
            translator,
            provider: None,
            cache: Arc::new(TranslationCache::default()),
            threshold: CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_cache(mut self, cache: Arc<TranslationCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|provider| provider.provider_name())
    }

    /// Translate `text`, never failing
    ///
    /// Blank input gives an empty answer and is not cached.
    pub async fn translate(&self, text: &str) -> HybridTranslation {
        let key = cache_key(text);
        if key.is_empty() {
            return HybridTranslation::new(String::new(), String::new(), Source::Deterministic);
        }

        if let Some(cached) = self.cache.get(&key) {
            info!("Cache hit: '{}'", key);
            return HybridTranslation::new(cached.translation, cached.raw, Source::Cache);
        }

        let answer = self.translate_uncached(text).await;
        self.remember(&key, &answer);
        info!(source = ?answer.source, "Translated '{}'", key);
        answer
    }

    async fn translate_uncached(&self, text: &str) -> HybridTranslation {
        let result = self.translator.translate(text);
        if result.is_confident(self.threshold) {
            return HybridTranslation::new(
                result.translated,
                result.explanation,
                Source::Deterministic,
            );
        }

        let Some(provider) = self.provider.as_deref() else {
            return HybridTranslation::new(
                result.translated,
                result.explanation,
                Source::Deterministic,
            );
        };

        info!(
            confidence = result.confidence,
            unknown = ?result.unknown_words,
            "Completion fallback via {}",
            provider.provider_name()
        );
        let request = CompletionRequest::new(text, &result);
        match provider.complete(&request).await {
            Ok(completion) => HybridTranslation::new(
                completion.translated,
                completion.explanation,
                Source::Completion,
            ),
            Err(e) => {
                error!("Completion via {} failed: {}", provider.provider_name(), e);
                HybridTranslation::new(result.translated, result.explanation, Source::Deterministic)
            }
        }
    }

    fn remember(&self, key: &str, answer: &HybridTranslation) {
        self.cache.insert(
            key.to_string(),
            CachedTranslation {
                translation: answer.translated.clone(),
                raw: answer.explanation.clone(),
            },
        );

        let reverse_key = cache_key(&answer.translated);
        if !reverse_key.is_empty() && reverse_key != key && !self.cache.contains(&reverse_key) {
            self.cache.insert(
                reverse_key,
                CachedTranslation {
                    translation: key.to_string(),
                    raw: format!("Reverse cached from: {}", key),
                },
            );
        }
    }
}

impl std::fmt::Debug for HybridTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HybridTranslator")
            .field("provider", &self.provider_name())
            .field("cache_len", &self.cache.len())
            .field("threshold", &self.threshold)
            .finish()
    }
}
