//! Mock completion provider for testing
//!
//! Deterministic and API-free, so the hybrid translator can be exercised
//! without keys or network access. Every call is counted.
//!
//! # Example
//!
//! ```ignore
//! use paj_ajap_mt::{MockCompleter, MockMode};
//!
//! let mock = MockCompleter::new(MockMode::Echo);
//! let completion = mock.complete(&request).await?;
//! assert_eq!(mock.calls(), 1);
//! ```

use crate::completer::CompletionProvider;
use crate::data::{Completion, CompletionRequest};
use crate::error::{MtError, MtResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock completion modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Always return this completion
    Fixed(Completion),

    /// Return the partial translation with the `[` `]` markers removed
    Echo,

    /// Simulate a provider failure
    Error(String),
}

/// Mock provider; clones share the same call counter
#[derive(Debug, Clone)]
pub struct MockCompleter {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockCompleter {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockCompleter with simulated network delay
    ///
    /// ```ignore
    /// let mock = MockCompleter::with_delay(MockMode::Echo, 50);
    /// // Each completion will take ~50ms
    /// ```
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shorthand for a mock that always answers `translated`
    pub fn fixed(translated: &str, explanation: &str) -> Self {
        Self::new(MockMode::Fixed(Completion {
            translated: translated.to_string(),
            explanation: explanation.to_string(),
        }))
    }

    /// Number of `complete` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl CompletionProvider for MockCompleter {
    async fn complete(&self, request: &CompletionRequest) -> MtResult<Completion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;

        match &self.mode {
            MockMode::Fixed(completion) => Ok(completion.clone()),
            MockMode::Echo => Ok(Completion {
                translated: request.partial.replace(['[', ']'], ""),
                explanation: format!("Echoed partial for {} unknown word(s)", request.unknown_words.len()),
            }),
            MockMode::Error(msg) => Err(MtError::CompletionError(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Completer"
    }
}
