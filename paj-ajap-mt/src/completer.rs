//! Completion provider trait
//!
//! A provider finishes a translation the rule-based pipelines could only
//! partly resolve. Implementations may call a remote model
//! ([`crate::GroqProvider`]) or answer locally ([`crate::MockCompleter`]).

use crate::data::{Completion, CompletionRequest};
use crate::error::MtResult;
use async_trait::async_trait;

/// Generic trait for completion providers
///
/// All methods are async to support I/O-bound operations like network requests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Complete a partial translation
    ///
    /// # Arguments
    ///
    /// * `request` - Original text, direction, partial output and unknown words
    ///
    /// # Returns
    ///
    /// * `Ok(Completion)` - Full translation plus the provider's explanation
    /// * `Err(MtError)` - If the provider is unreachable or its reply is unusable
    async fn complete(&self, request: &CompletionRequest) -> MtResult<Completion>;

    /// Get the name of this provider, used in logs
    fn provider_name(&self) -> &str;
}
