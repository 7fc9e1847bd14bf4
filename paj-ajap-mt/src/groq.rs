//! Groq chat-completions provider
//!
//! Talks to Groq's OpenAI-compatible endpoint and asks the model for a JSON
//! object `{"translated": "...", "explanation": "..."}`.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GROQ_API_KEY` environment
//! variable and the model from `GROQ_MODEL` (default `openai/gpt-oss-20b`).
//!
//! # Example
//!
//! ```ignore
//! use paj_ajap::{Translator, VocabularyStore};
//! use paj_ajap_mt::{CompletionProvider, CompletionRequest, GroqProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = VocabularyStore::embedded();
//!     let provider = GroqProvider::from_env(&store)?;
//!
//!     let partial = Translator::new(store).translate("the cats are happy");
//!     let request = CompletionRequest::new("the cats are happy", &partial);
//!     let completion = provider.complete(&request).await?;
//!     println!("{}", completion.translated);
//!     Ok(())
//! }
//! ```

use crate::completer::CompletionProvider;
use crate::data::{Completion, CompletionRequest};
use crate::error::{MtError, MtResult};
use async_trait::async_trait;
use paj_ajap::VocabularyStore;
use serde_json::json;

/// Model used when `GROQ_MODEL` is not set
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Part-of-speech categories left out of the base-word list; the prompt
/// describes them separately
const GRAMMAR_CATEGORIES: [&str; 4] = ["suffix", "tense", "op", "number"];

/// Build the system prompt from the vocabulary's base words
pub fn build_system_prompt(store: &VocabularyStore) -> String {
    let base_words = store
        .entries()
        .filter(|entry| {
            !entry
                .pos()
                .split('/')
                .any(|category| GRAMMAR_CATEGORIES.contains(&category))
        })
        .map(|entry| {
            let meanings: Vec<&str> = entry.meanings().iter().take(2).map(String::as_str).collect();
            format!("{}={}", entry.word(), meanings.join("/"))
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a Paj Ajap conlang translator. \
         You receive a partial translation with [bracketed] unknown words. \
         Replace each [word] with a creative Paj Ajap compound using ONLY these base words:\n\
         {}\n\
         Suffixes: wa=plural, ej=-er/doer, '=opposite\n\
         Tense: þi=present/-ing, jo=past, ja=future/will\n\
         SVO order. Respond ONLY with JSON: {{\"translated\": \"...\", \"explanation\": \"...\"}}",
        base_words
    )
}

/// Groq chat-completions provider
#[derive(Clone)]
pub struct GroqProvider {
    /// API key for bearer authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    base_url: String,
    model: String,
    system_prompt: String,
}

impl GroqProvider {
    const TEMPERATURE: f64 = 0.4;
    const MAX_TOKENS: u32 = 512;

    /// Create a provider with an explicit API key
    ///
    /// # Arguments
    ///
    /// * `api_key` - Groq API key
    /// * `store` - Vocabulary whose base words go into the system prompt
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If API key is empty or HTTP client creation fails
    pub fn new(api_key: String, store: &VocabularyStore) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: build_system_prompt(store),
        })
    }

    /// Create a provider from `GROQ_API_KEY`, taking the model from `GROQ_MODEL` if set
    pub fn from_env(store: &VocabularyStore) -> MtResult<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            MtError::ConfigError("GROQ_API_KEY environment variable not set".to_string())
        })?;

        let provider = Self::new(api_key, store)?;
        Ok(match std::env::var("GROQ_MODEL") {
            Ok(model) if !model.trim().is_empty() => provider.with_model(model.trim()),
            _ => provider,
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point the provider at another OpenAI-compatible endpoint
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    fn request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": self.system_prompt },
                { "role": "user", "content": request.user_message() }
            ],
            "temperature": Self::TEMPERATURE,
            "max_tokens": Self::MAX_TOKENS,
            "stream": false,
            "response_format": { "type": "json_object" }
        })
    }
}

impl std::fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, request: &CompletionRequest) -> MtResult<Completion> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await?;

        // Check HTTP status
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::CompletionError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            MtError::ParseError(format!("Failed to parse API response: {}", e))
        })?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                MtError::CompletionError(
                    "Invalid API response: missing 'choices[0].message.content'".to_string(),
                )
            })?;

        Completion::from_json(content)
    }

    fn provider_name(&self) -> &str {
        "Groq"
    }
}
