//! Request and reply types exchanged with a completion provider

use paj_ajap::{Direction, TranslationResult};
use serde::{Deserialize, Serialize};

/// Everything a provider needs to finish a partial translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Input text as the user typed it
    pub original: String,
    pub direction: Direction,
    /// Best deterministic attempt, with `[word]` markers for gaps
    pub partial: String,
    pub unknown_words: Vec<String>,
}

impl CompletionRequest {
    pub fn new(original: &str, result: &TranslationResult) -> Self {
        Self {
            original: original.to_string(),
            direction: result.direction,
            partial: result.translated.clone(),
            unknown_words: result.unknown_words.clone(),
        }
    }

    /// Render the user message sent to the completion service
    ///
    /// ```text
    /// Original: the cats are happy
    /// Direction: eng_to_pa
    /// Partial: [cats] фok фeþ
    /// Unknown: ["cats"]
    /// Complete the translation.
    /// ```
    pub fn user_message(&self) -> String {
        let unknown = self
            .unknown_words
            .iter()
            .map(|word| format!("{:?}", word))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Original: {}\nDirection: {}\nPartial: {}\nUnknown: [{}]\nComplete the translation.",
            self.original, self.direction, self.partial, unknown
        )
    }
}

/// A provider's finished translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub translated: String,
    #[serde(default)]
    pub explanation: String,
}

impl Completion {
    /// Parse the JSON object a provider returns as message content
    ///
    /// Missing `explanation` is allowed; missing `translated` is not.
    pub fn from_json(content: &str) -> crate::MtResult<Self> {
        Ok(serde_json::from_str(content.trim())?)
    }
}
