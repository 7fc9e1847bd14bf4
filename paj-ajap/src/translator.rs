//! Deterministic Paj Ajap ↔ English translation
//!
//! [`Translator::translate`] detects the input language and runs one of two
//! pipelines. Both try whole-input shortcuts first (numerals, compound
//! phrases), then walk the tokens left to right: longest compound window
//! first, then single-word lookup. Every token that cannot be resolved is
//! kept in the output as `[word]` and listed in `unknown_words`; translation
//! itself never fails.
//!
//! # Example
//!
//! ```ignore
//! use paj_ajap::{Direction, Translator};
//!
//! let translator = Translator::default();
//!
//! let result = translator.translate("the boys are happy");
//! assert_eq!(result.translated, "ksonwa фok фeþ");
//! assert_eq!(result.direction, Direction::EnglishToPaj);
//!
//! let result = translator.translate("þaßowa");
//! assert_eq!(result.translated, "legs");
//! ```

use crate::morphology::{analyze, pluralize_english};
use crate::normalize::normalize_english;
use crate::numerals::{from_paj_ajap, is_numeral_text, to_paj_ajap_unsigned};
use crate::vocabulary::VocabularyStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Letters that only occur in Paj Ajap
pub const PAJ_GLYPHS: [char; 4] = ['þ', 'ф', 'ß', 'ç'];

/// Longest compound window tried in each direction
const ENGLISH_WINDOW: usize = 5;
const PAJ_WINDOW: usize = 6;

const PLURAL_SUFFIX: &str = "wa";
const PROGRESSIVE_PARTICLE: &str = "þi";
const PAST_PARTICLE: &str = "jo";
const AGENT_PARTICLE: &str = "ej";
const OPPOSITE_MARK: char = '\'';
const NOT_PREFIX: &str = "not-";

/// English words dropped before lookup: articles, light auxiliaries,
/// discourse adverbs, prepositions and modals
const SKIP_WORDS: &[&str] = &[
    "a", "an", "the", "to", "of", "am", "is", "are", "be", "been", "being", "was", "were", "does",
    "very", "really", "just", "also", "at", "on", "for", "with", "from", "but", "or", "if", "when",
    "where", "while", "than", "about", "up", "down", "out", "into", "can", "could", "would",
    "should", "may", "might", "must", "shall",
];

/// Translation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "eng_to_pa")]
    EnglishToPaj,
    #[serde(rename = "pa_to_eng")]
    PajToEnglish,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::EnglishToPaj => "eng_to_pa",
            Direction::PajToEnglish => "pa_to_eng",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one deterministic translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Output text; unresolved tokens appear as `[token]`
    pub translated: String,
    /// Per-step trace joined with `"; "`
    pub explanation: String,
    /// Matched weight over total weight, in `[0, 1]`
    pub confidence: f64,
    /// Unresolved tokens in input order
    pub unknown_words: Vec<String>,
    pub direction: Direction,
}

impl TranslationResult {
    /// A fully resolved result (confidence 1.0, no unknowns)
    fn exact(translated: String, explanation: String, direction: Direction) -> Self {
        Self {
            translated,
            explanation,
            confidence: 1.0,
            unknown_words: Vec::new(),
            direction,
        }
    }

    fn empty(direction: Direction) -> Self {
        Self::exact(String::new(), String::new(), direction)
    }

    /// True if the result reaches `threshold` and left nothing unresolved
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.confidence >= threshold && self.unknown_words.is_empty()
    }
}

/// Running tally of a token walk
#[derive(Default)]
struct Walk {
    parts: Vec<String>,
    trace: Vec<String>,
    unknown_words: Vec<String>,
    matched: usize,
    total: usize,
}

impl Walk {
    fn compound(&mut self, phrase: &str, translation: &str, width: usize) {
        self.trace.push(format!("'{}' → '{}'", phrase, translation));
        self.parts.push(translation.to_string());
        self.matched += width;
        self.total += width;
    }

    fn skipped(&mut self, word: &str) {
        self.trace.push(format!("'{}' (skipped)", word));
    }

    fn resolved(&mut self, word: &str, translation: String) {
        self.trace.push(format!("'{}' → '{}'", word, translation));
        self.parts.push(translation);
        self.matched += 1;
        self.total += 1;
    }

    fn unknown(&mut self, word: &str) {
        self.trace.push(format!("'{}' → UNKNOWN", word));
        self.parts.push(format!("[{}]", word));
        self.unknown_words.push(word.to_string());
        self.total += 1;
    }

    fn finish(self, direction: Direction) -> TranslationResult {
        TranslationResult {
            translated: self.parts.join(" "),
            explanation: self.trace.join("; "),
            confidence: self.matched as f64 / self.total.max(1) as f64,
            unknown_words: self.unknown_words,
            direction,
        }
    }
}

/// Longest compound at the start of `words`, trying widths `max_width` down to 2
fn longest_compound<'s>(
    words: &[&str],
    max_width: usize,
    lookup: impl Fn(&str) -> Option<&'s str>,
) -> Option<(usize, String, &'s str)> {
    (2..=max_width.min(words.len())).rev().find_map(|width| {
        let phrase = words[..width].join(" ");
        lookup(&phrase).map(|found| (width, phrase, found))
    })
}

/// Rule-based translator over an immutable vocabulary
///
/// `Translator` holds no mutable state; share one instance (e.g. behind an
/// `Arc`) between threads.
#[derive(Debug, Clone)]
pub struct Translator {
    store: VocabularyStore,
}

impl Translator {
    pub fn new(store: VocabularyStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    /// Detect the language of `text` and translate it into the other one
    pub fn translate(&self, text: &str) -> TranslationResult {
        let result = match self.detect_language(text) {
            Direction::PajToEnglish => self.paj_to_english(text),
            Direction::EnglishToPaj => self.english_to_paj(text),
        };
        debug!(
            direction = %result.direction,
            confidence = result.confidence,
            unknown = result.unknown_words.len(),
            "Translated {:?} → {:?}",
            text,
            result.translated
        );
        result
    }

    /// Paj Ajap if the text contains a Paj Ajap letter or if more than half
    /// of its tokens are Paj Ajap words; English otherwise
    pub fn detect_language(&self, text: &str) -> Direction {
        if text.chars().any(|c| PAJ_GLYPHS.contains(&c)) {
            return Direction::PajToEnglish;
        }
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        if words.is_empty() {
            return Direction::EnglishToPaj;
        }
        let hits = words
            .iter()
            .filter(|word| self.store.lookup_paj(word).is_some())
            .count();
        if hits * 2 > words.len() {
            Direction::PajToEnglish
        } else {
            Direction::EnglishToPaj
        }
    }

    /// Translate English text into Paj Ajap
    pub fn english_to_paj(&self, text: &str) -> TranslationResult {
        let direction = Direction::EnglishToPaj;
        if text.trim().is_empty() {
            return TranslationResult::empty(direction);
        }
        let normalized = normalize_english(text);

        if let Some(paj) = self.store.compound_from_english(&normalized) {
            return TranslationResult::exact(
                paj.to_string(),
                format!("Compound: '{}' → '{}'", normalized, paj),
                direction,
            );
        }

        if let Ok(number) = normalized.parse::<u128>() {
            let paj = to_paj_ajap_unsigned(number);
            let explanation = format!("Number: {} → '{}'", number, paj);
            return TranslationResult::exact(paj, explanation, direction);
        }

        let words: Vec<&str> = normalized.split_whitespace().collect();
        let mut walk = Walk::default();
        let mut i = 0;
        while i < words.len() {
            if let Some((width, phrase, paj)) =
                longest_compound(&words[i..], ENGLISH_WINDOW, |phrase| {
                    self.store.compound_from_english(phrase)
                })
            {
                walk.compound(&phrase, paj, width);
                i += width;
                continue;
            }

            let word = words[i];
            i += 1;
            if SKIP_WORDS.contains(&word) {
                walk.skipped(word);
                continue;
            }
            match self.resolve_english_word(word) {
                Some(paj) => walk.resolved(word, paj),
                None => walk.unknown(word),
            }
        }
        walk.finish(direction)
    }

    /// Look up one English word, falling back to its stems, and inflect the result
    fn resolve_english_word(&self, word: &str) -> Option<String> {
        let analysis = analyze(word);
        let (candidates, used) = std::iter::once(word)
            .chain(analysis.stems())
            .find_map(|form| {
                let candidates = self.store.lookup_english(form);
                (!candidates.is_empty()).then_some((candidates, form))
            })?;
        let entry = candidates.first()?;
        let from_stem = used != word;

        let mut paj = entry.word().to_string();
        if analysis.plural.matched {
            if paj.contains(' ') {
                paj = format!("{} {}", paj, PLURAL_SUFFIX);
            } else if entry.has_pos("noun") {
                paj.push_str(PLURAL_SUFFIX);
            }
        }
        if analysis.progressive.matched && from_stem {
            paj = format!("{} {}", paj, PROGRESSIVE_PARTICLE);
        }
        if analysis.past.matched && from_stem {
            paj = format!("{} {}", PAST_PARTICLE, paj);
        }
        if analysis.comparative.matched && from_stem && !entry.has_pos("noun") {
            paj = format!("{} {}", paj, AGENT_PARTICLE);
        }
        Some(paj)
    }

    /// Translate Paj Ajap text into English
    pub fn paj_to_english(&self, text: &str) -> TranslationResult {
        let direction = Direction::PajToEnglish;
        let text = text.trim();
        if text.is_empty() {
            return TranslationResult::empty(direction);
        }

        if is_numeral_text(text) {
            if let Some(value) = from_paj_ajap(text) {
                return TranslationResult::exact(
                    value.to_string(),
                    format!("Number: '{}' → {}", text, value),
                    direction,
                );
            }
        }

        if let Some(english) = self.store.compound_from_paj(text) {
            return TranslationResult::exact(
                english.to_string(),
                format!("Compound: '{}' → '{}'", text, english),
                direction,
            );
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        let mut walk = Walk::default();
        let mut i = 0;
        while i < words.len() {
            if let Some((width, phrase, english)) =
                longest_compound(&words[i..], PAJ_WINDOW, |phrase| {
                    self.store.compound_from_paj(phrase)
                })
            {
                walk.compound(&phrase, english, width);
                i += width;
                continue;
            }

            let word = words[i];
            i += 1;
            match self.resolve_paj_word(word) {
                Some(english) => walk.resolved(word, english),
                None => walk.unknown(word),
            }
        }
        walk.finish(direction)
    }

    /// Look up one Paj Ajap word, reading the opposite mark and plural suffix
    fn resolve_paj_word(&self, word: &str) -> Option<String> {
        // a registered word such as "noj'" keeps its own meaning
        let opposite = word.ends_with(OPPOSITE_MARK) && !self.store.is_paj_word(word);
        let mut base = if opposite {
            word.trim_end_matches(OPPOSITE_MARK)
        } else {
            word
        };

        let mut plural = false;
        if let Some(singular) = base.strip_suffix(PLURAL_SUFFIX) {
            if base.chars().count() > 2 && self.store.lookup_paj(singular).is_some() {
                base = singular;
                plural = true;
            }
        }

        let entry = self
            .store
            .lookup_paj(word)
            .or_else(|| self.store.lookup_paj(base))?;
        let mut meaning = entry.primary().to_string();
        if plural {
            meaning = pluralize_english(&meaning);
        }
        if opposite {
            meaning = format!("{}{}", NOT_PREFIX, meaning);
        }
        Some(meaning)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(VocabularyStore::embedded())
    }
}
