//! Vocabulary store: Paj Ajap entries and compound phrases
//!
//! The store is built once from a [`VocabularyConfig`] and never mutated
//! afterwards, so a single instance can be shared by any number of
//! concurrent translations.
//!
//! English lookups are normalized (trimmed and lowercased). Paj Ajap lookups
//! are only trimmed: the script distinguishes some symbols by letter case.
//!
//! # Example
//!
//! ```ignore
//! use paj_ajap::vocabulary::{VocabularyConfig, VocabularyStore};
//!
//! let mut config = VocabularyConfig::new();
//! config
//!     .with_entry("kson", &["boy"], "noun")
//!     .with_compound("happy", "фok фeþ");
//!
//! let store = VocabularyStore::from_config(&config)?;
//! assert_eq!(store.lookup_english("Boy").first().unwrap().word(), "kson");
//! assert_eq!(store.compound_from_paj("фok фeþ"), Some("happy"));
//! ```

use crate::error::{VocabularyError, VocabularyResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Part-of-speech tag given to synthetic entries built from compounds
pub const COMPOUND_POS: &str = "compound";

/// One vocabulary record: a Paj Ajap word and its English meanings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    word: String,
    meanings: Vec<String>,
    pos: String,
    primary: String,
}

impl Entry {
    /// Create an entry whose primary meaning is the first listed meaning
    ///
    /// # Errors
    ///
    /// * `VocabularyError::EmptyWord` - if `word` is blank
    /// * `VocabularyError::EmptyMeanings` - if `meanings` is empty
    pub fn new(
        word: impl Into<String>,
        meanings: Vec<String>,
        pos: impl Into<String>,
    ) -> VocabularyResult<Self> {
        let word = word.into();
        if word.trim().is_empty() {
            return Err(VocabularyError::EmptyWord(
                "vocabulary entry with blank word".to_string(),
            ));
        }
        let Some(first) = meanings.first() else {
            return Err(VocabularyError::EmptyMeanings(word));
        };
        let primary = first.clone();
        Ok(Self {
            word,
            meanings,
            pos: pos.into(),
            primary,
        })
    }

    /// Override the primary meaning (defaults to the first listed meaning)
    pub fn with_primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = primary.into();
        self
    }

    /// Synthetic single-meaning entry standing in for a compound phrase
    fn compound(word: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            meanings: vec![meaning.to_string()],
            pos: COMPOUND_POS.to_string(),
            primary: meaning.to_string(),
        }
    }

    /// Entry from the embedded tables, which are known to be well formed
    pub(crate) fn from_static(word: &str, meanings: &[&str], pos: &str) -> Self {
        Self {
            word: word.to_string(),
            meanings: meanings.iter().map(|m| m.to_string()).collect(),
            pos: pos.to_string(),
            primary: meanings.first().copied().unwrap_or_default().to_string(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// True if the part-of-speech tag mentions `category` (e.g. "noun" in "noun/verb")
    pub fn has_pos(&self, category: &str) -> bool {
        self.pos.contains(category)
    }

    pub fn is_compound(&self) -> bool {
        self.pos == COMPOUND_POS
    }
}

/// A vocabulary row as supplied by callers or loaded from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub word: String,
    pub meanings: Vec<String>,
    pub pos: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
}

/// An English phrase and its fixed Paj Ajap rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundConfig {
    pub english: String,
    pub paj: String,
}

/// The tables a [`VocabularyStore`] is built from
///
/// Compound order matters only for ties in the Paj Ajap → English
/// direction, where the shortest English phrase wins and equal lengths keep
/// table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub entries: Vec<EntryConfig>,
    #[serde(default)]
    pub compounds: Vec<CompoundConfig>,
}

impl VocabularyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(&mut self, word: &str, meanings: &[&str], pos: &str) -> &mut Self {
        self.entries.push(EntryConfig {
            word: word.to_string(),
            meanings: meanings.iter().map(|m| m.to_string()).collect(),
            pos: pos.to_string(),
            primary: None,
        });
        self
    }

    pub fn with_compound(&mut self, english: &str, paj: &str) -> &mut Self {
        self.compounds.push(CompoundConfig {
            english: english.to_string(),
            paj: paj.to_string(),
        });
        self
    }
}

/// Zero or more ranked entries returned by an English lookup
///
/// The first candidate is the preferred one. A compound hit yields exactly
/// one synthetic candidate tagged [`COMPOUND_POS`].
#[derive(Debug, Clone, Default)]
pub struct Candidates<'a>(Vec<Cow<'a, Entry>>);

impl<'a> Candidates<'a> {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&Entry> {
        self.0.first().map(|entry| entry.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.0.iter().map(|entry| entry.as_ref())
    }
}

impl<'b, 'a> IntoIterator for &'b Candidates<'a> {
    type Item = &'b Entry;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'b, Cow<'a, Entry>>,
        fn(&'b Cow<'a, Entry>) -> &'b Entry,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let as_entry: fn(&'b Cow<'a, Entry>) -> &'b Entry = |entry| &**entry;
        self.0.iter().map(as_entry)
    }
}

/// Immutable Paj Ajap ↔ English vocabulary
#[derive(Debug, Clone)]
pub struct VocabularyStore {
    entries: Vec<Entry>,
    // Paj Ajap word -> index into `entries`; last definition wins
    by_paj: HashMap<String, usize>,
    // normalized English meaning -> indexes in table order
    by_english: HashMap<String, Vec<usize>>,
    compounds_english_to_paj: HashMap<String, String>,
    compounds_paj_to_english: HashMap<String, String>,
}

impl VocabularyStore {
    /// Build a store from caller-supplied tables
    ///
    /// # Errors
    ///
    /// Fails if an entry has a blank word or no meanings, or if a compound
    /// has a blank side.
    pub fn from_config(config: &VocabularyConfig) -> VocabularyResult<Self> {
        let mut entries = Vec::with_capacity(config.entries.len());
        for row in &config.entries {
            let mut entry = Entry::new(row.word.clone(), row.meanings.clone(), row.pos.clone())?;
            if let Some(primary) = row.primary.as_deref().filter(|p| !p.trim().is_empty()) {
                entry = entry.with_primary(primary);
            }
            entries.push(entry);
        }

        let mut compounds = Vec::with_capacity(config.compounds.len());
        for compound in &config.compounds {
            if compound.english.trim().is_empty() || compound.paj.trim().is_empty() {
                return Err(VocabularyError::EmptyWord(format!(
                    "compound '{}' -> '{}' has a blank side",
                    compound.english, compound.paj
                )));
            }
            compounds.push((compound.english.clone(), compound.paj.clone()));
        }

        Ok(Self::build(entries, compounds))
    }

    /// Store over the embedded default tables
    pub fn embedded() -> Self {
        let (entries, compounds) = crate::data::embedded_tables();
        Self::build(entries, compounds)
    }

    fn build(entries: Vec<Entry>, compounds: Vec<(String, String)>) -> Self {
        let mut by_paj = HashMap::with_capacity(entries.len());
        let mut by_english: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            by_paj.insert(entry.word.clone(), index);
            for meaning in &entry.meanings {
                let key = normalize_english(meaning.trim_start_matches('-'));
                by_english.entry(key).or_default().push(index);
            }
        }

        let mut compounds_english_to_paj = HashMap::with_capacity(compounds.len());
        for (english, paj) in &compounds {
            compounds_english_to_paj.insert(normalize_english(english), paj.clone());
        }

        // Shortest English phrase becomes the gloss; sort is stable so ties keep table order
        let mut by_length: Vec<&(String, String)> = compounds.iter().collect();
        by_length.sort_by_key(|(english, _)| english.chars().count());
        let mut compounds_paj_to_english = HashMap::with_capacity(compounds.len());
        for (english, paj) in by_length {
            compounds_paj_to_english
                .entry(paj.trim().to_string())
                .or_insert_with(|| english.clone());
        }

        Self {
            entries,
            by_paj,
            by_english,
            compounds_english_to_paj,
            compounds_paj_to_english,
        }
    }

    /// Look up an English word, compounds first
    pub fn lookup_english(&self, word: &str) -> Candidates<'_> {
        let clean = normalize_english(word);
        if let Some(paj) = self.compounds_english_to_paj.get(&clean) {
            return Candidates(vec![Cow::Owned(Entry::compound(paj, &clean))]);
        }
        match self.by_english.get(&clean) {
            Some(indexes) => Candidates(
                indexes
                    .iter()
                    .map(|&index| Cow::Borrowed(&self.entries[index]))
                    .collect(),
            ),
            None => Candidates::none(),
        }
    }

    /// Look up a Paj Ajap word or phrase, compounds first (case-sensitive)
    pub fn lookup_paj(&self, word: &str) -> Option<Cow<'_, Entry>> {
        let clean = word.trim();
        if let Some(english) = self.compounds_paj_to_english.get(clean) {
            return Some(Cow::Owned(Entry::compound(clean, english)));
        }
        self.by_paj
            .get(clean)
            .map(|&index| Cow::Borrowed(&self.entries[index]))
    }

    /// True if `word` is a registered single word (compounds not considered)
    pub fn is_paj_word(&self, word: &str) -> bool {
        self.by_paj.contains_key(word)
    }

    pub fn compound_from_english(&self, phrase: &str) -> Option<&str> {
        self.compounds_english_to_paj
            .get(&normalize_english(phrase))
            .map(String::as_str)
    }

    pub fn compound_from_paj(&self, phrase: &str) -> Option<&str> {
        self.compounds_paj_to_english
            .get(phrase.trim())
            .map(String::as_str)
    }

    /// Entries in table order (duplicates included)
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn compound_count(&self) -> usize {
        self.compounds_english_to_paj.len()
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::embedded()
    }
}

fn normalize_english(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> VocabularyStore {
        let mut config = VocabularyConfig::new();
        config
            .with_entry("kson", &["boy"], "noun")
            .with_entry("seþen", &["pet", "cat", "dog"], "noun")
            .with_entry("wap", &["old"], "adj")
            .with_entry("ej", &["-er", "doer"], "suffix/verb")
            .with_entry("Zu", &["shout"], "verb")
            .with_compound("happy", "фok фeþ")
            .with_compound("happiness", "фok фeþ")
            .with_compound("be glad", "фok фeþ")
            .with_compound("good night", "фok noj'");
        VocabularyStore::from_config(&config).unwrap()
    }

    #[test]
    fn test_lookup_english_is_case_insensitive() {
        let store = sample_store();
        let candidates = store.lookup_english("  BOY ");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.first().unwrap().word(), "kson");
    }

    #[test]
    fn test_lookup_english_strips_leading_dash_in_index() {
        let store = sample_store();
        assert_eq!(store.lookup_english("er").first().unwrap().word(), "ej");
    }

    #[test]
    fn test_lookup_english_prefers_compound() {
        let store = sample_store();
        let candidates = store.lookup_english("Happy");
        let entry = candidates.first().unwrap();
        assert_eq!(entry.word(), "фok фeþ");
        assert_eq!(entry.primary(), "happy");
        assert!(entry.is_compound());
    }

    #[test]
    fn test_lookup_english_missing() {
        let store = sample_store();
        assert!(store.lookup_english("xyz").is_empty());
        assert!(store.lookup_english("").is_empty());
    }

    #[test]
    fn test_reverse_index_keeps_every_entry_in_order() {
        let mut config = VocabularyConfig::new();
        config
            .with_entry("kuk", &["eat", "food"], "noun/verb")
            .with_entry("jeф", &["drink"], "verb")
            .with_entry("kukk", &["food"], "noun");
        let store = VocabularyStore::from_config(&config).unwrap();
        let found = store.lookup_english("food");
        let words: Vec<&str> = found.iter().map(|e| e.word()).collect();
        assert_eq!(words, vec!["kuk", "kukk"]);
    }

    #[test]
    fn test_candidates_iterate_by_reference() {
        let mut config = VocabularyConfig::new();
        config
            .with_entry("kuk", &["eat", "food"], "noun/verb")
            .with_entry("kukk", &["food"], "noun");
        let store = VocabularyStore::from_config(&config).unwrap();

        let found = store.lookup_english("food");
        let mut words = Vec::new();
        for entry in &found {
            words.push(entry.word());
        }
        assert_eq!(words, vec!["kuk", "kukk"]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_forward_index_last_write_wins() {
        let mut config = VocabularyConfig::new();
        config
            .with_entry("kuk", &["eat"], "verb")
            .with_entry("kuk", &["food"], "noun");
        let store = VocabularyStore::from_config(&config).unwrap();
        assert_eq!(store.lookup_paj("kuk").unwrap().primary(), "food");
    }

    #[test]
    fn test_lookup_paj_is_case_sensitive() {
        let store = sample_store();
        assert!(store.lookup_paj("Zu").is_some());
        assert!(store.lookup_paj("zu").is_none());
        assert!(store.lookup_paj(" kson ").is_some());
    }

    #[test]
    fn test_lookup_paj_prefers_compound() {
        let store = sample_store();
        let entry = store.lookup_paj("фok фeþ").unwrap();
        assert!(entry.is_compound());
        assert_eq!(entry.primary(), "happy");
    }

    #[test]
    fn test_reverse_compound_prefers_shortest_english() {
        let store = sample_store();
        // "happy" (5) beats "be glad" (7) and "happiness" (9)
        assert_eq!(store.compound_from_paj("фok фeþ"), Some("happy"));
    }

    #[test]
    fn test_reverse_compound_tie_keeps_table_order() {
        let mut config = VocabularyConfig::new();
        config
            .with_compound("dead", "þop þewo")
            .with_compound("die", "þop þewo")
            .with_compound("dies", "þop þewo");
        let store = VocabularyStore::from_config(&config).unwrap();
        assert_eq!(store.compound_from_paj("þop þewo"), Some("die"));

        let mut config = VocabularyConfig::new();
        config
            .with_compound("dead", "þop þewo")
            .with_compound("life", "þo þop þewo")
            .with_compound("dies", "þop þewo");
        let store = VocabularyStore::from_config(&config).unwrap();
        assert_eq!(store.compound_from_paj("þop þewo"), Some("dead"));
    }

    #[test]
    fn test_compound_from_english_normalizes() {
        let store = sample_store();
        assert_eq!(store.compound_from_english("  Good NIGHT "), Some("фok noj'"));
        assert_eq!(store.compound_from_english("good"), None);
    }

    #[test]
    fn test_is_paj_word_ignores_compounds() {
        let store = sample_store();
        assert!(store.is_paj_word("kson"));
        assert!(!store.is_paj_word("фok фeþ"));
    }

    #[test]
    fn test_explicit_primary_meaning() {
        let mut config = VocabularyConfig::new();
        config.entries.push(EntryConfig {
            word: "þonj".to_string(),
            meanings: vec!["long".to_string(), "big".to_string()],
            pos: "adj".to_string(),
            primary: Some("big".to_string()),
        });
        let store = VocabularyStore::from_config(&config).unwrap();
        assert_eq!(store.lookup_paj("þonj").unwrap().primary(), "big");
    }

    #[test]
    fn test_empty_meanings_rejected() {
        let mut config = VocabularyConfig::new();
        config.with_entry("kson", &[], "noun");
        match VocabularyStore::from_config(&config) {
            Err(VocabularyError::EmptyMeanings(word)) => assert_eq!(word, "kson"),
            other => panic!("Expected EmptyMeanings, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_compound_rejected() {
        let mut config = VocabularyConfig::new();
        config.with_compound("happy", "  ");
        assert!(matches!(
            VocabularyStore::from_config(&config),
            Err(VocabularyError::EmptyWord(_))
        ));
    }

    #[test]
    fn test_has_pos_matches_combined_tags() {
        let entry = Entry::new("kuk", vec!["eat".to_string()], "noun/verb").unwrap();
        assert!(entry.has_pos("noun"));
        assert!(entry.has_pos("verb"));
        assert!(!entry.has_pos("adj"));
    }

    #[test]
    fn test_store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VocabularyStore>();
    }
}
