//! In-process LRU cache of finished translations
//!
//! Keys are the trimmed, lowercased input text. The cache is internally
//! locked so one instance can be shared between request handlers; the lock
//! is only held for the map operation itself.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 500;

/// A cached translation and the explanation shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedTranslation {
    pub translation: String,
    pub raw: String,
}

/// Normalize text into a cache key
pub fn cache_key(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Debug)]
struct Slot {
    value: CachedTranslation,
    stamp: u64,
}

/// Entries stamped with a use counter; `order` maps stamps back to keys, so
/// the smallest stamp is the least recently used entry
#[derive(Debug, Default)]
struct LruState {
    entries: HashMap<String, Slot>,
    order: BTreeMap<u64, String>,
    clock: u64,
}

impl LruState {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn touch(&mut self, key: &str) {
        let stamp = self.tick();
        if let Some(slot) = self.entries.get_mut(key) {
            if let Some(k) = self.order.remove(&slot.stamp) {
                self.order.insert(stamp, k);
            }
            slot.stamp = stamp;
        }
    }

    fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.entries.remove(&key);
        Some(key)
    }
}

/// Bounded least-recently-used cache
#[derive(Debug)]
pub struct TranslationCache {
    capacity: usize,
    state: Mutex<LruState>,
}

impl TranslationCache {
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(LruState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, LruState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up `key`, marking it most recently used
    pub fn get(&self, key: &str) -> Option<CachedTranslation> {
        let mut state = self.state();
        let value = state.entries.get(key)?.value.clone();
        state.touch(key);
        Some(value)
    }

    /// True if `key` is cached; does not change recency
    pub fn contains(&self, key: &str) -> bool {
        self.state().entries.contains_key(key)
    }

    /// Insert or replace `key`, evicting the least recently used entry when full
    pub fn insert(&self, key: String, value: CachedTranslation) {
        let mut state = self.state();
        if let Some(slot) = state.entries.get_mut(&key) {
            slot.value = value;
            state.touch(&key);
            return;
        }
        let stamp = state.tick();
        state.order.insert(stamp, key.clone());
        state.entries.insert(key, Slot { value, stamp });
        while state.entries.len() > self.capacity {
            match state.evict_oldest() {
                Some(evicted) => {
                    tracing::debug!("Evicted '{}' from translation cache", evicted)
                }
                None => break,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.state();
        state.entries.clear();
        state.order.clear();
    }

    /// Copy of every entry, sorted by key
    pub fn snapshot(&self) -> BTreeMap<String, CachedTranslation> {
        self.state()
            .entries
            .iter()
            .map(|(k, slot)| (k.clone(), slot.value.clone()))
            .collect()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(translation: &str) -> CachedTranslation {
        CachedTranslation {
            translation: translation.to_string(),
            raw: String::new(),
        }
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("  The Boy \n"), "the boy");
        assert_eq!(cache_key("   "), "");
    }

    #[test]
    fn test_insert_and_get() {
        let cache = TranslationCache::new(4);
        cache.insert("boy".to_string(), value("kson"));
        assert_eq!(cache.get("boy"), Some(value("kson")));
        assert_eq!(cache.get("girl"), None);
        assert!(cache.contains("boy"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = TranslationCache::new(2);
        cache.insert("a".to_string(), value("1"));
        cache.insert("b".to_string(), value("2"));
        // reading "a" makes "b" the eviction candidate
        cache.get("a");
        cache.insert("c".to_string(), value("3"));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_recency_follows_every_read_and_write() {
        let cache = TranslationCache::new(DEFAULT_CAPACITY);
        for n in 0..DEFAULT_CAPACITY {
            cache.insert(n.to_string(), value("x"));
        }
        // refresh every even key, then overwrite key 1
        for n in (0..DEFAULT_CAPACITY).step_by(2) {
            assert!(cache.get(&n.to_string()).is_some());
        }
        cache.insert("1".to_string(), value("y"));

        cache.insert("new".to_string(), value("z"));
        assert!(!cache.contains("3"));
        assert!(cache.contains("1"));
        assert!(cache.contains("0"));
        assert_eq!(cache.len(), DEFAULT_CAPACITY);

        cache.insert("newer".to_string(), value("z"));
        assert!(!cache.contains("5"));
        assert_eq!(cache.get("1"), Some(value("y")));
    }

    #[test]
    fn test_replace_does_not_grow() {
        let cache = TranslationCache::new(2);
        cache.insert("a".to_string(), value("1"));
        cache.insert("a".to_string(), value("2"));
        cache.insert("b".to_string(), value("3"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(value("2")));
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let cache = TranslationCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.insert("a".to_string(), value("1"));
        cache.insert("b".to_string(), value("2"));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("b"));
    }

    #[test]
    fn test_snapshot_and_clear() {
        let cache = TranslationCache::default();
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
        cache.insert("b".to_string(), value("2"));
        cache.insert("a".to_string(), value("1"));

        let keys: Vec<String> = cache.snapshot().into_keys().collect();
        assert_eq!(keys, vec!["a", "b"]);

        cache.clear();
        assert!(cache.is_empty());
        cache.insert("c".to_string(), value("3"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = std::sync::Arc::new(TranslationCache::new(100));
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let cache = std::sync::Arc::clone(&cache);
                std::thread::spawn(move || cache.insert(n.to_string(), value("x")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 4);
    }
}
