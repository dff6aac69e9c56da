//! Sentence caching for fleet expression resolution.
//!
//! Resolution is a pure function of the expression and the language, so a
//! cached sentence is always identical to a freshly rendered one. Quest lists
//! repeat the same few expressions many times, which is what the cache is for.
//! Thread-safe using `Mutex` for LRU operations.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use kancolle_fe::{Language, SEGMENT_SEPARATOR};
use lru::LruCache;

use crate::config::CacheConfig;

/// Thread-safe LRU cache of rendered sentences keyed by expression and language.
///
/// # Example
///
/// ```rust
/// use kancolle_fe::Language;
/// use kancolle_fe_render::{CacheConfig, SentenceCache};
///
/// let cache = SentenceCache::new(CacheConfig::default());
/// cache.set("DD{2,}", Language::English, "Require at least 2 DD".to_string());
///
/// assert_eq!(
///     cache.get(" DD{2,} ", Language::English).as_deref(),
///     Some("Require at least 2 DD")
/// );
/// assert!(cache.get("DD{2,}", Language::Japanese).is_none());
/// ```
pub struct SentenceCache {
    inner: Mutex<LruCache<(String, Language), String>>,
    capacity: usize,
}

impl SentenceCache {
    /// Creates a new cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_capacity(config.max_entries)
    }

    /// Creates a cache holding at most `max_entries` sentences (at least one).
    pub fn with_capacity(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
        }
    }

    /// Gets a cached sentence, promoting it to most-recently-used.
    pub fn get(&self, expression: &str, language: Language) -> Option<String> {
        let mut cache = self.inner.lock().ok()?;
        cache
            .get(&(normalize_cache_key(expression), language))
            .cloned()
    }

    /// Stores a sentence, evicting the least recently used one when full.
    pub fn set(&self, expression: &str, language: Language, sentence: String) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.put((normalize_cache_key(expression), language), sentence);
        }
    }

    /// Returns the number of cached sentences.
    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(cache) => cache.len(),
            _ => 0,
        }
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached sentences.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.clear();
        }
    }
}

impl std::fmt::Debug for SentenceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceCache")
            .field("entries", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Normalizes an expression string for consistent cache keys.
///
/// Whitespace around the expression and around each segment is removed,
/// which is exactly the whitespace the parser ignores.
///
/// # Example
///
/// ```rust
/// use kancolle_fe_render::normalize_cache_key;
///
/// assert_eq!(normalize_cache_key("  BB{1} - DD{2} "), "BB{1}-DD{2}");
/// ```
pub fn normalize_cache_key(expression: &str) -> String {
    let separator = SEGMENT_SEPARATOR.to_string();
    expression
        .trim()
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
