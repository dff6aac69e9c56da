//! Configuration types for the fleet expression resolver.

use kancolle_fe::Language;

/// Configuration for the resolver.
///
/// # Example
///
/// ```rust
/// use kancolle_fe::Language;
/// use kancolle_fe_render::{CacheConfig, ResolverConfig};
///
/// let config = ResolverConfig::builder()
///     .with_default_language(Language::Japanese)
///     .with_cache(CacheConfig::default())
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverConfig {
    /// Language used when the caller does not name one.
    pub default_language: Language,
    /// Sentence cache configuration (None = caching disabled).
    pub cache: Option<CacheConfig>,
}

impl ResolverConfig {
    /// Creates a new builder for ResolverConfig.
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }
}

/// Builder for ResolverConfig.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    default_language: Language,
    cache: Option<CacheConfig>,
}

impl ResolverConfigBuilder {
    /// Sets the default language.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Enables caching with the given configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Builds the ResolverConfig.
    pub fn build(self) -> ResolverConfig {
        ResolverConfig {
            default_language: self.default_language,
            cache: self.cache,
        }
    }
}

/// Configuration for the sentence cache.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheConfig {
    /// Maximum number of cached sentences.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_entries: 1024 }
    }
}
