//! Fleet expression resolver: parse, then render.

use kancolle_fe::{FeResult, FleetExpression, Language};
use tracing::{debug, trace};

use crate::cache::SentenceCache;
use crate::config::ResolverConfig;
use crate::lookup::{IdentityLookup, ShipNameLookup};
use crate::renderer::Renderer;

/// Resolves a fleet expression into a sentence, writing ship types as-is.
///
/// # Arguments
///
/// * `expression` - Fleet expression, e.g. `"CL{1,3}[0]-DD{1,}"`
/// * `language` - Language tag: `zh_Hans`, `zh_Hant`, `ja` or `en`
///
/// # Errors
///
/// * `UnsupportedLanguage` - if the tag names another language
/// * `MalformedExpression` / `InvalidQuantity` - if the expression cannot be parsed
///
/// # Example
///
/// ```rust
/// use kancolle_fe_render::resolve;
///
/// let sentence = resolve("BB{1}[0]-CL{1}-DD{4}", "en").unwrap();
/// assert_eq!(
///     sentence,
///     "Require exactly 1 BB as flagship, Require exactly 1 CL, Require exactly 4 DD, No other ship types allowed"
/// );
/// ```
pub fn resolve(expression: &str, language: &str) -> FeResult<String> {
    let language: Language = language.parse()?;
    FleetResolver::default().resolve(expression, language)
}

/// Resolves a fleet expression in Simplified Chinese.
pub fn resolve_default(expression: &str) -> FeResult<String> {
    FleetResolver::default().resolve(expression, Language::default())
}

/// Resolver combining the parser, a name lookup and an optional cache.
///
/// # Example
///
/// ```rust
/// use kancolle_fe::{Language, ShipType};
/// use kancolle_fe_render::{CacheConfig, FleetResolver, ResolverConfig, StaticNameLookup};
///
/// let mut names = StaticNameLookup::new();
/// names.insert_localized(ShipType::Ship(543), Language::Japanese, "長波改二");
///
/// let config = ResolverConfig::builder()
///     .with_default_language(Language::Japanese)
///     .with_cache(CacheConfig::default())
///     .build();
/// let resolver = FleetResolver::with_config(&names, config);
///
/// let sentence = resolver.resolve_default("#543[0]-ANY*").unwrap();
/// assert_eq!(sentence, "長波改二1隻旗艦必要");
/// ```
pub struct FleetResolver<'a> {
    /// Name lookup used by the renderer.
    lookup: &'a dyn ShipNameLookup,
    /// Resolver configuration.
    config: ResolverConfig,
    /// Sentence cache (optional).
    cache: Option<SentenceCache>,
}

impl<'a> FleetResolver<'a> {
    /// Creates a resolver with default configuration and no cache.
    pub fn new(lookup: &'a dyn ShipNameLookup) -> Self {
        Self {
            lookup,
            config: ResolverConfig::default(),
            cache: None,
        }
    }

    /// Creates a resolver with custom configuration.
    pub fn with_config(lookup: &'a dyn ShipNameLookup, config: ResolverConfig) -> Self {
        let cache = config.cache.clone().map(SentenceCache::new);
        Self {
            lookup,
            config,
            cache,
        }
    }

    /// Returns a reference to the cache if enabled.
    pub fn cache(&self) -> Option<&SentenceCache> {
        self.cache.as_ref()
    }

    /// Returns a reference to the resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the renderer used by this resolver.
    pub fn renderer(&self) -> Renderer<'a> {
        Renderer::new(self.lookup)
    }

    /// Resolves `expression` into a sentence in `language`.
    ///
    /// If caching is enabled, sentences are cached for subsequent calls.
    pub fn resolve(&self, expression: &str, language: Language) -> FeResult<String> {
        if let Some(ref cache) = self.cache {
            if let Some(sentence) = cache.get(expression, language) {
                trace!(expression, %language, "sentence cache hit");
                return Ok(sentence);
            }
            trace!(expression, %language, "sentence cache miss");
        }

        let expr = FleetExpression::parse(expression, language)?;
        let sentence = self.resolve_expression(&expr);

        if let Some(ref cache) = self.cache {
            cache.set(expression, language, sentence.clone());
        }
        Ok(sentence)
    }

    /// Resolves `expression` in the configured default language.
    pub fn resolve_default(&self, expression: &str) -> FeResult<String> {
        self.resolve(expression, self.config.default_language)
    }

    /// Resolves `expression` in the language named by `tag`.
    pub fn resolve_tag(&self, expression: &str, tag: &str) -> FeResult<String> {
        let language: Language = tag.parse()?;
        self.resolve(expression, language)
    }

    /// Renders an already parsed expression. Bypasses the cache.
    pub fn resolve_expression(&self, expr: &FleetExpression) -> String {
        let sentence = self.renderer().render_expression(expr);
        debug!(
            expression = expr.source(),
            language = %expr.language(),
            components = expr.components().len(),
            "resolved fleet expression"
        );
        sentence
    }

    /// Resolves many expressions in one language.
    ///
    /// Results are returned in input order; a failing expression does not
    /// affect the others. With the `parallel` feature, expressions are
    /// resolved concurrently.
    pub fn resolve_batch(&self, expressions: &[&str], language: Language) -> Vec<FeResult<String>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            expressions
                .par_iter()
                .map(|expression| self.resolve(expression, language))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            expressions
                .iter()
                .map(|expression| self.resolve(expression, language))
                .collect()
        }
    }
}

impl Default for FleetResolver<'static> {
    fn default() -> Self {
        Self::new(&IdentityLookup)
    }
}

impl std::fmt::Debug for FleetResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetResolver")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use kancolle_fe::FeError;

    #[test]
    fn test_resolve_unsupported_language() {
        let result = resolve("BB{1}", "fr");
        assert_eq!(result, Err(FeError::UnsupportedLanguage("fr".to_string())));
    }

    #[test]
    fn test_resolve_empty_expression() {
        let result = resolve("", "en");
        assert!(matches!(result, Err(FeError::MalformedExpression { .. })));
    }

    #[test]
    fn test_resolve_default_is_simplified_chinese() {
        assert_eq!(
            resolve_default("CV|CVB{0,2}-DD{2,}").unwrap(),
            "需要至多2个CV/CVB，需要至少2个DD，不能带其它舰种"
        );
    }

    #[test]
    fn test_resolver_default_language_from_config() {
        let config = ResolverConfig::builder()
            .with_default_language(Language::English)
            .build();
        let resolver = FleetResolver::with_config(&IdentityLookup, config);
        assert_eq!(
            resolver.resolve_default("DD{2,}").unwrap(),
            "Require at least 2 DD, No other ship types allowed"
        );
    }

    #[test]
    fn test_resolve_tag() {
        let resolver = FleetResolver::default();
        assert_eq!(
            resolver.resolve_tag("DD{2,}", "zh-Hant").unwrap(),
            "需要至少2個DD，不能帶其它艦種"
        );
        assert!(matches!(
            resolver.resolve_tag("DD{2,}", "ko"),
            Err(FeError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_cache_populated_and_consistent() {
        let config = ResolverConfig::builder()
            .with_cache(CacheConfig { max_entries: 8 })
            .build();
        let resolver = FleetResolver::with_config(&IdentityLookup, config);

        let first = resolver.resolve("CL{1,3}[0]-DD{1,}", Language::SimplifiedChinese).unwrap();
        let second = resolver.resolve(" CL{1,3}[0] - DD{1,} ", Language::SimplifiedChinese).unwrap();
        assert_eq!(first, second);
        assert_eq!(resolver.cache().map(SentenceCache::len), Some(1));
    }

    #[test]
    fn test_errors_not_cached() {
        let config = ResolverConfig::builder()
            .with_cache(CacheConfig::default())
            .build();
        let resolver = FleetResolver::with_config(&IdentityLookup, config);
        assert!(resolver.resolve("DD{3,1}", Language::English).is_err());
        assert_eq!(resolver.cache().map(SentenceCache::is_empty), Some(true));
    }

    #[test]
    fn test_resolve_batch_keeps_order() {
        let resolver = FleetResolver::default();
        let results = resolver.resolve_batch(&["DD{2}", "", "ANY*"], Language::English);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_deref(),
            Ok("Require exactly 2 DD, No other ship types allowed")
        );
        assert!(results[1].is_err());
        assert_eq!(results[2].as_deref(), Ok("No ship type restrictions"));
    }
}
