//! # kancolle-fe-render
//!
//! Describes KanColle fleet expressions in plain language.
//!
//! This crate takes the components produced by the [`kancolle-fe`] parser and
//! renders them as a sentence in Simplified Chinese, Traditional Chinese,
//! Japanese or English.
//!
//! ## Quick Start
//!
//! ```rust
//! use kancolle_fe_render::resolve;
//!
//! assert_eq!(
//!     resolve("CL{1,3}[0]-DD{1,}", "zh_Hans").unwrap(),
//!     "需要1~3个CL旗舰，需要至少1个DD，不能带其它舰种"
//! );
//! assert_eq!(
//!     resolve("CV|CVB{0,2}-DD{2,}", "ja").unwrap(),
//!     "CV/CVB最大2隻必要、DD少なくとも2隻必要、他の艦種は不可"
//! );
//! ```
//!
//! ## With Ship Names and Caching
//!
//! ```rust
//! use kancolle_fe::{Language, ShipType};
//! use kancolle_fe_render::{CacheConfig, FleetResolver, ResolverConfig, StaticNameLookup};
//!
//! let mut names = StaticNameLookup::new();
//! names.insert(ShipType::Class(30), "Kagerou-class");
//!
//! let config = ResolverConfig::builder()
//!     .with_default_language(Language::English)
//!     .with_cache(CacheConfig { max_entries: 256 })
//!     .build();
//! let resolver = FleetResolver::with_config(&names, config);
//!
//! assert_eq!(
//!     resolver.resolve_default("@30{4,}-ANY*").unwrap(),
//!     "Require at least 4 Kagerou-class"
//! );
//! ```
//!
//! ## Rendering Rules
//!
//! | Part | zh_Hans | zh_Hant | ja | en |
//! |------|---------|---------|----|----|
//! | Clause separator | `，` | `，` | `、` | `, ` |
//! | Type separator | `/` | `/` | `/` | ` or ` |
//! | Exactly n | `{n}个` | `{n}個` | `{n}隻` | `exactly {n}` |
//! | At most m | `至多{m}个` | `至多{m}個` | `最大{m}隻` | `up to {m}` |
//! | At least n | `至少{n}个` | `至少{n}個` | `少なくとも{n}隻` | `at least {n}` |
//! | Range | `{n}~{m}个` | `{n}~{m}個` | `{n}~{m}隻` | `{n} to {m}` |
//! | Closing clause | `不能带其它舰种` | `不能帶其它艦種` | `他の艦種は不可` | `No other ship types allowed` |
//!
//! The closing clause is added only when no segment contains `ANY`.
//!
//! ## Feature Flags
//!
//! - `parallel` - Resolves batches concurrently using rayon
//! - `serde` - Serialize/deserialize the data model and configuration
//!
//! [`kancolle-fe`]: kancolle_fe

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod config;
mod lookup;
mod phrasebook;
mod renderer;
mod resolver;

// Public re-exports
pub use cache::{normalize_cache_key, SentenceCache};
pub use config::{CacheConfig, ResolverConfig, ResolverConfigBuilder};
pub use lookup::{IdentityLookup, ShipNameLookup, StaticNameLookup};
pub use phrasebook::{Phrasebook, WordOrder, ENGLISH, JAPANESE, SIMPLIFIED_CHINESE, TRADITIONAL_CHINESE};
pub use renderer::Renderer;
pub use resolver::{resolve, resolve_default, FleetResolver};

// Re-export commonly used types from the parser for convenience
pub use kancolle_fe::{FeError, FeResult, FleetExpression, FleetExpressionComponent, Language};
