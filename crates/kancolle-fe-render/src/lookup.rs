//! Display names for ship type tokens.
//!
//! This module defines the [`ShipNameLookup`] trait the renderer uses to turn
//! tokens such as `BB`, `@30` or `#543` into readable names.
//!
//! The ship database itself is not part of this crate. Implement the trait
//! for your own store in the consuming crate:
//!
//! ```ignore
//! use std::borrow::Cow;
//! use kancolle_fe::{Language, ShipType};
//! use kancolle_fe_render::ShipNameLookup;
//!
//! impl ShipNameLookup for ShipDatabase {
//!     fn display_name(&self, token: &ShipType, language: Language) -> Cow<'_, str> {
//!         match token {
//!             ShipType::Ship(id) => self.ship(*id).name(language).into(),
//!             ShipType::Class(id) => self.class(*id).name(language).into(),
//!             other => Cow::Owned(other.to_string()),
//!         }
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use kancolle_fe::{Language, ShipType};

/// Maps ship type tokens to localized display names.
pub trait ShipNameLookup: Send + Sync {
    /// Returns the name of `token` in `language`.
    ///
    /// Implementations should fall back to the token text rather than fail.
    fn display_name(&self, token: &ShipType, language: Language) -> Cow<'_, str>;
}

/// Renders every token as written in the expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLookup;

impl ShipNameLookup for IdentityLookup {
    fn display_name(&self, token: &ShipType, _language: Language) -> Cow<'_, str> {
        Cow::Owned(token.to_string())
    }
}

/// In-memory name table.
///
/// A name registered for a specific language takes precedence over one
/// registered for all languages; unknown tokens render as written.
///
/// # Example
///
/// ```rust
/// use kancolle_fe::{Language, ShipType};
/// use kancolle_fe_render::{ShipNameLookup, StaticNameLookup};
///
/// let mut names = StaticNameLookup::new();
/// names.insert(ShipType::Class(30), "Kagerou-class");
/// names.insert_localized(ShipType::Class(30), Language::SimplifiedChinese, "阳炎型");
///
/// assert_eq!(names.display_name(&ShipType::Class(30), Language::English), "Kagerou-class");
/// assert_eq!(names.display_name(&ShipType::Class(30), Language::SimplifiedChinese), "阳炎型");
/// assert_eq!(names.display_name(&ShipType::code("DD"), Language::English), "DD");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticNameLookup {
    names: HashMap<(ShipType, Option<Language>), String>,
}

impl StaticNameLookup {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a name used for every language.
    pub fn insert(&mut self, token: ShipType, name: impl Into<String>) -> &mut Self {
        self.names.insert((token, None), name.into());
        self
    }

    /// Registers a name for one language.
    pub fn insert_localized(
        &mut self,
        token: ShipType,
        language: Language,
        name: impl Into<String>,
    ) -> &mut Self {
        self.names.insert((token, Some(language)), name.into());
        self
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no name is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ShipNameLookup for StaticNameLookup {
    fn display_name(&self, token: &ShipType, language: Language) -> Cow<'_, str> {
        self.names
            .get(&(token.clone(), Some(language)))
            .or_else(|| self.names.get(&(token.clone(), None)))
            .map(|name| Cow::Borrowed(name.as_str()))
            .unwrap_or_else(|| Cow::Owned(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_lookup() {
        let lookup = IdentityLookup;
        assert_eq!(lookup.display_name(&ShipType::code("BB"), Language::English), "BB");
        assert_eq!(lookup.display_name(&ShipType::Class(30), Language::Japanese), "@30");
        assert_eq!(lookup.display_name(&ShipType::Ship(543), Language::default()), "#543");
    }

    #[test]
    fn test_static_lookup_precedence() {
        let mut names = StaticNameLookup::new();
        names
            .insert(ShipType::Ship(543), "Naganami Kai Ni")
            .insert_localized(ShipType::Ship(543), Language::Japanese, "長波改二");

        assert_eq!(names.len(), 2);
        assert_eq!(
            names.display_name(&ShipType::Ship(543), Language::Japanese),
            "長波改二"
        );
        assert_eq!(
            names.display_name(&ShipType::Ship(543), Language::English),
            "Naganami Kai Ni"
        );
    }

    #[test]
    fn test_static_lookup_fallback() {
        let names = StaticNameLookup::new();
        assert!(names.is_empty());
        assert_eq!(names.display_name(&ShipType::code("CVL"), Language::English), "CVL");
    }
}
