//! A parsed fleet expression together with its output language.

use crate::ast::FleetExpressionComponent;
use crate::error::FeResult;
use crate::language::Language;
use crate::parser::{parse, SEGMENT_SEPARATOR};

/// A fully parsed fleet expression.
///
/// Built once per resolution and not modified afterwards.
///
/// # Example
///
/// ```rust
/// use kancolle_fe::{FleetExpression, Language};
///
/// let expr = FleetExpression::parse("CVL|CL{1,}-DD|DE{3,}-ANY*", Language::English).unwrap();
/// assert_eq!(expr.components().len(), 3);
/// assert!(expr.has_any());
/// assert_eq!(expr.visible_components().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetExpression {
    source: String,
    language: Language,
    components: Vec<FleetExpressionComponent>,
}

impl FleetExpression {
    /// Parses `source` for rendering in `language`.
    pub fn parse(source: &str, language: Language) -> FeResult<Self> {
        let components = parse(source)?;
        Ok(Self {
            source: source.to_string(),
            language,
            components,
        })
    }

    /// The expression text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The output language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Components in segment order.
    pub fn components(&self) -> &[FleetExpressionComponent] {
        &self.components
    }

    /// Components that are rendered, i.e. everything except wildcard placeholders.
    pub fn visible_components(&self) -> impl Iterator<Item = &FleetExpressionComponent> {
        self.components.iter().filter(|c| !c.is_placeholder())
    }

    /// Returns true if any segment accepts the wildcard, so ships outside
    /// the listed types are allowed.
    pub fn has_any(&self) -> bool {
        self.components.iter().any(FleetExpressionComponent::has_any)
    }

    /// Canonical text of the expression, with every field spelled out.
    pub fn canonical(&self) -> String {
        let separator = SEGMENT_SEPARATOR.to_string();
        self.components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl std::fmt::Display for FleetExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
