//! Natural-language rendering of parsed fleet expressions.

use kancolle_fe::{FleetExpression, FleetExpressionComponent, Language};

use crate::lookup::{IdentityLookup, ShipNameLookup};
use crate::phrasebook::{Phrasebook, WordOrder};

/// Turns fleet expression components into a sentence.
///
/// # Example
///
/// ```rust
/// use kancolle_fe::{parse, Language};
/// use kancolle_fe_render::Renderer;
///
/// let components = parse("CL{1,3}[0]-DD{1,}").unwrap();
/// let sentence = Renderer::default().render(&components, Language::SimplifiedChinese);
/// assert_eq!(sentence, "需要1~3个CL旗舰，需要至少1个DD，不能带其它舰种");
/// ```
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    lookup: &'a dyn ShipNameLookup,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer resolving names through `lookup`.
    pub fn new(lookup: &'a dyn ShipNameLookup) -> Self {
        Self { lookup }
    }

    /// Renders `components` in `language`.
    ///
    /// Wildcard placeholders are skipped. When no component accepts the
    /// wildcard, a closing "no other ship types" clause is appended.
    pub fn render(&self, components: &[FleetExpressionComponent], language: Language) -> String {
        let book = Phrasebook::for_language(language);
        let has_any = components.iter().any(FleetExpressionComponent::has_any);

        let mut clauses: Vec<String> = components
            .iter()
            .filter(|c| !c.is_placeholder())
            .map(|c| self.clause(c, book, language))
            .collect();

        if !has_any {
            clauses.push(book.no_other_types.to_string());
        } else if clauses.is_empty() {
            clauses.push(book.unrestricted.to_string());
        }

        clauses.join(book.clause_separator)
    }

    /// Renders a parsed expression in its own language.
    pub fn render_expression(&self, expr: &FleetExpression) -> String {
        self.render(expr.components(), expr.language())
    }

    /// Renders a single component as one clause, placeholders included.
    pub fn render_clause(&self, component: &FleetExpressionComponent, language: Language) -> String {
        self.clause(component, Phrasebook::for_language(language), language)
    }

    fn clause(&self, component: &FleetExpressionComponent, book: &Phrasebook, language: Language) -> String {
        let types = self.ship_types(component, book, language);
        let quantity = book.quantity(&component.quantity);
        let verb = book.verb(component.negated);

        let mut suffix = String::new();
        if component.is_flagship() {
            suffix.push_str(book.flagship);
        }
        if component.level_condition > 0 {
            suffix.push_str(&book.level(component.level_condition));
        }

        match book.order {
            WordOrder::VerbFirst => {
                let sep = book.word_separator;
                format!("{verb}{sep}{quantity}{sep}{types}{suffix}")
            }
            WordOrder::VerbLast => format!("{types}{quantity}{suffix}{verb}"),
        }
    }

    fn ship_types(&self, component: &FleetExpressionComponent, book: &Phrasebook, language: Language) -> String {
        let names: Vec<String> = component
            .ship_types
            .iter()
            .filter(|t| !t.is_any())
            .map(|t| self.lookup.display_name(t, language).into_owned())
            .collect();

        if names.is_empty() {
            book.any_ship.to_string()
        } else {
            names.join(book.type_separator)
        }
    }
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(&IdentityLookup)
    }
}

impl std::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}
