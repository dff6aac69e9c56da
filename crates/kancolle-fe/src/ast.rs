//! Data model for parsed fleet expressions.
//!
//! A fleet expression is a `-` separated list of segments. Every segment is
//! parsed into one [`FleetExpressionComponent`] describing which ship types
//! it accepts, how many of them, where they sit in the fleet and which level
//! they need.

use std::collections::BTreeSet;

/// Slot index of the flagship.
pub const FLAGSHIP_POSITION: u32 = 0;

/// A single ship type token of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum ShipType {
    /// Bare ship type code, e.g. `BB` or `CVL`.
    Type(String),
    /// Ship class reference: `@30`
    Class(u32),
    /// Specific ship reference: `#543`
    Ship(u32),
    /// Wildcard `ANY`: any ship type.
    Any,
}

impl ShipType {
    /// Keyword of the wildcard token.
    pub const ANY_KEYWORD: &'static str = "ANY";

    /// Creates a bare type code token.
    pub fn code(code: impl Into<String>) -> Self {
        ShipType::Type(code.into())
    }

    /// Returns true for the `ANY` wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, ShipType::Any)
    }
}

impl std::fmt::Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipType::Type(code) => write!(f, "{}", code),
            ShipType::Class(id) => write!(f, "@{}", id),
            ShipType::Ship(id) => write!(f, "#{}", id),
            ShipType::Any => write!(f, "{}", Self::ANY_KEYWORD),
        }
    }
}

/// How many ships of a segment a fleet must contain: `{min,max}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    /// Minimum number of matching ships.
    pub min: u32,
    /// Maximum number of matching ships (None = unbounded).
    pub max: Option<u32>,
}

impl Quantity {
    /// Creates a quantity constraint.
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Exactly `n` ships: `{n}`
    pub fn exactly(n: u32) -> Self {
        Self { min: n, max: Some(n) }
    }

    /// At least `n` ships: `{n,}`
    pub fn at_least(n: u32) -> Self {
        Self { min: n, max: None }
    }

    /// Between `min` and `max` ships: `{min,max}`
    pub fn between(min: u32, max: u32) -> Self {
        Self { min, max: Some(max) }
    }

    /// Exactly one ship, the quantity of a segment without a quantity token.
    pub fn one() -> Self {
        Self::exactly(1)
    }

    /// Any number of ships, the quantity of a bare `*` segment.
    pub fn unbounded() -> Self {
        Self::at_least(0)
    }

    /// Classifies the quantity for rendering.
    ///
    /// Every quantity falls into exactly one case.
    pub fn case(&self) -> QuantityCase {
        match self.max {
            Some(max) if max == self.min => QuantityCase::Exact(self.min),
            Some(max) if self.min == 0 => QuantityCase::AtMost(max),
            None if self.min > 0 => QuantityCase::AtLeast(self.min),
            max => QuantityCase::Range(self.min, max),
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::one()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{{{}}}", self.min),
            Some(max) => write!(f, "{{{},{}}}", self.min, max),
            None => write!(f, "{{{},}}", self.min),
        }
    }
}

/// Rendering case of a [`Quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityCase {
    /// `min == max`
    Exact(u32),
    /// `min == 0` with a finite maximum.
    AtMost(u32),
    /// `min > 0` without a maximum.
    AtLeast(u32),
    /// Everything else, including `{0,}`.
    Range(u32, Option<u32>),
}

/// One constraint segment of a fleet expression.
///
/// Example: `!BB|BBV{1,2}[0,level>70]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetExpressionComponent {
    /// Accepted ship types, in source order without duplicates. Never empty.
    pub ship_types: Vec<ShipType>,
    /// How many matching ships the fleet needs.
    pub quantity: Quantity,
    /// Zero-based slots the ships must occupy (empty = anywhere).
    pub positions: BTreeSet<u32>,
    /// Minimum ship level (0 = no constraint).
    pub level_condition: u32,
    /// Whether the fleet must NOT contain these ships.
    pub negated: bool,
}

impl FleetExpressionComponent {
    /// Creates a component accepting `ship_types` exactly once, anywhere.
    ///
    /// An empty type list is replaced by the wildcard.
    pub fn new(ship_types: Vec<ShipType>) -> Self {
        let ship_types = if ship_types.is_empty() {
            vec![ShipType::Any]
        } else {
            ship_types
        };
        Self {
            ship_types,
            quantity: Quantity::one(),
            positions: BTreeSet::new(),
            level_condition: 0,
            negated: false,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the required slots.
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = u32>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    /// Sets the minimum level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level_condition = level;
        self
    }

    /// Marks the component as negated.
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Minimum number of matching ships.
    pub fn min_count(&self) -> u32 {
        self.quantity.min
    }

    /// Maximum number of matching ships (None = unbounded).
    pub fn max_count(&self) -> Option<u32> {
        self.quantity.max
    }

    /// Returns true if the wildcard is among the accepted types.
    pub fn has_any(&self) -> bool {
        self.ship_types.iter().any(ShipType::is_any)
    }

    /// Returns true if the ships must occupy the flagship slot.
    pub fn is_flagship(&self) -> bool {
        self.positions.contains(&FLAGSHIP_POSITION)
    }

    /// Returns true for a wildcard-only segment that restricts nothing.
    ///
    /// Placeholders such as `ANY*` only mean "other ships are allowed": they
    /// are not rendered, but still count as a wildcard.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.ship_types.as_slice(), [ShipType::Any])
            && self.positions.is_empty()
            && self.level_condition == 0
            && !self.negated
            && (self.quantity == Quantity::one() || self.quantity == Quantity::unbounded())
    }
}

impl std::fmt::Display for FleetExpressionComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "!")?;
        }
        for (i, ship_type) in self.ship_types.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", ship_type)?;
        }
        write!(f, "{}", self.quantity)?;

        let mut items: Vec<String> = self.positions.iter().map(u32::to_string).collect();
        if self.level_condition > 0 {
            items.push(format!("level>{}", self.level_condition));
        }
        if !items.is_empty() {
            write!(f, "[{}]", items.join(","))?;
        }
        Ok(())
    }
}
