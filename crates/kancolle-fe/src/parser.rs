//! Fleet expression parser implementation using nom.
//!
//! An expression is split on `-` into segments and each segment is read in a
//! single left-to-right scan:
//!
//! ```text
//! segment   = [ "!" ] [ types ] { field }
//! types     = token { "|" token }
//! token     = "@" digits | "#" digits | word
//! field     = "{" n [ "," [ m ] ] "}" | "[" item { "," item } "]"
//!           | "level>" n | "*" | any other character (ignored)
//! item      = n | "level>" n
//! ```
//!
//! Parentheses are lexical no-ops: `!(BB|BBV){1,2}` reads exactly like
//! `!BB|BBV{1,2}`.

use std::collections::BTreeSet;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{anychar, char, digit1},
    combinator::{cut, map, not, opt, value},
    error::{Error, ErrorKind},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};
use tracing::debug;

use crate::ast::{FleetExpressionComponent, Quantity, ShipType};
use crate::error::{FeError, FeResult};

/// Top-level segment separator.
pub const SEGMENT_SEPARATOR: char = '-';

/// Parse a fleet expression into its components, one per segment.
///
/// # Examples
///
/// ```rust
/// use kancolle_fe::{parse, Quantity, ShipType};
///
/// let components = parse("CL{1,3}[0]-DD{1,}").unwrap();
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[0].ship_types, vec![ShipType::code("CL")]);
/// assert!(components[0].is_flagship());
/// assert_eq!(components[1].quantity, Quantity::at_least(1));
/// ```
pub fn parse(input: &str) -> FeResult<Vec<FleetExpressionComponent>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FeError::malformed(0, "empty expression"));
    }

    let mut offset = input.len() - input.trim_start().len();
    let mut components = Vec::new();
    for raw in trimmed.split(SEGMENT_SEPARATOR) {
        components.push(parse_segment(raw, offset)?);
        offset += raw.len() + SEGMENT_SEPARATOR.len_utf8();
    }
    Ok(components)
}

/// Parse a single segment starting at byte `offset` of the full expression.
fn parse_segment(raw: &str, offset: usize) -> FeResult<FleetExpressionComponent> {
    let start = offset + raw.len() - raw.trim_start().len();
    let segment = raw.trim();
    if segment.is_empty() {
        return Err(FeError::malformed(start, "empty segment"));
    }

    match segment_parts(segment) {
        Ok((_, parts)) => {
            let component = parts.into_component()?;
            debug!(segment, component = %component, "parsed fleet expression segment");
            Ok(component)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = start + segment.len() - e.input.len();
            let message = match e.code {
                ErrorKind::TooLarge => format!("number out of range at: '{}'", truncate(e.input, 20)),
                _ => format!("expected ship id at: '{}'", truncate(e.input, 20)),
            };
            Err(FeError::malformed(position, message))
        }
        Err(nom::Err::Incomplete(_)) => Err(FeError::malformed(start, "incomplete segment")),
    }
}

fn truncate(s: &str, max_len: usize) -> &str {
    match s.char_indices().nth(max_len) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

// ============================================================================
// Segment structure
// ============================================================================

/// Raw pieces of a segment before defaults are applied.
#[derive(Debug)]
struct SegmentParts {
    negated: bool,
    ship_types: Vec<ShipType>,
    fields: Vec<Field>,
}

#[derive(Debug, Clone)]
enum Field {
    Quantity(Quantity),
    Positions(Vec<PositionItem>),
    Level(u32),
    Star,
    Skip,
}

#[derive(Debug, Clone, Copy)]
enum PositionItem {
    Slot(u32),
    Level(u32),
}

impl SegmentParts {
    fn into_component(self) -> FeResult<FleetExpressionComponent> {
        let mut quantity = None;
        let mut positions: Option<BTreeSet<u32>> = None;
        let mut level = None;
        let mut star = false;

        // First occurrence of every field wins.
        for field in self.fields {
            match field {
                Field::Quantity(q) => {
                    quantity.get_or_insert(q);
                }
                Field::Positions(items) => {
                    let mut slots = BTreeSet::new();
                    for item in items {
                        match item {
                            PositionItem::Slot(slot) => {
                                slots.insert(slot);
                            }
                            PositionItem::Level(n) => {
                                level.get_or_insert(n);
                            }
                        }
                    }
                    positions.get_or_insert(slots);
                }
                Field::Level(n) => {
                    level.get_or_insert(n);
                }
                Field::Star => star = true,
                Field::Skip => {}
            }
        }

        let mut ship_types: Vec<ShipType> = Vec::with_capacity(self.ship_types.len() + 1);
        for ship_type in self.ship_types {
            if !ship_types.contains(&ship_type) {
                ship_types.push(ship_type);
            }
        }
        let bare = ship_types.is_empty();
        if (bare || star) && !ship_types.contains(&ShipType::Any) {
            ship_types.push(ShipType::Any);
        }

        let quantity = match quantity {
            Some(Quantity { min, max: Some(max) }) if min > max => {
                return Err(FeError::InvalidQuantity { min, max });
            }
            Some(q) => q,
            None if bare && star => Quantity::unbounded(),
            None => Quantity::one(),
        };

        Ok(FleetExpressionComponent {
            ship_types,
            quantity,
            positions: positions.unwrap_or_default(),
            level_condition: level.unwrap_or(0),
            negated: self.negated,
        })
    }
}

fn segment_parts(input: &str) -> IResult<&str, SegmentParts> {
    let (input, _) = parens(input)?;
    let (input, negated) = opt(char('!'))(input)?;
    let (input, ship_types) = separated_list0(
        char('|'),
        delimited(parens, preceded(not(level_condition), ship_type), parens),
    )(input)?;
    let (input, fields) = many0(field)(input)?;
    Ok((
        input,
        SegmentParts {
            negated: negated.is_some(),
            ship_types,
            fields,
        },
    ))
}

// ============================================================================
// Ship type tokens
// ============================================================================

fn ship_type(input: &str) -> IResult<&str, ShipType> {
    alt((
        map(preceded(char('@'), cut(number)), ShipType::Class),
        map(preceded(char('#'), cut(number)), ShipType::Ship),
        map(type_code, |code: &str| {
            if code == ShipType::ANY_KEYWORD {
                ShipType::Any
            } else {
                ShipType::code(code)
            }
        }),
    ))(input)
}

fn type_code(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

fn parens(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == '(' || c == ')')(input)
}

// ============================================================================
// Fields
// ============================================================================

fn field(input: &str) -> IResult<&str, Field> {
    alt((
        map(quantity, Field::Quantity),
        map(positions, Field::Positions),
        map(level_condition, Field::Level),
        value(Field::Star, char('*')),
        value(Field::Skip, anychar),
    ))(input)
}

/// Parse a quantity: `{n}`, `{n,m}` or `{n,}`
fn quantity(input: &str) -> IResult<&str, Quantity> {
    let (input, (min, max)) = delimited(
        char('{'),
        pair(number, opt(preceded(char(','), opt(number)))),
        char('}'),
    )(input)?;
    let quantity = match max {
        None => Quantity::exactly(min),
        Some(None) => Quantity::at_least(min),
        Some(Some(max)) => Quantity::between(min, max),
    };
    Ok((input, quantity))
}

/// Parse a position list: `[0]`, `[0,2]` or `[0,level>70]`
fn positions(input: &str) -> IResult<&str, Vec<PositionItem>> {
    delimited(
        char('['),
        separated_list1(
            char(','),
            alt((
                map(level_condition, PositionItem::Level),
                map(number, PositionItem::Slot),
            )),
        ),
        char(']'),
    )(input)
}

/// Parse a level condition: `level>70`
fn level_condition(input: &str) -> IResult<&str, u32> {
    preceded(terminated(tag("level"), char('>')), number)(input)
}

/// Parse a decimal number; values that do not fit in `u32` are a hard failure.
fn number(input: &str) -> IResult<&str, u32> {
    let (rest, digits) = digit1(input)?;
    match digits.parse::<u32>() {
        Ok(n) => Ok((rest, n)),
        Err(_) => Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge))),
    }
}

// ============================================================================
// Tests
// ============================================================================
