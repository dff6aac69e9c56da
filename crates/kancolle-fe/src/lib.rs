//! # kancolle-fe
//!
//! A Rust library for KanColle fleet expressions: the compact, regex-like
//! notation quest requirements use to describe which ships a fleet must (or
//! must not) contain.
//!
//! This crate provides the **parser** and the data model. Rendering parsed
//! expressions into sentences lives in `kancolle-fe-render`.
//!
//! ## Usage
//!
//! ```rust
//! use kancolle_fe::{parse, Quantity, QuantityCase, ShipType};
//!
//! let components = parse("BB|BBV{1,2}[0]-CV|CVB{0,2}-DD|DE*").unwrap();
//!
//! assert_eq!(components[0].ship_types, vec![ShipType::code("BB"), ShipType::code("BBV")]);
//! assert!(components[0].is_flagship());
//! assert_eq!(components[1].quantity.case(), QuantityCase::AtMost(2));
//! assert!(components[2].has_any());
//! ```
//!
//! ## Syntax Quick Reference
//!
//! | Element | Meaning | Example |
//! |---------|---------|---------|
//! | `-` | Segment separator, every segment must hold | `BB{1}-DD{2}` |
//! | `\|` | Alternative ship types | `DD\|DE` |
//! | `{n}` | Exactly n ships | `DD{4}` |
//! | `{n,m}` | n to m ships | `CL{1,3}` |
//! | `{n,}` | At least n ships | `DD{2,}` |
//! | `[i,...]` | Slot indices, `0` is the flagship | `BB[0]` |
//! | `level>n` | Minimum level | `ANY[0,level>70]` |
//! | `*` | Other ships allowed | `DD\|DE*` |
//! | `!` | Must not contain | `!BB\|BBV` |
//! | `@n` | Ship class | `@30` |
//! | `#n` | Specific ship | `#543` |
//! | `ANY` | Any ship type | `ANY*` |
//!
//! Parentheses may be used for readability, e.g. `!(BB|BBV)`, but they are
//! ignored: they do not form groups.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod error;
mod fleet;
mod language;
mod parser;

pub use ast::{FleetExpressionComponent, Quantity, QuantityCase, ShipType, FLAGSHIP_POSITION};
pub use error::{FeError, FeResult};
pub use fleet::FleetExpression;
pub use language::Language;
pub use parser::{parse, SEGMENT_SEPARATOR};
