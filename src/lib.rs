//! Compound measurement units built from scale prefixes and atomic symbols.
//!
//! Atoms such as bit or metre combine by multiplication and division into a
//! [`UniUnit`], a prefix over a fraction of atoms. Matching atoms cancel
//! automatically. A [`Quantity`] pairs a magnitude with a unit and collapses
//! to a plain number when its unit cancels away.
//!
//! ```
//! use uniunit::catalogue::{kilobit, megabit, KILOGRAM, METRE, SECOND};
//! use uniunit::Value;
//!
//! let g = 9.8 * (METRE / SECOND.pow(2));
//! let force = (100.0 * KILOGRAM) * g;
//! assert_eq!(force.as_quantity().unwrap().unit().to_string(), "kgm/ss");
//!
//! let ratio = (4.0 * kilobit()) / (16.0 * megabit());
//! assert!(matches!(ratio, Value::Number(_)));
//! ```

pub mod atom;
pub mod catalogue;
pub mod error;
pub mod prefix;
pub mod quantity;
pub mod uniunit;
pub mod value;

pub use atom::Atom;
pub use error::{Operation, UnitError, UnitResult};
pub use prefix::Prefix;
pub use quantity::Quantity;
pub use uniunit::{RenderStyle, UniUnit};
pub use value::Value;
