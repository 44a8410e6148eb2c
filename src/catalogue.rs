//! Predefined atoms and the named units built from them.

use phf::phf_map;

use crate::atom::Atom;
use crate::prefix::{KILO, MEGA};
use crate::uniunit::UniUnit;

// Distinct order keys give every product of these atoms one layout,
// mass first and time last.
pub const KILOGRAM: Atom = Atom::with_order("kilogram", "kg", 1.0);
pub const GRAM: Atom = Atom::with_order("gram", "g", 2.0);
pub const METRE: Atom = Atom::with_order("metre", "m", 3.0);
pub const BIT: Atom = Atom::with_order("bit", "b", 4.0);
pub const BYTE: Atom = Atom::with_order("byte", "B", 5.0);
pub const SECOND: Atom = Atom::with_order("second", "s", 6.0);

static ATOMS: phf::Map<&'static str, Atom> = phf_map! {
    "bit" => BIT,
    "byte" => BYTE,
    "second" => SECOND,
    "metre" => METRE,
    "gram" => GRAM,
    "kilogram" => KILOGRAM,
};

/// Looks up a predefined atom by its id.
pub fn atom(id: &str) -> Option<Atom> {
    ATOMS.get(id).copied()
}

pub fn kilobit() -> UniUnit {
    KILO * BIT
}

pub fn megabit() -> UniUnit {
    MEGA * BIT
}

pub fn kilobyte() -> UniUnit {
    KILO * BYTE
}

pub fn megabyte() -> UniUnit {
    MEGA * BYTE
}

pub fn megabit_per_second() -> UniUnit {
    MEGA * BIT / SECOND
}

pub fn kilogram() -> UniUnit {
    UniUnit::from_atom(KILOGRAM)
}

pub fn metre_per_second() -> UniUnit {
    METRE / SECOND
}

/// Acceleration, `m/s^2`.
pub fn metre_per_second_squared() -> UniUnit {
    METRE / SECOND.pow(2)
}

/// Force, `kg*m/s^2`.
pub fn newton() -> UniUnit {
    KILOGRAM * metre_per_second_squared()
}
