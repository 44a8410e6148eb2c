//! Irreducible unit symbols.

use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};

use crate::error::{integer_exponent, UnitResult};
use crate::prefix::Prefix;
use crate::uniunit::UniUnit;

/// A named unit symbol such as bit or metre.
///
/// Identity is the `id`; the `label` is only used for display, so two atoms
/// may share a label (metre `m` and a hypothetical minute `m`) and still be
/// distinct. `order_key` fixes where the atom sorts inside a unit fraction.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Atom {
    id: &'static str,
    label: &'static str,
    order_key: f64,
}

impl Atom {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self::with_order(id, label, 1.0)
    }

    pub const fn with_order(id: &'static str, label: &'static str, order_key: f64) -> Self {
        Self {
            id,
            label,
            order_key,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn order_key(&self) -> f64 {
        self.order_key
    }

    /// `self * other` as a two-atom numerator.
    pub fn multiply(&self, other: &Atom) -> UniUnit {
        UniUnit::from_fraction(vec![*self, *other], Vec::new())
    }

    /// `self / other` as a one-over-one fraction.
    pub fn divide(&self, other: &Atom) -> UniUnit {
        UniUnit::from_fraction(vec![*self], vec![*other])
    }

    /// Folds this atom into the numerator of `unit`, keeping its prefix.
    pub fn multiply_unit(&self, unit: &UniUnit) -> UniUnit {
        let mut numerator = Vec::with_capacity(unit.numerator().len() + 1);
        numerator.push(*self);
        numerator.extend_from_slice(unit.numerator());
        UniUnit::with_prefix(unit.prefix(), numerator, unit.denominator().to_vec())
    }

    /// `self / unit`: the unit's denominator joins this atom on top.
    pub fn divide_unit(&self, unit: &UniUnit) -> UniUnit {
        UniUnit::from_atom(*self).div_by(unit)
    }

    /// The atom repeated `n` times; `n == 0` is the dimensionless unit and a
    /// negative `n` puts the copies in the denominator.
    pub fn pow(&self, n: i32) -> UniUnit {
        UniUnit::from_atom(*self).pow(n)
    }

    pub fn powf(&self, exponent: f64) -> UnitResult<UniUnit> {
        integer_exponent(exponent).map(|n| self.pow(n))
    }

    /// A single-atom unit scaled by `prefix`, e.g. kilo-bit.
    pub fn prefixed(&self, prefix: Prefix) -> UniUnit {
        UniUnit::with_prefix(prefix, vec![*self], Vec::new())
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

impl Mul for Atom {
    type Output = UniUnit;

    fn mul(self, rhs: Atom) -> UniUnit {
        self.multiply(&rhs)
    }
}

impl Div for Atom {
    type Output = UniUnit;

    fn div(self, rhs: Atom) -> UniUnit {
        self.divide(&rhs)
    }
}

impl Mul<UniUnit> for Atom {
    type Output = UniUnit;

    fn mul(self, rhs: UniUnit) -> UniUnit {
        self.multiply_unit(&rhs)
    }
}

impl Div<UniUnit> for Atom {
    type Output = UniUnit;

    fn div(self, rhs: UniUnit) -> UniUnit {
        self.divide_unit(&rhs)
    }
}

impl Mul<Atom> for Prefix {
    type Output = UniUnit;

    fn mul(self, rhs: Atom) -> UniUnit {
        rhs.prefixed(self)
    }
}
