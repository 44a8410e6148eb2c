//! Composite units: a prefix over a fraction of atoms.
//!
//! Every [`UniUnit`] is held in justified form. Numerator and denominator are
//! each sorted by atom order key (stably), and atoms present on both sides are
//! cancelled one occurrence at a time. Composition always builds a new unit
//! from the operands' atoms and never writes to either operand.

use std::collections::HashMap;
use std::ops::{Div, Mul};

use crate::atom::Atom;
use crate::error::{integer_exponent, UnitResult};
use crate::prefix::{Prefix, ONE};

/// How a unit is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Atom labels concatenated, e.g. `Kgmm/ss`.
    #[default]
    Compact,
    /// One slash-free product with signed exponents, e.g. `kg*m^2*s^-2`.
    Exponent,
    /// Numerator over denominator with exponents, e.g. `kg*m^2/s^2`.
    Fraction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UniUnit {
    prefix: Prefix,
    numerator: Vec<Atom>,
    denominator: Vec<Atom>,
}

impl UniUnit {
    /// The empty fraction with the identity prefix.
    pub fn dimensionless() -> Self {
        Self {
            prefix: ONE,
            numerator: Vec::new(),
            denominator: Vec::new(),
        }
    }

    pub fn from_atom(atom: Atom) -> Self {
        Self::with_prefix(ONE, vec![atom], Vec::new())
    }

    pub fn from_fraction(numerator: Vec<Atom>, denominator: Vec<Atom>) -> Self {
        Self::with_prefix(ONE, numerator, denominator)
    }

    pub fn with_prefix(prefix: Prefix, numerator: Vec<Atom>, denominator: Vec<Atom>) -> Self {
        let (numerator, denominator) = justify(numerator, denominator);
        Self {
            prefix,
            numerator,
            denominator,
        }
    }

    /// This unit with `prefix` multiplied into its own.
    pub fn prefixed(&self, prefix: Prefix) -> Self {
        Self {
            prefix: self.prefix.multiply(&prefix),
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn numerator(&self) -> &[Atom] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[Atom] {
        &self.denominator
    }

    /// True when every atom has cancelled. The prefix is not considered.
    pub fn is_dimensionless(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    /// Summed numerator weight over summed denominator weight, or the
    /// numerator weight alone when the denominator weighs nothing.
    pub fn order_key(&self) -> f64 {
        let numerator: f64 = self.numerator.iter().map(Atom::order_key).sum();
        let denominator: f64 = self.denominator.iter().map(Atom::order_key).sum();
        if denominator == 0.0 {
            numerator
        } else {
            numerator / denominator
        }
    }

    pub fn mul_by(&self, other: &UniUnit) -> UniUnit {
        UniUnit::with_prefix(
            self.prefix.multiply(&other.prefix),
            concat(&self.numerator, &other.numerator),
            concat(&self.denominator, &other.denominator),
        )
    }

    pub fn div_by(&self, other: &UniUnit) -> UniUnit {
        UniUnit::with_prefix(
            self.prefix.divide(&other.prefix),
            concat(&self.numerator, &other.denominator),
            concat(&self.denominator, &other.numerator),
        )
    }

    pub fn multiply_atom(&self, atom: &Atom) -> UniUnit {
        UniUnit::with_prefix(
            self.prefix,
            concat(&self.numerator, std::slice::from_ref(atom)),
            self.denominator.clone(),
        )
    }

    pub fn divide_atom(&self, atom: &Atom) -> UniUnit {
        UniUnit::with_prefix(
            self.prefix,
            self.numerator.clone(),
            concat(&self.denominator, std::slice::from_ref(atom)),
        )
    }

    /// `ONE / self`.
    pub fn inverse(&self) -> UniUnit {
        UniUnit::with_prefix(
            self.prefix.inverse(),
            self.denominator.clone(),
            self.numerator.clone(),
        )
    }

    /// Repeats numerator and denominator `n` times and raises the prefix to
    /// `n`. Zero gives [`UniUnit::dimensionless`]; a negative power is the
    /// inverse raised to `-n`.
    pub fn pow(&self, n: i32) -> UniUnit {
        if n == 0 {
            return UniUnit::dimensionless();
        }
        if n < 0 {
            return self.inverse().pow(n.saturating_neg());
        }
        let times = n as usize;
        UniUnit::with_prefix(
            self.prefix.power(n),
            self.numerator.repeat(times),
            self.denominator.repeat(times),
        )
    }

    pub fn powf(&self, exponent: f64) -> UnitResult<UniUnit> {
        integer_exponent(exponent).map(|n| self.pow(n))
    }

    pub fn render(&self, style: RenderStyle) -> String {
        if self.is_dimensionless() {
            return String::new();
        }
        let body = match style {
            RenderStyle::Compact => {
                let numerator = concat_labels(&self.numerator);
                if self.denominator.is_empty() {
                    numerator
                } else {
                    format!("{}/{}", numerator, concat_labels(&self.denominator))
                }
            }
            RenderStyle::Exponent => {
                let mut terms = exponent_terms(&self.numerator, 1);
                terms.extend(exponent_terms(&self.denominator, -1));
                terms.join("*")
            }
            RenderStyle::Fraction => {
                let numerator = exponent_terms(&self.numerator, 1).join("*");
                let numerator = if numerator.is_empty() {
                    "1".to_string()
                } else {
                    numerator
                };
                if self.denominator.is_empty() {
                    numerator
                } else {
                    format!(
                        "{}/{}",
                        numerator,
                        exponent_terms(&self.denominator, 1).join("*")
                    )
                }
            }
        };
        format!("{}{}", self.prefix.symbol(), body)
    }
}

impl Default for UniUnit {
    fn default() -> Self {
        UniUnit::dimensionless()
    }
}

impl From<Atom> for UniUnit {
    fn from(atom: Atom) -> Self {
        UniUnit::from_atom(atom)
    }
}

/// `{}` renders [`RenderStyle::Compact`], `{:#}` renders [`RenderStyle::Fraction`].
impl std::fmt::Display for UniUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = if f.alternate() {
            RenderStyle::Fraction
        } else {
            RenderStyle::Compact
        };
        f.write_str(&self.render(style))
    }
}

/// Sorts both sides by order key and cancels atoms common to both, one
/// occurrence per match.
fn justify(mut numerator: Vec<Atom>, mut denominator: Vec<Atom>) -> (Vec<Atom>, Vec<Atom>) {
    numerator.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));
    denominator.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));

    let snapshot = numerator.clone();
    let mut cancelled = 0usize;
    for atom in &snapshot {
        if let Some(below) = denominator.iter().position(|d| d == atom) {
            denominator.remove(below);
            if let Some(above) = numerator.iter().position(|n| n == atom) {
                numerator.remove(above);
            }
            cancelled += 1;
        }
    }
    if cancelled > 0 {
        tracing::trace!(cancelled, "cancelled common atoms");
    }
    (numerator, denominator)
}

fn concat(left: &[Atom], right: &[Atom]) -> Vec<Atom> {
    let mut atoms = Vec::with_capacity(left.len() + right.len());
    atoms.extend_from_slice(left);
    atoms.extend_from_slice(right);
    atoms
}

fn concat_labels(atoms: &[Atom]) -> String {
    atoms.iter().map(Atom::label).collect()
}

/// Distinct atoms with their repeat counts, in first-seen order.
pub(crate) fn group_atoms(atoms: &[Atom]) -> Vec<(Atom, usize)> {
    let mut slots: HashMap<&'static str, usize> = HashMap::new();
    let mut groups: Vec<(Atom, usize)> = Vec::new();
    for atom in atoms {
        match slots.get(atom.id()) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                slots.insert(atom.id(), groups.len());
                groups.push((*atom, 1));
            }
        }
    }
    groups
}

fn exponent_terms(atoms: &[Atom], sign: i64) -> Vec<String> {
    group_atoms(atoms)
        .into_iter()
        .map(|(atom, count)| {
            let power = sign * count as i64;
            if power == 1 {
                atom.label().to_string()
            } else {
                format!("{}^{}", atom.label(), power)
            }
        })
        .collect()
}

impl Mul for UniUnit {
    type Output = UniUnit;

    fn mul(self, rhs: UniUnit) -> UniUnit {
        self.mul_by(&rhs)
    }
}

impl Div for UniUnit {
    type Output = UniUnit;

    fn div(self, rhs: UniUnit) -> UniUnit {
        self.div_by(&rhs)
    }
}

impl<'a> Mul<&'a UniUnit> for &'a UniUnit {
    type Output = UniUnit;

    fn mul(self, rhs: &'a UniUnit) -> UniUnit {
        self.mul_by(rhs)
    }
}

impl<'a> Div<&'a UniUnit> for &'a UniUnit {
    type Output = UniUnit;

    fn div(self, rhs: &'a UniUnit) -> UniUnit {
        self.div_by(rhs)
    }
}

impl Mul<Atom> for UniUnit {
    type Output = UniUnit;

    fn mul(self, rhs: Atom) -> UniUnit {
        self.multiply_atom(&rhs)
    }
}

impl Div<Atom> for UniUnit {
    type Output = UniUnit;

    fn div(self, rhs: Atom) -> UniUnit {
        self.divide_atom(&rhs)
    }
}

impl Mul<UniUnit> for Prefix {
    type Output = UniUnit;

    fn mul(self, rhs: UniUnit) -> UniUnit {
        rhs.prefixed(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;
    use crate::prefix::{KILO, MEGA, MILLI};

    const BIT: Atom = Atom::new("bit", "b");
    const SECOND: Atom = Atom::new("second", "s");
    const METRE: Atom = Atom::new("metre", "m");
    const KILOGRAM: Atom = Atom::new("kilogram", "kg");
    const HEAVY: Atom = Atom::with_order("heavy", "H", 5.0);
    const LIGHT: Atom = Atom::with_order("light", "L", 0.5);

    #[test]
    fn justify_sorts_by_order_key_stably() {
        let unit = UniUnit::from_fraction(vec![HEAVY, BIT, LIGHT, SECOND], vec![]);
        assert_eq!(unit.numerator(), &[LIGHT, BIT, SECOND, HEAVY]);
    }

    #[test]
    fn justify_cancels_with_multiplicity() {
        let unit = UniUnit::from_fraction(vec![BIT, BIT], vec![BIT]);
        assert_eq!(unit.numerator(), &[BIT]);
        assert!(unit.denominator().is_empty());

        let unit = UniUnit::from_fraction(vec![BIT, METRE, BIT], vec![BIT, BIT, BIT, SECOND]);
        assert_eq!(unit.numerator(), &[METRE]);
        assert_eq!(unit.denominator(), &[BIT, SECOND]);
    }

    #[test]
    fn justify_is_idempotent() {
        let unit = UniUnit::from_fraction(vec![SECOND, METRE, BIT], vec![BIT, KILOGRAM]);
        let again = UniUnit::with_prefix(
            unit.prefix(),
            unit.numerator().to_vec(),
            unit.denominator().to_vec(),
        );
        assert_eq!(unit, again);
    }

    #[test]
    fn multiplying_by_the_identity_changes_nothing() {
        let unit = KILO * (BIT / SECOND);
        assert_eq!(unit.mul_by(&UniUnit::dimensionless()), unit);
        assert_eq!(unit.div_by(&UniUnit::dimensionless()), unit);
    }

    #[test]
    fn mul_and_div_combine_prefixes() {
        let kb = UniUnit::with_prefix(KILO, vec![BIT], vec![]);
        let mbps = UniUnit::with_prefix(MEGA, vec![BIT], vec![SECOND]);
        let product = kb.mul_by(&mbps);
        assert_eq!(product.prefix().exponent(), 9);
        assert_eq!(product.numerator(), &[BIT, BIT]);
        assert_eq!(product.denominator(), &[SECOND]);

        let ratio = kb.div_by(&mbps);
        assert_eq!(ratio.prefix(), MILLI);
        assert_eq!(ratio.numerator(), &[SECOND]);
        assert!(ratio.denominator().is_empty());
    }

    #[test]
    fn operands_are_left_untouched() {
        let kb = UniUnit::with_prefix(KILO, vec![BIT], vec![]);
        let before = kb.clone();
        let _ = kb.div_by(&kb);
        let _ = &kb * &kb;
        assert_eq!(kb, before);
        assert_eq!(kb.prefix(), KILO);
    }

    #[test]
    fn self_division_is_dimensionless() {
        let kb = UniUnit::with_prefix(KILO, vec![BIT], vec![]);
        let ratio = &kb / &kb;
        assert!(ratio.is_dimensionless());
        assert_eq!(ratio, UniUnit::dimensionless());
        assert_eq!(ratio.to_string(), "");
    }

    #[test]
    fn equality_includes_the_prefix() {
        let kb = UniUnit::with_prefix(KILO, vec![BIT], vec![]);
        assert_ne!(kb, UniUnit::from_atom(BIT));
        assert_eq!(kb, KILO * UniUnit::from_atom(BIT));
    }

    #[test]
    fn pow_repeats_lists() {
        let speed = METRE / SECOND;
        let squared = speed.pow(2);
        assert_eq!(squared.numerator(), &[METRE, METRE]);
        assert_eq!(squared.denominator(), &[SECOND, SECOND]);
        assert_eq!(squared, speed.mul_by(&speed));
    }

    #[test]
    fn pow_zero_is_the_identity() {
        let unit = KILO * (METRE / SECOND);
        let zeroth = unit.pow(0);
        assert_eq!(zeroth, UniUnit::dimensionless());
        assert_eq!(zeroth.prefix(), ONE);
    }

    #[test]
    fn negative_pow_inverts() {
        let unit = KILO * UniUnit::from_atom(METRE);
        let inverse = unit.pow(-2);
        assert_eq!(inverse.prefix().exponent(), -6);
        assert_eq!(inverse.denominator(), &[METRE, METRE]);
        assert!(inverse.numerator().is_empty());
    }

    #[test]
    fn non_integer_pow_is_rejected() {
        let unit = UniUnit::from_atom(METRE);
        assert_eq!(
            unit.powf(2.5),
            Err(UnitError::UnsupportedExponent { exponent: 2.5 })
        );
        assert_eq!(unit.powf(2.0), Ok(unit.pow(2)));
    }

    #[test]
    fn order_key_is_a_weight_ratio() {
        assert_eq!(UniUnit::from_fraction(vec![HEAVY, BIT], vec![]).order_key(), 6.0);
        assert_eq!(UniUnit::from_fraction(vec![HEAVY], vec![LIGHT]).order_key(), 10.0);
        assert_eq!(UniUnit::dimensionless().order_key(), 0.0);
    }

    #[test]
    fn compact_rendering() {
        let mbps = MEGA * (BIT / SECOND);
        assert_eq!(mbps.to_string(), "Mb/s");
        assert_eq!((METRE * METRE).to_string(), "mm");
        assert_eq!(SECOND.pow(-1).to_string(), "/s");
    }

    #[test]
    fn exponent_rendering() {
        let force = KILOGRAM * (METRE / SECOND.pow(2));
        assert_eq!(force.render(RenderStyle::Exponent), "kg*m*s^-2");
        assert_eq!(force.render(RenderStyle::Fraction), "kg*m/s^2");
        assert_eq!(format!("{:#}", force), "kg*m/s^2");
        assert_eq!(SECOND.pow(-1).render(RenderStyle::Fraction), "1/s");
        assert_eq!((KILO * METRE.pow(3)).render(RenderStyle::Exponent), "Km^3");
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let groups = group_atoms(&[METRE, SECOND, METRE, BIT, SECOND, METRE]);
        assert_eq!(groups, vec![(METRE, 3), (SECOND, 2), (BIT, 1)]);
    }
}
