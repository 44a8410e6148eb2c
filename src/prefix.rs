//! Power-of-ten scale prefixes and their closed algebra.
//!
//! A [`Prefix`] is stored as a decimal exponent, so `kilo` is `10^3`. Products,
//! quotients, and integer powers of prefixes stay exact. When the resulting
//! exponent has no entry in the canonical table the prefix keeps working as a
//! scale but renders as [`UNKNOWN_SYMBOL`].

use phf::phf_map;
use std::ops::{Div, Mul};

use crate::error::{integer_exponent, UnitResult};

/// Symbol carried by a prefix whose scale has no conventional name.
pub const UNKNOWN_SYMBOL: &str = "?";

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Prefix {
    symbol: &'static str,
    exponent: i32,
}

pub const TERA: Prefix = Prefix::canonical("T", 12);
pub const GIGA: Prefix = Prefix::canonical("G", 9);
pub const MEGA: Prefix = Prefix::canonical("M", 6);
pub const KILO: Prefix = Prefix::canonical("K", 3);
pub const ONE: Prefix = Prefix::canonical("", 0);
pub const MILLI: Prefix = Prefix::canonical("m", -3);
pub const MICRO: Prefix = Prefix::canonical("u", -6);
pub const NANO: Prefix = Prefix::canonical("n", -9);
pub const PICO: Prefix = Prefix::canonical("p", -12);

static PREFIXES: phf::Map<&'static str, Prefix> = phf_map! {
    "tera" => TERA,
    "giga" => GIGA,
    "mega" => MEGA,
    "kilo" => KILO,
    "one" => ONE,
    "milli" => MILLI,
    "micro" => MICRO,
    "nano" => NANO,
    "pico" => PICO,
};

impl Prefix {
    const fn canonical(symbol: &'static str, exponent: i32) -> Self {
        Self { symbol, exponent }
    }

    /// Builds the prefix for `10^exponent`, looking its symbol up in the
    /// canonical table.
    pub fn from_exponent(exponent: i32) -> Self {
        match PREFIXES.values().find(|p| p.exponent == exponent) {
            Some(prefix) => *prefix,
            None => {
                tracing::debug!(exponent, "scale has no canonical prefix symbol");
                Self {
                    symbol: UNKNOWN_SYMBOL,
                    exponent,
                }
            }
        }
    }

    /// Looks up a named prefix, e.g. `"kilo"`.
    pub fn from_name(name: &str) -> Option<Self> {
        PREFIXES.get(name).copied()
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The decimal exponent of the scale.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The multiplier this prefix stands for.
    pub fn scale(&self) -> f64 {
        libm::exp10(self.exponent as f64)
    }

    /// True when the scale is one of the named powers of ten.
    pub fn is_canonical(&self) -> bool {
        self.symbol != UNKNOWN_SYMBOL
    }

    pub fn is_identity(&self) -> bool {
        self.exponent == 0
    }

    pub fn multiply(&self, other: &Prefix) -> Prefix {
        Prefix::from_exponent(self.exponent.saturating_add(other.exponent))
    }

    pub fn divide(&self, other: &Prefix) -> Prefix {
        Prefix::from_exponent(self.exponent.saturating_sub(other.exponent))
    }

    /// Raises the scale to an integer power. `power(0)` is always [`ONE`].
    pub fn power(&self, n: i32) -> Prefix {
        Prefix::from_exponent(self.exponent.saturating_mul(n))
    }

    /// Like [`Prefix::power`] for a float exponent, which must be integral.
    pub fn powf(&self, exponent: f64) -> UnitResult<Prefix> {
        integer_exponent(exponent).map(|n| self.power(n))
    }

    /// The prefix whose product with `self` is [`ONE`].
    pub fn inverse(&self) -> Prefix {
        ONE.divide(self)
    }
}

impl Default for Prefix {
    fn default() -> Self {
        ONE
    }
}

impl PartialEq for Prefix {
    fn eq(&self, other: &Self) -> bool {
        self.exponent == other.exponent
    }
}

impl Eq for Prefix {}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol)
    }
}

impl Mul for Prefix {
    type Output = Prefix;

    fn mul(self, rhs: Prefix) -> Prefix {
        self.multiply(&rhs)
    }
}

impl Div for Prefix {
    type Output = Prefix;

    fn div(self, rhs: Prefix) -> Prefix {
        self.divide(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;

    const NAMED: [Prefix; 9] = [TERA, GIGA, MEGA, KILO, ONE, MILLI, MICRO, NANO, PICO];

    #[test]
    fn named_lookup() {
        assert_eq!(Prefix::from_name("kilo"), Some(KILO));
        assert_eq!(Prefix::from_name("micro").unwrap().symbol(), "u");
        assert_eq!(Prefix::from_name("exa"), None);
    }

    #[test]
    fn scales_are_powers_of_ten() {
        assert_eq!(KILO.scale(), 1e3);
        assert_eq!(MEGA.scale(), 1e6);
        assert_eq!(ONE.scale(), 1.0);
        assert_eq!(MILLI.scale(), 1e-3);
        assert_eq!(PICO.scale(), 1e-12);
    }

    #[test]
    fn products_land_on_named_prefixes() {
        assert_eq!((KILO * KILO).symbol(), "M");
        assert_eq!((MEGA / KILO).symbol(), "K");
        assert_eq!((KILO / MEGA).symbol(), "m");
        assert_eq!((MICRO / MILLI).symbol(), "m");
        assert_eq!((MILLI * KILO).symbol(), "");
    }

    #[test]
    fn every_named_prefix_times_its_inverse_is_one() {
        for prefix in NAMED {
            let product = prefix.multiply(&prefix.inverse());
            assert_eq!(product, ONE);
            assert_eq!(product.symbol(), "");
        }
    }

    #[test]
    fn off_table_scales_degrade_to_the_sentinel() {
        let big = TERA * KILO;
        assert_eq!(big.symbol(), UNKNOWN_SYMBOL);
        assert!(!big.is_canonical());
        assert_eq!(big.exponent(), 15);
        assert_eq!(big.scale(), 1e15);
        // still usable as a scale and can come back onto the table
        assert_eq!((big / MEGA).symbol(), "G");
    }

    #[test]
    fn equality_ignores_the_symbol() {
        let back = (TERA * KILO) / KILO;
        assert_eq!(back, TERA);
        assert_ne!(KILO, MILLI);
    }

    #[test]
    fn integer_powers() {
        assert_eq!(KILO.power(2), MEGA);
        assert_eq!(KILO.power(-1), MILLI);
        assert_eq!(MEGA.power(0), ONE);
        assert_eq!(KILO.power(5).symbol(), UNKNOWN_SYMBOL);
    }

    #[test]
    fn float_powers_must_be_integral() {
        assert_eq!(KILO.powf(3.0), Ok(GIGA));
        assert_eq!(
            KILO.powf(1.5),
            Err(UnitError::UnsupportedExponent { exponent: 1.5 })
        );
    }
}
