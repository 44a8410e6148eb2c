//! Numeric magnitudes tagged with a unit.
//!
//! Multiplying or dividing two quantities combines magnitudes and units
//! together. When the combined unit cancels completely the result is a bare
//! number with any leftover prefix folded into it, so kilobits over megabits
//! per second gives a number. Addition and subtraction are declared but
//! report [`UnitError::Unimplemented`].

use std::ops::{Div, Mul};

use crate::atom::Atom;
use crate::error::{integer_exponent, Operation, UnitError, UnitResult};
use crate::uniunit::UniUnit;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quantity {
    magnitude: f64,
    unit: UniUnit,
}

impl Quantity {
    /// `magnitude` scaled by `unit`, e.g. `Quantity::new(4.0, kilobit())`.
    pub fn new(magnitude: f64, unit: impl Into<UniUnit>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &UniUnit {
        &self.unit
    }

    /// The magnitude with the unit's prefix folded in, so `4 Kb` gives `4000`.
    pub fn base_magnitude(&self) -> f64 {
        self.magnitude * self.unit.prefix().scale()
    }

    pub fn multiply(&self, other: &Quantity) -> Value {
        collapse(
            self.magnitude * other.magnitude,
            self.unit.mul_by(&other.unit),
        )
    }

    pub fn divide(&self, other: &Quantity) -> Value {
        collapse(
            self.magnitude / other.magnitude,
            self.unit.div_by(&other.unit),
        )
    }

    /// Scales the magnitude only.
    pub fn scale_by(&self, factor: f64) -> Quantity {
        Quantity::new(self.magnitude * factor, self.unit.clone())
    }

    /// Divides the magnitude only.
    pub fn divide_by(&self, divisor: f64) -> Quantity {
        Quantity::new(self.magnitude / divisor, self.unit.clone())
    }

    /// Raises magnitude and unit together; `pow(0)` is the number one.
    pub fn pow(&self, n: i32) -> Value {
        collapse(self.magnitude.powi(n), self.unit.pow(n))
    }

    pub fn powf(&self, exponent: f64) -> UnitResult<Value> {
        integer_exponent(exponent).map(|n| self.pow(n))
    }

    /// Quantity addition has no defined semantics yet.
    pub fn add(&self, other: &Quantity) -> UnitResult<Value> {
        unimplemented_combination(Operation::Add, self, other)
    }

    /// Quantity subtraction has no defined semantics yet.
    pub fn subtract(&self, other: &Quantity) -> UnitResult<Value> {
        unimplemented_combination(Operation::Subtract, self, other)
    }
}

/// Wraps `magnitude` in `unit`, or returns a bare number scaled by the
/// residual prefix when `unit` has no atoms left.
pub(crate) fn collapse(magnitude: f64, unit: UniUnit) -> Value {
    if unit.is_dimensionless() {
        let number = magnitude * unit.prefix().scale();
        tracing::trace!(number, "unit cancelled to a plain number");
        Value::Number(number)
    } else {
        Value::Quantity(Quantity::new(magnitude, unit))
    }
}

fn unimplemented_combination(
    op: Operation,
    lhs: &Quantity,
    rhs: &Quantity,
) -> UnitResult<Value> {
    tracing::debug!(%op, lhs = %lhs, rhs = %rhs, "quantity combination is not implemented");
    Err(UnitError::Unimplemented { op })
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl Mul for Quantity {
    type Output = Value;

    fn mul(self, rhs: Quantity) -> Value {
        self.multiply(&rhs)
    }
}

impl Div for Quantity {
    type Output = Value;

    fn div(self, rhs: Quantity) -> Value {
        self.divide(&rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        self.scale_by(rhs)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        self.divide_by(rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs.scale_by(self)
    }
}

impl Mul<UniUnit> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: UniUnit) -> Quantity {
        Quantity::new(self, rhs)
    }
}

impl Mul<Atom> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Atom) -> Quantity {
        Quantity::new(self, rhs)
    }
}
