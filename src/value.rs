//! A dynamically kinded operand for callers that only know at runtime what
//! they are combining, such as a calculator front end.
//!
//! The typed API cannot mix a unit with text, so this is where
//! [`UnitError::InvalidOperand`] comes from.

use crate::atom::Atom;
use crate::error::{Operation, UnitError, UnitResult};
use crate::prefix::Prefix;
use crate::quantity::{collapse, Quantity};
use crate::uniunit::UniUnit;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Prefix(Prefix),
    Atom(Atom),
    Unit(UniUnit),
    Quantity(Quantity),
    Text(String),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Prefix(_) => "prefix",
            Value::Atom(_) => "atom",
            Value::Unit(_) => "unit",
            Value::Quantity(_) => "quantity",
            Value::Text(_) => "text",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            _ => None,
        }
    }

    pub fn into_quantity(self) -> Option<Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            _ => None,
        }
    }

    /// Atoms and units both act as a unit operand.
    fn as_unit(&self) -> Option<UniUnit> {
        match self {
            Value::Atom(atom) => Some(UniUnit::from_atom(*atom)),
            Value::Unit(unit) => Some(unit.clone()),
            _ => None,
        }
    }

    fn invalid(&self, op: Operation, rhs: &Value) -> UnitError {
        UnitError::InvalidOperand {
            op,
            lhs: self.kind(),
            rhs: rhs.kind(),
        }
    }

    pub fn multiply(&self, rhs: &Value) -> UnitResult<Value> {
        let product = match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a * b),
            (Value::Prefix(a), Value::Prefix(b)) => Value::Prefix(a.multiply(b)),
            (Value::Atom(a), Value::Atom(b)) => Value::Unit(a.multiply(b)),
            (Value::Atom(a), Value::Unit(u)) => Value::Unit(a.multiply_unit(u)),
            (Value::Unit(u), Value::Atom(a)) => Value::Unit(u.multiply_atom(a)),
            (Value::Unit(a), Value::Unit(b)) => Value::Unit(a.mul_by(b)),
            (Value::Quantity(a), Value::Quantity(b)) => a.multiply(b),
            (Value::Number(n), Value::Quantity(q)) | (Value::Quantity(q), Value::Number(n)) => {
                Value::Quantity(q.scale_by(*n))
            }
            (Value::Prefix(p), other) | (other, Value::Prefix(p)) => match other.as_unit() {
                Some(unit) => Value::Unit(unit.prefixed(*p)),
                None => return Err(self.invalid(Operation::Multiply, rhs)),
            },
            (Value::Number(n), other) | (other, Value::Number(n)) => match other.as_unit() {
                Some(unit) => Value::Quantity(Quantity::new(*n, unit)),
                None => return Err(self.invalid(Operation::Multiply, rhs)),
            },
            (Value::Quantity(q), other) | (other, Value::Quantity(q)) => match other.as_unit() {
                Some(unit) => collapse(q.magnitude(), q.unit().mul_by(&unit)),
                None => return Err(self.invalid(Operation::Multiply, rhs)),
            },
            _ => match (self.as_unit(), rhs.as_unit()) {
                (Some(a), Some(b)) => Value::Unit(a.mul_by(&b)),
                _ => return Err(self.invalid(Operation::Multiply, rhs)),
            },
        };
        Ok(product)
    }

    pub fn divide(&self, rhs: &Value) -> UnitResult<Value> {
        let quotient = match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a / b),
            (Value::Prefix(a), Value::Prefix(b)) => Value::Prefix(a.divide(b)),
            (Value::Quantity(a), Value::Quantity(b)) => a.divide(b),
            (Value::Quantity(q), Value::Number(n)) => Value::Quantity(q.divide_by(*n)),
            (Value::Number(n), Value::Quantity(q)) => {
                collapse(n / q.magnitude(), q.unit().inverse())
            }
            (Value::Text(_), _) | (_, Value::Text(_)) => {
                return Err(self.invalid(Operation::Divide, rhs))
            }
            (Value::Prefix(p), other) => match other.as_unit() {
                Some(unit) => Value::Unit(unit.inverse().prefixed(*p)),
                None => return Err(self.invalid(Operation::Divide, rhs)),
            },
            (other, Value::Prefix(p)) => match other.as_unit() {
                Some(unit) => Value::Unit(unit.prefixed(p.inverse())),
                None => return Err(self.invalid(Operation::Divide, rhs)),
            },
            (Value::Number(n), other) => match other.as_unit() {
                Some(unit) => Value::Quantity(Quantity::new(*n, unit.inverse())),
                None => return Err(self.invalid(Operation::Divide, rhs)),
            },
            (other, Value::Number(n)) => match other.as_unit() {
                Some(unit) => Value::Quantity(Quantity::new(1.0 / n, unit)),
                None => return Err(self.invalid(Operation::Divide, rhs)),
            },
            (Value::Quantity(q), other) => match other.as_unit() {
                Some(unit) => collapse(q.magnitude(), q.unit().div_by(&unit)),
                None => return Err(self.invalid(Operation::Divide, rhs)),
            },
            (other, Value::Quantity(q)) => match other.as_unit() {
                Some(unit) => collapse(1.0 / q.magnitude(), unit.div_by(q.unit())),
                None => return Err(self.invalid(Operation::Divide, rhs)),
            },
            _ => match (self.as_unit(), rhs.as_unit()) {
                (Some(a), Some(b)) => Value::Unit(a.div_by(&b)),
                _ => return Err(self.invalid(Operation::Divide, rhs)),
            },
        };
        Ok(quotient)
    }

    pub fn add(&self, rhs: &Value) -> UnitResult<Value> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Quantity(a), Value::Quantity(b)) => a.add(b),
            _ => Err(self.invalid(Operation::Add, rhs)),
        }
    }

    pub fn subtract(&self, rhs: &Value) -> UnitResult<Value> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            (Value::Quantity(a), Value::Quantity(b)) => a.subtract(b),
            _ => Err(self.invalid(Operation::Subtract, rhs)),
        }
    }

    /// Raises the operand to `exponent`. Anything carrying a unit or prefix
    /// needs an integral exponent.
    pub fn pow(&self, exponent: f64) -> UnitResult<Value> {
        match self {
            Value::Number(n) => Ok(Value::Number(n.powf(exponent))),
            Value::Prefix(p) => p.powf(exponent).map(Value::Prefix),
            Value::Atom(a) => a.powf(exponent).map(Value::Unit),
            Value::Unit(u) => u.powf(exponent).map(Value::Unit),
            Value::Quantity(q) => q.powf(exponent),
            Value::Text(_) => Err(self.invalid(Operation::Power, &Value::Number(exponent))),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Prefix(p) => write!(f, "{}", p),
            Value::Atom(a) => write!(f, "{}", a),
            Value::Unit(u) => write!(f, "{}", u),
            Value::Quantity(q) => write!(f, "{}", q),
            Value::Text(t) => f.write_str(t),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Prefix> for Value {
    fn from(p: Prefix) -> Self {
        Value::Prefix(p)
    }
}

impl From<Atom> for Value {
    fn from(a: Atom) -> Self {
        Value::Atom(a)
    }
}

impl From<UniUnit> for Value {
    fn from(u: UniUnit) -> Self {
        Value::Unit(u)
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        Value::Quantity(q)
    }
}

impl From<&str> for Value {
    fn from(t: &str) -> Self {
        Value::Text(t.to_string())
    }
}

impl From<String> for Value {
    fn from(t: String) -> Self {
        Value::Text(t)
    }
}
