//! Errors reported by unit and quantity arithmetic.
//!
//! Every condition is reported at the operation that caused it. A prefix scale
//! that has no canonical symbol is not an error, see [`crate::Prefix`].

use thiserror::Error;

/// Result alias for fallible unit operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// The arithmetic operation that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "raise",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// An operand kind the operation has no meaning for, e.g. an atom times text.
    #[error("cannot {op} {lhs} by {rhs}")]
    InvalidOperand {
        op: Operation,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Units and prefixes only take integer powers.
    #[error("unsupported exponent {exponent}: only integer powers are defined")]
    UnsupportedExponent { exponent: f64 },

    /// Declared but deliberately undefined, e.g. adding two quantities.
    #[error("{op} is not implemented for quantities")]
    Unimplemented { op: Operation },
}

/// Converts a float exponent to an integer one, rejecting fractional and
/// out-of-range values.
pub(crate) fn integer_exponent(exponent: f64) -> UnitResult<i32> {
    if exponent.fract() != 0.0
        || !exponent.is_finite()
        || exponent < i32::MIN as f64
        || exponent > i32::MAX as f64
    {
        return Err(UnitError::UnsupportedExponent { exponent });
    }
    Ok(exponent as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_convert() {
        assert_eq!(integer_exponent(2.0), Ok(2));
        assert_eq!(integer_exponent(-3.0), Ok(-3));
        assert_eq!(integer_exponent(0.0), Ok(0));
    }

    #[test]
    fn fractional_and_non_finite_exponents_are_rejected() {
        assert_eq!(
            integer_exponent(0.5),
            Err(UnitError::UnsupportedExponent { exponent: 0.5 })
        );
        assert!(integer_exponent(f64::NAN).is_err());
        assert!(integer_exponent(f64::INFINITY).is_err());
        assert!(integer_exponent(1e12).is_err());
    }

    #[test]
    fn messages_name_the_operation() {
        let err = UnitError::InvalidOperand {
            op: Operation::Multiply,
            lhs: "atom",
            rhs: "text",
        };
        assert_eq!(err.to_string(), "cannot multiply atom by text");
        let err = UnitError::Unimplemented { op: Operation::Add };
        assert_eq!(err.to_string(), "add is not implemented for quantities");
    }
}
