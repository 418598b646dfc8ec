//! Runtime value representation

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

/// A runtime value.
///
/// Only `Number` participates in arithmetic. `Unbound` is the marker held
/// by a slot that was declared but never assigned; it is a distinct tag,
/// not a zero or a null, and reading a slot that holds it is an error.
/// `Done` is the acknowledgment produced by binding operations that have
/// no interesting value to return (define without initializer, remove).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An exact rational number.
    Number(BigRational),

    /// Declared but never assigned.
    Unbound,

    /// Acknowledgment of a completed binding operation; renders as `ok`.
    Done,
}

impl Value {
    /// Build a number value from an integer.
    pub fn int(n: i64) -> Self {
        Value::Number(BigRational::from_integer(BigInt::from(n)))
    }

    /// Build a number value from a numerator/denominator pair.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero (same contract as `BigRational::new`).
    pub fn ratio(numer: i64, denom: i64) -> Self {
        Value::Number(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// The numeric payload, if this is a `Number`.
    pub fn as_number(&self) -> Option<&BigRational> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Whether this is the unbound marker.
    pub fn is_unbound(&self) -> bool {
        matches!(self, Value::Unbound)
    }
}

impl From<BigRational> for Value {
    fn from(n: BigRational) -> Self {
        Value::Number(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // BigRational prints `n` for integers and `n/d` otherwise
            Value::Number(n) => write!(f, "{}", n),
            Value::Unbound => write!(f, "unbound"),
            Value::Done => write!(f, "ok"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integer_number() {
        assert_eq!(Value::int(42).to_string(), "42");
        assert_eq!(Value::int(-3).to_string(), "-3");
    }

    #[test]
    fn test_display_non_integer_number() {
        assert_eq!(Value::ratio(1, 2).to_string(), "1/2");
        assert_eq!(Value::ratio(4, 2).to_string(), "2"); // reduced
    }

    #[test]
    fn test_display_markers() {
        assert_eq!(Value::Unbound.to_string(), "unbound");
        assert_eq!(Value::Done.to_string(), "ok");
    }

    #[test]
    fn test_unbound_is_not_a_number() {
        assert!(Value::Unbound.is_unbound());
        assert!(Value::Unbound.as_number().is_none());
        assert_ne!(Value::Unbound, Value::int(0));
    }
}
