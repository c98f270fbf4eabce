//! The four keypad operators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

/// Type-safe operation enum - one variant per operator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol shown on the keypad and display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator as `lhs op rhs`.
    ///
    /// Plain IEEE-754 arithmetic: dividing by zero yields an infinity or NaN.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Accepts the keypad symbols plus the ASCII spellings `*`, `x` and `/`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "×" | "*" | "x" | "X" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operation_display_matches_symbol() {
        for op in Operation::ALL {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_apply_subtract_is_lhs_minus_rhs() {
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), -2.0);
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(5.0, 4.0), 20.0);
    }

    #[test]
    fn test_apply_divide_is_lhs_over_rhs() {
        assert_eq!(Operation::Divide.apply(12.0, 4.0), 3.0);
    }

    #[test]
    fn test_apply_divide_by_zero_is_infinite() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_apply_zero_over_zero_is_nan() {
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_parse_keypad_symbols() {
        assert_eq!("+".parse(), Ok(Operation::Add));
        assert_eq!("-".parse(), Ok(Operation::Subtract));
        assert_eq!("×".parse(), Ok(Operation::Multiply));
        assert_eq!("÷".parse(), Ok(Operation::Divide));
    }

    #[test]
    fn test_parse_ascii_aliases() {
        assert_eq!("*".parse(), Ok(Operation::Multiply));
        assert_eq!("x".parse(), Ok(Operation::Multiply));
        assert_eq!("/".parse(), Ok(Operation::Divide));
    }

    #[test]
    fn test_parse_unknown_operator() {
        assert_eq!(
            "^".parse::<Operation>(),
            Err(CalcError::UnknownOperator("^".into()))
        );
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Multiply.apply(a, 1.0), a);
        }

        #[test]
        fn prop_subtract_self_is_zero(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Subtract.apply(a, a), 0.0);
        }

        #[test]
        fn prop_symbol_parses_back(idx in 0usize..4) {
            let op = Operation::ALL[idx];
            prop_assert_eq!(op.symbol().parse::<Operation>(), Ok(op));
        }
    }
}
