//! Button actions - the vocabulary every renderer speaks to the engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operation};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single press of a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operation),
    /// Compute the pending operation
    Equals,
    /// Reset everything ("AC")
    Clear,
    /// Remove the last displayed character ("DEL")
    Delete,
    /// Undo the last tracked input ("↩")
    Undo,
}

impl ButtonAction {
    /// Label printed on the keypad button
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::Delete => "DEL",
            Self::Undo => "↩",
        }
    }

    /// Returns true for presses that build the current operand
    #[must_use]
    pub const fn is_operand_input(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ButtonAction {
    type Err = CalcError;

    /// Parses a keypad label or one of its ASCII aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(pos) = DIGIT_LABELS.iter().position(|label| *label == s) {
            return Ok(Self::Digit(pos as u8));
        }
        if let Ok(op) = s.parse::<Operation>() {
            return Ok(Self::Operator(op));
        }

        match s.to_ascii_lowercase().as_str() {
            "." | "," => Ok(Self::Decimal),
            "=" | "enter" => Ok(Self::Equals),
            "ac" | "c" | "clear" => Ok(Self::Clear),
            "del" | "⌫" | "backspace" => Ok(Self::Delete),
            "↩" | "u" | "undo" => Ok(Self::Undo),
            _ => Err(CalcError::UnknownButton(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_labels_parse_0_to_9() {
        for d in 0..=9u8 {
            assert_eq!(d.to_string().parse(), Ok(ButtonAction::Digit(d)));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ButtonAction::Digit(7).label(), "7");
        assert_eq!(ButtonAction::Decimal.label(), ".");
        assert_eq!(ButtonAction::Operator(Operation::Divide).label(), "÷");
        assert_eq!(ButtonAction::Equals.label(), "=");
        assert_eq!(ButtonAction::Clear.label(), "AC");
        assert_eq!(ButtonAction::Delete.label(), "DEL");
        assert_eq!(ButtonAction::Undo.label(), "↩");
    }

    #[test]
    fn test_out_of_range_digit_label() {
        assert_eq!(ButtonAction::Digit(42).label(), "?");
    }

    #[test]
    fn test_parse_keypad_labels() {
        assert_eq!("0".parse(), Ok(ButtonAction::Digit(0)));
        assert_eq!("9".parse(), Ok(ButtonAction::Digit(9)));
        assert_eq!(".".parse(), Ok(ButtonAction::Decimal));
        assert_eq!("×".parse(), Ok(ButtonAction::Operator(Operation::Multiply)));
        assert_eq!("=".parse(), Ok(ButtonAction::Equals));
        assert_eq!("AC".parse(), Ok(ButtonAction::Clear));
        assert_eq!("DEL".parse(), Ok(ButtonAction::Delete));
        assert_eq!("↩".parse(), Ok(ButtonAction::Undo));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("*".parse(), Ok(ButtonAction::Operator(Operation::Multiply)));
        assert_eq!("/".parse(), Ok(ButtonAction::Operator(Operation::Divide)));
        assert_eq!("c".parse(), Ok(ButtonAction::Clear));
        assert_eq!("del".parse(), Ok(ButtonAction::Delete));
        assert_eq!("undo".parse(), Ok(ButtonAction::Undo));
        assert_eq!("U".parse(), Ok(ButtonAction::Undo));
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(
            "%".parse::<ButtonAction>(),
            Err(CalcError::UnknownButton("%".into()))
        );
        assert!("12".parse::<ButtonAction>().is_err());
    }

    #[test]
    fn test_label_parses_back() {
        let actions = [
            ButtonAction::Digit(3),
            ButtonAction::Decimal,
            ButtonAction::Operator(Operation::Subtract),
            ButtonAction::Equals,
            ButtonAction::Clear,
            ButtonAction::Delete,
            ButtonAction::Undo,
        ];
        for action in actions {
            assert_eq!(action.label().parse(), Ok(action));
        }
    }

    #[test]
    fn test_is_operand_input() {
        assert!(ButtonAction::Digit(1).is_operand_input());
        assert!(ButtonAction::Decimal.is_operand_input());
        assert!(!ButtonAction::Equals.is_operand_input());
        assert!(!ButtonAction::Undo.is_operand_input());
    }
}
