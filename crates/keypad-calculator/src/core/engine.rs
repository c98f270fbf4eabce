//! Calculator engine - the keypad state machine
//!
//! Holds the operand being typed, the left operand of a pending operation,
//! and the undo history. Every method is total: invalid preconditions make
//! it a no-op rather than an error.
//!
//! ```
//! use keypad_calculator::core::{CalculatorEngine, Operation};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.append_digit(2);
//! engine.choose_operation(Operation::Add);
//! engine.append_digit(3);
//! engine.choose_operation(Operation::Multiply);
//! engine.append_digit(4);
//! engine.calculate();
//! assert_eq!(engine.current_value(), "20");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::number::{format_number, parse_operand};
use crate::core::{ButtonAction, InputHistory, Operation};

const INITIAL_VALUE: &str = "0";

/// What a renderer shows: the pending line and the current operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Previous operand followed by the operator symbol, e.g. `"12 ×"`
    pub previous: String,
    /// The operand being typed, or the last result
    pub current: String,
}

/// Keypad calculator state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorEngine {
    current_value: String,
    previous_value: String,
    pending_operation: Option<Operation>,
    should_reset_on_next_digit: bool,
    input_history: InputHistory,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_value: INITIAL_VALUE.to_string(),
            previous_value: String::new(),
            pending_operation: None,
            should_reset_on_next_digit: false,
            input_history: InputHistory::new(),
        }
    }

    /// The operand being typed, or the last result
    #[must_use]
    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    /// Left operand of the pending operation; empty when none is pending
    #[must_use]
    pub fn previous_value(&self) -> &str {
        &self.previous_value
    }

    /// The operator awaiting its right operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// Whether the next digit replaces the current value
    #[must_use]
    pub fn should_reset_on_next_digit(&self) -> bool {
        self.should_reset_on_next_digit
    }

    /// Characters typed since the last reset point
    #[must_use]
    pub fn input_history(&self) -> &InputHistory {
        &self.input_history
    }

    /// Snapshot of both display lines
    #[must_use]
    pub fn display(&self) -> DisplayState {
        let previous = match self.pending_operation {
            Some(op) => format!("{} {}", self.previous_value, op.symbol()),
            None => self.previous_value.clone(),
        };
        DisplayState {
            previous,
            current: self.current_value.clone(),
        }
    }

    /// Dispatches a button press to the matching operation
    pub fn press(&mut self, action: ButtonAction) {
        trace!(button = action.label(), "press");
        match action {
            ButtonAction::Digit(d) => self.append_digit(d),
            ButtonAction::Decimal => self.append_decimal_point(),
            ButtonAction::Operator(op) => self.choose_operation(op),
            ButtonAction::Equals => self.calculate(),
            ButtonAction::Clear => self.clear(),
            ButtonAction::Delete => self.delete_last_character(),
            ButtonAction::Undo => self.undo_last_input(),
        }
    }

    /// Appends a digit, replacing a lone `0` or a value awaiting reset.
    ///
    /// Values above 9 are ignored.
    pub fn append_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            debug!(digit, "ignoring out-of-range digit");
            return;
        };

        if self.current_value == INITIAL_VALUE || self.should_reset_on_next_digit {
            self.current_value = ch.to_string();
            self.should_reset_on_next_digit = false;
        } else {
            self.current_value.push(ch);
        }
        self.input_history.push(ch);

        trace!(digit, current = %self.current_value, "digit appended");
    }

    /// Appends a decimal point unless the operand already has one.
    ///
    /// When a fresh operand is due the value becomes `0.`; that branch does
    /// not record history.
    pub fn append_decimal_point(&mut self) {
        if self.should_reset_on_next_digit {
            self.current_value = "0.".to_string();
            self.should_reset_on_next_digit = false;
            trace!("decimal point starts fresh operand");
            return;
        }
        if self.current_value.contains('.') {
            return;
        }
        self.current_value.push('.');
        self.input_history.push('.');

        trace!(current = %self.current_value, "decimal point appended");
    }

    /// Selects an operator, folding any pending operation first so that
    /// operators chain left to right without precedence.
    pub fn choose_operation(&mut self, op: Operation) {
        if self.current_value.is_empty() {
            return;
        }
        if !self.previous_value.is_empty() {
            self.calculate();
        }

        self.pending_operation = Some(op);
        self.previous_value.clone_from(&self.current_value);
        self.should_reset_on_next_digit = true;
        self.input_history.clear();

        debug!(
            operation = op.symbol(),
            previous = %self.previous_value,
            "operation chosen"
        );
    }

    /// Applies the pending operation as `previous op current`.
    ///
    /// No-op unless an operation is pending and both operands are present.
    pub fn calculate(&mut self) {
        let Some(op) = self.pending_operation else {
            return;
        };
        if self.previous_value.is_empty() || self.current_value.is_empty() {
            return;
        }

        let lhs = parse_operand(&self.previous_value);
        let rhs = parse_operand(&self.current_value);
        self.current_value = format_number(op.apply(lhs, rhs));
        self.pending_operation = None;
        self.previous_value.clear();
        self.input_history.clear();

        debug!(
            %lhs,
            operation = op.symbol(),
            %rhs,
            current = %self.current_value,
            "calculated"
        );
    }

    /// Resets to `0` with nothing pending.
    ///
    /// The reset-on-next-digit flag is left as is; with the value at `0` the
    /// next digit replaces it either way.
    pub fn clear(&mut self) {
        self.current_value = INITIAL_VALUE.to_string();
        self.previous_value.clear();
        self.pending_operation = None;
        self.input_history.clear();

        debug!("cleared");
    }

    /// Removes the last displayed character, falling back to `0`.
    ///
    /// Works on raw characters and leaves the undo history untouched.
    pub fn delete_last_character(&mut self) {
        self.current_value.pop();
        if self.current_value.is_empty() {
            self.current_value = INITIAL_VALUE.to_string();
        }

        trace!(current = %self.current_value, "character deleted");
    }

    /// Undoes the most recent tracked input and rebuilds the operand from the
    /// remaining history.
    ///
    /// Characters not in the history (e.g. a result carried over from a
    /// calculation) are discarded by the rebuild.
    pub fn undo_last_input(&mut self) {
        let Some(undone) = self.input_history.pop() else {
            return;
        };

        self.current_value = if self.input_history.is_empty() {
            INITIAL_VALUE.to_string()
        } else {
            self.input_history.joined()
        };

        trace!(%undone, current = %self.current_value, "input undone");
    }
}
