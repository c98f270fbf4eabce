//! Unified Calculator Driver
//!
//! Write the interaction once, run it against any front end. A driver
//! presses keypad buttons and reads back the two display lines; the
//! `verify_*` functions below drive the documented behaviour through that
//! interface so the headless engine and the terminal app are held to the
//! same expectations.

use crate::core::{ButtonAction, CalcResult, CalculatorEngine, DisplayState};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_sequence("2 + 3 =").unwrap();
/// assert_eq!(driver.current_value(), "5");
/// ```
pub trait CalculatorDriver {
    /// Presses a single keypad button
    fn press(&mut self, action: ButtonAction);

    /// The current operand line
    fn current_value(&self) -> String;

    /// The previous operand and operator line (empty when nothing is pending)
    fn previous_line(&self) -> String;

    /// Presses AC
    fn clear(&mut self) {
        self.press(ButtonAction::Clear);
    }

    /// Presses a whitespace-separated sequence of keypad labels.
    ///
    /// Every label is parsed before anything is pressed, so an unknown label
    /// leaves the calculator untouched.
    fn press_sequence(&mut self, labels: &str) -> CalcResult<()> {
        let actions = labels
            .split_whitespace()
            .map(str::parse)
            .collect::<CalcResult<Vec<ButtonAction>>>()?;
        for action in actions {
            self.press(action);
        }
        Ok(())
    }

    /// Both display lines
    fn display(&self) -> DisplayState {
        DisplayState {
            previous: self.previous_line(),
            current: self.current_value(),
        }
    }
}

/// Headless driver wrapping the bare engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, action: ButtonAction) {
        self.engine.press(action);
    }

    fn current_value(&self) -> String {
        self.engine.current_value().to_string()
    }

    fn previous_line(&self) -> String {
        self.engine.display().previous
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{ButtonAction, CalculatorDriver};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: ButtonAction) {
            self.app.press(action);
        }

        fn current_value(&self) -> String {
            self.app.engine().current_value().to_string()
        }

        fn previous_line(&self) -> String {
            self.app.engine().display().previous
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Behaviour Checks =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate, replacing the initial zero
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.current_value(), "0");

    driver.press_sequence("4 0 7").unwrap();
    assert_eq!(driver.current_value(), "407");
    driver.clear();

    driver.press_sequence("0 0 9").unwrap();
    assert_eq!(driver.current_value(), "9");
    driver.clear();
}

/// A second decimal point changes nothing
pub fn verify_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_sequence("3 .").unwrap();
    assert_eq!(driver.current_value(), "3.");
    driver.press_sequence(".").unwrap();
    assert_eq!(driver.current_value(), "3.");
    driver.press_sequence("1 4").unwrap();
    assert_eq!(driver.current_value(), "3.14");
    driver.clear();

    driver.press_sequence("7 + .").unwrap();
    assert_eq!(driver.current_value(), "0.");
    driver.clear();
}

/// All four operators, operand order included
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_sequence("2 + 3 =").unwrap();
    assert_eq!(driver.current_value(), "5");
    driver.clear();

    driver.press_sequence("1 0 - 4 =").unwrap();
    assert_eq!(driver.current_value(), "6");
    driver.clear();

    driver.press_sequence("6 × 7 =").unwrap();
    assert_eq!(driver.current_value(), "42");
    driver.clear();

    driver.press_sequence("2 0 ÷ 8 =").unwrap();
    assert_eq!(driver.current_value(), "2.5");
    driver.clear();
}

/// Operators chain left to right with no precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_sequence("2 + 3 ×").unwrap();
    assert_eq!(driver.previous_line(), "5 ×");
    driver.press_sequence("4 =").unwrap();
    assert_eq!(driver.current_value(), "20");
    assert_eq!(driver.previous_line(), "");
    driver.clear();
}

/// Division by zero is displayed, not rejected
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_sequence("5 ÷ 0 =").unwrap();
    assert_eq!(driver.current_value(), "Infinity");
    driver.clear();

    driver.press_sequence("0 ÷ 0 =").unwrap();
    assert_eq!(driver.current_value(), "NaN");
    driver.clear();
}

/// DEL removes characters, falling back to zero
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_sequence("1 2 DEL").unwrap();
    assert_eq!(driver.current_value(), "1");
    driver.press_sequence("DEL").unwrap();
    assert_eq!(driver.current_value(), "0");
    driver.clear();
}

/// Undo steps back through tracked input
pub fn verify_undo<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_sequence("1 2 ↩").unwrap();
    assert_eq!(driver.current_value(), "1");
    driver.press_sequence("↩").unwrap();
    assert_eq!(driver.current_value(), "0");
    driver.press_sequence("↩").unwrap();
    assert_eq!(driver.current_value(), "0");
    driver.clear();
}

/// AC resets from any state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_sequence("9 . 5 × 3").unwrap();
    driver.clear();
    assert_eq!(
        driver.display(),
        DisplayState {
            previous: String::new(),
            current: "0".into(),
        }
    );
}

/// Complete verification suite - runs every check above
pub fn run_full_verification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_point(driver);
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_delete(driver);
    verify_undo(driver);
    verify_clear(driver);
}
