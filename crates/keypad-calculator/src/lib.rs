//! Keypad Calculator
//!
//! A button-driven four-function calculator. Operands are entered one
//! keypad press at a time, operators chain left to right without
//! precedence, and every press can be undone in order.
//!
//! The [`core`] engine is front-end agnostic. The [`tui`] module renders it
//! with ratatui, and [`driver`] replays label sequences against either one.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for label in ["2", "+", "3", "×", "4", "="] {
//!     engine.press(label.parse().unwrap());
//! }
//! // Left to right: (2 + 3) × 4
//! assert_eq!(engine.current_value(), "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;
pub mod runner;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::number::{format_number, parse_operand};
    pub use crate::core::{
        ButtonAction, CalcError, CalcResult, CalculatorEngine, DisplayState, InputHistory,
        Operation,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
