//! Calculator core: the keypad state machine and its building blocks
//!
//! Everything in here is renderer-agnostic. A renderer reads
//! [`CalculatorEngine::display`] and feeds [`ButtonAction`]s back in.

pub mod action;
pub mod engine;
pub mod history;
pub mod number;
mod operations;

pub use action::ButtonAction;
pub use engine::{CalculatorEngine, DisplayState};
pub use history::InputHistory;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while translating outside input into calculator actions.
///
/// The engine itself never fails; these only surface at the boundary where
/// labels or operator symbols arrive from a renderer or script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A keypad label that no button carries
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
    /// An operator symbol that is not one of + - × ÷
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
}
