//! TUI Frontend for Calculator
//!
//! Renders the engine with ratatui and turns crossterm events into keypad
//! presses.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, FocusDirection};
pub use input::{InputHandler, UiAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, ScreenLayout};
