//! TUI Application State
//!
//! Wraps the engine with the keypad, a focus cursor for arrow-key
//! navigation, and the quit flag.

use ratatui::layout::Rect;
use tracing::debug;

use super::keypad::Keypad;
use crate::core::{ButtonAction, CalculatorEngine};

/// Direction for moving the keypad focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// One row up
    Up,
    /// One row down
    Down,
    /// One column left
    Left,
    /// One column right
    Right,
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Calculator state machine
    engine: CalculatorEngine,
    /// Keypad with the last pressed button highlighted
    keypad: Keypad,
    /// Index of the focused keypad button
    focus: usize,
    /// Whether the help footer is shown
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app with the focus on the `7` button
    #[must_use]
    pub fn new() -> Self {
        let keypad = Keypad::new();
        let focus = keypad
            .find_button_by_action(ButtonAction::Digit(7))
            .unwrap_or(0);
        Self {
            engine: CalculatorEngine::new(),
            keypad,
            focus,
            show_help: true,
            should_quit: false,
        }
    }

    /// Sets whether the help footer is shown
    #[must_use]
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Returns the calculator engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Index of the focused keypad button
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Whether the help footer is shown
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Shows or hides the help footer
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button: highlights and focuses it, then updates the engine
    pub fn press(&mut self, action: ButtonAction) {
        self.keypad.highlight(action);
        if let Some(index) = self.keypad.find_button_by_action(action) {
            self.focus = index;
        }
        self.engine.press(action);
    }

    /// Presses the focused button
    pub fn press_focused(&mut self) {
        if let Some(action) = self.keypad.get_button(self.focus).map(|b| b.action) {
            self.press(action);
        }
    }

    /// Presses the button under a mouse click; returns whether one was hit
    pub fn click(&mut self, keypad_area: Rect, column: u16, row: u16) -> bool {
        let Some(action) = self
            .keypad
            .hit_test(keypad_area, column, row)
            .and_then(|i| self.keypad.get_button(i))
            .map(|b| b.action)
        else {
            debug!(column, row, "click missed keypad");
            return false;
        };
        self.press(action);
        true
    }

    /// Moves the focus one cell, wrapping around and skipping empty cells
    pub fn move_focus(&mut self, direction: FocusDirection) {
        let Some((mut row, mut col)) = self.keypad.position_of(self.focus) else {
            return;
        };
        let (rows, cols) = self.keypad.dimensions();

        // Every cell is visited at most once before returning to the start
        for _ in 0..rows * cols {
            match direction {
                FocusDirection::Up => row = (row + rows - 1) % rows,
                FocusDirection::Down => row = (row + 1) % rows,
                FocusDirection::Left => col = (col + cols - 1) % cols,
                FocusDirection::Right => col = (col + 1) % cols,
            }
            if let Some(index) = self.keypad.index_at(row, col) {
                self.focus = index;
                return;
            }
        }
    }
}
