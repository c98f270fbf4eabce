//! Keypad grid and widget
//!
//! Buttons are stored row-major in a 4-column grid; the last row is short,
//! so some (row, col) cells are empty.
//!
//! ```text
//! [AC ] [DEL] [ ↩ ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{ButtonAction, Operation};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text printed on the button
    pub label: &'static str,
    /// Whether the button is highlighted as the last one pressed
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates an unpressed button for an action
    #[must_use]
    pub fn new(action: ButtonAction) -> Self {
        Self {
            label: action.label(),
            pressed: false,
            action,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = ButtonAction::Digit;
        let op = ButtonAction::Operator;
        let buttons = [
            // Row 1: AC DEL ↩ ÷
            ButtonAction::Clear,
            ButtonAction::Delete,
            ButtonAction::Undo,
            op(Operation::Divide),
            // Row 2: 7 8 9 ×
            digit(7),
            digit(8),
            digit(9),
            op(Operation::Multiply),
            // Row 3: 4 5 6 -
            digit(4),
            digit(5),
            digit(6),
            op(Operation::Subtract),
            // Row 4: 1 2 3 +
            digit(1),
            digit(2),
            digit(3),
            op(Operation::Add),
            // Row 5: 0 . =
            digit(0),
            ButtonAction::Decimal,
            ButtonAction::Equals,
        ]
        .into_iter()
        .map(KeypadButton::new)
        .collect();

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button at a grid cell, if the cell is occupied
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = row * self.cols + col;
        (index < self.buttons.len()).then_some(index)
    }

    /// Grid cell of a button index
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.buttons.len()).then(|| (index / self.cols, index % self.cols))
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_button_by_action(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button performing an action
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find_button_by_action(action) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the bordered keypad area to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is 1 cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        self.index_at((inner_y / btn_height) as usize, (inner_x / btn_width) as usize)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    focused: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            focused: None,
        }
    }

    /// Marks a button as focused
    #[must_use]
    pub fn focused(mut self, index: usize) -> Self {
        self.focused = Some(index);
        self
    }

    fn button_style(&self, index: usize, btn: &KeypadButton) -> Style {
        let mut style = if btn.pressed {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            match btn.action {
                action if action.is_operand_input() => Style::default().fg(Color::White),
                ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
                ButtonAction::Equals => Style::default().fg(Color::Green),
                ButtonAction::Clear => Style::default().fg(Color::Red),
                _ => Style::default().fg(Color::Magenta),
            }
        };
        if self.focused == Some(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return; // Too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for (index, ((row, col), btn)) in self.keypad.buttons_with_positions().enumerate() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            if btn_width < label_width {
                continue;
            }

            let label_x = x + (btn_width - label_width) / 2;
            let label_y = y + btn_height / 2;
            if label_y < inner.y + inner.height {
                let span = Span::styled(label, self.button_style(index, btn));
                buf.set_span(label_x, label_y, &span, btn_width);
            }
        }
    }
}
