//! TUI rendering
//!
//! One bordered screen: the two-line display on top, the keypad below and
//! an optional one-line help footer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title of the outer frame
pub const TITLE: &str = " Keypad Calculator ";

/// Help footer text
pub const HELP_TEXT: &str = "↑↓←→ move  ⏎ press  ? help  q quit";

/// Height of the display panel: two lines plus borders
const DISPLAY_HEIGHT: u16 = 4;

/// Screen regions, shared by rendering and mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Two-line display panel
    pub display: Rect,
    /// Bordered keypad
    pub keypad: Rect,
    /// Help footer (zero height when hidden)
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the full terminal area
    #[must_use]
    pub fn new(area: Rect, show_help: bool) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let help_height = u16::from(show_help);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(help_height),
            ])
            .split(inner);

        Self {
            display: chunks[0],
            keypad: chunks[1],
            help: chunks[2],
        }
    }
}

/// Keypad rectangle for a terminal area, for mapping mouse clicks
#[must_use]
pub fn keypad_area(area: Rect, show_help: bool) -> Rect {
    ScreenLayout::new(area, show_help).keypad
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the previous-operand line and the current value
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.engine().display();

        let lines = vec![
            Line::from(Span::styled(
                display.previous,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                display.current,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = ScreenLayout::new(area, self.app.show_help());

        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad())
            .focused(self.app.focus())
            .render(layout.keypad, buf);
        if self.app.show_help() {
            self.render_help(layout.help, buf);
        }
    }
}
