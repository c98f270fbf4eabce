//! Command execution for the `keypad-calc` binary

use tracing::info;

use crate::config::{AppConfig, OutputFormat};
use crate::core::DisplayState;
use crate::driver::{CalculatorDriver, EngineDriver};
use crate::error::AppResult;

/// Replays a label sequence on a fresh engine and returns the final display
///
/// # Errors
///
/// Returns an error if any label is unknown; nothing is pressed in that case.
pub fn press(sequence: &str) -> AppResult<DisplayState> {
    let mut driver = EngineDriver::new();
    driver.press_sequence(sequence)?;
    let state = driver.display();
    info!(
        previous = %state.previous,
        current = %state.current,
        "replayed button sequence"
    );
    Ok(state)
}

/// Formats a display snapshot for stdout
///
/// Text output is two lines, previous line first; JSON output is a single
/// object with `previous` and `current`.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn format_display(display: &DisplayState, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n{}", display.previous, display.current)),
        OutputFormat::Json => Ok(serde_json::to_string(display)?),
    }
}

/// Runs the `press` command and returns what should be printed
///
/// # Errors
///
/// Returns an error for unknown labels or failed encoding.
pub fn run_press(config: &AppConfig, sequence: &str) -> AppResult<String> {
    let display = press(sequence)?;
    format_display(&display, config.output)
}

#[cfg(feature = "tui")]
pub use terminal::{apply_ui_action, run_tui};

#[cfg(feature = "tui")]
mod terminal {
    use std::io;

    use crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::{Backend, CrosstermBackend},
        layout::Rect,
        Terminal,
    };
    use tracing::info;

    use crate::config::AppConfig;
    use crate::error::AppResult;
    use crate::tui::{keypad_area, render, CalculatorApp, InputHandler, UiAction};

    /// Applies one UI action; `screen` is the full terminal area
    pub fn apply_ui_action(app: &mut CalculatorApp, action: UiAction, screen: Rect) {
        match action {
            UiAction::Focus(direction) => app.move_focus(direction),
            UiAction::PressFocused => app.press_focused(),
            UiAction::Click { column, row } => {
                let area = keypad_area(screen, app.show_help());
                app.click(area, column, row);
            }
            UiAction::ToggleHelp => app.toggle_help(),
            UiAction::Quit => app.quit(),
            UiAction::None => {}
        }
    }

    /// Runs the interactive keypad until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn or read.
    pub fn run_tui(config: &AppConfig) -> AppResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let app = CalculatorApp::new().with_help(config.show_help);
        let result = run_app(&mut terminal, app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> AppResult<()> {
        let input_handler = InputHandler::new();
        info!("terminal session started");

        while !app.should_quit() {
            terminal.draw(|f| render(&app, f))?;

            let event = event::read()?;
            let size = terminal.size()?;
            let screen = Rect::new(0, 0, size.width, size.height);
            apply_ui_action(&mut app, input_handler.handle_event(&event), screen);
        }

        info!(current = app.engine().current_value(), "terminal session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;
    use crate::error::AppError;

    #[test]
    fn test_press_returns_display() {
        let display = press("1 2 + 3").unwrap();
        assert_eq!(display.previous, "12 +");
        assert_eq!(display.current, "3");
    }

    #[test]
    fn test_press_matches_driver_display() {
        let mut driver = EngineDriver::new();
        driver.press_sequence("4 × 2 =").unwrap();
        assert_eq!(press("4 × 2 =").unwrap(), driver.display());
    }

    #[test]
    fn test_press_unknown_label() {
        let err = press("1 % 2").unwrap_err();
        assert!(matches!(
            err,
            AppError::Calc(CalcError::UnknownButton(ref label)) if label == "%"
        ));
    }

    #[test]
    fn test_format_text() {
        let display = press("2 + 3 =").unwrap();
        assert_eq!(format_display(&display, OutputFormat::Text).unwrap(), "\n5");
    }

    #[test]
    fn test_format_json() {
        let display = press("9 ÷").unwrap();
        assert_eq!(
            format_display(&display, OutputFormat::Json).unwrap(),
            r#"{"previous":"9 ÷","current":"9"}"#
        );
    }

    #[test]
    fn test_run_press_uses_configured_output() {
        let config = AppConfig::new().with_output(OutputFormat::Json);
        let out = run_press(&config, "5 ÷ 0 =").unwrap();
        assert_eq!(out, r#"{"previous":"","current":"Infinity"}"#);
    }

    #[cfg(feature = "tui")]
    mod terminal_tests {
        use super::super::apply_ui_action;
        use crate::tui::{CalculatorApp, FocusDirection, UiAction};
        use ratatui::layout::Rect;

        const SCREEN: Rect = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 20,
        };

        #[test]
        fn test_focus_then_press() {
            let mut app = CalculatorApp::new();
            apply_ui_action(&mut app, UiAction::Focus(FocusDirection::Right), SCREEN);
            apply_ui_action(&mut app, UiAction::PressFocused, SCREEN);
            assert_eq!(app.engine().current_value(), "8");
        }

        #[test]
        fn test_click_outside_keypad_is_ignored() {
            let mut app = CalculatorApp::new();
            apply_ui_action(&mut app, UiAction::Click { column: 0, row: 0 }, SCREEN);
            assert_eq!(app.engine().current_value(), "0");
        }

        #[test]
        fn test_toggle_help_and_quit() {
            let mut app = CalculatorApp::new();
            apply_ui_action(&mut app, UiAction::ToggleHelp, SCREEN);
            assert!(!app.show_help());
            apply_ui_action(&mut app, UiAction::None, SCREEN);
            assert!(!app.should_quit());
            apply_ui_action(&mut app, UiAction::Quit, SCREEN);
            assert!(app.should_quit());
        }
    }
}
