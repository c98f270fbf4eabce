//! Terminal event handling
//!
//! Events only steer the on-screen keypad: arrows move the focus, Enter or
//! Space press the focused button, and a left click presses the button under
//! the pointer. Digits and operators have no keyboard shortcuts.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::FocusDirection;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the keypad focus
    Focus(FocusDirection),
    /// Press the focused button
    PressFocused,
    /// Mouse click at a terminal cell
    Click {
        /// Terminal column
        column: u16,
        /// Terminal row
        row: u16,
    },
    /// Show or hide the help footer
    ToggleHelp,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> UiAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => UiAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> UiAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return UiAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => UiAction::Quit,
                _ => UiAction::None,
            };
        }

        match code {
            KeyCode::Up | KeyCode::Char('k') => UiAction::Focus(FocusDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => UiAction::Focus(FocusDirection::Down),
            KeyCode::Left | KeyCode::Char('h') => UiAction::Focus(FocusDirection::Left),
            KeyCode::Right | KeyCode::Char('l') => UiAction::Focus(FocusDirection::Right),
            KeyCode::Enter | KeyCode::Char(' ') => UiAction::PressFocused,
            KeyCode::Char('?') => UiAction::ToggleHelp,
            KeyCode::Esc | KeyCode::Char('q') => UiAction::Quit,
            _ => UiAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> UiAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => UiAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => UiAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys_move_focus() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Up)),
            UiAction::Focus(FocusDirection::Up)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Down)),
            UiAction::Focus(FocusDirection::Down)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Left)),
            UiAction::Focus(FocusDirection::Left)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Right)),
            UiAction::Focus(FocusDirection::Right)
        );
    }

    #[test]
    fn test_vim_keys_move_focus() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('k'))),
            UiAction::Focus(FocusDirection::Up)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('l'))),
            UiAction::Focus(FocusDirection::Right)
        );
    }

    #[test]
    fn test_enter_and_space_press_focused() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            UiAction::PressFocused
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char(' '))),
            UiAction::PressFocused
        );
    }

    #[test]
    fn test_digits_and_operators_are_not_shortcuts() {
        let handler = InputHandler::new();
        for c in ['0', '5', '9', '+', '-', '*', '/', '.', '='] {
            assert_eq!(handler.handle_key(key_event(KeyCode::Char(c))), UiAction::None);
        }
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), UiAction::Quit);
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), UiAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            UiAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            UiAction::Quit
        );
    }

    #[test]
    fn test_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            UiAction::None
        );
    }

    #[test]
    fn test_help_toggle() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('?'))),
            UiAction::ToggleHelp
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Enter);
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), UiAction::None);
    }

    #[test]
    fn test_left_click() {
        let handler = InputHandler::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 12, 7);
        assert_eq!(
            handler.handle_mouse(event),
            UiAction::Click { column: 12, row: 7 }
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        let right = mouse_event(MouseEventKind::Down(MouseButton::Right), 1, 1);
        let moved = mouse_event(MouseEventKind::Moved, 1, 1);
        assert_eq!(handler.handle_mouse(right), UiAction::None);
        assert_eq!(handler.handle_mouse(moved), UiAction::None);
    }

    #[test]
    fn test_handle_event_dispatch() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_event(&Event::Key(key_event(KeyCode::Enter))),
            UiAction::PressFocused
        );
        assert_eq!(
            handler.handle_event(&Event::Mouse(mouse_event(
                MouseEventKind::Down(MouseButton::Left),
                3,
                4
            ))),
            UiAction::Click { column: 3, row: 4 }
        );
        assert_eq!(handler.handle_event(&Event::Resize(80, 24)), UiAction::None);
        assert_eq!(handler.handle_event(&Event::FocusGained), UiAction::None);
    }
}
