//! Terminal input handling
//!
//! Buttons are pressed with the mouse. The keyboard only quits the program.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Left click at a screen cell
    Click {
        /// Screen column
        column: u16,
        /// Screen row
        row: u16,
    },
    /// Terminal was resized; redraw
    Redraw,
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

    /// Maps a terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> InputAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(..) => InputAction::Redraw,
            _ => InputAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind != KeyEventKind::Press {
            return InputAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => InputAction::Quit,
                _ => InputAction::None,
            };
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
            _ => InputAction::None,
        }
    }

    /// Maps a mouse event to an action. Only left-button presses count.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> InputAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => InputAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => InputAction::None,
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

    // ===== Keyboard =====

    #[test]
    fn test_q_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            InputAction::Quit
        );
    }

    #[test]
    fn test_esc_quits() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), InputAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            InputAction::Quit
        );
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            InputAction::None
        );
    }

    #[test]
    fn test_digit_keys_do_not_press_buttons() {
        let handler = InputHandler::new();
        for c in ['0', '7', '+', '=', '.', 'c'] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                InputAction::None,
                "{c}"
            );
        }
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), InputAction::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), InputAction::None);
    }

    // ===== Mouse =====

    #[test]
    fn test_left_click() {
        let handler = InputHandler::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 12, 7);
        assert_eq!(
            handler.handle_mouse(event),
            InputAction::Click { column: 12, row: 7 }
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        let ignored = [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ];
        for kind in ignored {
            assert_eq!(
                handler.handle_mouse(mouse_event(kind, 1, 1)),
                InputAction::None
            );
        }
    }

    // ===== Events =====

    #[test]
    fn test_handle_event_dispatch() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_event(&Event::Key(key_event(KeyCode::Esc))),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_event(&Event::Mouse(mouse_event(
                MouseEventKind::Down(MouseButton::Left),
                3,
                4
            ))),
            InputAction::Click { column: 3, row: 4 }
        );
        assert_eq!(
            handler.handle_event(&Event::Resize(80, 24)),
            InputAction::Redraw
        );
        assert_eq!(handler.handle_event(&Event::FocusGained), InputAction::None);
    }

    #[test]
    fn test_input_action_copy() {
        let action = InputAction::Click { column: 1, row: 2 };
        let copied = action;
        assert_eq!(action, copied);
    }
}
