//! Key mapping from terminal events to engine controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputEvent;

/// A physical control the engine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Down,
    Rotate,
}

impl Control {
    /// Edge sent when the control goes down.
    pub fn press_event(self) -> InputEvent {
        match self {
            Control::Left => InputEvent::LeftDown,
            Control::Right => InputEvent::RightDown,
            Control::Down => InputEvent::DownDown,
            Control::Rotate => InputEvent::RotatePressed,
        }
    }

    /// Edge sent when the control comes back up; rotation has none.
    pub fn release_event(self) -> Option<InputEvent> {
        match self {
            Control::Left => Some(InputEvent::LeftUp),
            Control::Right => Some(InputEvent::RightUp),
            Control::Down => Some(InputEvent::DownUp),
            Control::Rotate => None,
        }
    }
}

/// Map a key code to a control.
pub fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Control::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Control::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Control::Down)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Control::Rotate)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(control_for(KeyCode::Left), Some(Control::Left));
        assert_eq!(control_for(KeyCode::Right), Some(Control::Right));
        assert_eq!(control_for(KeyCode::Down), Some(Control::Down));
        assert_eq!(control_for(KeyCode::Char('H')), Some(Control::Left));
        assert_eq!(control_for(KeyCode::Char('d')), Some(Control::Right));
        assert_eq!(control_for(KeyCode::Char('J')), Some(Control::Down));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(control_for(KeyCode::Up), Some(Control::Rotate));
        assert_eq!(control_for(KeyCode::Char('w')), Some(Control::Rotate));
        assert_eq!(control_for(KeyCode::Char('K')), Some(Control::Rotate));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(control_for(KeyCode::Char(' ')), None);
        assert_eq!(control_for(KeyCode::Enter), None);
    }

    #[test]
    fn test_edges_per_control() {
        assert_eq!(Control::Left.press_event(), InputEvent::LeftDown);
        assert_eq!(Control::Down.release_event(), Some(InputEvent::DownUp));
        assert_eq!(Control::Rotate.press_event(), InputEvent::RotatePressed);
        assert_eq!(Control::Rotate.release_event(), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
