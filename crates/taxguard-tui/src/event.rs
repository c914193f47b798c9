//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use taxguard_app::message::Message;
use taxguard_app::InputKey;
use taxguard_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // 50ms timeout drives the spinner at 20 FPS
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('7')));
    }

    #[test]
    fn test_ctrl_conversion() {
        for c in ['c', 's', 'u'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
            assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl(c)));
        }
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));

        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_arrows_and_actions() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Backspace, InputKey::Backspace),
        ];
        for (code, expected) in cases {
            assert_eq!(
                key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }
}
