//! Abstract input key event, independent of terminal library.
//!
//! Keeps `taxguard-app` free of crossterm types so the state machine can be
//! driven directly from tests.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+s, Ctrl+u)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
