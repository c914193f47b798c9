//! Key event handlers per screen

use crate::form::{DetectionForm, FormFocus};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigator::Screen;
use crate::state::AppState;

/// Convert key events to messages based on the active screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match &state.screen {
        Screen::Login(_) => handle_key_login(key),
        Screen::Welcome => handle_key_welcome(key),
        Screen::Detection(form) => handle_key_detection(form, key),
        Screen::Result(_) => handle_key_result(key),
    }
}

fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::LoginSubmit),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::LoginToggleFocus)
        }
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        _ => None,
    }
}

fn handle_key_welcome(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::StartDetection),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_detection(form: &DetectionForm, key: InputKey) -> Option<Message> {
    if form.is_loading() {
        // Only cancel is live while a request is pending
        return match key {
            InputKey::Esc => Some(Message::CancelSubmission),
            _ => None,
        };
    }

    match (form.focus, key) {
        (_, InputKey::Tab | InputKey::Down) => Some(Message::FormFocusNext),
        (_, InputKey::BackTab | InputKey::Up) => Some(Message::FormFocusPrev),
        (_, InputKey::CharCtrl('s')) => Some(Message::SubmitForm),

        (FormFocus::Submit, InputKey::Enter) => Some(Message::SubmitForm),
        (_, InputKey::Enter) => Some(Message::FormFocusNext),

        (FormFocus::Model, InputKey::Right | InputKey::Char(' ')) => {
            Some(Message::CycleModel { forward: true })
        }
        (FormFocus::Model, InputKey::Left) => Some(Message::CycleModel { forward: false }),

        (FormFocus::Field(_), InputKey::Char(c)) => Some(Message::FormInput(c)),
        (FormFocus::Field(_), InputKey::Backspace) => Some(Message::FormBackspace),
        (FormFocus::Field(_), InputKey::CharCtrl('u')) => Some(Message::FormClearField),

        _ => None,
    }
}

fn handle_key_result(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::Retry),
        InputKey::Char('h') => Some(Message::GoHome),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
