//! Login screen widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use taxguard_app::{LoginFocus, LoginState};

use crate::layout::centered_rect;
use crate::theme::styles;

use super::input::InputLine;

const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 13;

pub struct LoginScreen<'a> {
    state: &'a LoginState,
}

impl<'a> LoginScreen<'a> {
    pub fn new(state: &'a LoginState) -> Self {
        Self { state }
    }
}

impl Widget for LoginScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        let block = styles::glass_block(true).title(Span::styled(" Sign in ", styles::title()));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let [heading, _, user, pass, error, _, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled("Tax Fraud Detection System", styles::title()))
            .alignment(Alignment::Center)
            .render(heading, buf);

        InputLine::new("Username", &self.state.credentials.username)
            .focused(self.state.focus == LoginFocus::Username)
            .render(user, buf);

        let masked = self.state.masked_password();
        InputLine::new("Password", &masked)
            .focused(self.state.focus == LoginFocus::Password)
            .render(pass, buf);

        if let Some(message) = &self.state.error {
            Paragraph::new(Line::styled(message.as_str(), styles::error_text()))
                .alignment(Alignment::Center)
                .render(error, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" switch field  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" sign in", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(hints, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use taxguard_core::Credentials;

    #[test]
    fn test_password_is_masked() {
        let state = LoginState {
            credentials: Credentials::new("admin", "secret"),
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        term.render_widget(LoginScreen::new(&state), term.area());

        assert!(term.buffer_contains("admin"));
        assert!(term.buffer_contains("••••••"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_error_is_shown() {
        let state = LoginState {
            error: Some("Invalid username or password!".into()),
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        term.render_widget(LoginScreen::new(&state), term.area());

        assert!(term.buffer_contains("Invalid username or password!"));
    }
}
