//! Status bar widget
//!
//! Shows the active screen, the prediction service address and whether a
//! request is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use taxguard_app::state::AppState;

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn activity(&self) -> Span<'static> {
        if self.state.is_loading() {
            Span::styled("● Waiting for service", styles::keybinding())
        } else {
            Span::styled("○ Idle", styles::text_muted())
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled(" │ ", styles::text_muted());
        let line = Line::from(vec![
            Span::styled(
                format!(" {}", self.state.screen_kind().title()),
                styles::accent(),
            ),
            separator.clone(),
            self.activity(),
            separator,
            Span::styled(self.state.server_label.clone(), styles::text_secondary()),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(palette::CARD_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_shows_screen_and_server() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Login"));
        assert!(term.buffer_contains("http://localhost:5000"));
        assert!(term.buffer_contains("Idle"));
    }
}
