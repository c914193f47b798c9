//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use taxguard_app::navigator::Screen;
use taxguard_app::result_view::ResultView;
use taxguard_app::state::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure over `state`: nothing here mutates application state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    match &state.screen {
        Screen::Login(login) => frame.render_widget(widgets::LoginScreen::new(login), areas.body),
        Screen::Welcome => frame.render_widget(widgets::WelcomeScreen, areas.body),
        Screen::Detection(form) => frame.render_widget(
            widgets::DetectionFormView::new(form).spinner_frame(state.spinner_frame),
            areas.body,
        ),
        Screen::Result(result) => {
            let view = ResultView::build(result);
            frame.render_widget(widgets::ResultScreenView::new(&view), areas.body);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
