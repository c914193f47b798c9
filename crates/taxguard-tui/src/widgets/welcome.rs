//! Welcome screen widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use taxguard_core::ModelType;

use crate::layout::centered_rect;
use crate::theme::styles;

const PANEL_WIDTH: u16 = 80;
const PANEL_HEIGHT: u16 = 16;

pub struct WelcomeScreen;

impl Widget for WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        let block = styles::glass_block(false);
        let inner = block.inner(panel);
        block.render(panel, buf);

        let mut lines = vec![
            Line::styled("Welcome to the Tax Fraud Detection System", styles::title()),
            Line::default(),
            Line::styled(
                "Enter declared income, spending and tax figures, pick a model,",
                styles::text_secondary(),
            ),
            Line::styled(
                "and the prediction service estimates the likelihood of fraud.",
                styles::text_secondary(),
            ),
            Line::default(),
        ];

        lines.extend(ModelType::ALL.iter().map(|model| {
            Line::from(vec![
                Span::styled(format!("{:<24}", model.display_name()), styles::accent()),
                Span::styled(model.description(), styles::text_muted()),
            ])
        }));

        lines.extend([
            Line::default(),
            Line::from(vec![
                Span::styled("Press ", styles::text_secondary()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to start detection", styles::text_secondary()),
            ]),
            Line::from(vec![
                Span::styled("q", styles::keybinding()),
                Span::styled(" quit", styles::text_muted()),
            ]),
        ]);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
