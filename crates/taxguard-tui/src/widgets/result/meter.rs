//! Confidence meter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Gauge, Widget},
};

use crate::theme::{palette, styles};

/// Gauge filled to the confidence, coloured by verdict and intensity
pub struct ConfidenceMeter<'a> {
    ratio: f64,
    label: &'a str,
    fraud: bool,
    intensity: f64,
}

impl<'a> ConfidenceMeter<'a> {
    pub fn new(ratio: f64, label: &'a str) -> Self {
        Self {
            ratio,
            label,
            fraud: false,
            intensity: 1.0,
        }
    }

    pub fn fraud(mut self, fraud: bool) -> Self {
        self.fraud = fraud;
        self
    }

    pub fn intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }
}

impl Widget for ConfidenceMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Gauge::default()
            .block(styles::glass_block(false))
            .gauge_style(
                Style::default()
                    .fg(styles::meter_color(self.fraud, self.intensity))
                    .bg(palette::DEEPEST_BG),
            )
            .ratio(self.ratio.clamp(0.0, 1.0))
            .label(Span::styled(self.label, styles::title()))
            .use_unicode(true)
            .render(area, buf);
    }
}
