//! Derived-metric cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use taxguard_core::DerivedMetric;

use crate::theme::styles;

/// Three cards side by side: title, value and suspicious/normal flag
pub struct MetricCards<'a> {
    metrics: &'a [DerivedMetric],
}

impl<'a> MetricCards<'a> {
    pub fn new(metrics: &'a [DerivedMetric]) -> Self {
        Self { metrics }
    }
}

impl Widget for MetricCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.metrics.is_empty() {
            return;
        }

        let cells = Layout::horizontal(
            self.metrics
                .iter()
                .map(|_| Constraint::Ratio(1, self.metrics.len() as u32)),
        )
        .split(area);

        for (metric, cell) in self.metrics.iter().zip(cells.iter()) {
            let block = styles::glass_block(metric.status.is_suspicious()).title(Span::styled(
                format!(" {} ", metric.title),
                styles::text_secondary(),
            ));

            Paragraph::new(vec![
                Line::styled(metric.display.as_str(), styles::title()),
                Line::styled(metric.status.label(), styles::metric_status(metric.status)),
            ])
            .alignment(Alignment::Center)
            .block(block)
            .render(*cell, buf);
        }
    }
}
