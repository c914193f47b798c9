//! Result screen widget
//!
//! Draws a [`ResultView`] built by the app crate: either the failure message
//! alone, or the verdict, confidence meter, factor chart and table, and the
//! derived-metric cards.

mod chart;
mod factors;
mod meter;
mod metrics;

pub use chart::render_bar_chart;
pub use factors::FactorTable;
pub use meter::ConfidenceMeter;
pub use metrics::MetricCards;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use taxguard_app::result_view::{ReportView, ResultBody, ResultView};

use crate::layout::centered_rect;
use crate::theme::styles;

pub struct ResultScreenView<'a> {
    view: &'a ResultView,
}

impl<'a> ResultScreenView<'a> {
    pub fn new(view: &'a ResultView) -> Self {
        Self { view }
    }

    fn header(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(vec![
                Span::styled(self.view.model_heading.as_str(), styles::title()),
                Span::styled(
                    format!("  (received {})", self.view.received_at),
                    styles::text_muted(),
                ),
            ]),
            Line::styled(self.view.model_description, styles::text_secondary()),
        ]
    }
}

fn key_hints() -> Line<'static> {
    Line::from(vec![
        Span::styled("r", styles::keybinding()),
        Span::styled(" try again  ", styles::text_muted()),
        Span::styled("h", styles::keybinding()),
        Span::styled(" home  ", styles::text_muted()),
        Span::styled("q", styles::keybinding()),
        Span::styled(" quit", styles::text_muted()),
    ])
}

impl Widget for ResultScreenView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        match &view.body {
            ResultBody::Failure(message) => render_failure(&self, message, area, buf),
            ResultBody::Report(report) => render_report(&self, report, area, buf),
        }
    }
}

fn render_failure<'a>(
    screen: &ResultScreenView<'a>,
    message: &'a str,
    area: Rect,
    buf: &mut Buffer,
) {
    let panel = centered_rect(70, 9, area);
    let block = styles::glass_block(true)
        .title(Span::styled(" Detection Result ", styles::title()));
    let inner = block.inner(panel);
    block.render(panel, buf);

    let mut lines = screen.header();
    lines.extend([
        Line::default(),
        Line::styled(message, styles::error_text()),
        Line::default(),
        key_hints(),
    ]);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn render_report(screen: &ResultScreenView<'_>, report: &ReportView, area: Rect, buf: &mut Buffer) {
    let [header, verdict, meter, threshold, middle, cards, keys] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .areas(area);

    Paragraph::new(screen.header()).render(header, buf);

    Paragraph::new(Line::styled(report.verdict, styles::verdict(report.fraud_detected)))
        .alignment(Alignment::Center)
        .render(verdict, buf);

    ConfidenceMeter::new(report.confidence_ratio, &report.confidence_label)
        .fraud(report.fraud_detected)
        .intensity(report.meter_intensity)
        .render(meter, buf);

    Paragraph::new(Line::styled(
        report.threshold_label.as_str(),
        styles::text_secondary(),
    ))
    .alignment(Alignment::Right)
    .render(threshold, buf);

    let [chart, table] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(middle);
    render_bar_chart(
        chart,
        buf,
        &report.chart_categories,
        &report.chart_values,
        report.fraud_detected,
    );
    FactorTable::new(&report.factors).render(table, buf);

    MetricCards::new(&report.metrics).render(cards, buf);

    Paragraph::new(key_hints()).render(keys, buf);
}
