//! Contributing-factor bar chart

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph, Widget},
};

use crate::theme::styles;

/// Draw one horizontal bar per category.
///
/// `values` are percentages (0-100). Bars take the verdict colour.
pub fn render_bar_chart(
    area: Rect,
    buf: &mut Buffer,
    categories: &[String],
    values: &[f64],
    fraud: bool,
) {
    let block = styles::glass_block(false).title(Span::styled(
        " Feature Importance ",
        styles::text_secondary(),
    ));

    if categories.is_empty() {
        Paragraph::new(Line::styled(
            "No contributing factors reported",
            styles::text_muted(),
        ))
        .block(block)
        .render(area, buf);
        return;
    }

    let bar_style = Style::default().fg(styles::verdict_color(fraud));
    let bars: Vec<Bar> = categories
        .iter()
        .zip(values)
        .map(|(name, value)| {
            Bar::default()
                .value(value.clamp(0.0, 100.0).round() as u64)
                .label(Line::from(name.clone()))
                .text_value(format!("{:.2}%", value))
                .style(bar_style)
                .value_style(styles::title())
        })
        .collect();

    BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(100)
        .label_style(styles::text_secondary())
        .data(BarGroup::default().bars(&bars))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_empty_chart_message() {
        let mut term = TestTerminal::with_size(50, 6);
        let area = term.area();
        term.draw_with(|frame| render_bar_chart(area, frame.buffer_mut(), &[], &[], true));
        assert!(term.buffer_contains("No contributing factors reported"));
    }

    #[test]
    fn test_bars_have_labels_and_values() {
        let mut term = TestTerminal::with_size(60, 6);
        let area = term.area();
        let categories = vec!["luxurySpending".to_string(), "expenses".to_string()];
        let values = vec![42.0, 18.5];

        term.draw_with(|frame| {
            render_bar_chart(area, frame.buffer_mut(), &categories, &values, true)
        });

        assert!(term.buffer_contains("luxurySpending"));
        assert!(term.buffer_contains("42.00%"));
        assert!(term.buffer_contains("18.50%"));
    }
}
