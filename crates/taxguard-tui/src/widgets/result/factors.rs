//! Contributing-factor table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table, Widget},
};
use taxguard_app::result_view::FactorRow;

use crate::theme::styles;

pub struct FactorTable<'a> {
    rows: &'a [FactorRow],
}

impl<'a> FactorTable<'a> {
    pub fn new(rows: &'a [FactorRow]) -> Self {
        Self { rows }
    }
}

impl Widget for FactorTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Feature", "Value", "Importance", "Direction"])
            .style(styles::text_secondary());

        let rows = self.rows.iter().map(|f| {
            let direction_style = match f.direction {
                "high" => styles::error_text(),
                "low" => styles::accent(),
                _ => styles::text_muted(),
            };
            Row::new([
                Cell::from(f.feature.as_str()).style(styles::text_primary()),
                Cell::from(f.value.as_str()).style(styles::text_primary()),
                Cell::from(f.importance.as_str()).style(styles::text_primary()),
                Cell::from(f.direction).style(direction_style),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(styles::glass_block(false).title(Span::styled(
            " Top Contributing Factors ",
            styles::text_secondary(),
        )))
        .render(area, buf);
    }
}
