//! Detection form widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use taxguard_app::{DetectionForm, FormFocus};
use taxguard_core::{FormField, MODEL_LABEL};

use crate::layout::centered_rect;
use crate::theme::styles;

use super::input::visible_tail;

const PANEL_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 20;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct DetectionFormView<'a> {
    form: &'a DetectionForm,
    spinner_frame: usize,
}

impl<'a> DetectionFormView<'a> {
    pub fn new(form: &'a DetectionForm) -> Self {
        Self {
            form,
            spinner_frame: 0,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn row_style(&self, row: FormFocus) -> Style {
        if self.form.focus == row && !self.form.is_loading() {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        }
    }

    fn field_line(&self, field: FormField, value_width: usize) -> Line<'static> {
        let row = FormFocus::Field(field);
        let focused = self.form.focus == row && !self.form.is_loading();
        let value = visible_tail(self.form.record.get(field), value_width.saturating_sub(1));

        let mut spans = vec![
            Span::styled(format!(" {:<LABEL_WIDTH$}", field.label()), self.row_style(row)),
            Span::raw(" "),
            Span::styled(value.to_string(), styles::text_primary()),
        ];
        if focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn model_line(&self) -> Line<'static> {
        let selected = match self.form.record.model_type {
            Some(model) => Span::styled(format!("◀ {} ▶", model.display_name()), styles::accent()),
            None => Span::styled("◀ select a model ▶", styles::text_muted()),
        };
        Line::from(vec![
            Span::styled(
                format!(" {:<LABEL_WIDTH$}", MODEL_LABEL),
                self.row_style(FormFocus::Model),
            ),
            Span::raw(" "),
            selected,
        ])
    }

    fn submit_line(&self) -> Line<'static> {
        if self.form.is_loading() {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::styled(format!(" {} Analyzing...", frame), styles::accent()),
                Span::styled("  Esc cancel", styles::text_muted()),
            ])
        } else {
            Line::styled(" [ Detect Fraud ] ", self.row_style(FormFocus::Submit))
        }
    }
}

impl Widget for DetectionFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = FormField::ALL.len() as u16 + 2;
        // heading, gap, rows, gap, hint, keys + borders
        let panel = centered_rect(PANEL_WIDTH, rows + 7, area);
        let block = styles::glass_block(true)
            .title(Span::styled(" Fraud Detection ", styles::title()));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let [heading, _, body, _, hint, keys] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled(
            "Enter the financial details to analyze",
            styles::text_secondary(),
        ))
        .render(heading, buf);

        let value_width = (body.width as usize).saturating_sub(LABEL_WIDTH + 2);
        let mut lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|field| self.field_line(*field, value_width))
            .collect();
        lines.push(self.model_line());
        lines.push(self.submit_line());
        Paragraph::new(lines).render(body, buf);

        if let Some(message) = &self.form.hint {
            Paragraph::new(Line::styled(message.as_str(), styles::error_text())).render(hint, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("Tab/↑↓", styles::keybinding()),
            Span::styled(" move  ", styles::text_muted()),
            Span::styled("←→/Space", styles::keybinding()),
            Span::styled(" model  ", styles::text_muted()),
            Span::styled("Ctrl+U", styles::keybinding()),
            Span::styled(" clear  ", styles::text_muted()),
            Span::styled("Ctrl+S", styles::keybinding()),
            Span::styled(" submit", styles::text_muted()),
        ]))
        .render(keys, buf);
    }
}
