//! Single-line text input box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const CURSOR: &str = "▏";

/// Bordered input showing `value`, with a cursor when focused
pub struct InputLine<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
}

impl<'a> InputLine<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Keep the tail of `value` that fits in `width` columns
pub(crate) fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

impl Widget for InputLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            format!(" {} ", self.label),
            if self.focused {
                styles::accent()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        // One column reserved for the cursor
        let shown = visible_tail(self.value, (inner.width as usize).saturating_sub(1));
        let mut spans = vec![Span::styled(shown.to_string(), styles::text_primary())];
        if self.focused {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
