//! Semantic style builders

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use taxguard_core::MetricStatus;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn error_text() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// "Black on accent" - focused input row or button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Verdict styles ---
pub fn verdict_color(fraud: bool) -> Color {
    if fraud {
        palette::STATUS_RED
    } else {
        palette::STATUS_GREEN
    }
}

pub fn verdict(fraud: bool) -> Style {
    Style::default()
        .fg(verdict_color(fraud))
        .add_modifier(Modifier::BOLD)
}

/// Meter fill: red channel for fraud, green otherwise, scaled by intensity
pub fn meter_color(fraud: bool, intensity: f64) -> Color {
    let level = (255.0 * intensity.clamp(0.0, 1.0)).round() as u8;
    if fraud {
        Color::Rgb(level, 0, 0)
    } else {
        Color::Rgb(0, level, 0)
    }
}

pub fn metric_status(status: MetricStatus) -> Style {
    match status {
        MetricStatus::Suspicious => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
        MetricStatus::Normal => Style::default().fg(palette::STATUS_GREEN),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}
