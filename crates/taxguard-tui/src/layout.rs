//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Active screen content
    pub body: Rect,

    /// One-line status bar at the bottom
    pub status: Rect,
}

/// Split the terminal into body and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let [body, status] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    ScreenAreas { body, status }
}

/// A `width` x `height` box centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
