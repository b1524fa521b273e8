//! UI utility functions
//!
//! Helper functions for UI layout and rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};
use satoshi_ui::components::ControlState;
use satoshi_ui::CopyState;

/// Creates a centered rectangle within a given area
///
/// Useful for creating modal dialogs and popups. Centers the rectangle
/// both horizontally and vertically.
///
/// # Arguments
/// - `percent_x` - Width as a percentage (0-100)
/// - `percent_y` - Height as a percentage (0-100)
/// - `r` - The parent rectangle to center within
///
/// # Returns
/// A Rect centered within the parent area
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Bordered block whose border highlights when the component has focus
pub(crate) fn component_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border)
}

/// Renders a control as a bracketed label, colored by its copy status
pub(crate) fn control_span(control: &ControlState) -> Span<'static> {
    let style = match control.copy_status {
        Some(CopyState::Success) => Style::default().fg(Color::Green),
        Some(CopyState::Error) => Style::default().fg(Color::Red),
        Some(CopyState::Copying) => Style::default().fg(Color::DarkGray),
        Some(CopyState::Idle) | None if control.pressed == Some(true) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Some(CopyState::Idle) | None => Style::default().fg(Color::Cyan),
    };
    let style = if control.disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    };
    Span::styled(format!("[{}]", control.text), style)
}
