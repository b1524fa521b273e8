//! Status bar, event log and toast rendering
//!
//! Handles the rendering of the status bar (showing keyboard shortcuts),
//! the event log panel and the toast stack.

use super::helpers::centered_rect;
use crate::{App, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use satoshi_ui::components::ToastKind;
use std::time::Instant;

/// Renders the status bar with shortcuts for the focused component
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
/// - `area` - The screen area to render in
pub(crate) fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let shortcuts_text = if app.show_qr {
        "[v/Esc] Close QR  [c] Copy"
    } else {
        match app.focus {
            Focus::Amount => "[0-9 . ,] Type  [Enter] Format  [Ctrl+V] Paste  [Ctrl+U] Currency  [Tab] Next  [Esc] Quit",
            Focus::Password => "[Type] Edit  [Enter] Reveal/Hide  [Tab] Next  [Esc] Quit",
            Focus::Secret => "[r] Reveal/Hide  [c] Copy  [e] Events  [Tab] Next  [q] Quit",
            Focus::Address => "[r] Expand/Collapse  [c] Copy  [e] Events  [Tab] Next  [q] Quit",
            Focus::Qr => "[c] Copy URI  [v] View QR  [e] Events  [Tab] Next  [q] Quit",
        }
    };

    let status_bar = Paragraph::new(shortcuts_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

    f.render_widget(status_bar, area);
}

/// Renders the event log, newest first
pub(crate) fn render_event_panel(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Events ({}) - Press 'e' to hide", app.event_log.len());

    let events: Vec<ListItem> = app
        .event_log
        .iter()
        .rev()
        .take(20)
        .map(|(timestamp, message)| {
            let time_str = timestamp.format("%H:%M:%S").to_string();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", time_str),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(message.as_str()),
            ]))
        })
        .collect();

    let list = List::new(events).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(list, area);
}

/// Renders visible toasts stacked at the bottom of `area`
pub(crate) fn render_toasts(f: &mut Frame, app: &App, area: Rect) {
    let now = Instant::now();
    let toasts: Vec<_> = app.toasts.visible(now).collect();
    if toasts.is_empty() || area.height < 3 {
        return;
    }

    let popup = centered_rect(60, 100, area);
    let height = (toasts.len() as u16 * 3).min(area.height / 3 * 3);
    let mut y = area.y + area.height - height;

    for toast in toasts {
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Cyan,
        };
        let rect = Rect::new(popup.x, y, popup.width, 3);
        let paragraph = Paragraph::new(toast.message.as_str())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(paragraph, rect);

        y += 3;
        if y + 3 > area.y + area.height {
            break;
        }
    }
}
