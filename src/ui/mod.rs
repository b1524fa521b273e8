//! User interface rendering module
//!
//! This module contains all TUI rendering logic using the ratatui library.
//! Each submodule renders one group of components.
//!
//! # Architecture
//!
//! - `inputs` - Currency and password inputs
//! - `display` - Secret, expandable text and QR code panels
//! - `status` - Status bar, event log and toasts
//! - `helpers` - Layout and control rendering utilities

mod display;
mod helpers;
mod inputs;
mod status;

use crate::App;
use display::{render_address, render_qr_panel, render_qr_popup, render_secret};
use inputs::{render_amount, render_password};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use status::{render_event_panel, render_status_bar, render_toasts};

/// Main UI rendering function
///
/// Lays out the header, the component columns and the status bar, then
/// draws overlays (QR popup, toasts) on top.
pub(crate) fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let header_text = format!(
        "satoshi-ui | Currency: {} | Locale: {} | Feedback: {}ms",
        app.config.currency,
        app.config.effective_locale(),
        app.config.feedback_duration_ms
    );

    let title = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Amount
            Constraint::Length(5), // Password
            Constraint::Length(6), // Secret
            Constraint::Min(6),    // Address
        ])
        .split(columns[0]);

    render_amount(f, app, left[0]);
    render_password(f, app, left[1]);
    render_secret(f, app, left[2]);
    render_address(f, app, left[3]);

    // Event log shares the right column with the QR panel when visible
    if app.show_events && !app.event_log.is_empty() {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[1]);
        render_qr_panel(f, app, right[0]);
        render_event_panel(f, app, right[1]);
    } else {
        render_qr_panel(f, app, columns[1]);
    }

    render_status_bar(f, app, chunks[2]);

    if app.show_qr {
        render_qr_popup(f, app);
    }
    render_toasts(f, app, chunks[1]);
}
