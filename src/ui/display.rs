//! Secret, expandable text and QR code rendering

use super::helpers::{centered_rect, component_block, control_span};
use crate::{App, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn status_line(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// Renders the masked secret with its reveal and copy controls
pub(crate) fn render_secret(f: &mut Frame, app: &App, area: Rect) {
    let secret = &app.secret;
    let focused = app.focus == Focus::Secret;

    let mut controls = vec![control_span(&secret.reveal_control())];
    if let Some(copy) = secret.copy_control() {
        controls.push(Span::raw(" "));
        controls.push(control_span(&copy));
    }

    let lines = vec![
        Line::from(secret.display_text()),
        Line::from(controls),
        status_line(secret.status_text()),
    ];

    let title = secret.description();
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(component_block(&title, focused));
    f.render_widget(paragraph, area);
}

/// Renders the address with its expand and copy controls
pub(crate) fn render_address(f: &mut Frame, app: &App, area: Rect) {
    let text = &app.address;
    let focused = app.focus == Focus::Address;

    let mut controls = Vec::new();
    if let Some(toggle) = text.toggle_control() {
        controls.push(control_span(&toggle));
    }
    if let Some(copy) = text.copy_control() {
        if !controls.is_empty() {
            controls.push(Span::raw(" "));
        }
        controls.push(control_span(&copy));
    }

    let lines = vec![
        Line::from(text.display_text()),
        Line::from(controls),
        status_line(text.status_text()),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(component_block(text.label(), focused));
    f.render_widget(paragraph, area);
}

/// Renders the QR summary: encoded value, description and copy button
pub(crate) fn render_qr_panel(f: &mut Frame, app: &App, area: Rect) {
    let qr = &app.qr;
    let focused = app.focus == Focus::Qr;

    let mut lines = vec![Line::from(qr.value().to_string())];
    if let Some(description) = qr.description() {
        lines.push(status_line(description.to_string()));
    }
    let mut controls = vec![control_span(&qr.button_control())];
    if let Some(feedback) = qr.feedback_text() {
        controls.push(Span::raw(format!(" {}", feedback)));
    }
    lines.push(Line::from(controls));
    lines.push(status_line(qr.status_text()));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(component_block(qr.label(), focused));
    f.render_widget(paragraph, area);
}

/// Renders the QR matrix in a popup
pub(crate) fn render_qr_popup(f: &mut Frame, app: &App) {
    let area = centered_rect(80, 90, f.area());

    let body = match app.qr.render_text() {
        Ok(matrix) => Paragraph::new(matrix).alignment(Alignment::Center),
        Err(e) => Paragraph::new(format!("Cannot render QR code: {}", e))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true }),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.qr.label())
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, area);
    f.render_widget(body.block(block), area);
}
