//! Currency and password input rendering

use super::helpers::{component_block, control_span};
use crate::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the amount field: symbol, value or placeholder, and the
/// canonical value last handed to the change handler
pub(crate) fn render_amount(f: &mut Frame, app: &App, area: Rect) {
    let input = &app.amount;
    let focused = app.focus == Focus::Amount;
    let display = input.display_value();

    let value = if display.is_empty() {
        Span::styled(input.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(display, Style::default().add_modifier(Modifier::BOLD))
    };
    let cursor = if focused { "▏" } else { "" };

    let canonical = if app.last_amount.is_empty() {
        "-".to_string()
    } else {
        app.last_amount.clone()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", input.symbol()),
                Style::default().fg(Color::Yellow),
            ),
            value,
            Span::raw(cursor),
        ]),
        Line::from(Span::styled(
            format!(
                "canonical: {}  locale: {}  max decimals: {}",
                canonical,
                input.locale(),
                input.currency().max_decimals()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let title = input.label().unwrap_or("Amount");
    let paragraph = Paragraph::new(lines).block(component_block(title, focused));
    f.render_widget(paragraph, area);
}

/// Renders the password field with its reveal toggle and live status
pub(crate) fn render_password(f: &mut Frame, app: &App, area: Rect) {
    let input = &app.password;
    let focused = app.focus == Focus::Password;

    let shown = if input.is_revealed() {
        app.password_text.clone()
    } else {
        "•".repeat(app.password_text.chars().count())
    };
    let cursor = if focused { "▏" } else { "" };

    let lines = vec![
        Line::from(vec![
            Span::raw(shown),
            Span::raw(cursor),
            Span::raw("  "),
            control_span(&input.toggle_control()),
        ]),
        Line::from(Span::styled(
            input.status_text(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let title = input.input_aria_label();
    let title = if title.is_empty() { "Password" } else { title.as_str() };
    let paragraph = Paragraph::new(lines).block(component_block(title, focused));
    f.render_widget(paragraph, area);
}
