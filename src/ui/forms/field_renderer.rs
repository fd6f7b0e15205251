//! Field rendering utilities for forms

use crate::state::FieldState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a text field: bordered input plus one line for the error
pub const TEXT_FIELD_HEIGHT: u16 = 4;

/// Rows taken by the checkbox and its error line
pub const CHECKBOX_HEIGHT: u16 = 2;

fn border_color(state: &FieldState, is_active: bool) -> Color {
    match (state.is_invalid(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    }
}

fn error_line(state: &FieldState) -> Line<'_> {
    match state.message() {
        Some(msg) => Line::from(Span::styled(msg, Style::default().fg(Color::Red))),
        None => Line::from(""),
    }
}

/// Draw a single-line text input with its error text underneath
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    state: &FieldState,
    is_active: bool,
) {
    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let error_area = Rect {
        y: area.y + input_area.height,
        height: area.height.saturating_sub(input_area.height),
        ..area
    };

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { "▌" } else { "" };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(state, is_active)));

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(block);

    frame.render_widget(content, input_area);
    frame.render_widget(Paragraph::new(error_line(state)), error_area);
}

/// Draw the terms checkbox row with its error text underneath
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    state: &FieldState,
    is_active: bool,
) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mut label_style = Style::default().fg(border_color(state, is_active));
    if is_active {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {mark} "), label_style),
            Span::styled(label, label_style),
        ]),
        error_line(state),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
