//! Contact form rendering

use super::field_renderer::{draw_checkbox, draw_text_field, CHECKBOX_HEIGHT, TEXT_FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Field, FocusSlot, TextField};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const TERMS_LABEL: &str = "I agree to the terms and conditions";

/// Draw the contact form: three inputs, the terms checkbox and the action row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEXT_FIELD_HEIGHT), // Name
            Constraint::Length(TEXT_FIELD_HEIGHT), // Email
            Constraint::Length(TEXT_FIELD_HEIGHT), // Phone
            Constraint::Length(CHECKBOX_HEIGHT),   // Terms
            Constraint::Length(BUTTON_HEIGHT),     // Actions
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let form = &app.state.form;
    let text_fields = [
        (TextField::Name, chunks[0]),
        (TextField::Email, chunks[1]),
        (TextField::Phone, chunks[2]),
    ];
    for (text_field, field_area) in text_fields {
        let field = Field::from(text_field);
        draw_text_field(
            frame,
            field_area,
            field.label(),
            form.fields().text(text_field),
            &form.field_state(field),
            app.state.focus.is_focused(FocusSlot::Input(field)),
        );
    }

    draw_checkbox(
        frame,
        chunks[3],
        TERMS_LABEL,
        form.fields().agreed,
        &form.field_state(Field::Terms),
        app.state.focus.is_focused(FocusSlot::Input(Field::Terms)),
    );

    draw_actions(frame, chunks[4], app);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Submit
            Constraint::Length(1),
            Constraint::Length(11), // Clear
            Constraint::Min(0),
        ])
        .split(area);

    render_action_button(
        frame,
        buttons[0],
        "Submit",
        app.state.focus.is_focused(FocusSlot::SubmitButton),
    );
    render_action_button(
        frame,
        buttons[2],
        "Clear",
        app.state.focus.is_focused(FocusSlot::ClearButton),
    );
}
