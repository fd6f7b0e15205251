//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use crate::state::Dialog;
use components::render_submitted_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area(), app.state.show_summary);

    forms::draw_contact_form(frame, screen.form, app);

    if let Some(summary_area) = screen.summary {
        summary::draw(frame, summary_area, app);
    }

    layout::draw_status_bar(frame, screen.status, app);

    // Dialogs render on top of everything else
    if let Some(Dialog::Submitted(submission)) = &app.state.dialog {
        render_submitted_dialog(frame, submission);
    }
}
