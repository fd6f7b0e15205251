//! Confirmation shown after a contact is submitted

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::state::Submission;
use ratatui::{style::Color, Frame};

pub fn render_submitted_dialog(frame: &mut Frame, submission: &Submission) {
    let message = submission.summary();
    render_dialog(
        frame,
        DialogConfig {
            title: "Contact submitted",
            accent: Color::Green,
            message: &message,
            hint: dismiss_hint(),
            max_width: 60,
        },
    );
}
