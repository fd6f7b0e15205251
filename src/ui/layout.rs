//! Layout components (form area, summary card, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FocusSlot, Snackbar, SnackbarKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the summary card (borders + four lines)
pub const SUMMARY_HEIGHT: u16 = 6;

/// Screen regions for the form view
pub struct ScreenLayout {
    pub form: Rect,
    pub summary: Option<Rect>,
    pub status: Rect,
}

/// Split the screen into form, optional summary card and status bar
pub fn create_layout(area: Rect, with_summary: bool) -> ScreenLayout {
    let summary_height = if with_summary { SUMMARY_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                 // Form
            Constraint::Length(summary_height), // Summary card
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    ScreenLayout {
        form: chunks[0],
        summary: with_summary.then_some(chunks[1]),
        status: chunks[2],
    }
}

/// Draw the status bar: snackbar if one is showing, key hints otherwise
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.snackbar {
        Some(snackbar) => snackbar_line(snackbar),
        None => Line::from(Span::styled(
            get_hints(app.state.focused()),
            Style::default().fg(Color::Gray),
        )),
    };

    let status = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn snackbar_line(snackbar: &Snackbar) -> Line<'_> {
    let color = if snackbar.is_fading() {
        Color::Gray
    } else {
        match snackbar.kind {
            SnackbarKind::Info => Color::White,
            SnackbarKind::Success => Color::Green,
            SnackbarKind::Error => Color::Red,
        }
    };
    Line::from(Span::styled(
        format!(" {} ", snackbar.message),
        Style::default().fg(color),
    ))
}

/// Keyboard hints for the focused element
fn get_hints(focused: Option<FocusSlot>) -> String {
    use crate::state::Field;

    let action = match focused {
        Some(FocusSlot::Input(Field::Name | Field::Email)) => "Enter:next",
        Some(FocusSlot::Input(Field::Phone)) => "Enter:done",
        Some(FocusSlot::Input(Field::Terms)) => "Space:toggle",
        Some(FocusSlot::SubmitButton) => "Enter:submit",
        Some(FocusSlot::ClearButton) => "Enter:clear",
        None => "Tab:focus form",
    };
    format!(" Tab/↑↓:nav  {action}  {SUBMIT_SHORTCUT}  {CLEAR_SHORTCUT}  {COPY_SHORTCUT}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;
    use std::time::Duration;

    #[test]
    fn test_layout_without_summary() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), false);
        assert!(layout.summary.is_none());
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.form.height, 23);
    }

    #[test]
    fn test_layout_with_summary() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), true);
        let summary = layout.summary.unwrap();
        assert_eq!(summary.height, SUMMARY_HEIGHT);
        assert_eq!(layout.form.height, 24 - 1 - SUMMARY_HEIGHT);
    }

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_hints(Some(FocusSlot::Input(Field::Name))).contains("Enter:next"));
        assert!(get_hints(Some(FocusSlot::Input(Field::Phone))).contains("Enter:done"));
        assert!(get_hints(Some(FocusSlot::Input(Field::Terms))).contains("Space:toggle"));
        assert!(get_hints(None).contains("Tab:focus form"));
    }

    #[test]
    fn test_snackbar_line_colors() {
        let snackbar = Snackbar::new("Cleared", SnackbarKind::Error, Duration::from_secs(60));
        let line = snackbar_line(&snackbar);
        assert_eq!(line.spans[0].style.fg, Some(Color::Red));
        assert_eq!(line.spans[0].content, " Cleared ");
    }
}
