//! Application state definitions

use super::forms::{ContactForm, FocusRing, FocusSlot, Submission};
use super::snackbar::{Snackbar, SnackbarKind};
use std::time::Duration;

/// Default time a snackbar stays on screen
pub const DEFAULT_SNACKBAR_DURATION: Duration = Duration::from_millis(3000);

/// Modal overlay on top of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Shown after a successful submit
    Submitted(Submission),
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Form
    pub form: ContactForm,
    pub focus: FocusRing,

    // Outcomes
    pub last_submission: Option<Submission>,
    pub dialog: Option<Dialog>,
    pub snackbar: Option<Snackbar>,

    // Preferences
    pub show_summary: bool,
    pub clear_confirmation: bool,
    pub snackbar_duration: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: ContactForm::new(),
            focus: FocusRing::new(),
            last_submission: None,
            dialog: None,
            snackbar: None,
            show_summary: true,
            clear_confirmation: true,
            snackbar_duration: DEFAULT_SNACKBAR_DURATION,
        }
    }
}

impl AppState {
    pub fn next_form_field(&mut self) {
        self.focus.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.focus.prev_field();
    }

    pub fn focused(&self) -> Option<FocusSlot> {
        self.focus.current()
    }

    /// Show a snackbar, replacing any current one
    pub fn show_snackbar(&mut self, message: impl Into<String>, kind: SnackbarKind) {
        self.snackbar = Some(Snackbar::new(message, kind, self.snackbar_duration));
    }

    /// Drop the snackbar once its time is up
    pub fn expire_snackbar(&mut self) {
        if self.snackbar.as_ref().is_some_and(Snackbar::is_expired) {
            self.snackbar = None;
        }
    }

    /// Report a sink or clipboard failure without interrupting the form
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.show_snackbar(message, SnackbarKind::Error);
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Reset the form and put focus back on the first field
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.focus = FocusRing::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{Contact, Field, TextField};

    fn submission() -> Submission {
        Submission::new(Contact {
            name: "Al".into(),
            email: "a@b.c".into(),
            phone: "5551234567".into(),
            agreed: true,
        })
    }

    #[test]
    fn test_default_focuses_name() {
        let state = AppState::default();
        assert_eq!(state.focused(), Some(FocusSlot::Input(Field::Name)));
        assert!(state.show_summary);
        assert!(state.clear_confirmation);
        assert_eq!(state.snackbar_duration, DEFAULT_SNACKBAR_DURATION);
    }

    #[test]
    fn test_navigation_delegates_to_focus_ring() {
        let mut state = AppState::default();
        state.next_form_field();
        assert_eq!(state.focused(), Some(FocusSlot::Input(Field::Email)));
        state.prev_form_field();
        state.prev_form_field();
        assert_eq!(state.focused(), Some(FocusSlot::ClearButton));
    }

    #[test]
    fn test_show_snackbar_replaces_previous() {
        let mut state = AppState::default();
        state.show_snackbar("first", SnackbarKind::Info);
        state.show_snackbar("second", SnackbarKind::Error);
        let snackbar = state.snackbar.as_ref().unwrap();
        assert_eq!(snackbar.message, "second");
        assert_eq!(snackbar.kind, SnackbarKind::Error);
    }

    #[test]
    fn test_expire_snackbar() {
        let mut state = AppState {
            snackbar_duration: Duration::ZERO,
            ..Default::default()
        };
        state.show_snackbar("gone", SnackbarKind::Info);
        state.expire_snackbar();
        assert!(state.snackbar.is_none());

        state.snackbar_duration = Duration::from_secs(60);
        state.show_snackbar("stays", SnackbarKind::Info);
        state.expire_snackbar();
        assert!(state.snackbar.is_some());
    }

    #[test]
    fn test_dialog_lifecycle() {
        let mut state = AppState::default();
        assert!(!state.has_dialog());
        state.dialog = Some(Dialog::Submitted(submission()));
        assert!(state.has_dialog());
        state.dismiss_dialog();
        assert!(!state.has_dialog());
    }

    #[test]
    fn test_push_error_shows_error_snackbar() {
        let mut state = AppState::default();
        state.push_error("clipboard unavailable");
        assert!(!state.has_dialog());
        let snackbar = state.snackbar.as_ref().unwrap();
        assert_eq!(snackbar.message, "clipboard unavailable");
        assert_eq!(snackbar.kind, SnackbarKind::Error);
    }

    #[test]
    fn test_clear_form_resets_values_and_focus() {
        let mut state = AppState::default();
        state.form.on_field_change(TextField::Name, "A");
        state.focus.focus(FocusSlot::ClearButton);
        state.last_submission = Some(submission());
        state.clear_form();
        assert!(state.form.fields().name.is_empty());
        assert!(state.form.errors().is_clear());
        assert_eq!(state.focused(), Some(FocusSlot::Input(Field::Name)));
        // The summary card is independent of the form contents
        assert!(state.last_submission.is_some());
    }
}
