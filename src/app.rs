//! Application state and core logic

use crate::config::FormConfig;
use crate::platform::COPY_MODIFIER;
use crate::sink::{ContactSink, SubmissionLog};
use crate::state::{
    AppState, Contact, Dialog, Field, FieldInvalid, FocusSlot, SnackbarKind, ValidationFailure,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives contacts that pass validation
    sink: Box<dyn ContactSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the in-memory submission log
    pub fn new(config: &FormConfig) -> Self {
        let mut state = AppState::default();
        config.apply(&mut state);
        Self::with_sink(state, Box::new(SubmissionLog::new()))
    }

    pub fn with_sink(state: AppState, sink: Box<dyn ContactSink>) -> Self {
        Self {
            state,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.expire_snackbar();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        let focused = self.state.focused();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('r') if ctrl => self.clear(),
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => {
                self.copy_last_contact().await
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter => match focused {
                // "Next" on the first two inputs, "Done" on the phone input
                Some(FocusSlot::Input(Field::Name | Field::Email)) => {
                    self.state.next_form_field()
                }
                Some(FocusSlot::Input(Field::Phone)) | Some(FocusSlot::SubmitButton) => {
                    self.submit().await
                }
                Some(FocusSlot::Input(Field::Terms)) => self.toggle_terms(),
                Some(FocusSlot::ClearButton) => self.clear(),
                None => {}
            },
            KeyCode::Char(' ') if focused == Some(FocusSlot::Input(Field::Terms)) => {
                self.toggle_terms()
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(field) = focused.and_then(FocusSlot::text_field) {
                    self.state.form.push_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focused.and_then(FocusSlot::text_field) {
                    self.state.form.pop_char(field);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn toggle_terms(&mut self) {
        let agreed = !self.state.form.fields().agreed;
        self.state.form.on_terms_toggle(agreed);
    }

    /// Validate the form and hand the contact to the sink
    async fn submit(&mut self) {
        let result = self.state.form.submit();
        if let Some(target) = self.state.form.focus_target() {
            self.state.focus.apply(target);
        }

        match result {
            Ok(contact) => self.deliver(contact).await,
            Err(failure) => self.report_invalid(&failure),
        }
    }

    async fn deliver(&mut self, contact: Contact) {
        match self.sink.submit(contact).await {
            Ok(submission) => {
                self.state.last_submission = Some(submission.clone());
                self.state.dialog = Some(Dialog::Submitted(submission));
                self.state
                    .show_snackbar("Contact submitted", SnackbarKind::Success);
            }
            Err(e) => {
                tracing::warn!("Submission failed: {e:#}");
                self.state.push_error(format!("Failed to submit contact: {e}"));
            }
        }
    }

    fn report_invalid(&mut self, failure: &ValidationFailure) {
        for FieldInvalid { field, message } in &failure.invalid {
            tracing::debug!(%field, "Submit blocked: {message}");
        }
        self.state.show_snackbar(
            format!(
                "Please fix the highlighted fields ({} invalid)",
                failure.invalid.len()
            ),
            SnackbarKind::Error,
        );
    }

    fn clear(&mut self) {
        self.state.clear_form();
        if self.state.clear_confirmation {
            self.state.show_snackbar("Cleared", SnackbarKind::Info);
        }
    }

    /// Copy the sink's last accepted contact to the clipboard as JSON
    async fn copy_last_contact(&mut self) {
        let Some(submission) = self.sink.last_submission().await else {
            self.state
                .show_snackbar("Nothing submitted yet", SnackbarKind::Info);
            return;
        };

        let result = serde_json::to_string_pretty(&submission.contact)
            .map_err(anyhow::Error::from)
            .and_then(|json| copy_to_clipboard(&json));
        match result {
            Ok(()) => self
                .state
                .show_snackbar("Copied contact to clipboard", SnackbarKind::Success),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e:#}");
                self.state.push_error(format!("Failed to copy contact: {e}"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
