//! Contact form validation engine
//!
//! Owns the field values and the error slots derived from them. The UI
//! sends edits, submits and clears; the engine answers with new state, a
//! focus hint and, on success, a [`Contact`] snapshot. Invalid input is
//! always data here, never an error, except for the aggregate returned by
//! [`ContactForm::submit`].

use super::contact::Contact;
use super::field::{Field, FieldState, FormErrors, FormFields, TextField};
use super::validation::{
    validate_email, validate_name, validate_phone, validate_terms, FieldInvalid,
    ValidationFailure,
};

/// Where input focus should go after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// Submit succeeded, nothing should hold focus
    Clear,
    /// Submit failed, every invalid field in form order. The UI picks one.
    Invalid(Vec<Field>),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: FormErrors,
    focus_target: Option<FocusTarget>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Focus hint from the most recent submit, if any
    pub fn focus_target(&self) -> Option<&FocusTarget> {
        self.focus_target.as_ref()
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        match self.errors.get(field) {
            Some(msg) => FieldState::Invalid(msg.to_string()),
            None if self.fields.is_empty(field) => FieldState::Untouched,
            None => FieldState::Valid,
        }
    }

    /// Set a text field and revalidate it.
    ///
    /// The edited field is always revalidated. Other fields are only
    /// revalidated while they are already showing an error, so an untouched
    /// field never lights up because a neighbour changed.
    pub fn on_field_change(&mut self, field: TextField, value: impl Into<String>) {
        *self.fields.text_mut(field) = value.into();
        self.revalidate(field.into());
    }

    pub fn on_terms_toggle(&mut self, agreed: bool) {
        self.fields.agreed = agreed;
        self.revalidate(Field::Terms);
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, field: TextField, c: char) {
        let mut value = self.fields.text(field).to_string();
        value.push(c);
        self.on_field_change(field, value);
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, field: TextField) {
        let mut value = self.fields.text(field).to_string();
        if value.pop().is_some() {
            self.on_field_change(field, value);
        }
    }

    /// Run every validator and overwrite every error slot.
    /// Returns true iff all fields are valid.
    pub fn validate_all(&mut self) -> bool {
        for field in Field::ALL {
            *self.errors.slot_mut(field) = self.run_validator(field);
        }
        self.errors.is_clear()
    }

    pub fn submit(&mut self) -> Result<Contact, ValidationFailure> {
        if self.validate_all() {
            self.focus_target = Some(FocusTarget::Clear);
            tracing::debug!("Contact form passed validation");
            return Ok(Contact::from(&self.fields));
        }

        let fields = self.errors.invalid_fields();
        let invalid: Vec<FieldInvalid> = fields
            .iter()
            .filter_map(|&field| {
                self.errors.get(field).map(|msg| FieldInvalid {
                    field,
                    message: msg.to_string(),
                })
            })
            .collect();
        self.focus_target = Some(FocusTarget::Invalid(fields));
        tracing::debug!("Contact form rejected: {} invalid field(s)", invalid.len());
        Err(ValidationFailure { invalid })
    }

    /// Reset every field and error slot. Idempotent.
    pub fn clear(&mut self) {
        self.fields = FormFields::default();
        self.errors = FormErrors::default();
        self.focus_target = None;
    }

    fn revalidate(&mut self, edited: Field) {
        *self.errors.slot_mut(edited) = self.run_validator(edited);
        for field in Field::ALL {
            if field != edited && self.errors.get(field).is_some() {
                *self.errors.slot_mut(field) = self.run_validator(field);
            }
        }
    }

    fn run_validator(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => validate_name(&self.fields.name),
            Field::Email => validate_email(&self.fields.email),
            Field::Phone => validate_phone(&self.fields.phone),
            Field::Terms => validate_terms(self.fields.agreed),
        }
    }
}
