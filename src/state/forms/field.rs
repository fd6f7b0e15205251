//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Phone,
    Terms,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Terms];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Terms => "Terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The subset of fields that take free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Email,
    Phone,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => Field::Name,
            TextField::Email => Field::Email,
            TextField::Phone => Field::Phone,
        }
    }
}

impl TryFrom<Field> for TextField {
    type Error = Field;

    fn try_from(field: Field) -> Result<Self, Self::Error> {
        match field {
            Field::Name => Ok(TextField::Name),
            Field::Email => Ok(TextField::Email),
            Field::Phone => Ok(TextField::Phone),
            Field::Terms => Err(field),
        }
    }
}

/// Derived validation state of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    /// Empty and never validated
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Current values of the four inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub agreed: bool,
}

impl FormFields {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
        }
    }

    pub(super) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
        }
    }

    pub fn is_empty(&self, field: Field) -> bool {
        match TextField::try_from(field) {
            Ok(text) => self.text(text).is_empty(),
            Err(_) => !self.agreed,
        }
    }
}

/// Error slot per field, `None` when valid or never validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub phone_error: Option<String>,
    pub terms_error: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name_error.as_deref(),
            Field::Email => self.email_error.as_deref(),
            Field::Phone => self.phone_error.as_deref(),
            Field::Terms => self.terms_error.as_deref(),
        }
    }

    pub(super) fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name_error,
            Field::Email => &mut self.email_error,
            Field::Phone => &mut self.phone_error,
            Field::Terms => &mut self.terms_error,
        }
    }

    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Fields currently showing an error, in form order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_conversions() {
        assert_eq!(Field::from(TextField::Email), Field::Email);
        assert_eq!(TextField::try_from(Field::Phone), Ok(TextField::Phone));
        assert_eq!(TextField::try_from(Field::Terms), Err(Field::Terms));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Field::Name.to_string(), "Name");
        assert_eq!(format!("{}", Field::Terms), "Terms");
    }

    #[test]
    fn test_is_empty() {
        let mut fields = FormFields::default();
        assert!(Field::ALL.iter().all(|f| fields.is_empty(*f)));
        fields.email.push('a');
        assert!(!fields.is_empty(Field::Email));
        assert!(fields.is_empty(Field::Name));
    }

    #[test]
    fn test_errors_invalid_fields_in_form_order() {
        let errors = FormErrors {
            terms_error: Some("t".into()),
            name_error: Some("n".into()),
            ..Default::default()
        };
        assert_eq!(errors.invalid_fields(), vec![Field::Name, Field::Terms]);
        assert!(!errors.is_clear());
        assert!(FormErrors::default().is_clear());
    }

    #[test]
    fn test_field_state_message() {
        assert_eq!(FieldState::Invalid("bad".into()).message(), Some("bad"));
        assert!(FieldState::Valid.message().is_none());
        assert!(!FieldState::Untouched.is_invalid());
    }
}
