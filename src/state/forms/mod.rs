//! Form domain layer
//!
//! Type-safe handling of the contact form: field values, validators, the
//! validation engine and the keyboard focus ring.

mod contact;
mod field;
mod focus;
mod form_state;
mod validation;

pub use contact::{Contact, Submission};
pub use field::{Field, FieldState, FormErrors, FormFields, TextField};
pub use focus::{FocusRing, FocusSlot};
pub use form_state::{ContactForm, FocusTarget};
pub use validation::{FieldInvalid, ValidationFailure};
