//! Field validators
//!
//! Each validator is a pure function of a single value. `None` means the
//! value is valid, `Some(message)` carries the human-readable error shown
//! under the field.

use super::field::Field;
use thiserror::Error;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

pub const NAME_ERROR: &str = "Name must be at least 2 characters";
pub const EMAIL_ERROR: &str = "Email must contain '@' and a '.' after it";
pub const PHONE_ERROR: &str = "Phone number must contain 10 to 15 digits";
pub const TERMS_ERROR: &str = "You must agree to the terms";

const MIN_NAME_CHARS: usize = 2;
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

/// A single field failing its validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldInvalid {
    pub field: Field,
    pub message: String,
}

/// Every field that was invalid when a submit was attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) invalid", .invalid.len())]
pub struct ValidationFailure {
    pub invalid: Vec<FieldInvalid>,
}

impl ValidationFailure {
    /// Invalid fields in form order
    pub fn fields(&self) -> Vec<Field> {
        self.invalid.iter().map(|i| i.field).collect()
    }
}

/// Length is counted in Unicode scalar values after trimming, so a single
/// astral character such as `𝒜` is one character.
pub fn validate_name(value: &str) -> Option<String> {
    if value.trim().chars().count() >= MIN_NAME_CHARS {
        None
    } else {
        Some(NAME_ERROR.to_string())
    }
}

/// Requires an '@' that is not the first character, followed somewhere
/// later by a '.'. Anything beyond that is accepted (`a@b.` passes).
pub fn validate_email(value: &str) -> Option<String> {
    let valid = match value.find('@') {
        Some(at) if at > 0 => value[at + 1..].contains('.'),
        _ => false,
    };
    if valid {
        None
    } else {
        Some(EMAIL_ERROR.to_string())
    }
}

/// Counts decimal digits (general category Nd) in any script. Separators and
/// other non-digit characters are ignored.
pub fn validate_phone(value: &str) -> Option<String> {
    let digits = value
        .chars()
        .filter(|c| c.general_category() == GeneralCategory::DecimalNumber)
        .count();
    if PHONE_DIGITS.contains(&digits) {
        None
    } else {
        Some(PHONE_ERROR.to_string())
    }
}

pub fn validate_terms(agreed: bool) -> Option<String> {
    if agreed {
        None
    } else {
        Some(TERMS_ERROR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn test_two_characters_is_valid() {
            assert!(validate_name("Al").is_none());
        }

        #[test]
        fn test_empty_is_invalid() {
            assert_eq!(validate_name(""), Some(NAME_ERROR.to_string()));
        }

        #[test]
        fn test_single_character_is_invalid() {
            assert!(validate_name("A").is_some());
        }

        #[test]
        fn test_whitespace_is_trimmed_before_counting() {
            assert!(validate_name("  A  ").is_some());
            assert!(validate_name("   ").is_some());
            assert!(validate_name(" Al ").is_none());
        }

        #[test]
        fn test_inner_whitespace_counts() {
            assert!(validate_name("A B").is_none());
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            assert!(validate_name("é").is_some());
            assert!(validate_name("Zoë").is_none());
        }

        #[test]
        fn test_astral_character_counts_once() {
            assert_eq!(validate_name("𝒜"), Some(NAME_ERROR.to_string()));
            assert!(validate_name(" 𝒜 ").is_some());
            assert!(validate_name("𝒜𝒜").is_none());
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_simple_address_is_valid() {
            assert!(validate_email("a@b.c").is_none());
            assert!(validate_email("someone@example.com").is_none());
        }

        #[test]
        fn test_trailing_dot_is_accepted() {
            assert!(validate_email("a@b.").is_none());
        }

        #[test]
        fn test_leading_at_is_rejected() {
            assert_eq!(validate_email("@b.com"), Some(EMAIL_ERROR.to_string()));
        }

        #[test]
        fn test_missing_at_is_rejected() {
            assert!(validate_email("bad").is_some());
            assert!(validate_email("bad.example.com").is_some());
        }

        #[test]
        fn test_dot_only_before_at_is_rejected() {
            assert!(validate_email("first.last@example").is_some());
        }

        #[test]
        fn test_dot_right_after_at_is_accepted() {
            assert!(validate_email("a@.").is_none());
        }

        #[test]
        fn test_only_first_at_is_considered() {
            assert!(validate_email("a@b@c.d").is_none());
            assert!(validate_email("@a@b.c").is_some());
        }

        #[test]
        fn test_empty_is_rejected() {
            assert!(validate_email("").is_some());
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_formatted_ten_digits_is_valid() {
            assert!(validate_phone("(555) 123-4567").is_none());
            assert!(validate_phone("555-123-4567").is_none());
        }

        #[test]
        fn test_seven_digits_is_invalid() {
            assert_eq!(validate_phone("555-1234"), Some(PHONE_ERROR.to_string()));
        }

        #[test]
        fn test_bounds_are_inclusive() {
            assert!(validate_phone("123456789").is_some());
            assert!(validate_phone("1234567890").is_none());
            assert!(validate_phone("123456789012345").is_none());
            assert!(validate_phone("1234567890123456").is_some());
        }

        #[test]
        fn test_letters_are_ignored() {
            assert!(validate_phone("+1 (555) CALL-NOW 1234567").is_none());
        }

        #[test]
        fn test_empty_is_invalid() {
            assert!(validate_phone("").is_some());
        }

        #[test]
        fn test_non_ascii_decimal_digits_count() {
            assert!(validate_phone("０１２３４５６７８９").is_none());
            assert!(validate_phone("٠١٢٣٤٥٦٧٨٩").is_none());
            assert!(validate_phone("(५५५) १२३-४५६७").is_none());
            assert!(validate_phone("٠١٢٣٤").is_some());
        }

        #[test]
        fn test_other_numeric_characters_are_not_digits() {
            // Superscripts are No, roman numerals are Nl
            assert!(validate_phone("¹²³⁴⁵⁶⁷⁸⁹⁰").is_some());
            assert!(validate_phone("ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩ").is_some());
            assert!(validate_phone("12345¹²³⁴⁵").is_some());
        }
    }

    mod terms {
        use super::*;

        #[test]
        fn test_agreed_is_valid() {
            assert!(validate_terms(true).is_none());
        }

        #[test]
        fn test_not_agreed_is_invalid() {
            assert_eq!(validate_terms(false), Some(TERMS_ERROR.to_string()));
        }
    }

    mod failure {
        use super::*;

        #[test]
        fn test_fields_and_messages() {
            let failure = ValidationFailure {
                invalid: vec![
                    FieldInvalid {
                        field: Field::Email,
                        message: EMAIL_ERROR.to_string(),
                    },
                    FieldInvalid {
                        field: Field::Terms,
                        message: TERMS_ERROR.to_string(),
                    },
                ],
            };
            assert_eq!(failure.fields(), vec![Field::Email, Field::Terms]);
            assert_eq!(failure.to_string(), "2 field(s) invalid");
        }

        #[test]
        fn test_field_invalid_display() {
            let err = FieldInvalid {
                field: Field::Phone,
                message: PHONE_ERROR.to_string(),
            };
            assert_eq!(err.to_string(), format!("Phone: {PHONE_ERROR}"));
        }
    }
}
