//! Submission records

use super::field::FormFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of the form taken on a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub agreed: bool,
}

impl From<&FormFields> for Contact {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            agreed: fields.agreed,
        }
    }
}

/// A contact accepted by a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub contact: Contact,
}

impl Submission {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            contact,
        }
    }

    /// Multi-line summary used by the success dialog and summary card
    pub fn summary(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nAgreed to terms: {}",
            self.contact.name,
            self.contact.email,
            self.contact.phone,
            if self.contact.agreed { "yes" } else { "no" },
        )
    }
}
