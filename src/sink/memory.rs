//! In-memory submission log
//!
//! Keeps accepted contacts for the lifetime of the process. Nothing is
//! written to disk or sent anywhere.

use super::traits::ContactSink;
use crate::state::{Contact, Submission};
use anyhow::{bail, Result};
use async_trait::async_trait;

/// Sink that records submissions in memory
#[derive(Debug, Default)]
pub struct SubmissionLog {
    submissions: Vec<Submission>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactSink for SubmissionLog {
    async fn submit(&mut self, contact: Contact) -> Result<Submission> {
        if !contact.agreed {
            bail!("Refusing contact without terms agreement");
        }
        let submission = Submission::new(contact);
        tracing::info!(
            id = %submission.id,
            email = %submission.contact.email,
            "Contact submitted"
        );
        self.submissions.push(submission.clone());
        Ok(submission)
    }

    async fn last_submission(&self) -> Option<Submission> {
        self.submissions.last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contact(agreed: bool) -> Contact {
        Contact {
            name: "Al".into(),
            email: "a@b.c".into(),
            phone: "555-123-4567".into(),
            agreed,
        }
    }

    #[tokio::test]
    async fn test_submit_records_contact() {
        let mut log = SubmissionLog::new();
        let submission = log.submit(contact(true)).await.unwrap();
        assert_eq!(submission.contact, contact(true));
        assert_eq!(log.last_submission().await, Some(submission));
    }

    #[tokio::test]
    async fn test_last_submission_is_most_recent() {
        let mut log = SubmissionLog::new();
        assert!(log.last_submission().await.is_none());
        let first = log.submit(contact(true)).await.unwrap();
        let second = log.submit(contact(true)).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(log.last_submission().await.map(|s| s.id), Some(second.id));
    }

    #[tokio::test]
    async fn test_rejects_contact_without_agreement() {
        let mut log = SubmissionLog::new();
        assert!(log.submit(contact(false)).await.is_err());
        assert!(log.last_submission().await.is_none());
    }
}
