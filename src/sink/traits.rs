//! Trait abstraction for the submission collaborator to enable mocking in tests

use crate::state::{Contact, Submission};
use anyhow::Result;
use async_trait::async_trait;

/// Receives every contact that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSink: Send + Sync {
    /// Accept a contact and return the recorded submission
    async fn submit(&mut self, contact: Contact) -> Result<Submission>;

    /// Most recently accepted submission, if any
    async fn last_submission(&self) -> Option<Submission>;
}
