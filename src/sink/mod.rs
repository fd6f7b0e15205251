//! Submission sink receiving contacts that passed validation

mod memory;
mod traits;

pub use memory::SubmissionLog;
pub use traits::ContactSink;

#[cfg(test)]
pub use traits::MockContactSink;
