//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::SignupRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Receives records that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Short name used in logs and the status bar
    fn name(&self) -> &'static str;

    /// Hand over an accepted record
    async fn accept(&mut self, record: SignupRecord) -> Result<()>;
}
