//! Sink that writes accepted records to the log

use super::traits::SubmissionSink;
use crate::state::SignupRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Logs each accepted record with passwords masked
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn accept(&mut self, record: SignupRecord) -> Result<()> {
        let json = record.to_redacted_json()?;
        tracing::info!(id = %record.id, username = %record.username, "form submitted");
        tracing::info!("{json}");
        Ok(())
    }
}
