//! Sink that keeps accepted records in memory

use super::traits::SubmissionSink;
use crate::state::SignupRecord;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<SignupRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn records(&self) -> &[SignupRecord] {
        &self.records
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn accept(&mut self, record: SignupRecord) -> Result<()> {
        tracing::debug!(id = %record.id, held = self.records.len() + 1, "record stored");
        self.records.push(record);
        Ok(())
    }
}
