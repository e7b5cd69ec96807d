//! Submission sinks for accepted signup records

mod log_sink;
mod memory_sink;
mod traits;

pub use log_sink::LogSink;
pub use memory_sink::MemorySink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::config::SinkKind;

/// Build the sink selected in the configuration
pub fn build_sink(kind: SinkKind) -> Box<dyn SubmissionSink> {
    match kind {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::Memory => Box::new(MemorySink::new()),
    }
}
