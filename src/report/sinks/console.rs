use anyhow::Result;

use crate::report::{ReportRecord, ReportSink};

/// Sink emitting one structured log line per record.
pub struct LogSink {
    emitted: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self { emitted: 0 }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn emit(&mut self, record: &ReportRecord) -> Result<()> {
        self.emitted += 1;
        log::info!(
            "report #{}: label={} score={:.2}",
            self.emitted,
            record.label,
            record.score
        );
        Ok(())
    }
}
