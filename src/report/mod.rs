//! Result reporting.
//!
//! The reporter is the pipeline's outbound boundary: it widens a
//! `ScoreResult` into the externally visible `ReportRecord` and hands it to
//! a sink. The concrete sink (console line, telemetry channel, hardware
//! indicator) is an external collaborator; this crate ships a structured-log
//! sink, a JSON-lines sink, and an in-memory sink for tests.
//!
//! A `Reporter` is constructed once with its sink and passed into the loop.
//! There is no process-wide reporting state: tests substitute their own
//! sink.

mod sinks;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::score::ScoreResult;

pub use sinks::{JsonlSink, LogSink, MemorySink};

/// Externally visible form of a score result.
///
/// The label is widened to a generic unsigned integer; the score passes
/// through unchanged. Records exist transiently, one per iteration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub label: u32,
    pub score: f32,
}

/// Destination for report records.
///
/// Emission is fire-and-forget from the pipeline's point of view, but sink
/// failures surface as errors rather than vanishing.
pub trait ReportSink: Send {
    /// Sink identifier for logs.
    fn name(&self) -> &'static str;

    /// Emit one record.
    fn emit(&mut self, record: &ReportRecord) -> Result<()>;
}

/// Reporting handle owned by the driver.
pub struct Reporter {
    sink: Box<dyn ReportSink>,
    records_emitted: u64,
}

impl Reporter {
    /// Establish the reporter with its sink. Called once, before the loop.
    pub fn new(sink: Box<dyn ReportSink>) -> Self {
        Self {
            sink,
            records_emitted: 0,
        }
    }

    /// Widen `result` into a record, emit it, and return it.
    pub fn report(&mut self, result: &ScoreResult) -> Result<ReportRecord> {
        let record = ReportRecord {
            label: u32::from(result.label),
            score: result.score,
        };
        self.sink.emit(&record)?;
        self.records_emitted += 1;
        Ok(record)
    }

    pub fn records_emitted(&self) -> u64 {
        self.records_emitted
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }
}
