//! Driver loop.
//!
//! The pipeline wires the three stages in strict sequence:
//! acquire frame, score frame, report record. There is no other topology.
//!
//! The loop is bounded by an injectable stopping predicate; the default
//! deployment passes a predicate that never fires and runs until the
//! process is stopped externally. Stage errors propagate to the caller.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use crate::acquire::{FrameSource, SourceStats};
use crate::frame::Frame;
use crate::report::{ReportRecord, Reporter};
use crate::score::{ScoreResult, ScorerBackend};

/// Statistics from a bounded run.
#[derive(Clone, Copy, Debug)]
pub struct RunStats {
    pub iterations: u64,
}

/// The acquire -> score -> report driver.
///
/// Owns the single `Frame` and `ScoreResult` for the lifetime of the loop;
/// both are overwritten in place every iteration, never reallocated.
pub struct Pipeline {
    source: Box<dyn FrameSource>,
    scorer: Arc<Mutex<dyn ScorerBackend>>,
    reporter: Reporter,
    frame: Frame,
    result: ScoreResult,
    iterations: u64,
}

impl Pipeline {
    /// Wire the three stages. Connects the source and warms the scorer;
    /// frame and result storage are allocated here, once.
    pub fn new(
        mut source: Box<dyn FrameSource>,
        scorer: Arc<Mutex<dyn ScorerBackend>>,
        reporter: Reporter,
    ) -> Result<Self> {
        source.connect()?;
        {
            let mut backend = scorer
                .lock()
                .map_err(|_| anyhow!("scorer backend lock poisoned"))?;
            backend.warm_up()?;
        }
        Ok(Self {
            source,
            scorer,
            reporter,
            frame: Frame::new(),
            result: ScoreResult::default(),
            iterations: 0,
        })
    }

    /// Run one iteration and return the emitted record.
    pub fn run_once(&mut self) -> Result<ReportRecord> {
        self.source.fill(&mut self.frame)?;

        self.result = {
            let mut backend = self
                .scorer
                .lock()
                .map_err(|_| anyhow!("scorer backend lock poisoned"))?;
            backend.score(self.frame.samples(), self.frame.width(), self.frame.height())?
        };

        let record = self.reporter.report(&self.result)?;
        self.iterations += 1;
        Ok(record)
    }

    /// Run iterations until `stop` returns true.
    ///
    /// The predicate is checked before each iteration, so a predicate that
    /// is immediately true runs nothing. `|| false` runs forever.
    pub fn run_until(&mut self, mut stop: impl FnMut() -> bool) -> Result<RunStats> {
        let start = self.iterations;
        while !stop() {
            self.run_once()?;
        }
        Ok(RunStats {
            iterations: self.iterations - start,
        })
    }

    /// Iterations completed since construction.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn source_healthy(&self) -> bool {
        self.source.is_healthy()
    }

    pub fn source_stats(&self) -> SourceStats {
        self.source.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemorySink;
    use crate::score::ChecksumBackend;

    struct FailingSource;

    impl FrameSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn connect(&mut self) -> Result<()> {
            Ok(())
        }

        fn fill(&mut self, _frame: &mut Frame) -> Result<()> {
            Err(anyhow!("acquisition failed"))
        }

        fn is_healthy(&self) -> bool {
            false
        }

        fn stats(&self) -> SourceStats {
            SourceStats {
                frames_filled: 0,
                locator: "failing://".to_string(),
            }
        }
    }

    #[test]
    fn source_errors_propagate_to_the_driver() {
        let scorer: Arc<Mutex<dyn ScorerBackend>> = Arc::new(Mutex::new(ChecksumBackend::new()));
        let sink = MemorySink::new();
        let records = sink.records();
        let reporter = Reporter::new(Box::new(sink));

        let mut pipeline = Pipeline::new(Box::new(FailingSource), scorer, reporter).unwrap();

        assert!(pipeline.run_once().is_err());
        assert_eq!(pipeline.iterations(), 0);
        assert!(records.lock().unwrap().is_empty());
    }
}
