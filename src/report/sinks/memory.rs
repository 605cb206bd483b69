use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use crate::report::{ReportRecord, ReportSink};

/// In-memory sink for tests.
///
/// Storage is shared: clone the handle from [`records`](MemorySink::records)
/// before moving the sink into a `Reporter`, then inspect it afterwards.
pub struct MemorySink {
    records: Arc<Mutex<Vec<ReportRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the captured records.
    pub fn records(&self) -> Arc<Mutex<Vec<ReportRecord>>> {
        self.records.clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn emit(&mut self, record: &ReportRecord) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow!("memory sink lock poisoned"))?;
        records.push(*record);
        Ok(())
    }
}
