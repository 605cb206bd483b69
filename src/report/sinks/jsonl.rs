use std::io::{self, Write};

use anyhow::Result;

use crate::report::{ReportRecord, ReportSink};

/// Sink writing one JSON object per line to any writer.
///
/// The daemon points this at stdout; tests hand it a byte buffer.
pub struct JsonlSink<W: Write + Send> {
    writer: W,
}

impl JsonlSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write + Send> JsonlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> ReportSink for JsonlSink<W> {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn emit(&mut self, record: &ReportRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_json_object_per_line() {
        let mut sink = JsonlSink::new(Vec::new());
        sink.emit(&ReportRecord {
            label: 1,
            score: 0.24,
        })
        .unwrap();
        sink.emit(&ReportRecord {
            label: 0,
            score: 0.6,
        })
        .unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: ReportRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.label, 1);
        assert_eq!(first.score, 0.24);
    }
}
