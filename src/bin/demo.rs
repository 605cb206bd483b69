//! demo - bounded synthetic run of the perception loop
//!
//! Runs the real pipeline for a fixed number of iterations against the
//! deterministic pattern source, prints every record as a JSON line, and
//! verifies full determinism: every iteration must produce the identical
//! record. Exits nonzero on drift.

use anyhow::{anyhow, Result};
use clap::Parser;

use percept_kernel::{
    open_source, BackendRegistry, ChecksumBackend, MemorySink, Pipeline, Reporter,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of loop iterations to run.
    #[arg(long, default_value_t = 5)]
    iterations: u64,
    /// Source locator.
    #[arg(long, default_value = "pattern://ramp")]
    source: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.iterations == 0 {
        return Err(anyhow!("iterations must be >= 1"));
    }

    let mut registry = BackendRegistry::new();
    registry.register(ChecksumBackend::new());
    let scorer = registry
        .default_backend()
        .ok_or_else(|| anyhow!("no scorer backend registered"))?;

    let sink = MemorySink::new();
    let records = sink.records();
    let source = open_source(&args.source)?;
    let mut pipeline = Pipeline::new(source, scorer, Reporter::new(Box::new(sink)))?;

    let mut remaining = args.iterations;
    let stats = pipeline.run_until(|| {
        if remaining == 0 {
            true
        } else {
            remaining -= 1;
            false
        }
    })?;

    let records = records
        .lock()
        .map_err(|_| anyhow!("memory sink lock poisoned"))?;
    for record in records.iter() {
        println!("{}", serde_json::to_string(record)?);
    }

    let first = records
        .first()
        .ok_or_else(|| anyhow!("no records emitted"))?;
    if records.iter().any(|record| record != first) {
        return Err(anyhow!(
            "determinism check failed: records drifted across iterations"
        ));
    }

    println!(
        "determinism check passed: {} identical records (label={} score={:.2})",
        stats.iterations, first.label, first.score
    );
    Ok(())
}
