//! perceptd - embedded perception loop daemon
//!
//! This daemon:
//! 1. Fills the frame from the configured source
//! 2. Scores the frame with the configured backend
//! 3. Emits one report record per iteration to the configured sink
//! 4. Paces iterations to the configured target rate
//!
//! It consumes no command-line arguments; configuration comes from an
//! optional JSON file named by PERCEPT_CONFIG plus PERCEPT_* environment
//! overrides. It runs until stopped (Ctrl-C) or until the configured
//! iteration bound is reached.

use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use percept_kernel::{
    config::PerceptdConfig, open_source, score::model, BackendRegistry, ChecksumBackend,
    JsonlSink, LogSink, Pipeline, ReportSink, Reporter, FRAME_HEIGHT, FRAME_SAMPLES, FRAME_WIDTH,
};

fn main() -> Result<()> {
    // Initialize logging (simple stderr)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = PerceptdConfig::load()?;
    let kernel_version = env!("CARGO_PKG_VERSION");

    log::info!("perceptd {} starting", kernel_version);
    log::info!(
        "frame geometry: {}x{} ({} samples)",
        FRAME_WIDTH,
        FRAME_HEIGHT,
        FRAME_SAMPLES
    );
    log::info!(
        "model artifact: {} bytes, sha256={}",
        model::model_offset(),
        hex::encode(model::model_digest())
    );

    let mut registry = BackendRegistry::new();
    registry.register(ChecksumBackend::new());
    registry.set_default(&cfg.scorer.backend)?;
    let scorer = registry
        .default_backend()
        .ok_or_else(|| anyhow!("no scorer backend registered"))?;

    let source = open_source(&cfg.source.locator)?;
    let reporter = Reporter::new(build_sink(&cfg.report.sink)?);

    let mut pipeline = Pipeline::new(source, scorer, reporter)?;

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || {
            stop.store(true, Ordering::SeqCst);
        })?;
    }

    let frame_interval = Duration::from_millis(1000 / u64::from(cfg.rate.target_fps));
    let mut last_health_log = Instant::now();

    log::info!(
        "perceptd running: source={} backend={} sink={} target_fps={}",
        cfg.source.locator,
        cfg.scorer.backend,
        cfg.report.sink,
        cfg.rate.target_fps
    );

    while !stop.load(Ordering::SeqCst) {
        if let Some(max) = cfg.rate.max_iterations {
            if pipeline.iterations() >= max {
                log::info!("iteration bound {} reached", max);
                break;
            }
        }

        pipeline.run_once()?;

        if last_health_log.elapsed() >= Duration::from_secs(5) {
            let stats = pipeline.source_stats();
            log::info!(
                "source health={} frames={} locator={}",
                pipeline.source_healthy(),
                stats.frames_filled,
                stats.locator
            );
            last_health_log = Instant::now();
        }

        std::thread::sleep(frame_interval);
    }

    log::info!("perceptd stopped after {} iterations", pipeline.iterations());
    Ok(())
}

fn build_sink(name: &str) -> Result<Box<dyn ReportSink>> {
    match name {
        "log" => Ok(Box::new(LogSink::new())),
        "jsonl" => Ok(Box::new(JsonlSink::stdout())),
        other => Err(anyhow!(
            "unknown report sink '{}' (expected 'log' or 'jsonl')",
            other
        )),
    }
}
