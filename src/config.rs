use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_SOURCE_LOCATOR: &str = "pattern://ramp";
const DEFAULT_SCORER_BACKEND: &str = "checksum";
const DEFAULT_REPORT_SINK: &str = "log";
const DEFAULT_TARGET_FPS: u32 = 10;

#[derive(Debug, Deserialize, Default)]
struct PerceptdConfigFile {
    source: Option<SourceConfigFile>,
    scorer: Option<ScorerConfigFile>,
    report: Option<ReportConfigFile>,
    rate: Option<RateConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
struct SourceConfigFile {
    locator: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ScorerConfigFile {
    backend: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ReportConfigFile {
    sink: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RateConfigFile {
    target_fps: Option<u32>,
    max_iterations: Option<u64>,
}

/// Resolved daemon configuration.
///
/// Knobs cover deployment wiring only: where frames come from, which
/// backend scores them, where records go, and how fast the loop runs.
/// Frame geometry and the scoring arithmetic are fixed at build time.
#[derive(Debug, Clone)]
pub struct PerceptdConfig {
    pub source: SourceSettings,
    pub scorer: ScorerSettings,
    pub report: ReportSettings,
    pub rate: RateSettings,
}

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub locator: String,
}

#[derive(Debug, Clone)]
pub struct ScorerSettings {
    pub backend: String,
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub sink: String,
}

#[derive(Debug, Clone)]
pub struct RateSettings {
    pub target_fps: u32,
    /// Iteration bound; `None` runs until externally stopped.
    pub max_iterations: Option<u64>,
}

impl PerceptdConfig {
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("PERCEPT_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => Some(read_config_file(Path::new(path))?),
            None => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default());
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: PerceptdConfigFile) -> Self {
        let source = SourceSettings {
            locator: file
                .source
                .and_then(|source| source.locator)
                .unwrap_or_else(|| DEFAULT_SOURCE_LOCATOR.to_string()),
        };
        let scorer = ScorerSettings {
            backend: file
                .scorer
                .and_then(|scorer| scorer.backend)
                .unwrap_or_else(|| DEFAULT_SCORER_BACKEND.to_string()),
        };
        let report = ReportSettings {
            sink: file
                .report
                .and_then(|report| report.sink)
                .unwrap_or_else(|| DEFAULT_REPORT_SINK.to_string()),
        };
        let rate = RateSettings {
            target_fps: file
                .rate
                .as_ref()
                .and_then(|rate| rate.target_fps)
                .unwrap_or(DEFAULT_TARGET_FPS),
            max_iterations: file.rate.and_then(|rate| rate.max_iterations),
        };
        Self {
            source,
            scorer,
            report,
            rate,
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(locator) = std::env::var("PERCEPT_SOURCE_LOCATOR") {
            if !locator.trim().is_empty() {
                self.source.locator = locator;
            }
        }
        if let Ok(backend) = std::env::var("PERCEPT_SCORER_BACKEND") {
            if !backend.trim().is_empty() {
                self.scorer.backend = backend;
            }
        }
        if let Ok(sink) = std::env::var("PERCEPT_REPORT_SINK") {
            if !sink.trim().is_empty() {
                self.report.sink = sink;
            }
        }
        if let Ok(fps) = std::env::var("PERCEPT_TARGET_FPS") {
            let fps: u32 = fps
                .parse()
                .map_err(|_| anyhow!("PERCEPT_TARGET_FPS must be an integer frame rate"))?;
            self.rate.target_fps = fps;
        }
        if let Ok(max) = std::env::var("PERCEPT_MAX_ITERATIONS") {
            let max: u64 = max
                .parse()
                .map_err(|_| anyhow!("PERCEPT_MAX_ITERATIONS must be an integer count"))?;
            self.rate.max_iterations = Some(max);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.source.locator.trim().is_empty() {
            return Err(anyhow!("source locator must not be empty"));
        }
        if self.scorer.backend.trim().is_empty() {
            return Err(anyhow!("scorer backend must not be empty"));
        }
        match self.report.sink.as_str() {
            "log" | "jsonl" => {}
            other => {
                return Err(anyhow!(
                    "unknown report sink '{}' (expected 'log' or 'jsonl')",
                    other
                ));
            }
        }
        if self.rate.target_fps == 0 {
            return Err(anyhow!("target_fps must be greater than zero"));
        }
        if self.rate.max_iterations == Some(0) {
            return Err(anyhow!("max_iterations must be greater than zero when set"));
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<PerceptdConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}
