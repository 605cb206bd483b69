//! Deterministic pattern source.
//!
//! `PatternSource` is the acquisition stand-in: it fills the frame with a
//! fixed ramp, `sample[i] = i mod 256`. No randomness, no external input,
//! no state that affects sample values, so consecutive fills are identical.

use anyhow::{anyhow, Result};

use super::{FrameSource, SourceStats};
use crate::frame::Frame;

/// Frame source producing the deterministic ramp pattern.
pub struct PatternSource {
    locator: String,
    connected: bool,
    frames_filled: u64,
}

impl PatternSource {
    /// Create a ramp source. `variant` comes from the locator path; only
    /// `ramp` exists.
    pub(crate) fn new(variant: &str, locator: &str) -> Result<Self> {
        if variant != "ramp" {
            return Err(anyhow!(
                "unknown pattern variant '{}': only 'ramp' is provided",
                variant
            ));
        }
        Ok(Self {
            locator: locator.to_string(),
            connected: false,
            frames_filled: 0,
        })
    }

    /// Ramp source with the default locator, for direct construction.
    pub fn ramp() -> Self {
        Self {
            locator: "pattern://ramp".to_string(),
            connected: false,
            frames_filled: 0,
        }
    }
}

impl FrameSource for PatternSource {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn connect(&mut self) -> Result<()> {
        self.connected = true;
        log::info!("PatternSource: connected to {}", self.locator);
        Ok(())
    }

    fn fill(&mut self, frame: &mut Frame) -> Result<()> {
        if !self.connected {
            return Err(anyhow!("pattern source not connected"));
        }
        for (i, sample) in frame.samples_mut().iter_mut().enumerate() {
            *sample = (i % 256) as u8;
        }
        self.frames_filled += 1;
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        self.connected
    }

    fn stats(&self) -> SourceStats {
        SourceStats {
            frames_filled: self.frames_filled,
            locator: self.locator.clone(),
        }
    }
}
