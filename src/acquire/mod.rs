//! Frame acquisition sources.
//!
//! This module provides sources that fill the driver's frame in place:
//! - Deterministic pattern source (`pattern://`)
//!
//! Camera and sensor integration is an external collaborator: a real
//! deployment registers its own locator schemes here. This crate ships only
//! the deterministic stand-in.
//!
//! All sources overwrite the full frame on every fill. The acquisition layer
//! is responsible for:
//! - Filling every sample of the frame, leaving no stale content
//! - Counting filled frames for health reporting
//!
//! The acquisition layer MUST NOT:
//! - Allocate per fill (the driver owns the only frame)
//! - Log frame content

mod pattern;

use anyhow::{anyhow, Result};

use crate::frame::Frame;

pub use pattern::PatternSource;

/// A source that produces frames by overwriting the driver's buffer.
///
/// `fill` on a source that is not connected is the explicit counterpart of
/// handing the original firmware an absent buffer: it returns an error and
/// leaves the frame untouched.
pub trait FrameSource: Send {
    /// Source identifier for logs.
    fn name(&self) -> &'static str;

    /// Establish the source. Must be called once before the first fill.
    fn connect(&mut self) -> Result<()>;

    /// Overwrite every sample of `frame` with the next acquisition.
    fn fill(&mut self, frame: &mut Frame) -> Result<()>;

    /// Whether the source is currently able to produce frames.
    fn is_healthy(&self) -> bool;

    /// Acquisition statistics for health logging.
    fn stats(&self) -> SourceStats;
}

/// Statistics reported by a frame source.
#[derive(Clone, Debug)]
pub struct SourceStats {
    pub frames_filled: u64,
    pub locator: String,
}

/// Open a source from a URL-style locator.
///
/// Only `pattern://` locators are supported; anything else belongs to a
/// camera/sensor integration this crate does not provide.
pub fn open_source(locator: &str) -> Result<Box<dyn FrameSource>> {
    if locator.trim().is_empty() {
        return Err(anyhow!("source locator must not be empty"));
    }
    if let Some(variant) = locator.strip_prefix("pattern://") {
        return Ok(Box::new(PatternSource::new(variant, locator)?));
    }
    Err(anyhow!(
        "unsupported source locator '{}': camera/sensor schemes are not provided by this crate",
        locator
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_source_accepts_pattern_scheme() {
        let source = open_source("pattern://ramp").unwrap();
        assert_eq!(source.name(), "pattern");
    }

    #[test]
    fn open_source_rejects_unknown_schemes() {
        assert!(open_source("rtsp://camera-1").is_err());
        assert!(open_source("file:///video.mp4").is_err());
        assert!(open_source("").is_err());
    }
}
