//! Fixed-geometry frame storage.
//!
//! A `Frame` is one acquisition cycle's worth of intensity samples. The
//! geometry is fixed at build time:
//!
//! - `FRAME_WIDTH` x `FRAME_HEIGHT` = `FRAME_SAMPLES` unsigned 8-bit samples
//! - Allocated once by the driver, overwritten in place every iteration
//! - Never resized
//!
//! Frame content is never logged; `Debug` prints dimensions only.

use anyhow::{anyhow, Result};

/// Build-time frame width in samples.
pub const FRAME_WIDTH: u32 = 32;

/// Build-time frame height in samples.
pub const FRAME_HEIGHT: u32 = 32;

/// Total samples per frame.
pub const FRAME_SAMPLES: usize = (FRAME_WIDTH * FRAME_HEIGHT) as usize;

/// One frame of intensity samples.
///
/// The driver owns exactly one `Frame` for the lifetime of the loop; sources
/// overwrite it in place via [`samples_mut`](Frame::samples_mut). There is no
/// per-iteration allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    samples: [u8; FRAME_SAMPLES],
}

impl Frame {
    /// Create a zero-filled frame.
    pub fn new() -> Self {
        Self {
            samples: [0u8; FRAME_SAMPLES],
        }
    }

    /// Build a frame from an owned sample vector.
    ///
    /// Rejects any length other than `FRAME_SAMPLES`. This is the explicit
    /// form of the invalid-buffer case: a caller handing over the wrong
    /// amount of data gets an error, not a silent no-op.
    pub fn from_samples(samples: Vec<u8>) -> Result<Self> {
        let got = samples.len();
        let samples: [u8; FRAME_SAMPLES] = samples.try_into().map_err(|_| {
            anyhow!(
                "frame requires exactly {} samples, got {}",
                FRAME_SAMPLES,
                got
            )
        })?;
        Ok(Self { samples })
    }

    pub fn width(&self) -> u32 {
        FRAME_WIDTH
    }

    pub fn height(&self) -> u32 {
        FRAME_HEIGHT
    }

    /// Read-only view of the samples, row-major.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Mutable view for in-place overwrite by a source.
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Dimensions only; sample content stays out of logs.
        f.debug_struct("Frame")
            .field("width", &FRAME_WIDTH)
            .field("height", &FRAME_HEIGHT)
            .finish_non_exhaustive()
    }
}
