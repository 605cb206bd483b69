use anyhow::{anyhow, Result};

use crate::score::backend::ScorerBackend;
use crate::score::model;
use crate::score::result::{ScoreResult, LABEL_CLASSES};

/// Number of confidence bins; score = (accumulator mod bins) / bins.
const SCORE_BINS: u32 = 100;

/// Checksum backend: the placeholder inference step.
///
/// Accumulates every sample into an unsigned 32-bit sum, adds the embedded
/// artifact length as a constant offset, then folds the accumulator into a
/// label and a confidence score. The arithmetic itself is the contract; it
/// does not approximate a real model.
pub struct ChecksumBackend {
    offset: u32,
}

impl ChecksumBackend {
    /// Backend with the embedded artifact's length as offset.
    pub fn new() -> Self {
        Self {
            offset: model::model_offset(),
        }
    }

    /// Backend with an explicit offset, for callers pinning a different
    /// artifact.
    pub fn with_offset(offset: u32) -> Self {
        Self { offset }
    }
}

impl Default for ChecksumBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScorerBackend for ChecksumBackend {
    fn name(&self) -> &'static str {
        "checksum"
    }

    fn score(&mut self, samples: &[u8], width: u32, height: u32) -> Result<ScoreResult> {
        let expected = (width as usize) * (height as usize);
        if samples.len() != expected {
            return Err(anyhow!(
                "sample count mismatch: got {}, expected {}x{} = {}",
                samples.len(),
                width,
                height,
                expected
            ));
        }

        let mut accumulator: u32 = 0;
        for &sample in samples {
            accumulator += u32::from(sample);
        }
        accumulator += self.offset;

        Ok(ScoreResult {
            label: (accumulator % u32::from(LABEL_CLASSES)) as u8,
            score: (accumulator % SCORE_BINS) as f32 / SCORE_BINS as f32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FRAME_HEIGHT, FRAME_SAMPLES, FRAME_WIDTH};

    fn ramp_samples() -> Vec<u8> {
        (0..FRAME_SAMPLES).map(|i| (i % 256) as u8).collect()
    }

    #[test]
    fn ramp_frame_scores_canonical_values() {
        // sum(i mod 256 for i in [0, 1024)) = 4 * (255 * 256 / 2) = 130560,
        // plus the 64-byte artifact offset = 130624.
        let mut backend = ChecksumBackend::new();
        let result = backend
            .score(&ramp_samples(), FRAME_WIDTH, FRAME_HEIGHT)
            .unwrap();

        assert_eq!(result.label, 1);
        assert_eq!(result.score, 0.24);
    }

    #[test]
    fn scoring_is_deterministic_across_calls() {
        let mut backend = ChecksumBackend::new();
        let samples = ramp_samples();

        let first = backend.score(&samples, FRAME_WIDTH, FRAME_HEIGHT).unwrap();
        let second = backend.score(&samples, FRAME_WIDTH, FRAME_HEIGHT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_frame_scores_offset_only() {
        let mut backend = ChecksumBackend::new();
        let samples = vec![0u8; FRAME_SAMPLES];
        let result = backend.score(&samples, FRAME_WIDTH, FRAME_HEIGHT).unwrap();

        // accumulator = 0 + 64
        assert_eq!(result.label, 1);
        assert_eq!(result.score, 0.64);
    }

    #[test]
    fn explicit_offset_shifts_the_fold() {
        let mut backend = ChecksumBackend::with_offset(0);
        let result = backend
            .score(&ramp_samples(), FRAME_WIDTH, FRAME_HEIGHT)
            .unwrap();

        // accumulator = 130560
        assert_eq!(result.label, 0);
        assert_eq!(result.score, 0.60);
    }

    #[test]
    fn sample_count_mismatch_is_an_error() {
        let mut backend = ChecksumBackend::new();
        let short = vec![0u8; FRAME_SAMPLES - 1];
        assert!(backend.score(&short, FRAME_WIDTH, FRAME_HEIGHT).is_err());
        assert!(backend.score(&[], FRAME_WIDTH, FRAME_HEIGHT).is_err());
    }

    #[test]
    fn label_stays_in_range_for_saturated_frame() {
        let mut backend = ChecksumBackend::new();
        let samples = vec![0xFFu8; FRAME_SAMPLES];
        let result = backend.score(&samples, FRAME_WIDTH, FRAME_HEIGHT).unwrap();

        assert!(result.label < LABEL_CLASSES);
        assert!((0.0..1.0).contains(&result.score));
    }
}
