use anyhow::Result;

use crate::score::result::ScoreResult;

/// Scorer backend trait.
///
/// A backend consumes one frame's samples and produces a label/score pair.
/// Implementations must treat the sample slice as read-only and ephemeral:
/// it aliases the driver's single frame buffer and is overwritten on the
/// next iteration.
///
/// Real model execution is an external collaborator; it would implement this
/// trait and register under its own name. This crate ships only the checksum
/// stand-in.
pub trait ScorerBackend: Send {
    /// Backend identifier.
    fn name(&self) -> &'static str;

    /// Score one frame.
    ///
    /// `samples` must hold exactly `width * height` entries; anything else
    /// is an error, not a silent no-op.
    fn score(&mut self, samples: &[u8], width: u32, height: u32) -> Result<ScoreResult>;

    /// Optional warm-up hook.
    fn warm_up(&mut self) -> Result<()> {
        Ok(())
    }
}
