/// Number of label classes the scorer folds into.
pub const LABEL_CLASSES: u8 = 3;

/// Result of scoring one frame.
///
/// Derived deterministically from frame contents; overwritten every
/// iteration by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreResult {
    /// Class label in `[0, LABEL_CLASSES)`.
    pub label: u8,
    /// Confidence in `[0, 1)`.
    pub score: f32,
}
