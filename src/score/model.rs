//! Embedded model artifact stand-in.
//!
//! An embedded deployment converts its trained classifier into a byte array
//! and links it into the firmware image. Real model execution is an external
//! collaborator; here only the artifact's *length* participates in scoring,
//! as the checksum backend's constant offset. The blob below is a
//! placeholder truncated to a header-sized stub.

use sha2::{Digest, Sha256};

/// Placeholder classifier artifact. Do not edit by hand.
pub const MODEL_DATA: &[u8] = &[
    0x1c, 0x00, 0x00, 0x00, 0x54, 0x46, 0x4c, 0x33, 0x14, 0x00, 0x20, 0x00,
    0x1c, 0x00, 0x18, 0x00, 0x14, 0x00, 0x10, 0x00, 0x0c, 0x00, 0x08, 0x00,
    0x04, 0x00, 0x1c, 0x00, 0x00, 0x00, 0x1c, 0x00, 0x00, 0x00, 0x84, 0x00,
    0x00, 0x00, 0xdc, 0x00, 0x00, 0x00, 0xe0, 0x04, 0x00, 0x00, 0x03, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0a, 0x00, 0x00, 0x00,
];

/// Artifact byte length, the scorer's constant offset.
pub fn model_offset() -> u32 {
    MODEL_DATA.len() as u32
}

/// SHA-256 identity of the embedded artifact, logged at daemon startup.
pub fn model_digest() -> [u8; 32] {
    Sha256::digest(MODEL_DATA).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_artifact_length() {
        assert_eq!(model_offset(), 64);
        assert_eq!(MODEL_DATA.len(), 64);
    }

    #[test]
    fn digest_is_stable() {
        assert_eq!(model_digest(), model_digest());
        assert_eq!(hex::encode(model_digest()).len(), 64);
    }
}
