//! Embedded Perception Kernel (EPK)
//!
//! This crate implements a minimal embedded perception loop: acquire a
//! fixed-size frame, score it with a placeholder inference step, and emit a
//! labeled result.
//!
//! # Architecture
//!
//! Three stages in strict sequence, driven by one loop:
//!
//! 1. **Acquire**: a source overwrites the driver's frame in place.
//! 2. **Score**: a backend folds the samples into a label/score pair.
//! 3. **Report**: a reporter widens the result and emits it to a sink.
//!
//! The kernel holds these properties by construction:
//!
//! - **Fixed geometry**: frame dimensions are build-time constants; storage
//!   is allocated once and overwritten, never resized.
//! - **Determinism**: the pattern source and checksum backend have no hidden
//!   state; identical iterations produce identical records.
//! - **Explicit failure**: every stage returns `Result`; invalid input is an
//!   observable error, never a silent no-op.
//! - **Bounded control**: the loop runs under an injectable stopping
//!   predicate; "forever" is a predicate that never fires.
//!
//! # Module Structure
//!
//! - `frame`: fixed-size sample grid (`Frame`, geometry constants)
//! - `acquire`: frame sources (`FrameSource`, `PatternSource`)
//! - `score`: scorer backends (`ScorerBackend`, `ChecksumBackend`, registry,
//!   embedded model artifact)
//! - `report`: outbound boundary (`Reporter`, sinks)
//! - `pipeline`: the driver loop
//! - `config`: daemon deployment wiring

pub mod acquire;
pub mod config;
pub mod frame;
pub mod pipeline;
pub mod report;
pub mod score;

pub use acquire::{open_source, FrameSource, PatternSource, SourceStats};
pub use frame::{Frame, FRAME_HEIGHT, FRAME_SAMPLES, FRAME_WIDTH};
pub use pipeline::{Pipeline, RunStats};
pub use report::{JsonlSink, LogSink, MemorySink, ReportRecord, ReportSink, Reporter};
pub use score::{BackendRegistry, ChecksumBackend, ScoreResult, ScorerBackend, LABEL_CLASSES};
