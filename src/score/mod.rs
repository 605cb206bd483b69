mod backend;
mod backends;
pub mod model;
mod registry;
mod result;

pub use backend::ScorerBackend;
pub use backends::ChecksumBackend;
pub use registry::BackendRegistry;
pub use result::{ScoreResult, LABEL_CLASSES};
