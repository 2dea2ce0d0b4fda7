//! Seed sequences and the values they carry

/// Persistent sequence buffer and its transforms
pub mod buffer;
/// Feature values and numeric jitter
pub mod value;

pub use buffer::SequenceBuffer;
pub use value::FeatureValue;
