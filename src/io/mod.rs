//! Input/output operations, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and serde configuration model
pub mod configuration;
/// Error types
pub mod error;
/// Stimulus documents and JSON persistence
pub mod export;
