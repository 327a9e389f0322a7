//! Input/output: codecs, network retrieval, CLI, and error handling

/// Command-line parsing and invocation
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Target image download
pub mod fetch;
/// Image decode, resize, and encode
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Tile progress display
pub mod progress;
