//! Input/output operations, configuration and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and defaults shared across the crate
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Image decoding, encoding and resampling
pub mod image;
/// Palette folder loading and indexing
pub mod palette;
/// Progress bars for batch runs
pub mod progress;
