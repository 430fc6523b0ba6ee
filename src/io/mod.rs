//! Input/output, configuration and cross-cutting concerns

/// Success and failure tallies for batch operations
pub mod batch;
/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars
pub mod progress;
/// Radical catalogue records
pub mod records;
