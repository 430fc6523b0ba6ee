//! Lossy and lossless PNG size reduction

/// File and directory drivers
pub mod batch;
/// The method × parameter matrix and selection policy
pub mod candidate;
/// Palette construction
pub mod palette;
/// Remapping pixels onto palettes
pub mod quantize;
/// Per-image search over the candidate matrix
pub mod search;

pub use search::{ShrinkConfig, ShrinkOutcome, Shrinker};
