//! Radical classification into background pattern families and colors

/// Meaning and category classification
pub mod classifier;
/// Hex RGB colors and channel arithmetic
pub mod color;
/// The closed set of pattern families
pub mod shape;

pub use classifier::{StyleAssignment, classify};
pub use color::HexColor;
pub use shape::ShapeTag;
