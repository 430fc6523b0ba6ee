//! Procedural SVG background patterns and radical badge documents

/// Batch generation of badge files from the radical catalogue
pub mod batch;
/// SVG document composition with text overlay
pub mod document;
/// Vector primitives and their markup
pub mod element;
/// Per-family pattern generators
pub mod generators;

pub use document::{compose, render_radical};
pub use element::PatternElement;
pub use generators::render;
