//! Artwork tooling for a kanji radical catalogue
//!
//! Each radical gets a 512×512 SVG badge: a geometric background pattern
//! chosen from the radical's meaning and category, with the glyph and its
//! labels drawn on top. PNG artwork is shrunk by searching a matrix of
//! palette, posterize and recompress encodings, and can be center-cropped
//! to a square.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// SVG pattern generation and document composition
pub mod pattern;
/// PNG encoding and resizing
pub mod raster;
/// PNG size reduction
pub mod shrink;
/// Shape and color assignment
pub mod style;

pub use io::error::{ArtError, Result};
