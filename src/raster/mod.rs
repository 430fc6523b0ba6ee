//! Raster encoding and geometry shared by the PNG commands

/// Metadata-free PNG encoding
pub mod encode;
/// Center crop and resize
pub mod resize;
