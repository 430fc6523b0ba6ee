//! PNG encoding with explicit compression control and no ancillary metadata
//!
//! Everything goes through the `png` encoder directly so only the image
//! header, optional palette and pixel data are written. ICC profiles, EXIF
//! and text chunks from a source file never survive a re-encode.

use crate::io::error::{ArtError, Result, WithPath, invalid_parameter};
use image::DynamicImage;
use png::{BitDepth, ColorType, DeflateCompression, Filter};
use std::path::Path;

/// Deflate setting for a 1–9 compression level, passed through unchanged
pub const fn deflate_for_level(level: u8) -> DeflateCompression {
    DeflateCompression::Level(level)
}

/// Reject levels outside 1–9
///
/// # Errors
///
/// Returns an invalid parameter error for levels outside 1–9
pub fn validate_level(level: u8) -> Result<u8> {
    if (1..=9).contains(&level) {
        Ok(level)
    } else {
        Err(invalid_parameter(
            "compression_level",
            &level,
            &"must be between 1 and 9",
        ))
    }
}

/// Raw pixel payload handed to the encoder
#[derive(Debug, Clone, Copy)]
pub struct RawPng<'a> {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// PNG color type of `data`
    pub color: ColorType,
    /// Bits per sample
    pub depth: BitDepth,
    /// Packed scanlines without filter bytes
    pub data: &'a [u8],
    /// RGB triples for indexed images
    pub palette: Option<&'a [u8]>,
}

/// Encode raw pixels to PNG bytes in memory
///
/// # Errors
///
/// Returns [`ArtError::Encoding`] labelled with `method` if the encoder
/// rejects the header, palette or pixel data
pub fn encode_raw(raw: &RawPng<'_>, level: u8, method: &str) -> Result<Vec<u8>> {
    let wrap = |source| ArtError::Encoding {
        method: method.to_string(),
        source,
    };

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, raw.width, raw.height);
        encoder.set_color(raw.color);
        encoder.set_depth(raw.depth);
        encoder.set_deflate_compression(deflate_for_level(level));
        encoder.set_filter(Filter::Adaptive);
        if let Some(palette) = raw.palette {
            encoder.set_palette(palette.to_vec());
        }

        let mut writer = encoder.write_header().map_err(wrap)?;
        writer.write_image_data(raw.data).map_err(wrap)?;
        writer.finish().map_err(wrap)?;
    }
    Ok(buf)
}

/// Encode an 8-bit RGB buffer
///
/// # Errors
///
/// Returns [`ArtError::Encoding`] if the encoder fails
pub fn encode_rgb(image: &image::RgbImage, level: u8, method: &str) -> Result<Vec<u8>> {
    encode_raw(
        &RawPng {
            width: image.width(),
            height: image.height(),
            color: ColorType::Rgb,
            depth: BitDepth::Eight,
            data: image.as_raw(),
            palette: None,
        },
        level,
        method,
    )
}

/// Encode palette indices with their RGB palette
///
/// # Errors
///
/// Returns [`ArtError::Encoding`] if the encoder fails, e.g. for an empty or
/// oversized palette
pub fn encode_indexed(
    width: u32,
    height: u32,
    palette: &[u8],
    indices: &[u8],
    level: u8,
    method: &str,
) -> Result<Vec<u8>> {
    encode_raw(
        &RawPng {
            width,
            height,
            color: ColorType::Indexed,
            depth: BitDepth::Eight,
            data: indices,
            palette: Some(palette),
        },
        level,
        method,
    )
}

fn widen(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_be_bytes()).collect()
}

/// Encode in the image's own color mode where PNG supports it
///
/// Float images are stored as 8-bit RGBA.
///
/// # Errors
///
/// Returns [`ArtError::Encoding`] if the encoder fails
pub fn encode_dynamic(image: &DynamicImage, level: u8, method: &str) -> Result<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    let encode = |color, depth, data: &[u8]| {
        encode_raw(
            &RawPng {
                width,
                height,
                color,
                depth,
                data,
                palette: None,
            },
            level,
            method,
        )
    };

    match image {
        DynamicImage::ImageLuma8(buf) => encode(ColorType::Grayscale, BitDepth::Eight, buf.as_raw()),
        DynamicImage::ImageLumaA8(buf) => {
            encode(ColorType::GrayscaleAlpha, BitDepth::Eight, buf.as_raw())
        }
        DynamicImage::ImageRgb8(buf) => encode(ColorType::Rgb, BitDepth::Eight, buf.as_raw()),
        DynamicImage::ImageRgba8(buf) => encode(ColorType::Rgba, BitDepth::Eight, buf.as_raw()),
        DynamicImage::ImageLuma16(buf) => {
            encode(ColorType::Grayscale, BitDepth::Sixteen, &widen(buf.as_raw()))
        }
        DynamicImage::ImageLumaA16(buf) => encode(
            ColorType::GrayscaleAlpha,
            BitDepth::Sixteen,
            &widen(buf.as_raw()),
        ),
        DynamicImage::ImageRgb16(buf) => {
            encode(ColorType::Rgb, BitDepth::Sixteen, &widen(buf.as_raw()))
        }
        DynamicImage::ImageRgba16(buf) => {
            encode(ColorType::Rgba, BitDepth::Sixteen, &widen(buf.as_raw()))
        }
        other => encode(ColorType::Rgba, BitDepth::Eight, other.to_rgba8().as_raw()),
    }
}

/// Write encoded bytes, creating the parent directory if needed
///
/// # Errors
///
/// Returns [`ArtError::FileSystem`] if the directory or file cannot be written
pub fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    std::fs::write(path, bytes).with_path(path, "write png")
}
