//! Pixel remapping onto a palette and per-channel posterization

use crate::io::error::Result;
use crate::raster::encode::encode_indexed;
use crate::shrink::palette::{NearestCache, Palette, Rgb};
use image::RgbImage;

/// Palette indices with their palette, ready for an indexed PNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Colors referenced by `indices`
    pub palette: Palette,
    /// One palette index per pixel, row-major
    pub indices: Vec<u8>,
}

impl IndexedImage {
    /// Encode as an 8-bit indexed PNG
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the encoder rejects the data
    pub fn encode(&self, level: u8, method: &str) -> Result<Vec<u8>> {
        encode_indexed(
            self.width,
            self.height,
            &self.palette.to_bytes(),
            &self.indices,
            level,
            method,
        )
    }

    /// Expand back to RGB
    pub fn to_rgb(&self) -> RgbImage {
        let mut out = RgbImage::new(self.width, self.height);
        for (pixel, index) in out.pixels_mut().zip(self.indices.iter()) {
            pixel.0 = self.palette.color(*index);
        }
        out
    }
}

/// Map every pixel to its nearest palette color
pub fn remap(image: &RgbImage, palette: Palette) -> IndexedImage {
    let indices = {
        let mut nearest = NearestCache::new(&palette);
        image.pixels().map(|p| nearest.lookup(p.0)).collect()
    };
    IndexedImage {
        width: image.width(),
        height: image.height(),
        palette,
        indices,
    }
}

type Error3 = [i32; 3];

fn spread(row: &mut [Error3], at: usize, error: Error3, weight: i32) {
    if let Some(slot) = row.get_mut(at) {
        for (acc, e) in slot.iter_mut().zip(error.iter()) {
            *acc += e * weight / 16;
        }
    }
}

/// Map pixels to the palette with Floyd–Steinberg error diffusion
pub fn remap_dithered(image: &RgbImage, palette: Palette) -> IndexedImage {
    let width = image.width() as usize;
    let mut indices = Vec::with_capacity(width * image.height() as usize);
    {
        let mut nearest = NearestCache::new(&palette);
        // One column of padding on each side so neighbours never fall off the row
        let mut current: Vec<Error3> = vec![[0; 3]; width + 2];
        let mut next: Vec<Error3> = vec![[0; 3]; width + 2];

        for row in image.rows() {
            for (x, pixel) in row.enumerate() {
                let carried = current.get(x + 1).copied().unwrap_or([0; 3]);
                let mut wanted: Rgb = [0; 3];
                for ((out, value), err) in wanted.iter_mut().zip(pixel.0.iter()).zip(carried) {
                    *out = (i32::from(*value) + err).clamp(0, 255) as u8;
                }

                let index = nearest.lookup(wanted);
                indices.push(index);

                let chosen = palette.color(index);
                let mut error: Error3 = [0; 3];
                for ((e, w), c) in error.iter_mut().zip(wanted).zip(chosen) {
                    *e = i32::from(w) - i32::from(c);
                }

                spread(&mut current, x + 2, error, 7);
                spread(&mut next, x, error, 3);
                spread(&mut next, x + 1, error, 5);
                spread(&mut next, x + 2, error, 1);
            }
            std::mem::swap(&mut current, &mut next);
            next.iter_mut().for_each(|slot| *slot = [0; 3]);
        }
    }

    IndexedImage {
        width: image.width(),
        height: image.height(),
        palette,
        indices,
    }
}

/// Keep only the top `bits` bits of every channel (clamped to 1–8)
pub fn posterize(image: &RgbImage, bits: u8) -> RgbImage {
    let bits = bits.clamp(1, 8);
    let mask = u8::MAX << (8 - bits);
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for channel in &mut pixel.0 {
            *channel &= mask;
        }
    }
    out
}
