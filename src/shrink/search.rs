//! PNG size reduction search
//!
//! Large truecolor images are re-encoded under every cell of the candidate
//! matrix. Of the encodings that save more than 2%, the one saving the
//! *least* is kept, so the output stays as close to the source as a
//! worthwhile saving allows. Anything else gets a plain lossless re-encode,
//! and palette sources stay paletted.

use crate::io::configuration::{
    DEFAULT_COMPRESSION_LEVEL, DEFAULT_MIN_PIXEL_AREA, WEB_SAFE_MIN_COLORS,
};
use crate::io::error::{ArtError, Result};
use crate::raster::encode::{encode_dynamic, encode_rgb, validate_level};
use crate::shrink::candidate::{
    CandidateSpec, Method, OptimizationCandidate, Parameter, candidate_matrix, reduction_percent,
    select_least_aggressive,
};
use crate::shrink::palette::{Palette, Rgb, histogram, median_cut, popularity};
use crate::shrink::quantize::{posterize, remap, remap_dithered};
use image::{DynamicImage, RgbImage};
use png::ColorType;
use std::collections::HashMap;
use std::io::Cursor;
use tracing::debug;

/// Shrinker thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShrinkConfig {
    /// Images with fewer pixels skip the candidate search
    pub min_pixel_area: u64,
    /// Compression level (1–9) of the final and quantized encodes
    pub compression_level: u8,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            min_pixel_area: DEFAULT_MIN_PIXEL_AREA,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

/// How the output was produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// A matrix candidate, with its measured reduction
    Candidate {
        /// Matrix cell
        spec: CandidateSpec,
        /// Measured reduction in percent
        reduction_percent: f64,
    },
    /// Plain lossless re-encode
    Standard,
}

/// Result of shrinking one image
#[derive(Debug, Clone)]
pub struct ShrinkOutcome {
    /// Encoded output
    pub bytes: Vec<u8>,
    /// Size of the input in bytes
    pub original_size: usize,
    /// How `bytes` was produced
    pub selection: Selection,
    /// Number of candidates that cleared the minimum reduction
    pub viable_count: usize,
}

impl ShrinkOutcome {
    /// Reduction of the output relative to the input, in percent
    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.original_size, self.bytes.len())
    }
}

/// Drop the alpha channel of RGBA images that are fully opaque
pub fn normalize_opaque(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgba8(rgba) if rgba.pixels().all(|p| p.0[3] == u8::MAX) => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8())
        }
        other => other,
    }
}

/// Color type declared in a PNG header, or `None` if `bytes` isn't a readable PNG
///
/// The image decoder expands palette and low bit depth data, so this is the
/// only place the source's own color mode is still visible.
pub fn source_color_type(bytes: &[u8]) -> Option<ColorType> {
    png::Decoder::new(Cursor::new(bytes))
        .read_info()
        .ok()
        .map(|reader| reader.info().color_type)
}

/// Runs the candidate search with fixed thresholds
#[derive(Debug, Clone, Copy)]
pub struct Shrinker {
    config: ShrinkConfig,
}

impl Shrinker {
    /// Create a shrinker
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the compression level is outside 1–9
    pub fn new(config: ShrinkConfig) -> Result<Self> {
        validate_level(config.compression_level)?;
        Ok(Self { config })
    }

    /// Thresholds in use
    pub const fn config(&self) -> ShrinkConfig {
        self.config
    }

    /// Shrink encoded image bytes
    ///
    /// Only RGB and RGBA sources enter the search. Palette sources are
    /// re-encoded with their exact colors, and grayscale sources in their
    /// own mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded or the fallback
    /// encode fails; failing candidates are skipped silently
    pub fn shrink(&self, original: &[u8]) -> Result<ShrinkOutcome> {
        let image = normalize_opaque(image::load_from_memory(original)?);
        match source_color_type(original) {
            Some(ColorType::Rgb | ColorType::Rgba) => self.shrink_image(&image, original.len()),
            Some(ColorType::Indexed) => self.reencode_paletted(&image, original.len()),
            _ => self.reencode(&image, original.len()),
        }
    }

    /// Shrink a decoded truecolor image whose encoded size was `original_size`
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback encode fails
    pub fn shrink_image(&self, image: &DynamicImage, original_size: usize) -> Result<ShrinkOutcome> {
        if let DynamicImage::ImageRgb8(rgb) = image
            && self.qualifies(rgb)
        {
            let (best, viable_count) = self.search(rgb, original_size);
            if let Some(best) = best {
                debug!(
                    method = %best.spec,
                    reduction = best.reduction_percent,
                    viable_count,
                    "selected least aggressive option"
                );
                return Ok(ShrinkOutcome {
                    selection: Selection::Candidate {
                        spec: best.spec,
                        reduction_percent: best.reduction_percent,
                    },
                    bytes: best.encoded,
                    original_size,
                    viable_count,
                });
            }
            debug!("no option cleared the minimum reduction");
        }

        self.reencode(image, original_size)
    }

    /// Lossless re-encode in the image's own color mode
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails
    pub fn reencode(&self, image: &DynamicImage, original_size: usize) -> Result<ShrinkOutcome> {
        let bytes = encode_dynamic(image, self.config.compression_level, "standard")?;
        Ok(ShrinkOutcome {
            bytes,
            original_size,
            selection: Selection::Standard,
            viable_count: 0,
        })
    }

    /// Lossless re-encode of a palette source as an indexed PNG
    ///
    /// Every distinct color gets its own entry, so no pixel changes. Sources
    /// with transparency decode to RGBA and are re-encoded as such.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails
    pub fn reencode_paletted(
        &self,
        image: &DynamicImage,
        original_size: usize,
    ) -> Result<ShrinkOutcome> {
        let DynamicImage::ImageRgb8(rgb) = image else {
            return self.reencode(image, original_size);
        };
        let colors: Vec<Rgb> = histogram(rgb).into_iter().map(|(color, _)| color).collect();
        let Ok(palette) = Palette::new(colors) else {
            return self.reencode(image, original_size);
        };

        let bytes = remap(rgb, palette).encode(self.config.compression_level, "standard")?;
        Ok(ShrinkOutcome {
            bytes,
            original_size,
            selection: Selection::Standard,
            viable_count: 0,
        })
    }

    /// Whether an image is large enough for the candidate search
    pub fn qualifies(&self, image: &RgbImage) -> bool {
        u64::from(image.width()) * u64::from(image.height()) >= self.config.min_pixel_area
    }

    /// Try the whole matrix; returns the selection and how many were viable
    ///
    /// Only the best encoding seen so far is held while the matrix runs.
    pub fn search(
        &self,
        image: &RgbImage,
        original_size: usize,
    ) -> (Option<OptimizationCandidate>, usize) {
        let mut palettes = PaletteSource::new(image);
        let mut viable_count = 0;
        let viable = candidate_matrix()
            .into_iter()
            .filter_map(|spec| match self.encode_candidate(image, spec, &mut palettes) {
                Ok(encoded) => {
                    let candidate = OptimizationCandidate::measure(spec, encoded, original_size);
                    debug!(
                        option = %spec,
                        reduction = candidate.reduction_percent,
                        viable = candidate.is_viable(),
                        "measured"
                    );
                    Some(candidate)
                }
                Err(error) => {
                    debug!(option = %spec, %error, "option skipped");
                    None
                }
            })
            .filter(OptimizationCandidate::is_viable)
            .inspect(|_| viable_count += 1);

        let best = select_least_aggressive(viable);
        (best, viable_count)
    }

    /// Encode `image` as one matrix cell describes
    ///
    /// # Errors
    ///
    /// Returns an error if a palette cannot be built or the encoder fails
    pub fn encode_candidate(
        &self,
        image: &RgbImage,
        spec: CandidateSpec,
        palettes: &mut PaletteSource,
    ) -> Result<Vec<u8>> {
        let level = self.config.compression_level;
        let label = spec.to_string();

        match (spec.method, spec.parameter) {
            (Method::MedianCutDithered, Parameter::Colors(n)) => {
                remap_dithered(image, palettes.median_cut(n)?).encode(level, &label)
            }
            (Method::MedianCut, Parameter::Colors(n)) => {
                remap(image, palettes.median_cut(n)?).encode(level, &label)
            }
            (Method::Popularity, Parameter::Colors(n)) => {
                remap(image, palettes.popularity(n)?).encode(level, &label)
            }
            (Method::WebSafe, Parameter::Colors(n)) => {
                let palette = if n >= WEB_SAFE_MIN_COLORS {
                    Palette::web_safe()
                } else {
                    palettes.median_cut(n)?
                };
                remap(image, palette).encode(level, &label)
            }
            (Method::Posterize, Parameter::Bits(bits)) => {
                encode_rgb(&posterize(image, bits), level, &label)
            }
            (Method::Recompress, Parameter::Level(recompress_level)) => {
                encode_rgb(image, validate_level(recompress_level)?, &label)
            }
            (method, parameter) => Err(ArtError::InvalidParameter {
                parameter: "candidate",
                value: format!("{} / {parameter}", method.name()),
                reason: "parameter does not fit method".to_string(),
            }),
        }
    }
}

/// Color histogram of one image plus the palettes derived from it so far
pub struct PaletteSource {
    histogram: Vec<(Rgb, u32)>,
    median_cut: HashMap<usize, Palette>,
}

impl PaletteSource {
    /// Build the histogram of `image`
    pub fn new(image: &RgbImage) -> Self {
        Self {
            histogram: histogram(image),
            median_cut: HashMap::new(),
        }
    }

    /// Median-cut palette of `colors` entries, computed once per size
    ///
    /// # Errors
    ///
    /// Returns an error for an empty image or an invalid size
    pub fn median_cut(&mut self, colors: usize) -> Result<Palette> {
        if let Some(palette) = self.median_cut.get(&colors) {
            return Ok(palette.clone());
        }
        let palette = median_cut(&self.histogram, colors)?;
        self.median_cut.insert(colors, palette.clone());
        Ok(palette)
    }

    /// Popularity palette of `colors` entries
    ///
    /// # Errors
    ///
    /// Returns an error for an empty image or an invalid size
    pub fn popularity(&self, colors: usize) -> Result<Palette> {
        popularity(&self.histogram, colors)
    }

    /// Number of distinct colors in the image
    pub const fn distinct_colors(&self) -> usize {
        self.histogram.len()
    }
}
