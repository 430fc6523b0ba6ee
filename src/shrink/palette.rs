//! Color palettes for indexed PNG output
//!
//! Three ways of choosing at most N colors from an image: median cut (split
//! the color space where the population divides evenly), popularity (keep the
//! most frequent colors) and the fixed 216-color web-safe cube.

use crate::io::error::{Result, invalid_parameter};
use image::RgbImage;
use std::collections::HashMap;

/// An 8-bit RGB triple
pub type Rgb = [u8; 3];

/// Largest palette an 8-bit indexed PNG can hold
pub const MAX_PALETTE_LEN: usize = 256;

/// Between 1 and 256 colors; index order is palette order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Wrap a color list
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for an empty list or more than 256 colors
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() || colors.len() > MAX_PALETTE_LEN {
            return Err(invalid_parameter(
                "palette",
                &colors.len(),
                &"must hold between 1 and 256 colors",
            ));
        }
        Ok(Self { colors })
    }

    /// The 6×6×6 web-safe color cube
    pub fn web_safe() -> Self {
        const LEVELS: [u8; 6] = [0, 51, 102, 153, 204, 255];
        let colors = LEVELS
            .iter()
            .flat_map(|&r| {
                LEVELS
                    .iter()
                    .flat_map(move |&g| LEVELS.iter().map(move |&b| [r, g, b]))
            })
            .collect();
        Self { colors }
    }

    /// Colors in index order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Packed RGB bytes for the PLTE chunk
    pub fn to_bytes(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }

    /// Index of the closest color by squared RGB distance; first wins on ties
    pub fn nearest(&self, color: Rgb) -> u8 {
        let mut best_index = 0;
        let mut best_distance = u32::MAX;
        for (index, candidate) in self.colors.iter().enumerate() {
            let distance = distance_squared(color, *candidate);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
                if distance == 0 {
                    break;
                }
            }
        }
        best_index as u8
    }

    /// Color at `index`, black if out of range
    pub fn color(&self, index: u8) -> Rgb {
        self.colors
            .get(usize::from(index))
            .copied()
            .unwrap_or([0, 0, 0])
    }
}

/// Squared Euclidean distance in RGB space
pub fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            d.unsigned_abs() * d.unsigned_abs()
        })
        .sum()
}

/// Memoized nearest-color lookup
pub struct NearestCache<'a> {
    palette: &'a Palette,
    cache: HashMap<Rgb, u8>,
}

impl<'a> NearestCache<'a> {
    /// Empty cache over `palette`
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            cache: HashMap::new(),
        }
    }

    /// Palette index closest to `color`
    pub fn lookup(&mut self, color: Rgb) -> u8 {
        let palette = self.palette;
        *self
            .cache
            .entry(color)
            .or_insert_with(|| palette.nearest(color))
    }
}

/// Distinct colors and their pixel counts, sorted by color
pub fn histogram(image: &RgbImage) -> Vec<(Rgb, u32)> {
    let mut counts: HashMap<Rgb, u32> = HashMap::new();
    for pixel in image.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }
    let mut entries: Vec<(Rgb, u32)> = counts.into_iter().collect();
    entries.sort_unstable_by_key(|(color, _)| *color);
    entries
}

#[derive(Debug, Clone, Copy)]
enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    const fn of(self, color: Rgb) -> u8 {
        match self {
            Self::Red => color[0],
            Self::Green => color[1],
            Self::Blue => color[2],
        }
    }
}

struct ColorBox {
    entries: Vec<(Rgb, u32)>,
}

impl ColorBox {
    fn population(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// Channel with the widest value range, and that range
    fn widest_channel(&self) -> (Channel, u8) {
        Channel::ALL
            .into_iter()
            .map(|channel| {
                let (min, max) = self
                    .entries
                    .iter()
                    .fold((u8::MAX, u8::MIN), |(lo, hi), (c, _)| {
                        let v = channel.of(*c);
                        (lo.min(v), hi.max(v))
                    });
                (channel, max.saturating_sub(min))
            })
            .fold((Channel::Red, 0), |best, next| {
                if next.1 > best.1 { next } else { best }
            })
    }

    /// Population-weighted mean color
    fn average(&self) -> Rgb {
        let total = self.population().max(1);
        let mut sums = [0u64; 3];
        for (color, count) in &self.entries {
            for (sum, value) in sums.iter_mut().zip(color.iter()) {
                *sum += u64::from(*value) * u64::from(*count);
            }
        }
        sums.map(|sum| ((sum + total / 2) / total).min(255) as u8)
    }

    /// Split at the population median along the widest channel
    fn split(mut self) -> (Self, Self) {
        let (channel, _) = self.widest_channel();
        self.entries
            .sort_unstable_by_key(|(color, _)| (channel.of(*color), *color));

        let half = self.population() / 2;
        let mut running = 0u64;
        let mut cut = 1;
        for (position, (_, count)) in self.entries.iter().enumerate() {
            running += u64::from(*count);
            if running >= half {
                cut = position + 1;
                break;
            }
        }
        let cut = cut.clamp(1, self.entries.len().saturating_sub(1).max(1));

        let upper = self.entries.split_off(cut);
        (self, Self { entries: upper })
    }
}

/// Median-cut palette of at most `max_colors` colors
///
/// Images with no more distinct colors than requested keep them exactly.
///
/// # Errors
///
/// Returns an invalid parameter error for an empty histogram or a size outside 1–256
pub fn median_cut(histogram: &[(Rgb, u32)], max_colors: usize) -> Result<Palette> {
    let max_colors = validate_size(max_colors)?;
    if histogram.len() <= max_colors {
        return Palette::new(histogram.iter().map(|(color, _)| *color).collect());
    }

    let mut boxes = vec![ColorBox {
        entries: histogram.to_vec(),
    }];
    while boxes.len() < max_colors {
        let splittable = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.entries.len() > 1)
            .max_by_key(|(_, b)| (b.widest_channel().1, b.population()))
            .map(|(index, _)| index);
        let Some(index) = splittable else {
            break;
        };
        let (lower, upper) = boxes.swap_remove(index).split();
        boxes.push(lower);
        boxes.push(upper);
    }

    Palette::new(boxes.iter().map(ColorBox::average).collect())
}

/// Palette of the `max_colors` most frequent colors; ties keep color order
///
/// # Errors
///
/// Returns an invalid parameter error for an empty histogram or a size outside 1–256
pub fn popularity(histogram: &[(Rgb, u32)], max_colors: usize) -> Result<Palette> {
    let max_colors = validate_size(max_colors)?;
    let mut ranked = histogram.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    Palette::new(
        ranked
            .into_iter()
            .take(max_colors)
            .map(|(color, _)| color)
            .collect(),
    )
}

fn validate_size(max_colors: usize) -> Result<usize> {
    if (1..=MAX_PALETTE_LEN).contains(&max_colors) {
        Ok(max_colors)
    } else {
        Err(invalid_parameter(
            "colors",
            &max_colors,
            &"must be between 1 and 256",
        ))
    }
}
