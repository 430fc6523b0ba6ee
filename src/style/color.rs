//! RGB colors with hex parsing and the blending used by the SVG overlay

use crate::io::configuration::{BACKGROUND_WHITE_WEIGHT, TEXT_DARKEN_FACTOR};
use crate::io::error::{Result, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit RGB color
///
/// Always renders as `#rrggbb` with lowercase digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// Build a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (either case, leading `#` required)
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly `#` followed by six hex digits
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| invalid_parameter("color", &value, &"expected #RRGGBB"))?;

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid_parameter("color", &value, &"invalid hex digits"))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Scale every channel by `factor`, rounding down
    pub fn scale(self, factor: f64) -> Self {
        let apply = |c: u8| (f64::from(c) * factor).floor().clamp(0.0, 255.0) as u8;
        Self::new(apply(self.r), apply(self.g), apply(self.b))
    }

    /// Text color: each channel kept at 45% of its value
    pub fn darken_for_text(self) -> Self {
        self.scale(TEXT_DARKEN_FACTOR)
    }

    /// Mix with white, where `white_weight` is the share of white in the result
    pub fn blend_with_white(self, white_weight: f64) -> Self {
        let weight = white_weight.clamp(0.0, 1.0);
        let apply =
            |c: u8| (255.0 * weight + f64::from(c) * (1.0 - weight)).floor().clamp(0.0, 255.0) as u8;
        Self::new(apply(self.r), apply(self.g), apply(self.b))
    }

    /// Near-white canvas tint: 99% white, 1% color
    pub fn background_tint(self) -> Self {
        self.blend_with_white(BACKGROUND_WHITE_WEIGHT)
    }

    /// Stable 64-bit FNV-1a hash of the `#rrggbb` form
    pub fn stable_hash(self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0100_0000_01b3;

        self.to_string()
            .bytes()
            .fold(OFFSET_BASIS, |hash, byte| {
                (hash ^ u64::from(byte)).wrapping_mul(PRIME)
            })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = crate::io::error::ArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
