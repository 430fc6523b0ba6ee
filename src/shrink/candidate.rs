//! The matrix of (method × parameter) encodings tried by the shrinker

use crate::io::configuration::{
    MIN_REDUCTION_PERCENT, PALETTE_SIZES, POSTERIZE_BITS, RECOMPRESS_LEVELS,
};
use std::fmt;

/// Strategy for producing a smaller encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Median-cut palette with Floyd–Steinberg dithering
    MedianCutDithered,
    /// Median-cut palette, nearest color
    MedianCut,
    /// Most frequent colors, nearest color
    Popularity,
    /// Web-safe cube for large palettes, median cut otherwise
    WebSafe,
    /// Drop low bits of each channel
    Posterize,
    /// Unchanged pixels at a different compression level
    Recompress,
}

impl Method {
    /// Every method in search order
    pub const ALL: [Self; 6] = [
        Self::MedianCutDithered,
        Self::MedianCut,
        Self::Popularity,
        Self::WebSafe,
        Self::Posterize,
        Self::Recompress,
    ];

    /// Short name used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::MedianCutDithered => "median_cut_dithered",
            Self::MedianCut => "median_cut",
            Self::Popularity => "popularity",
            Self::WebSafe => "web_safe",
            Self::Posterize => "posterize",
            Self::Recompress => "recompress",
        }
    }

    /// Parameter values tried for this method, least aggressive first
    pub fn parameters(self) -> Vec<Parameter> {
        match self {
            Self::MedianCutDithered | Self::MedianCut | Self::Popularity | Self::WebSafe => {
                PALETTE_SIZES.iter().map(|&n| Parameter::Colors(n)).collect()
            }
            Self::Posterize => POSTERIZE_BITS.iter().map(|&b| Parameter::Bits(b)).collect(),
            Self::Recompress => RECOMPRESS_LEVELS
                .iter()
                .map(|&l| Parameter::Level(l))
                .collect(),
        }
    }
}

/// The knob a method is turned by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Palette size
    Colors(usize),
    /// Bits kept per channel
    Bits(u8),
    /// PNG compression level
    Level(u8),
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colors(n) => write!(f, "{n} colors"),
            Self::Bits(b) => write!(f, "{b} bits"),
            Self::Level(l) => write!(f, "level {l}"),
        }
    }
}

/// One cell of the candidate matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateSpec {
    /// Strategy
    pub method: Method,
    /// Strategy parameter
    pub parameter: Parameter,
}

impl fmt::Display for CandidateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {}", self.method.name(), self.parameter)
    }
}

/// Every (method, parameter) pair in search order
pub fn candidate_matrix() -> Vec<CandidateSpec> {
    Method::ALL
        .into_iter()
        .flat_map(|method| {
            method
                .parameters()
                .into_iter()
                .map(move |parameter| CandidateSpec { method, parameter })
        })
        .collect()
}

/// An encoding that was measured against the original
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationCandidate {
    /// Which cell of the matrix produced it
    pub spec: CandidateSpec,
    /// Encoded PNG bytes
    pub encoded: Vec<u8>,
    /// Size decrease relative to the original, in percent
    pub reduction_percent: f64,
}

impl OptimizationCandidate {
    /// Measure `encoded` against the original size
    pub fn measure(spec: CandidateSpec, encoded: Vec<u8>, original_size: usize) -> Self {
        let reduction_percent = reduction_percent(original_size, encoded.len());
        Self {
            spec,
            encoded,
            reduction_percent,
        }
    }

    /// Whether the saving clears the minimum worth keeping
    pub fn is_viable(&self) -> bool {
        self.reduction_percent > MIN_REDUCTION_PERCENT
    }
}

/// `(original - new) / original` in percent; zero for an empty original
pub fn reduction_percent(original_size: usize, new_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (original_size as f64 - new_size as f64) / original_size as f64 * 100.0
}

/// Least aggressive viable candidate; the earliest wins ties
pub fn select_least_aggressive(
    candidates: impl IntoIterator<Item = OptimizationCandidate>,
) -> Option<OptimizationCandidate> {
    candidates
        .into_iter()
        .filter(OptimizationCandidate::is_viable)
        .fold(None, |best: Option<OptimizationCandidate>, next| match best {
            Some(current) if current.reduction_percent <= next.reduction_percent => Some(current),
            _ => Some(next),
        })
}
