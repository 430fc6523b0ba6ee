//! Rendering constants, shrinker thresholds and runtime configuration defaults

// Canvas geometry shared by every pattern family and the text overlay
/// Width and height of the square SVG canvas
pub const CANVAS_SIZE: u32 = 512;
/// Font size of the centered radical glyph
pub const GLYPH_FONT_SIZE: u32 = 200;
/// Font size of the index and meaning labels
pub const LABEL_FONT_SIZE: u32 = 28;
/// Inset of the labels from the canvas edges
pub const LABEL_MARGIN: u32 = 24;

/// Fraction of each channel kept when darkening the base color for text
pub const TEXT_DARKEN_FACTOR: f64 = 0.45;
/// Weight of white when tinting the canvas background
pub const BACKGROUND_WHITE_WEIGHT: f64 = 0.99;

/// CJK-capable font stack referenced by name only
pub const FONT_STACK: &str = "'Hiragino Sans', 'Yu Gothic', 'Meiryo', 'Takao', 'IPAexGothic', \
'IPAGothic', 'VL Gothic', 'Noto Sans CJK JP', sans-serif";

// Shrinker thresholds
/// Images below this many pixels skip the candidate search
pub const DEFAULT_MIN_PIXEL_AREA: u64 = 200_000;
/// Compression level for the final encode (1 = fastest, 9 = smallest)
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 9;
/// A candidate must beat the original by more than this percentage
pub const MIN_REDUCTION_PERCENT: f64 = 2.0;

/// Palette sizes tried by the color quantizers
pub const PALETTE_SIZES: [usize; 13] = [256, 240, 224, 208, 192, 176, 160, 144, 128, 112, 96, 80, 64];
/// Bits per channel tried by posterization
pub const POSTERIZE_BITS: [u8; 6] = [7, 6, 5, 4, 3, 2];
/// Compression levels tried by plain recompression
pub const RECOMPRESS_LEVELS: [u8; 6] = [6, 5, 4, 3, 2, 1];
/// Palette size at which the web-safe palette replaces median cut
pub const WEB_SAFE_MIN_COLORS: usize = 216;

// Resizer defaults
/// Default edge length of resized square images
pub const DEFAULT_RESIZE_EDGE: u32 = 512;
/// Extensions picked up when resizing a directory
pub const RESIZE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

// Default paths relative to the site root
/// Radical catalogue read by the SVG generator
pub const DEFAULT_DATA_FILE: &str = "_data/r214.yml";
/// Output directory for generated SVG badges
pub const DEFAULT_SVG_OUTPUT: &str = "assets/img/radicals_svg";
/// Output directory for shrunk PNG files
pub const DEFAULT_SHRINK_OUTPUT: &str = "optimized_images";
/// Output directory for resized images
pub const DEFAULT_RESIZE_OUTPUT: &str = "resized_images";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
