//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use radical_art::io::configuration::{
        BACKGROUND_WHITE_WEIGHT, CANVAS_SIZE, DEFAULT_COMPRESSION_LEVEL, DEFAULT_MIN_PIXEL_AREA,
        GLYPH_FONT_SIZE, LABEL_FONT_SIZE, LABEL_MARGIN, MIN_REDUCTION_PERCENT, PALETTE_SIZES,
        POSTERIZE_BITS, RECOMPRESS_LEVELS, TEXT_DARKEN_FACTOR, WEB_SAFE_MIN_COLORS,
    };

    // Tests canvas and text sizes fit together
    // Verified by setting the glyph font larger than the canvas
    #[test]
    fn test_canvas_geometry() {
        assert_eq!(CANVAS_SIZE, 512);
        assert!(GLYPH_FONT_SIZE < CANVAS_SIZE);
        assert!(LABEL_MARGIN + LABEL_FONT_SIZE < CANVAS_SIZE / 2);
    }

    // Tests color factors stay within unit range
    // Verified by setting the darken factor above 1
    #[test]
    fn test_color_factors() {
        assert!((0.0..=1.0).contains(&TEXT_DARKEN_FACTOR));
        assert!((0.0..=1.0).contains(&BACKGROUND_WHITE_WEIGHT));
    }

    // Tests shrinker defaults
    // Verified by changing the minimum reduction
    #[test]
    fn test_shrink_defaults() {
        assert_eq!(DEFAULT_MIN_PIXEL_AREA, 200_000);
        assert_eq!(DEFAULT_COMPRESSION_LEVEL, 9);
        assert!((MIN_REDUCTION_PERCENT - 2.0).abs() < f64::EPSILON);
    }

    // Tests search parameters run from least to most aggressive
    // Verified by reversing the palette sizes
    #[test]
    fn test_search_parameters_descend() {
        assert!(PALETTE_SIZES.is_sorted_by(|a, b| a > b));
        assert!(POSTERIZE_BITS.is_sorted_by(|a, b| a > b));
        assert!(RECOMPRESS_LEVELS.is_sorted_by(|a, b| a > b));
        assert_eq!(PALETTE_SIZES.first(), Some(&256));
        assert_eq!(PALETTE_SIZES.last(), Some(&64));
        assert!(PALETTE_SIZES.contains(&224));
        assert!(WEB_SAFE_MIN_COLORS <= 256);
    }
}
