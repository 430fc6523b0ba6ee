//! Tests for meaning keywords, category fallback and keyword priority

#[cfg(test)]
mod tests {
    use radical_art::style::classifier::{
        DEFAULT_STYLE, StyleAssignment, category_style, classify, match_meaning,
    };
    use radical_art::style::{HexColor, ShapeTag};

    fn style(shape: ShapeTag, hex: &str) -> StyleAssignment {
        StyleAssignment {
            shape,
            color: HexColor::parse(hex).expect("valid color"),
        }
    }

    // Tests a water meaning wins regardless of category or case
    // Verified by checking the category before the meaning
    #[test]
    fn test_water_meaning() {
        let water = style(ShapeTag::Waves, "#4169E1");
        assert_eq!(classify("water", "Animal"), water);
        assert_eq!(classify("WATER", ""), water);
        assert_eq!(classify("  Rain  ", "Other"), water);
    }

    // Tests each keyword group maps to its style
    // Verified by swapping the fire and plant colors
    #[test]
    fn test_keyword_groups() {
        assert_eq!(classify("mountain", ""), style(ShapeTag::Triangles, "#A0522D"));
        assert_eq!(classify("fire", ""), style(ShapeTag::Flames, "#FF4500"));
        assert_eq!(classify("tree", ""), style(ShapeTag::Leaves, "#228B22"));
        assert_eq!(classify("sun", ""), style(ShapeTag::Circles, "#FFD700"));
        assert_eq!(classify("hand", ""), style(ShapeTag::Curves, "#DB7093"));
        assert_eq!(classify("horse", ""), style(ShapeTag::Spots, "#CD853F"));
        assert_eq!(classify("knife", ""), style(ShapeTag::Lines, "#708090"));
    }

    // Tests earlier groups win when a meaning hits several
    // Verified by reversing the group order
    #[test]
    fn test_group_priority() {
        assert_eq!(classify("fire and water", "").shape, ShapeTag::Waves);
        assert_eq!(classify("stone knife", "").shape, ShapeTag::Triangles);
        assert_eq!(classify("bamboo bird", "").shape, ShapeTag::Leaves);
    }

    // Tests keywords match inside longer words
    // Verified by matching whole words only
    #[test]
    fn test_substring_matching() {
        assert_eq!(classify("trees", "").shape, ShapeTag::Leaves);
        // "spear" contains "ear"
        assert_eq!(classify("spear", "").shape, ShapeTag::Curves);
        // "grain" contains "rain"
        assert_eq!(classify("grain", "").shape, ShapeTag::Waves);
    }

    // Tests an unrecognized meaning falls back to the category
    // Verified by returning the default before checking the category
    #[test]
    fn test_category_fallback() {
        assert_eq!(classify("roof", "Animal"), style(ShapeTag::Spots, "#CD853F"));
        assert_eq!(classify("one", "Number"), style(ShapeTag::Dots, "#20B2AA"));
        assert_eq!(classify("", "Home"), style(ShapeTag::Squares, "#B8860B"));
    }

    // Tests unknown meaning and category yield the default style
    // Verified by defaulting to waves
    #[test]
    fn test_default_style() {
        let expected = style(ShapeTag::RandomLines, "#696969");
        assert_eq!(DEFAULT_STYLE, expected);
        assert_eq!(classify("roof", "Unknown"), expected);
        assert_eq!(classify("", ""), expected);
    }

    // Tests category lookup is exact
    // Verified by lowercasing the category before lookup
    #[test]
    fn test_category_exact_match() {
        assert!(category_style("Nature").is_some());
        assert!(category_style("nature").is_none());
        assert!(category_style(" Nature").is_none());
    }

    // Tests blank meanings never match a keyword
    // Verified by matching the empty string against every keyword
    #[test]
    fn test_blank_meaning() {
        assert_eq!(match_meaning(""), None);
        assert_eq!(match_meaning("   "), None);
    }

    // Tests every listed category resolves to a style
    // Verified by removing the Capability entry
    #[test]
    fn test_all_categories_known() {
        for category in [
            "Nature",
            "Body",
            "Animal",
            "Weapon",
            "Home",
            "Food",
            "Agriculture",
            "Clothing",
            "Society",
            "Color",
            "Number",
            "Ceremony",
            "Fishing",
            "Other",
            "Capability",
        ] {
            assert!(category_style(category).is_some(), "{category} should be known");
        }
    }
}
