//! Keyword and category driven mapping from a radical's meaning to its background style
//!
//! Meaning keywords are checked group by group in a fixed priority order, so a meaning
//! that mentions both fire and water resolves to water. When no keyword matches, the
//! category decides; an unknown category gets the neutral default.

use crate::style::color::HexColor;
use crate::style::shape::ShapeTag;

/// Pattern family and base color chosen for one radical
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAssignment {
    /// Background pattern family
    pub shape: ShapeTag,
    /// Base color of the pattern
    pub color: HexColor,
}

impl StyleAssignment {
    const fn new(shape: ShapeTag, color: HexColor) -> Self {
        Self { shape, color }
    }
}

struct KeywordGroup {
    keywords: &'static [&'static str],
    style: StyleAssignment,
}

const ROYAL_BLUE: HexColor = HexColor::new(0x41, 0x69, 0xE1);
const SIENNA: HexColor = HexColor::new(0xA0, 0x52, 0x2D);
const ORANGE_RED: HexColor = HexColor::new(0xFF, 0x45, 0x00);
const FOREST_GREEN: HexColor = HexColor::new(0x22, 0x8B, 0x22);
const GOLD: HexColor = HexColor::new(0xFF, 0xD7, 0x00);
const PALE_VIOLET_RED: HexColor = HexColor::new(0xDB, 0x70, 0x93);
const PERU: HexColor = HexColor::new(0xCD, 0x85, 0x3F);
const SLATE_GRAY: HexColor = HexColor::new(0x70, 0x80, 0x90);
const DIM_GRAY: HexColor = HexColor::new(0x69, 0x69, 0x69);

// Priority order: water, mountain, fire, plant, celestial, body, animal, weapon
const KEYWORD_GROUPS: [KeywordGroup; 8] = [
    KeywordGroup {
        keywords: &["water", "river", "ice", "rain", "steam"],
        style: StyleAssignment::new(ShapeTag::Waves, ROYAL_BLUE),
    },
    KeywordGroup {
        keywords: &["mountain", "hill", "cliff", "earth", "stone"],
        style: StyleAssignment::new(ShapeTag::Triangles, SIENNA),
    },
    KeywordGroup {
        keywords: &["fire", "flame"],
        style: StyleAssignment::new(ShapeTag::Flames, ORANGE_RED),
    },
    KeywordGroup {
        keywords: &["tree", "wood", "grass", "bamboo", "grain", "rice", "sprout"],
        style: StyleAssignment::new(ShapeTag::Leaves, FOREST_GREEN),
    },
    KeywordGroup {
        keywords: &["sun", "moon", "wind", "evening"],
        style: StyleAssignment::new(ShapeTag::Circles, GOLD),
    },
    KeywordGroup {
        keywords: &[
            "hand", "foot", "eye", "mouth", "heart", "body", "head", "ear", "hair", "face", "nose",
        ],
        style: StyleAssignment::new(ShapeTag::Curves, PALE_VIOLET_RED),
    },
    KeywordGroup {
        keywords: &[
            "cow", "dog", "horse", "bird", "fish", "sheep", "pig", "tiger", "deer", "frog",
            "turtle",
        ],
        style: StyleAssignment::new(ShapeTag::Spots, PERU),
    },
    KeywordGroup {
        keywords: &["knife", "sword", "axe", "spear", "bow", "arrow", "weapon"],
        style: StyleAssignment::new(ShapeTag::Lines, SLATE_GRAY),
    },
];

const CATEGORY_STYLES: [(&str, StyleAssignment); 15] = [
    ("Nature", StyleAssignment::new(ShapeTag::Waves, ROYAL_BLUE)),
    ("Body", StyleAssignment::new(ShapeTag::Curves, PALE_VIOLET_RED)),
    ("Animal", StyleAssignment::new(ShapeTag::Spots, PERU)),
    ("Weapon", StyleAssignment::new(ShapeTag::Lines, SLATE_GRAY)),
    (
        "Home",
        StyleAssignment::new(ShapeTag::Squares, HexColor::new(0xB8, 0x86, 0x0B)),
    ),
    (
        "Food",
        StyleAssignment::new(ShapeTag::Circles, HexColor::new(0xFF, 0x8C, 0x00)),
    ),
    ("Agriculture", StyleAssignment::new(ShapeTag::Leaves, FOREST_GREEN)),
    (
        "Clothing",
        StyleAssignment::new(ShapeTag::Curves, HexColor::new(0x93, 0x70, 0xDB)),
    ),
    (
        "Society",
        StyleAssignment::new(ShapeTag::Lines, HexColor::new(0x46, 0x82, 0xB4)),
    ),
    (
        "Color",
        StyleAssignment::new(ShapeTag::Circles, HexColor::new(0xC7, 0x15, 0x85)),
    ),
    (
        "Number",
        StyleAssignment::new(ShapeTag::Dots, HexColor::new(0x20, 0xB2, 0xAA)),
    ),
    (
        "Ceremony",
        StyleAssignment::new(ShapeTag::Curves, HexColor::new(0xB2, 0x22, 0x22)),
    ),
    (
        "Fishing",
        StyleAssignment::new(ShapeTag::Waves, HexColor::new(0x00, 0x8B, 0x8B)),
    ),
    ("Other", StyleAssignment::new(ShapeTag::RandomLines, DIM_GRAY)),
    (
        "Capability",
        StyleAssignment::new(ShapeTag::Lines, HexColor::new(0x2F, 0x4F, 0x4F)),
    ),
];

/// Style used when neither meaning nor category is recognized
pub const DEFAULT_STYLE: StyleAssignment = StyleAssignment::new(ShapeTag::RandomLines, DIM_GRAY);

/// Choose a background style from a radical's meaning and category
pub fn classify(meaning: &str, category: &str) -> StyleAssignment {
    match_meaning(meaning)
        .or_else(|| category_style(category))
        .unwrap_or(DEFAULT_STYLE)
}

/// First keyword group whose keywords occur in `meaning`, ignoring case
pub fn match_meaning(meaning: &str) -> Option<StyleAssignment> {
    let lowered = meaning.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    KEYWORD_GROUPS
        .iter()
        .find(|group| group.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|group| group.style)
}

/// Fallback style for a category name (exact match)
pub fn category_style(category: &str) -> Option<StyleAssignment> {
    CATEGORY_STYLES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, style)| *style)
}
