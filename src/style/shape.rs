//! Closed set of decorative background pattern families

use std::fmt;
use std::str::FromStr;

/// One of the eleven background pattern families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    /// Horizontal sinusoidal ribbons
    Waves,
    /// Overlapping mountain silhouettes
    Triangles,
    /// Scattered circles in three styles
    Circles,
    /// Diagonal crosshatch
    Lines,
    /// Broad gentle ribbons
    Curves,
    /// Rotated square grid
    Squares,
    /// Small scattered dots of varying size
    Spots,
    /// Tilted ellipses
    Leaves,
    /// Rising stroked flame paths
    Flames,
    /// Regular dot grid
    Dots,
    /// Scattered line segments
    RandomLines,
}

impl ShapeTag {
    /// Every tag in declaration order
    pub const ALL: [Self; 11] = [
        Self::Waves,
        Self::Triangles,
        Self::Circles,
        Self::Lines,
        Self::Curves,
        Self::Squares,
        Self::Spots,
        Self::Leaves,
        Self::Flames,
        Self::Dots,
        Self::RandomLines,
    ];

    /// Lowercase name used in CSS classes and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waves => "waves",
            Self::Triangles => "triangles",
            Self::Circles => "circles",
            Self::Lines => "lines",
            Self::Curves => "curves",
            Self::Squares => "squares",
            Self::Spots => "spots",
            Self::Leaves => "leaves",
            Self::Flames => "flames",
            Self::Dots => "dots",
            Self::RandomLines => "random_lines",
        }
    }

    /// Parse a tag name, mapping anything unrecognized to [`ShapeTag::RandomLines`]
    pub fn from_name_lossy(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::RandomLines)
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name_lossy(s))
    }
}
