//! Vector primitives emitted by the pattern generators and their SVG markup

use crate::style::color::HexColor;
use std::fmt::Write;

/// A point in canvas coordinates
pub type Point = (f64, f64);

/// Stroke paint for outlined primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color
    pub color: HexColor,
    /// Stroke width in canvas units
    pub width: f64,
}

/// Shape of a single primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Polyline through `points`, optionally closed
    Path {
        /// Vertices in drawing order
        points: Vec<Point>,
        /// Whether the path ends with `Z`
        closed: bool,
    },
    /// Closed polygon
    Polygon {
        /// Vertices in drawing order
        points: Vec<Point>,
    },
    /// Circle
    Circle {
        /// Center
        center: Point,
        /// Radius
        radius: f64,
    },
    /// Ellipse rotated about its center
    Ellipse {
        /// Center
        center: Point,
        /// Horizontal radius before rotation
        rx: f64,
        /// Vertical radius before rotation
        ry: f64,
        /// Rotation in degrees
        rotation: f64,
    },
    /// Straight segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
    /// Rectangle rotated about its center
    Rect {
        /// Top-left corner before rotation
        origin: Point,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Rotation in degrees
        rotation: f64,
    },
}

/// One primitive with its paint and opacity
#[derive(Debug, Clone, PartialEq)]
pub struct PatternElement {
    /// Shape of the primitive
    pub geometry: Geometry,
    /// Fill color, `None` for `fill="none"`
    pub fill: Option<HexColor>,
    /// Optional outline
    pub stroke: Option<Stroke>,
    /// Element opacity in `[0, 1]`
    pub opacity: f64,
}

impl PatternElement {
    /// Filled primitive without outline
    pub const fn filled(geometry: Geometry, color: HexColor, opacity: f64) -> Self {
        Self {
            geometry,
            fill: Some(color),
            stroke: None,
            opacity,
        }
    }

    /// Outlined primitive without fill
    pub const fn stroked(geometry: Geometry, color: HexColor, width: f64, opacity: f64) -> Self {
        Self {
            geometry,
            fill: None,
            stroke: Some(Stroke { color, width }),
            opacity,
        }
    }

    /// SVG markup for this element
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        match &self.geometry {
            Geometry::Path { points, closed } => {
                let _ = write!(out, r#"<path d="{}""#, path_data(points, *closed));
            }
            Geometry::Polygon { points } => {
                let joined = points
                    .iter()
                    .map(|&(x, y)| format!("{},{}", fmt_num(x), fmt_num(y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = write!(out, r#"<polygon points="{joined}""#);
            }
            Geometry::Circle { center, radius } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    fmt_num(center.0),
                    fmt_num(center.1),
                    fmt_num(*radius)
                );
            }
            Geometry::Ellipse {
                center,
                rx,
                ry,
                rotation,
            } => {
                let _ = write!(
                    out,
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
                    fmt_num(center.0),
                    fmt_num(center.1),
                    fmt_num(*rx),
                    fmt_num(*ry)
                );
                push_rotation(&mut out, *rotation, *center);
            }
            Geometry::Line { from, to } => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    fmt_num(from.0),
                    fmt_num(from.1),
                    fmt_num(to.0),
                    fmt_num(to.1)
                );
            }
            Geometry::Rect {
                origin,
                width,
                height,
                rotation,
            } => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    fmt_num(origin.0),
                    fmt_num(origin.1),
                    fmt_num(*width),
                    fmt_num(*height)
                );
                let center = (origin.0 + width / 2.0, origin.1 + height / 2.0);
                push_rotation(&mut out, *rotation, center);
            }
        }

        match self.fill {
            Some(color) => {
                let _ = write!(out, r#" fill="{color}""#);
            }
            None => out.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = self.stroke {
            let _ = write!(
                out,
                r#" stroke="{}" stroke-width="{}""#,
                stroke.color,
                fmt_num(stroke.width)
            );
        }
        let _ = write!(out, r#" opacity="{}"/>"#, fmt_num(self.opacity));
        out
    }
}

fn push_rotation(out: &mut String, rotation: f64, center: Point) {
    if rotation.abs() > f64::EPSILON {
        let _ = write!(
            out,
            r#" transform="rotate({} {} {})""#,
            fmt_num(rotation),
            fmt_num(center.0),
            fmt_num(center.1)
        );
    }
}

/// `M x,y L x,y ...` path data, closed with `Z` when requested
pub fn path_data(points: &[Point], closed: bool) -> String {
    let mut data = String::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(data, "{command} {},{}", fmt_num(x), fmt_num(y));
    }
    if closed && !points.is_empty() {
        data.push_str(" Z");
    }
    data
}

/// Compact number formatting: integers without decimals, otherwise two places
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.abs() < f64::EPSILON {
        return "0".to_string();
    }
    if rounded.fract().abs() < f64::EPSILON {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}
