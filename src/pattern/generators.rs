//! One generator per pattern family, each a pure function of the base color
//!
//! Geometry is laid out on the fixed 512×512 canvas. Only `waves` draws on a
//! random source, seeded from the color so a given color always produces the
//! same ribbons.

use crate::io::configuration::CANVAS_SIZE;
use crate::pattern::element::{Geometry, PatternElement, Point};
use crate::style::color::HexColor;
use crate::style::shape::ShapeTag;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::TAU;

const EDGE: f64 = CANVAS_SIZE as f64;

const WAVE_BAND_SPACING: usize = 50;
const WAVE_SAMPLE_STEP: usize = 16;
const WAVE_OPACITY: f64 = 0.3;

const TRIANGLE_OPACITY: [f64; 4] = [0.25, 0.35, 0.45, 0.3];
const CURVE_OPACITY: [f64; 4] = [0.25, 0.3, 0.35, 0.3];
const LEAF_OPACITY: [f64; 3] = [0.35, 0.45, 0.4];
const SPOT_OPACITY: [f64; 4] = [0.3, 0.4, 0.5, 0.35];
const RANDOM_LINE_OPACITY: [f64; 2] = [0.4, 0.3];

const FILLED_OPACITY: f64 = 0.3;
const OUTLINE_OPACITY: f64 = 0.4;
const OUTLINE_WIDTH: f64 = 3.0;

const GRID_STRIDE: usize = 80;
const HATCH_STRIDE: usize = 40;

/// Primitives for `shape` drawn in `color`
pub fn render(shape: ShapeTag, color: HexColor) -> Vec<PatternElement> {
    match shape {
        ShapeTag::Waves => waves(color),
        ShapeTag::Triangles => triangles(color),
        ShapeTag::Circles => circles(color),
        ShapeTag::Lines => lines(color),
        ShapeTag::Curves => curves(color),
        ShapeTag::Squares => squares(color),
        ShapeTag::Spots => spots(color),
        ShapeTag::Leaves => leaves(color),
        ShapeTag::Flames => flames(color),
        ShapeTag::Dots => dots(color),
        ShapeTag::RandomLines => random_lines(color),
    }
}

/// Look up `table[index % len]`, treating an empty table as fully opaque
pub fn cycled_opacity(table: &[f64], index: usize) -> f64 {
    index
        .checked_rem(table.len())
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(1.0)
}

fn waves(color: HexColor) -> Vec<PatternElement> {
    let mut rng = StdRng::seed_from_u64(color.stable_hash());

    (0..CANVAS_SIZE as usize)
        .step_by(WAVE_BAND_SPACING)
        .map(|top| {
            let amplitude = rng.random_range(10.0_f64..25.0);
            let phase = rng.random_range(0.0..TAU);
            let top = top as f64;
            let crest = top + WAVE_BAND_SPACING as f64 / 2.0;
            let bottom = top + WAVE_BAND_SPACING as f64;

            let mut points: Vec<Point> = (0..=CANVAS_SIZE as usize)
                .step_by(WAVE_SAMPLE_STEP)
                .map(|x| {
                    let x = x as f64;
                    (x, crest + amplitude * (x * 0.02 + phase).sin())
                })
                .collect();
            points.push((EDGE, bottom));
            points.push((0.0, bottom));

            PatternElement::filled(
                Geometry::Path {
                    points,
                    closed: true,
                },
                color,
                WAVE_OPACITY,
            )
        })
        .collect()
}

fn triangles(color: HexColor) -> Vec<PatternElement> {
    (0..4_i32)
        .map(|i| {
            let x_offset = f64::from(i * 150 - 50);
            let peak = f64::from(150 + i * 40);
            PatternElement::filled(
                Geometry::Polygon {
                    points: vec![
                        (x_offset + 100.0, EDGE),
                        (x_offset + 200.0, peak),
                        (x_offset + 300.0, EDGE),
                    ],
                },
                color,
                cycled_opacity(&TRIANGLE_OPACITY, i as usize),
            )
        })
        .collect()
}

/// Filled, outline-only, or outline around a filled core of half size
fn three_styles(
    index: usize,
    geometry: &dyn Fn(f64) -> Geometry,
    color: HexColor,
) -> Vec<PatternElement> {
    match index % 3 {
        0 => vec![PatternElement::filled(geometry(1.0), color, FILLED_OPACITY)],
        1 => vec![PatternElement::stroked(
            geometry(1.0),
            color,
            OUTLINE_WIDTH,
            OUTLINE_OPACITY,
        )],
        _ => vec![
            PatternElement::stroked(geometry(1.0), color, OUTLINE_WIDTH, OUTLINE_OPACITY),
            PatternElement::filled(geometry(0.5), color, FILLED_OPACITY),
        ],
    }
}

fn circles(color: HexColor) -> Vec<PatternElement> {
    (0..12_usize)
        .flat_map(|i| {
            let center = (((i * 123) % 450 + 50) as f64, ((i * 87) % 450 + 50) as f64);
            let radius = (25 + (i % 4) * 15) as f64;
            three_styles(
                i,
                &|scale: f64| Geometry::Circle {
                    center,
                    radius: radius * scale,
                },
                color,
            )
        })
        .collect()
}

fn squares(color: HexColor) -> Vec<PatternElement> {
    const SIDE: f64 = 50.0;
    const TILT: f64 = 15.0;

    let mut elements = Vec::new();
    for (row, y) in (0..CANVAS_SIZE as usize).step_by(GRID_STRIDE).enumerate() {
        for (col, x) in (0..CANVAS_SIZE as usize).step_by(GRID_STRIDE).enumerate() {
            let center = (x as f64 + 10.0 + SIDE / 2.0, y as f64 + 10.0 + SIDE / 2.0);
            elements.extend(three_styles(
                row + col,
                &|scale: f64| {
                    let side = SIDE * scale;
                    Geometry::Rect {
                        origin: (center.0 - side / 2.0, center.1 - side / 2.0),
                        width: side,
                        height: side,
                        rotation: TILT,
                    }
                },
                color,
            ));
        }
    }
    elements
}

fn lines(color: HexColor) -> Vec<PatternElement> {
    let starts = || (0..CANVAS_SIZE as usize).step_by(HATCH_STRIDE).map(|i| i as f64);

    let falling = starts().map(|i| {
        PatternElement::stroked(
            Geometry::Line {
                from: (i, 0.0),
                to: (i + 150.0, EDGE),
            },
            color,
            4.0,
            0.4,
        )
    });
    let rising = starts().map(|i| {
        PatternElement::stroked(
            Geometry::Line {
                from: (i + 150.0, 0.0),
                to: (i, EDGE),
            },
            color,
            2.0,
            0.3,
        )
    });

    falling.chain(rising).collect()
}

fn curves(color: HexColor) -> Vec<PatternElement> {
    (0..4_usize)
        .map(|i| {
            let top = (i * 120) as f64;
            let mut points = vec![(0.0, top + 80.0)];
            points.extend((20..=520_u32).step_by(20).map(|x| {
                let x = f64::from(x);
                (x, top + 80.0 + 25.0 * (x * 0.008 + i as f64).sin())
            }));
            points.push((EDGE, top + 120.0));
            points.push((0.0, top + 120.0));

            PatternElement::filled(
                Geometry::Path {
                    points,
                    closed: true,
                },
                color,
                cycled_opacity(&CURVE_OPACITY, i),
            )
        })
        .collect()
}

fn spots(color: HexColor) -> Vec<PatternElement> {
    (0..20_usize)
        .map(|i| {
            PatternElement::filled(
                Geometry::Circle {
                    center: (((i * 73) % 512) as f64, ((i * 97) % 512) as f64),
                    radius: (8 + (i % 4) * 3) as f64,
                },
                color,
                cycled_opacity(&SPOT_OPACITY, i),
            )
        })
        .collect()
}

fn leaves(color: HexColor) -> Vec<PatternElement> {
    (0..10_usize)
        .map(|i| {
            PatternElement::filled(
                Geometry::Ellipse {
                    center: (((i * 97) % 512) as f64, ((i * 73) % 512) as f64),
                    rx: 20.0,
                    ry: 12.0,
                    rotation: ((i * 36) % 180) as f64,
                },
                color,
                cycled_opacity(&LEAF_OPACITY, i),
            )
        })
        .collect()
}

fn flames(color: HexColor) -> Vec<PatternElement> {
    (0..6_u32)
        .map(|i| {
            let base = f64::from(i * 90 + 50);
            let mut points = vec![(base, EDGE)];
            points.extend((1..10_u32).map(|j| {
                let j = f64::from(j);
                (base + 10.0 * (j * 0.5).sin(), EDGE - j * 40.0)
            }));

            PatternElement::stroked(
                Geometry::Path {
                    points,
                    closed: false,
                },
                color,
                4.0,
                0.5,
            )
        })
        .collect()
}

fn dots(color: HexColor) -> Vec<PatternElement> {
    let stops = || (0..CANVAS_SIZE as usize).step_by(GRID_STRIDE).map(|v| v as f64);

    stops()
        .flat_map(|x| {
            stops().map(move |y| {
                PatternElement::filled(
                    Geometry::Circle {
                        center: (x, y),
                        radius: 3.0,
                    },
                    color,
                    0.5,
                )
            })
        })
        .collect()
}

fn random_lines(color: HexColor) -> Vec<PatternElement> {
    (0..8_usize)
        .map(|i| {
            let x1 = (i * 70) % 512;
            let y1 = (i * 90) % 512;
            PatternElement::stroked(
                Geometry::Line {
                    from: (x1 as f64, y1 as f64),
                    to: (((x1 + 150) % 512) as f64, ((y1 + 100) % 512) as f64),
                },
                color,
                2.0,
                cycled_opacity(&RANDOM_LINE_OPACITY, i),
            )
        })
        .collect()
}
