//! Standalone SVG document: tinted canvas, pattern group and text overlay

use crate::io::configuration::{
    CANVAS_SIZE, FONT_STACK, GLYPH_FONT_SIZE, LABEL_FONT_SIZE, LABEL_MARGIN,
};
use crate::io::records::RadicalRecord;
use crate::pattern::generators::render;
use crate::style::classifier::{StyleAssignment, classify};
use std::borrow::Cow;
use std::fmt::Write;

/// Text drawn over the pattern
#[derive(Debug, Clone, Copy)]
pub struct TextOverlay<'a> {
    /// Glyph centered on the canvas
    pub glyph: &'a str,
    /// Index shown at the top-left as `#n`
    pub number: u32,
    /// Label centered along the bottom edge
    pub meaning: &'a str,
}

impl<'a> From<&'a RadicalRecord> for TextOverlay<'a> {
    fn from(record: &'a RadicalRecord) -> Self {
        Self {
            glyph: &record.character,
            number: record.number,
            meaning: &record.meaning,
        }
    }
}

/// Full SVG badge for one radical
pub fn render_radical(record: &RadicalRecord) -> String {
    let style = classify(&record.meaning, &record.category);
    compose(style, Some(&TextOverlay::from(record)))
}

/// Compose the SVG document for a style, with an optional text overlay
pub fn compose(style: StyleAssignment, overlay: Option<&TextOverlay<'_>>) -> String {
    let size = CANVAS_SIZE;
    let center = size / 2;
    let text_color = style.color.darken_for_text();
    let mut svg = String::with_capacity(8 * 1024);

    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
    );
    let _ = writeln!(
        svg,
        "  <defs>\n    <style>\n      .radical-text {{ font-family: {FONT_STACK}; font-size: {GLYPH_FONT_SIZE}px; \
text-anchor: middle; dominant-baseline: central; fill: {text_color}; }}\n      \
.label-text {{ font-family: {FONT_STACK}; font-size: {LABEL_FONT_SIZE}px; fill: {text_color}; }}\n    \
</style>\n  </defs>"
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{size}" height="{size}" fill="{}"/>"#,
        style.color.background_tint()
    );

    let _ = writeln!(svg, r#"  <g class="pattern-{}">"#, style.shape);
    for element in render(style.shape, style.color) {
        let _ = writeln!(svg, "    {}", element.to_svg());
    }
    svg.push_str("  </g>\n");

    if let Some(text) = overlay {
        let _ = writeln!(
            svg,
            r#"  <text x="{center}" y="{center}" class="radical-text">{}</text>"#,
            escape_xml(text.glyph)
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{LABEL_MARGIN}" y="{}" class="label-text" text-anchor="start">#{}</text>"#,
            LABEL_MARGIN + LABEL_FONT_SIZE,
            text.number
        );
        if !text.meaning.trim().is_empty() {
            let _ = writeln!(
                svg,
                r#"  <text x="{center}" y="{}" class="label-text" text-anchor="middle">{}</text>"#,
                size - LABEL_MARGIN,
                escape_xml(text.meaning.trim())
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape the five XML special characters
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
