//! Tests for full badge document composition

#[cfg(test)]
mod tests {
    use radical_art::io::records::RadicalRecord;
    use radical_art::pattern::document::{TextOverlay, compose, escape_xml, render_radical};
    use radical_art::style::classifier::StyleAssignment;
    use radical_art::style::{HexColor, ShapeTag};
    use std::borrow::Cow;

    fn record(number: u32, glyph: &str, meaning: &str, category: &str) -> RadicalRecord {
        RadicalRecord {
            number,
            character: glyph.to_string(),
            meaning: meaning.to_string(),
            category: category.to_string(),
        }
    }

    // Tests the end-to-end badge for radical one
    // Verified by classifying on category before meaning
    #[test]
    fn test_render_radical_one() {
        let svg = render_radical(&record(1, "一", "one", "Number"));

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"<svg width="512" height="512" viewBox="0 0 512 512""#));
        assert!(svg.contains(r#"<g class="pattern-dots">"#));
        assert!(svg.contains(">一</text>"));
        assert!(svg.contains(">#1</text>"));
        assert!(svg.contains(">one</text>"));
        // darkened #20B2AA
        assert!(svg.contains("fill: #0e504c"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    // Tests every family, plus an unknown name, yields a 512 document
    // Verified by returning an empty string for random lines
    #[test]
    fn test_every_shape_renders() {
        let color = HexColor::new(0x41, 0x69, 0xE1);
        let shapes = ShapeTag::ALL
            .into_iter()
            .chain(std::iter::once(ShapeTag::from_name_lossy("gradients")));

        for shape in shapes {
            let svg = compose(StyleAssignment { shape, color }, None);
            assert!(svg.contains(r#"width="512" height="512""#));
            assert!(svg.contains(&format!(r#"class="pattern-{shape}""#)));
            assert!(!svg.contains("radical-text\">"), "no overlay requested");
        }
    }

    // Tests the canvas is tinted near-white
    // Verified by filling the background with the base color
    #[test]
    fn test_background_tint() {
        let style = StyleAssignment {
            shape: ShapeTag::Waves,
            color: HexColor::new(0x41, 0x69, 0xE1),
        };
        let svg = compose(style, None);
        assert!(svg.contains(r##"<rect width="512" height="512" fill="#fdfdfe"/>"##));
    }

    // Tests text content is escaped
    // Verified by writing the meaning unescaped
    #[test]
    fn test_text_is_escaped() {
        let svg = render_radical(&record(9, "<&>", "person & \"man\"", "Body"));
        assert!(svg.contains(">&lt;&amp;&gt;</text>"));
        assert!(svg.contains(">person &amp; &quot;man&quot;</text>"));
    }

    // Tests a blank meaning omits the bottom label
    // Verified by always writing the meaning label
    #[test]
    fn test_blank_meaning_has_no_label() {
        let overlay = TextOverlay {
            glyph: "丶",
            number: 3,
            meaning: "  ",
        };
        let svg = compose(
            StyleAssignment {
                shape: ShapeTag::RandomLines,
                color: HexColor::new(0x69, 0x69, 0x69),
            },
            Some(&overlay),
        );

        assert!(svg.contains(">#3</text>"));
        assert!(!svg.contains("text-anchor=\"middle\">"));
    }

    // Tests escaping borrows when nothing needs replacing
    // Verified by always allocating
    #[test]
    fn test_escape_xml_borrows() {
        assert!(matches!(escape_xml("water"), Cow::Borrowed("water")));
        assert_eq!(escape_xml("a'b"), "a&apos;b");
    }
}
