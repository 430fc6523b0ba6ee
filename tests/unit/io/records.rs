//! Tests for radical catalogue parsing and record validation

#[cfg(test)]
mod tests {
    use radical_art::ArtError;
    use radical_art::io::records::{RadicalRecord, load_raw_records, parse_raw_records};
    use std::fs;

    const CATALOGUE: &str = r#"
- Number: 1
  Radical: 一
  Meaning: one
  Category: Number
- Number: "85"
  Radical: 水
  Meaning: water
  Category: Nature
"#;

    // Tests integer and string numbers both validate
    // Verified by rejecting string numbers
    #[test]
    fn test_parse_valid_records() {
        let records: Vec<RadicalRecord> = parse_raw_records(CATALOGUE)
            .expect("catalogue should parse")
            .into_iter()
            .enumerate()
            .map(|(position, raw)| raw.into_record(position).expect("record should validate"))
            .collect();

        assert_eq!(
            records,
            vec![
                RadicalRecord {
                    number: 1,
                    character: "一".to_string(),
                    meaning: "one".to_string(),
                    category: "Number".to_string(),
                },
                RadicalRecord {
                    number: 85,
                    character: "水".to_string(),
                    meaning: "water".to_string(),
                    category: "Nature".to_string(),
                },
            ]
        );
    }

    // Tests missing meaning and category default to empty strings
    // Verified by rejecting records without a category
    #[test]
    fn test_optional_fields_default_to_empty() {
        let raw = parse_raw_records("- Number: 3\n  Radical: 丶\n").expect("should parse");
        let record = raw
            .into_iter()
            .next()
            .expect("one record")
            .into_record(0)
            .expect("should validate");

        assert_eq!(record.meaning, "");
        assert_eq!(record.category, "");
    }

    // Tests records without a usable number or glyph are rejected with their position
    // Verified by accepting zero as a radical number
    #[test]
    fn test_invalid_records_rejected() {
        let text = r#"
- Number: 0
  Radical: 丨
- Number: "abc"
  Radical: 丨
- Radical: 丨
- Number: 2
  Radical: "   "
- Number: 4
"#;
        let raw = parse_raw_records(text).expect("should parse");
        assert_eq!(raw.len(), 5);

        for (position, record) in raw.into_iter().enumerate() {
            match record.into_record(position) {
                Err(ArtError::MalformedRecord { position: p, .. }) => assert_eq!(p, position),
                other => panic!("record {position} should be malformed, got {other:?}"),
            }
        }
    }

    // Tests a badly typed entry fails alone while its neighbours still validate
    // Verified by deserializing the whole list into typed records up front
    #[test]
    fn test_badly_typed_entry_is_isolated() {
        let text = r#"
- Number: 1
  Radical: 一
- Number: 1.5
  Radical: 丨
- Number: 3
  Radical: 7
- plain text
- Number: "5"
  Radical: 乙
"#;
        let raw = parse_raw_records(text).expect("a list should parse");
        assert_eq!(raw.len(), 5);

        let results: Vec<_> = raw
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_record(position))
            .collect();

        assert!(matches!(results.first(), Some(Ok(RadicalRecord { number: 1, .. }))));
        for position in 1..=3 {
            match results.get(position) {
                Some(Err(ArtError::MalformedRecord { position: p, .. })) => {
                    assert_eq!(*p, position);
                }
                other => panic!("record {position} should be malformed, got {other:?}"),
            }
        }
        assert!(matches!(results.get(4), Some(Ok(RadicalRecord { number: 5, .. }))));
    }

    // Tests an empty document yields no records
    // Verified by passing empty text to the YAML parser
    #[test]
    fn test_empty_document() {
        let raw = parse_raw_records("  \n").expect("empty text should parse");
        assert!(raw.is_empty());
    }

    // Tests a missing data file is reported as missing input
    // Verified by returning a file system error instead
    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("r214.yml");

        let result = load_raw_records(&path);
        assert!(matches!(result, Err(ArtError::MissingInput { .. })));
    }

    // Tests a file that isn't a record list is a parse error
    // Verified by treating unparseable files as empty
    #[test]
    fn test_unparseable_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("r214.yml");
        fs::write(&path, "Number: 1\nRadical: 一\n").expect("write data");

        let result = load_raw_records(&path);
        assert!(matches!(result, Err(ArtError::DataParse { .. })));
    }

    // Tests records load from disk
    // Verified by reading the wrong path
    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("r214.yml");
        fs::write(&path, CATALOGUE).expect("write data");

        let raw = load_raw_records(&path).expect("should load");
        assert_eq!(raw.len(), 2);
    }
}
