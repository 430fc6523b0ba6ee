//! Radical catalogue loading from the site's YAML data file

use crate::io::error::{ArtError, Result, WithPath, malformed_record};
use serde::Deserialize;
use std::path::Path;

/// One catalogued radical
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalRecord {
    /// Kangxi index, 1-based
    pub number: u32,
    /// The radical glyph itself
    pub character: String,
    /// English meaning
    pub meaning: String,
    /// Thematic category
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Integer(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RecordFields {
    #[serde(rename = "Number")]
    number: Option<RawNumber>,
    #[serde(rename = "Radical")]
    radical: Option<String>,
    #[serde(rename = "Meaning", default)]
    meaning: Option<String>,
    #[serde(rename = "Category", default)]
    category: Option<String>,
}

/// One entry of the data file, kept as YAML until it is validated
///
/// Field types are only checked by [`RawRecord::into_record`], so a badly
/// typed entry fails on its own instead of failing the whole list.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(serde_yaml::Value);

impl RawRecord {
    /// Validate into a [`RadicalRecord`]
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::MalformedRecord`] if the entry isn't a mapping of
    /// the expected field types, the number is missing or not a positive
    /// integer, or the glyph is missing or blank
    pub fn into_record(self, position: usize) -> Result<RadicalRecord> {
        let fields: RecordFields =
            serde_yaml::from_value(self.0).map_err(|error| malformed_record(position, &error))?;

        let number = match fields.number {
            Some(RawNumber::Integer(n)) => u32::try_from(n)
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| malformed_record(position, &format!("invalid number {n}")))?,
            Some(RawNumber::Text(text)) => text
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| malformed_record(position, &format!("invalid number '{text}'")))?,
            None => return Err(malformed_record(position, &"missing Number")),
        };

        let character = fields
            .radical
            .map(|glyph| glyph.trim().to_string())
            .filter(|glyph| !glyph.is_empty())
            .ok_or_else(|| malformed_record(position, &"missing Radical"))?;

        Ok(RadicalRecord {
            number,
            character,
            meaning: fields.meaning.unwrap_or_default(),
            category: fields.category.unwrap_or_default(),
        })
    }
}

/// Parse a YAML record list without validating individual entries
///
/// # Errors
///
/// Returns [`ArtError::MissingInput`] if the file doesn't exist, or a parse
/// error if it isn't a YAML list
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.is_file() {
        return Err(ArtError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).with_path(path, "read data file")?;
    parse_raw_records(&text).map_err(|source| ArtError::DataParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse record list text; an empty document yields no records
///
/// # Errors
///
/// Returns the YAML error if the text isn't a list
pub fn parse_raw_records(text: &str) -> std::result::Result<Vec<RawRecord>, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(text)
}
