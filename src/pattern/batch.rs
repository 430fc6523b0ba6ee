//! Writes one SVG badge per catalogued radical

use crate::io::batch::BatchSummary;
use crate::io::error::{Result, WithPath};
use crate::io::progress::ProgressManager;
use crate::io::records::{RadicalRecord, load_raw_records};
use crate::pattern::document::render_radical;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name for a radical's badge, zero-padded to three digits
pub fn svg_file_name(number: u32) -> String {
    format!("radical_{number:03}.svg")
}

/// Render and write the badge for one record, returning the path written
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_radical_svg(record: &RadicalRecord, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(svg_file_name(record.number));
    let svg = render_radical(record);
    std::fs::write(&path, svg.as_bytes()).with_path(&path, "write svg")?;
    debug!(number = record.number, meaning = %record.meaning, path = %path.display(), "generated");
    Ok(path)
}

/// Generate badges for every record in `data_file` into `output_dir`
///
/// Malformed records and write failures are logged, counted and skipped.
///
/// # Errors
///
/// Returns an error if the data file is missing or unreadable, the output
/// directory cannot be created, or any record failed
pub fn generate_svgs(
    data_file: &Path,
    output_dir: &Path,
    progress: &mut ProgressManager,
) -> Result<BatchSummary> {
    let raw_records = load_raw_records(data_file)?;
    std::fs::create_dir_all(output_dir).with_path(output_dir, "create directory")?;

    info!(
        data = %data_file.display(),
        output = %output_dir.display(),
        count = raw_records.len(),
        "generating radical svgs"
    );
    progress.initialize("svg", raw_records.len());

    let mut summary = BatchSummary::default();
    for (position, raw) in raw_records.into_iter().enumerate() {
        let label = format!("record {}", position + 1);
        progress.start_item(&label);

        let outcome = raw
            .into_record(position)
            .and_then(|record| write_radical_svg(&record, output_dir));
        match outcome {
            Ok(_) => summary.record_completed(),
            Err(error) => summary.record_failure(&label, &error),
        }
        progress.complete_item();
    }
    progress.finish();

    summary.finish("svg generation")
}
