//! Shrinking PNG files on disk, one at a time or a whole directory

use crate::io::batch::BatchSummary;
use crate::io::error::{ArtError, Result, WithPath};
use crate::io::progress::ProgressManager;
use crate::raster::encode::write_png;
use crate::shrink::search::{Selection, ShrinkConfig, ShrinkOutcome, Shrinker};
use std::path::{Path, PathBuf};
use tracing::info;

/// Whether a path names a PNG file
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Shrink one PNG file and write the result to `output`
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, or the output
/// cannot be written
pub fn shrink_file(input: &Path, output: &Path, shrinker: &Shrinker) -> Result<ShrinkOutcome> {
    let original = std::fs::read(input).with_path(input, "read")?;
    let outcome = shrinker
        .shrink(&original)
        .map_err(|error| match error {
            ArtError::ImageLoad { source, .. } => ArtError::ImageLoad {
                path: input.to_path_buf(),
                source,
            },
            other => other,
        })?;
    write_png(output, &outcome.bytes)?;

    let name = input.file_name().unwrap_or_default().to_string_lossy();
    match outcome.selection {
        Selection::Candidate { spec, .. } => info!(
            file = %name,
            before = outcome.original_size,
            after = outcome.bytes.len(),
            "{:.1}% smaller using {spec}",
            outcome.reduction_percent()
        ),
        Selection::Standard => info!(
            file = %name,
            before = outcome.original_size,
            after = outcome.bytes.len(),
            "{:.1}% smaller with standard compression",
            outcome.reduction_percent()
        ),
    }
    Ok(outcome)
}

/// Where a single-file run writes its output
///
/// An existing directory, or a path without an extension such as the default
/// output directory, receives the file under its own name. Anything else is
/// used as the output file itself.
pub fn single_file_target(input: &Path, output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(input.file_name().unwrap_or_default())
    } else {
        output.to_path_buf()
    }
}

fn png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "read directory")? {
        let path = entry.with_path(dir, "read directory entry")?.path();
        if path.is_file() && is_png(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Shrink a single PNG or every PNG in a directory
///
/// A single file goes where [`single_file_target`] puts it; a directory's
/// files are written under `output` with their original names.
///
/// # Errors
///
/// Returns [`ArtError::MissingInput`] if `input` doesn't exist, an invalid
/// parameter error for a bad compression level, or
/// [`ArtError::BatchIncomplete`] if any file failed
pub fn shrink_target(
    input: &Path,
    output: &Path,
    config: ShrinkConfig,
    progress: &mut ProgressManager,
) -> Result<BatchSummary> {
    let shrinker = Shrinker::new(config)?;

    let jobs: Vec<(PathBuf, PathBuf)> = if input.is_file() {
        vec![(input.to_path_buf(), single_file_target(input, output))]
    } else if input.is_dir() {
        png_files(input)?
            .into_iter()
            .map(|file| {
                let target = output.join(file.file_name().unwrap_or_default());
                (file, target)
            })
            .collect()
    } else {
        return Err(ArtError::MissingInput {
            path: input.to_path_buf(),
        });
    };

    info!(
        input = %input.display(),
        output = %output.display(),
        count = jobs.len(),
        min_pixel_area = config.min_pixel_area,
        level = config.compression_level,
        "shrinking png files"
    );
    progress.initialize("shrink", jobs.len());

    let mut summary = BatchSummary::default();
    for (source, target) in &jobs {
        let name = source.file_name().unwrap_or_default().to_string_lossy();
        progress.start_item(&name);
        match shrink_file(source, target, &shrinker) {
            Ok(outcome) => {
                summary.record_success(outcome.original_size as u64, outcome.bytes.len() as u64);
            }
            Err(error) => summary.record_failure(&name, &error),
        }
        progress.complete_item();
    }
    progress.finish();

    summary.finish("shrink")
}
