//! Center-crop to a square and resize, for normalising artwork to the badge size

use crate::io::batch::BatchSummary;
use crate::io::configuration::{DEFAULT_COMPRESSION_LEVEL, RESIZE_EXTENSIONS};
use crate::io::error::{ArtError, Result, WithPath, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::raster::encode::{encode_dynamic, write_png};
use image::DynamicImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Crop the centered square of side `min(width, height)` and resize it to `size`×`size`
///
/// # Errors
///
/// Returns an invalid parameter error if `size` is zero or the image is empty
pub fn center_crop_resize(image: &DynamicImage, size: u32) -> Result<DynamicImage> {
    if size == 0 {
        return Err(invalid_parameter("size", &size, &"must be positive"));
    }
    let (width, height) = (image.width(), image.height());
    let side = width.min(height);
    if side == 0 {
        return Err(invalid_parameter(
            "image",
            &format!("{width}x{height}"),
            &"image has no pixels",
        ));
    }

    let left = (width - side) / 2;
    let top = (height - side) / 2;
    Ok(image
        .crop_imm(left, top, side, side)
        .resize_exact(size, size, FilterType::Lanczos3))
}

/// Resize one file and save it as PNG, returning `(input bytes, output bytes)`
///
/// # Errors
///
/// Returns an error if the image cannot be read, decoded, encoded or written
pub fn resize_file(input: &Path, output: &Path, size: u32) -> Result<(u64, u64)> {
    let before = std::fs::metadata(input).with_path(input, "stat")?.len();
    let image = image::open(input).map_err(|source| ArtError::ImageLoad {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(
        file = %input.display(),
        width = image.width(),
        height = image.height(),
        "cropping to {} square",
        image.width().min(image.height())
    );

    let resized = center_crop_resize(&image, size)?;
    let bytes = encode_dynamic(&resized, DEFAULT_COMPRESSION_LEVEL, "resize")?;
    write_png(output, &bytes)?;
    Ok((before, bytes.len() as u64))
}

/// Whether a path has one of the resizable image extensions
pub fn is_resizable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            RESIZE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Output path `{dir}/{stem}.png` for an input file
pub fn png_output_path(input: &Path, dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    dir.join(format!("{}.png", stem.to_string_lossy()))
}

/// Resize a single file or every image in a directory
///
/// A directory's results go to `{output_dir}/{directory name}/`.
///
/// # Errors
///
/// Returns [`ArtError::MissingInput`] if `input` doesn't exist, a file
/// system error if it cannot be listed, or [`ArtError::BatchIncomplete`] if
/// any file failed
pub fn resize_target(
    input: &Path,
    output_dir: &Path,
    size: u32,
    progress: &mut ProgressManager,
) -> Result<BatchSummary> {
    let (files, destination) = if input.is_file() {
        (vec![input.to_path_buf()], output_dir.to_path_buf())
    } else if input.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(input).with_path(input, "read directory")? {
            let path = entry.with_path(input, "read directory entry")?.path();
            if path.is_file() && is_resizable(&path) {
                files.push(path);
            }
        }
        files.sort();
        let folder = input.file_name().unwrap_or_default();
        (files, output_dir.join(folder))
    } else {
        return Err(ArtError::MissingInput {
            path: input.to_path_buf(),
        });
    };

    info!(
        input = %input.display(),
        output = %destination.display(),
        count = files.len(),
        size,
        "resizing with center crop"
    );
    progress.initialize("resize", files.len());

    let mut summary = BatchSummary::default();
    for file in &files {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        progress.start_item(&name);
        let output = png_output_path(file, &destination);
        match resize_file(file, &output, size) {
            Ok((before, after)) => summary.record_success(before, after),
            Err(error) => summary.record_failure(&name, &error),
        }
        progress.complete_item();
    }
    progress.finish();

    summary.finish("resize")
}
