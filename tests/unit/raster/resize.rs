//! Tests for center cropping, resizing and the resize batch

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
    use radical_art::ArtError;
    use radical_art::io::progress::ProgressManager;
    use radical_art::raster::resize::{
        center_crop_resize, is_resizable, png_output_path, resize_file, resize_target,
    };
    use std::path::Path;

    /// Left third red, middle third green, right third blue
    fn banded(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, _| {
            if x < width / 3 {
                Rgb([255, 0, 0])
            } else if x < 2 * width / 3 {
                Rgb([0, 255, 0])
            } else {
                Rgb([0, 0, 255])
            }
        }))
    }

    // Tests a wide image keeps its central square
    // Verified by cropping from the left edge
    #[test]
    fn test_center_crop_wide() {
        let resized = center_crop_resize(&banded(300, 100), 50).expect("should resize");

        assert_eq!(resized.dimensions(), (50, 50));
        let rgb = resized.to_rgb8();
        let center = rgb.get_pixel(25, 25);
        assert!(center.0[1] > 200 && center.0[0] < 50 && center.0[2] < 50);
        let edge = rgb.get_pixel(0, 25);
        assert!(edge.0[1] > 200, "crop should not reach the red band");
    }

    // Tests tall images are cropped vertically
    // Verified by resizing without cropping
    #[test]
    fn test_center_crop_tall() {
        let resized = center_crop_resize(&banded(60, 200), 30).expect("should resize");
        assert_eq!(resized.dimensions(), (30, 30));
    }

    // Tests zero sizes are rejected
    // Verified by resizing to 0x0
    #[test]
    fn test_zero_size_rejected() {
        let result = center_crop_resize(&banded(10, 10), 0);
        assert!(matches!(result, Err(ArtError::InvalidParameter { .. })));
    }

    // Tests extension matching ignores case
    // Verified by matching case-sensitively
    #[test]
    fn test_is_resizable() {
        assert!(is_resizable(Path::new("a.png")));
        assert!(is_resizable(Path::new("b.JPG")));
        assert!(is_resizable(Path::new("c.jpeg")));
        assert!(!is_resizable(Path::new("d.svg")));
        assert!(!is_resizable(Path::new("noext")));
    }

    // Tests outputs are always PNG with the input stem
    // Verified by keeping the input extension
    #[test]
    fn test_png_output_path() {
        assert_eq!(
            png_output_path(Path::new("photos/cat.jpg"), Path::new("out")),
            Path::new("out/cat.png")
        );
    }

    // Tests a file resize writes a square PNG and reports sizes
    // Verified by writing the unresized image
    #[test]
    fn test_resize_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = temp_dir.path().join("wide.png");
        let output = temp_dir.path().join("out").join("wide.png");
        banded(120, 80).save(&input).expect("save input");

        let (before, after) = resize_file(&input, &output, 40).expect("should resize");
        assert!(before > 0 && after > 0);

        let written = image::open(&output).expect("output should decode");
        assert_eq!(written.dimensions(), (40, 40));
    }

    // Tests a directory resize goes into a folder named after the input
    // Verified by writing straight into the output directory
    #[test]
    fn test_resize_directory() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = temp_dir.path().join("photos");
        std::fs::create_dir(&input).expect("create input dir");
        banded(90, 60).save(input.join("a.png")).expect("save a");
        banded(60, 90).save(input.join("b.bmp")).expect("save b");
        std::fs::write(input.join("notes.txt"), "skip me").expect("write notes");
        let output = temp_dir.path().join("resized");

        let summary = resize_target(&input, &output, 32, &mut ProgressManager::hidden())
            .expect("should succeed");

        assert_eq!(summary.succeeded, 2);
        assert!(output.join("photos").join("a.png").is_file());
        assert!(output.join("photos").join("b.png").is_file());
    }

    // Tests a corrupt file is counted without stopping the batch
    // Verified by aborting the batch on the first error
    #[test]
    fn test_resize_directory_with_corrupt_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = temp_dir.path().join("photos");
        std::fs::create_dir(&input).expect("create input dir");
        banded(30, 30).save(input.join("good.png")).expect("save good");
        std::fs::write(input.join("bad.png"), b"not a png").expect("write bad");

        let result = resize_target(
            &input,
            &temp_dir.path().join("out"),
            16,
            &mut ProgressManager::hidden(),
        );

        assert!(matches!(
            result,
            Err(ArtError::BatchIncomplete {
                succeeded: 1,
                failed: 1,
                ..
            })
        ));
    }

    // Tests a missing input is reported before anything runs
    // Verified by treating a missing input as an empty directory
    #[test]
    fn test_resize_missing_input() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = resize_target(
            &temp_dir.path().join("nope"),
            temp_dir.path(),
            16,
            &mut ProgressManager::hidden(),
        );
        assert!(matches!(result, Err(ArtError::MissingInput { .. })));
    }
}
