//! Command-line interface for badge generation, PNG shrinking and resizing

use crate::io::batch::BatchSummary;
use crate::io::configuration::{
    DEFAULT_COMPRESSION_LEVEL, DEFAULT_DATA_FILE, DEFAULT_MIN_PIXEL_AREA, DEFAULT_RESIZE_EDGE,
    DEFAULT_RESIZE_OUTPUT, DEFAULT_SHRINK_OUTPUT, DEFAULT_SVG_OUTPUT,
};
use crate::io::error::Result;
use crate::io::logging;
use crate::io::progress::ProgressManager;
use crate::pattern::batch::generate_svgs;
use crate::raster::resize::resize_target;
use crate::shrink::batch::shrink_target;
use crate::shrink::search::ShrinkConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "radical-art")]
#[command(
    author,
    version,
    about = "Pattern badges for kanji radicals, plus PNG shrinking and resizing"
)]
/// Command-line arguments for the artwork tool
pub struct Cli {
    /// Only log warnings and errors, and hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log per-item and per-candidate detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate one SVG badge per radical in the data file
    Svg {
        /// YAML list of radical records
        #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,

        /// Directory for the generated badges
        #[arg(short, long, default_value = DEFAULT_SVG_OUTPUT)]
        output: PathBuf,
    },

    /// Shrink a PNG file or every PNG in a directory
    Shrink {
        /// PNG file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory, or a file path with an extension for a file input
        #[arg(value_name = "OUTPUT", default_value = DEFAULT_SHRINK_OUTPUT)]
        output: PathBuf,

        /// Compression level from 1 (fastest) to 9 (smallest)
        #[arg(
            short = 'l',
            long,
            default_value_t = DEFAULT_COMPRESSION_LEVEL,
            value_parser = clap::value_parser!(u8).range(1..=9)
        )]
        level: u8,

        /// Minimum width × height for the lossy search
        #[arg(short = 'a', long, default_value_t = DEFAULT_MIN_PIXEL_AREA)]
        min_area: u64,
    },

    /// Center-crop images to a square and resize them
    Resize {
        /// Image file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_RESIZE_OUTPUT)]
        output: PathBuf,

        /// Edge length of the output square in pixels
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_RESIZE_EDGE,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        size: u32,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Install logging and run the selected operation
    ///
    /// # Errors
    ///
    /// Returns the operation's error, including
    /// [`crate::ArtError::BatchIncomplete`] when some items failed
    pub fn run(self) -> Result<BatchSummary> {
        logging::init(self.quiet, self.verbose);
        let mut progress = ProgressManager::new(self.should_show_progress());
        self.command.execute(&mut progress)
    }
}

impl Command {
    /// Run this operation, reporting through `progress`
    ///
    /// # Errors
    ///
    /// Returns the operation's error
    pub fn execute(self, progress: &mut ProgressManager) -> Result<BatchSummary> {
        match self {
            Self::Svg { data, output } => generate_svgs(&data, &output, progress),
            Self::Shrink {
                input,
                output,
                level,
                min_area,
            } => {
                let config = ShrinkConfig {
                    min_pixel_area: min_area,
                    compression_level: level,
                };
                shrink_target(&input, &output, config, progress)
            }
            Self::Resize {
                input,
                output,
                size,
            } => resize_target(&input, &output, size, progress),
        }
    }
}
