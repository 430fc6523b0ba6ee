//! Error types and context management for imagery operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all imagery operations
#[derive(Debug)]
pub enum ArtError {
    /// Top-level input data could not be found; aborts the run
    MissingInput {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// A single radical record could not be interpreted
    MalformedRecord {
        /// Position of the record in the data file (zero-based)
        position: usize,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// Data file exists but could not be parsed as a record list
    DataParse {
        /// Path to the data file
        path: PathBuf,
        /// Underlying YAML error
        source: serde_yaml::Error,
    },

    /// Failed to load or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// PNG encoder rejected the parameters or the pixel data
    Encoding {
        /// Label of the encoding being attempted
        method: String,
        /// Underlying PNG encoding error
        source: png::EncodingError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A batch finished but some items failed
    BatchIncomplete {
        /// Name of the batch operation
        operation: &'static str,
        /// Items that completed
        succeeded: usize,
        /// Items that failed
        failed: usize,
    },
}

impl fmt::Display for ArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { path } => {
                write!(f, "Input not found: '{}'", path.display())
            }
            Self::MalformedRecord { position, reason } => {
                write!(f, "Malformed record at position {position}: {reason}")
            }
            Self::DataParse { path, source } => {
                write!(f, "Failed to parse data file '{}': {source}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::Encoding { method, source } => {
                write!(f, "PNG encoding failed for {method}: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::BatchIncomplete {
                operation,
                succeeded,
                failed,
            } => {
                write!(
                    f,
                    "{operation} finished with {failed} failed item(s) ({succeeded} succeeded)"
                )
            }
        }
    }
}

impl std::error::Error for ArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::DataParse { source, .. } => Some(source),
            Self::Encoding { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for imagery results
pub type Result<T> = std::result::Result<T, ArtError>;

/// Attaches a path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Wrap an I/O error with the path and operation it occurred on
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`ArtError::FileSystem`]
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.map_err(|source| ArtError::FileSystem {
            path: path.into(),
            operation,
            source,
        })
    }
}

impl From<image::ImageError> for ArtError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ArtError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArtError {
    ArtError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed record error
pub fn malformed_record(position: usize, reason: &impl ToString) -> ArtError {
    ArtError::MalformedRecord {
        position,
        reason: reason.to_string(),
    }
}
