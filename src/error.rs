//! Error types for thermal-pairs operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for thermal-pairs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning, pairing or loading images.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The two directories share no basename.
    #[error(
        "No matching RGB and thermal image pairs found in {} and {}. Check folder structure and filenames.",
        rgb_dir.display(),
        thermal_dir.display()
    )]
    NoMatchingPairs {
        /// RGB source directory.
        rgb_dir: PathBuf,
        /// Thermal source directory.
        thermal_dir: PathBuf,
    },

    /// A source directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be opened or decoded.
    #[error("Image decode failed: {}: {reason}", path.display())]
    ImageDecode {
        /// Path to the image that failed to decode.
        path: PathBuf,
        /// Reason reported by the codec.
        reason: String,
    },

    /// Sample index outside `0..len`.
    #[error("Index {index} out of range for dataset of {len} pairs")]
    IndexOutOfRange {
        /// Requested index.
        index: i64,
        /// Number of pairs in the dataset.
        len: usize,
    },

    /// Target image size must be positive.
    #[error("Invalid image size: {0} (expected a positive side length)")]
    InvalidImageSize(u32),

    /// Unknown resampling filter name.
    #[error("Unknown resampling filter: {0}")]
    UnknownFilter(String),

    /// Pixel buffer did not fit the expected array shape.
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn index_out_of_range(index: i64, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
