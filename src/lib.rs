//! # thermal-pairs
//!
//! Paired RGB / thermal image dataset for image translation models.
//!
//! Two directories are scanned once; files whose names match after removing
//! the extension become a pair. Each pair is read from disk on access,
//! resized to a square and returned as channel-first `f32` arrays in `[0, 1]`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use thermal_pairs::{PairedImageDataset, TransformConfig, Resample};
//!
//! let config = TransformConfig::builder()
//!     .image_size(256)
//!     .filter(Resample::Bilinear)
//!     .build()?;
//!
//! let dataset = PairedImageDataset::with_config("flir/rgb", "flir/thermal", config)?;
//! for sample in dataset.iter() {
//!     let sample = sample?;
//!     // sample.rgb: (3, 256, 256), sample.thermal: (1, 256, 256)
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`dataset`]: Directory scan, basename pairing and sample loading
//! - [`transform`]: Decode, resize and tensorize
//! - [`manifest`]: JSON snapshots of a pair list with file checksums

pub mod dataset;
pub mod error;
pub mod manifest;
pub mod transform;

// Re-export commonly used types
pub use dataset::{ImagePair, PairedImageDataset, Sample, ScanReport};
pub use error::{Error, Result};
pub use manifest::{ManifestEntry, PairManifest};
pub use transform::{Resample, TransformConfig};
