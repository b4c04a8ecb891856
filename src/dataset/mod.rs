//! Paired RGB / thermal dataset.
//!
//! [`PairedImageDataset`] scans an RGB directory and a thermal directory once,
//! pairs files whose names match after stripping the extension, and loads each
//! pair from disk on demand.
//!
//! ## Example
//!
//! ```rust,ignore
//! use thermal_pairs::PairedImageDataset;
//!
//! let dataset = PairedImageDataset::new("flir/rgb", "flir/thermal")?;
//! let sample = dataset.get(0)?;
//! assert_eq!(sample.rgb.shape(), &[3, 256, 256]);
//! assert_eq!(sample.thermal.shape(), &[1, 256, 256]);
//! ```

mod checksum;
pub mod discovery;
mod pairing;

use std::path::{Path, PathBuf};

use ndarray::Array3;
use serde::{Deserialize, Serialize};

pub use checksum::{checksum_bytes, compute_checksum};
pub use discovery::{BasenameMap, SUPPORTED_EXTENSIONS};
pub use pairing::{ImagePair, PairMatch, match_pairs};

use crate::error::{Error, Result};
use crate::transform::{self, TransformConfig};

/// Number of filenames shown per directory in the scan diagnostics.
const LOG_SAMPLE_FILES: usize = 5;

/// One loaded pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// RGB array, shape `(3, size, size)`.
    pub rgb: Array3<f32>,
    /// Thermal array, shape `(1, size, size)`.
    pub thermal: Array3<f32>,
}

impl From<Sample> for (Array3<f32>, Array3<f32>) {
    fn from(sample: Sample) -> Self {
        (sample.rgb, sample.thermal)
    }
}

/// What the construction-time scan found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Supported files found in the RGB directory.
    pub rgb_files: usize,
    /// Supported files found in the thermal directory.
    pub thermal_files: usize,
    /// Number of matched pairs.
    pub matched: usize,
    /// Basenames with no thermal counterpart.
    pub rgb_only: Vec<String>,
    /// Basenames with no RGB counterpart.
    pub thermal_only: Vec<String>,
    /// RGB files hidden by a later file with the same basename.
    pub rgb_shadowed: Vec<String>,
    /// Thermal files hidden by a later file with the same basename.
    pub thermal_shadowed: Vec<String>,
}

/// RGB / thermal image pairs matched by basename.
///
/// The pair list is fixed at construction. Every [`get`](Self::get) re-reads
/// and re-decodes both files.
#[derive(Debug, Clone)]
pub struct PairedImageDataset {
    rgb_dir: PathBuf,
    thermal_dir: PathBuf,
    config: TransformConfig,
    pairs: Vec<ImagePair>,
    report: ScanReport,
}

impl PairedImageDataset {
    /// Scan both directories with the default 256x256 output size.
    pub fn new(rgb_dir: impl Into<PathBuf>, thermal_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(rgb_dir, thermal_dir, TransformConfig::default())
    }

    /// Scan both directories with a custom output size.
    pub fn with_image_size(
        rgb_dir: impl Into<PathBuf>,
        thermal_dir: impl Into<PathBuf>,
        image_size: u32,
    ) -> Result<Self> {
        let config = TransformConfig::builder().image_size(image_size).build()?;
        Self::with_config(rgb_dir, thermal_dir, config)
    }

    /// Scan both directories with a full transform configuration.
    pub fn with_config(
        rgb_dir: impl Into<PathBuf>,
        thermal_dir: impl Into<PathBuf>,
        config: TransformConfig,
    ) -> Result<Self> {
        let rgb_dir = rgb_dir.into();
        let thermal_dir = thermal_dir.into();

        let rgb_files = discovery::list_image_files(&rgb_dir)?;
        let thermal_files = discovery::list_image_files(&thermal_dir)?;

        log::info!(
            "Found {} RGB files and {} thermal files.",
            rgb_files.len(),
            thermal_files.len()
        );
        log::info!("Sample RGB files: {:?}", sample_names(&rgb_files));
        log::info!("Sample thermal files: {:?}", sample_names(&thermal_files));

        let rgb_map = BasenameMap::build(&rgb_files);
        let thermal_map = BasenameMap::build(&thermal_files);
        for (dir, map) in [(&rgb_dir, &rgb_map), (&thermal_dir, &thermal_map)] {
            for file in &map.shadowed {
                log::warn!(
                    "{} is shadowed by a later file with the same basename in {}",
                    file,
                    dir.display()
                );
            }
        }

        let matched = match_pairs(&rgb_map, &thermal_map);
        log::info!("Found {} matching pairs.", matched.pairs.len());

        if matched.pairs.is_empty() {
            return Err(Error::NoMatchingPairs { rgb_dir, thermal_dir });
        }

        config.validate()?;

        let report = ScanReport {
            rgb_files: rgb_files.len(),
            thermal_files: thermal_files.len(),
            matched: matched.pairs.len(),
            rgb_only: matched.rgb_only,
            thermal_only: matched.thermal_only,
            rgb_shadowed: rgb_map.shadowed,
            thermal_shadowed: thermal_map.shadowed,
        };

        Ok(Self {
            rgb_dir,
            thermal_dir,
            config,
            pairs: matched.pairs,
            report,
        })
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs. Construction fails before this can be true.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// RGB source directory.
    pub fn rgb_dir(&self) -> &Path {
        &self.rgb_dir
    }

    /// Thermal source directory.
    pub fn thermal_dir(&self) -> &Path {
        &self.thermal_dir
    }

    /// Transform applied on every load.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Matched pairs in index order.
    pub fn pairs(&self) -> &[ImagePair] {
        &self.pairs
    }

    /// Scan diagnostics recorded at construction.
    pub fn scan_report(&self) -> &ScanReport {
        &self.report
    }

    /// Filenames for one index.
    pub fn pair(&self, index: usize) -> Result<&ImagePair> {
        self.pairs
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index as i64, self.len()))
    }

    /// Full path of the RGB file for one index.
    pub fn rgb_path(&self, index: usize) -> Result<PathBuf> {
        Ok(self.rgb_dir.join(&self.pair(index)?.rgb_file))
    }

    /// Full path of the thermal file for one index.
    pub fn thermal_path(&self, index: usize) -> Result<PathBuf> {
        Ok(self.thermal_dir.join(&self.pair(index)?.thermal_file))
    }

    /// Load, resize and tensorize the pair at `index`.
    pub fn get(&self, index: usize) -> Result<Sample> {
        let pair = self.pair(index)?;
        let rgb_path = self.rgb_dir.join(&pair.rgb_file);
        let thermal_path = self.thermal_dir.join(&pair.thermal_file);
        log::debug!(
            "Loading pair {} ({}): {} / {}",
            index,
            pair.basename,
            rgb_path.display(),
            thermal_path.display()
        );

        let rgb = transform::load_rgb(&rgb_path, &self.config)?;
        let thermal = transform::load_thermal(&thermal_path, &self.config)?;
        Ok(Sample { rgb, thermal })
    }

    /// [`get`](Self::get) for callers holding a signed index.
    ///
    /// Negative indices are out of range; there is no wrap-around.
    pub fn get_item(&self, index: isize) -> Result<Sample> {
        let index = usize::try_from(index)
            .map_err(|_| Error::index_out_of_range(index as i64, self.len()))?;
        self.get(index)
    }

    /// Lazily load every pair in index order.
    pub fn iter(&self) -> impl Iterator<Item = Result<Sample>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }
}

fn sample_names(files: &[String]) -> &[String] {
    &files[..files.len().min(LOG_SAMPLE_FILES)]
}
