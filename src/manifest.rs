//! JSON snapshot of a scanned dataset.
//!
//! A manifest records the directories, transform and ordered pair list of a
//! [`PairedImageDataset`], optionally with a checksum for every source file so
//! a later run can tell whether the images changed underneath it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::{ImagePair, PairedImageDataset, compute_checksum};
use crate::error::Result;
use crate::transform::TransformConfig;

/// Serializable record of a dataset's pair list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairManifest {
    /// RGB source directory.
    pub rgb_dir: PathBuf,
    /// Thermal source directory.
    pub thermal_dir: PathBuf,
    /// Transform the pairs are loaded with.
    pub transform: TransformConfig,
    /// Pairs in index order.
    pub pairs: Vec<ManifestEntry>,
}

/// One pair plus optional file checksums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Filenames.
    #[serde(flatten)]
    pub pair: ImagePair,
    /// Checksum of the RGB file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb_checksum: Option<String>,
    /// Checksum of the thermal file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_checksum: Option<String>,
}

impl ManifestEntry {
    fn checksums_present(&self) -> bool {
        self.rgb_checksum.is_some() && self.thermal_checksum.is_some()
    }
}

impl PairManifest {
    /// Snapshot a dataset without checksums.
    #[must_use]
    pub fn from_dataset(dataset: &PairedImageDataset) -> Self {
        Self {
            rgb_dir: dataset.rgb_dir().to_path_buf(),
            thermal_dir: dataset.thermal_dir().to_path_buf(),
            transform: *dataset.config(),
            pairs: dataset
                .pairs()
                .iter()
                .map(|pair| ManifestEntry {
                    pair: pair.clone(),
                    rgb_checksum: None,
                    thermal_checksum: None,
                })
                .collect(),
        }
    }

    /// Load a manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let manifest: Self = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Save the manifest to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the manifest lists no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Compute checksums for entries that lack them.
    ///
    /// Returns the number of entries updated.
    pub fn compute_checksums(&mut self) -> Result<usize> {
        let mut computed = 0;

        for entry in &mut self.pairs {
            if entry.checksums_present() {
                continue;
            }
            entry.rgb_checksum = Some(compute_checksum(&self.rgb_dir.join(&entry.pair.rgb_file))?);
            entry.thermal_checksum =
                Some(compute_checksum(&self.thermal_dir.join(&entry.pair.thermal_file))?);
            computed += 1;
        }

        Ok(computed)
    }

    /// Indices of checksummed pairs whose files changed or disappeared.
    ///
    /// Entries without checksums are not checked.
    pub fn verify(&self) -> Vec<usize> {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.checksums_present())
            .filter(|(_, entry)| {
                let rgb = compute_checksum(&self.rgb_dir.join(&entry.pair.rgb_file)).ok();
                let thermal =
                    compute_checksum(&self.thermal_dir.join(&entry.pair.thermal_file)).ok();
                rgb != entry.rgb_checksum || thermal != entry.thermal_checksum
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Whether this manifest describes the same pair list as `dataset`.
    #[must_use]
    pub fn matches(&self, dataset: &PairedImageDataset) -> bool {
        self.pairs.len() == dataset.len()
            && self
                .pairs
                .iter()
                .zip(dataset.pairs())
                .all(|(entry, pair)| entry.pair == *pair)
    }
}
