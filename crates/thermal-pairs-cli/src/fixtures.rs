//! Paired image directories for command tests.

use std::path::PathBuf;

use image::{GrayImage, Luma, Rgb, RgbImage};
use tempfile::TempDir;
use thermal_pairs::PairedImageDataset;

pub struct Fixture {
    _root: TempDir,
    pub rgb: PathBuf,
    pub thermal: PathBuf,
}

impl Fixture {
    /// One 12x10 PNG pair per basename.
    pub fn new(basenames: &[&str]) -> Self {
        let root = tempfile::tempdir().unwrap();
        let rgb = root.path().join("rgb");
        let thermal = root.path().join("thermal");
        std::fs::create_dir(&rgb).unwrap();
        std::fs::create_dir(&thermal).unwrap();

        for name in basenames {
            RgbImage::from_fn(12, 10, |x, y| Rgb([(x * 20) as u8, (y * 25) as u8, 128]))
                .save(rgb.join(format!("{name}.png")))
                .unwrap();
            GrayImage::from_fn(12, 10, |x, y| Luma([((x + y) * 10) as u8]))
                .save(thermal.join(format!("{name}.png")))
                .unwrap();
        }

        Self { _root: root, rgb, thermal }
    }

    pub fn corrupt_thermal(&self, basename: &str) {
        std::fs::write(self.thermal.join(format!("{basename}.png")), b"not an image").unwrap();
    }

    pub fn dataset(&self, size: u32) -> PairedImageDataset {
        PairedImageDataset::with_image_size(&self.rgb, &self.thermal, size).unwrap()
    }
}
