//! Single pair inspection.

use anyhow::{Context, Result};
use ndarray::Array3;
use thermal_pairs::{Error, PairedImageDataset};

/// Value summary of one loaded array.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayStats {
    pub shape: Vec<usize>,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl ArrayStats {
    pub fn of(array: &Array3<f32>) -> Self {
        Self {
            shape: array.shape().to_vec(),
            min: array.iter().copied().fold(f32::INFINITY, f32::min),
            max: array.iter().copied().fold(f32::NEG_INFINITY, f32::max),
            mean: array.mean().unwrap_or(0.0),
        }
    }
}

pub fn run(dataset: &PairedImageDataset, index: isize) -> Result<()> {
    let (position, rgb, thermal) = inspect(dataset, index)?;
    let pair = &dataset.pairs()[position];

    println!("Pair {}: {}", position, pair.basename);
    print_stats("rgb", &pair.rgb_file, &rgb);
    print_stats("thermal", &pair.thermal_file, &thermal);

    Ok(())
}

/// Load the pair at a signed index and summarize both arrays.
fn inspect(dataset: &PairedImageDataset, index: isize) -> Result<(usize, ArrayStats, ArrayStats)> {
    let position = usize::try_from(index).map_err(|_| Error::IndexOutOfRange {
        index: index as i64,
        len: dataset.len(),
    })?;
    let sample = dataset
        .get(position)
        .with_context(|| format!("Failed to load pair {}", index))?;
    Ok((position, ArrayStats::of(&sample.rgb), ArrayStats::of(&sample.thermal)))
}

fn print_stats(label: &str, file: &str, stats: &ArrayStats) {
    println!(
        "  {:<8} {:<24} shape {:?}  min {:.4}  max {:.4}  mean {:.4}",
        label, file, stats.shape, stats.min, stats.max, stats.mean
    );
}
