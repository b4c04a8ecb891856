//! Pair scanning and manifest output.

use std::path::Path;

use anyhow::{Context, Result};
use thermal_pairs::{PairManifest, PairedImageDataset};

pub fn run(dataset: &PairedImageDataset, output: Option<&Path>, checksums: bool) -> Result<()> {
    let report = dataset.scan_report();

    println!("RGB:     {} ({} files)", dataset.rgb_dir().display(), report.rgb_files);
    println!("Thermal: {} ({} files)", dataset.thermal_dir().display(), report.thermal_files);
    println!("Matched pairs: {}", report.matched);
    print_names("Only in RGB", &report.rgb_only);
    print_names("Only in thermal", &report.thermal_only);
    print_names("Shadowed RGB files", &report.rgb_shadowed);
    print_names("Shadowed thermal files", &report.thermal_shadowed);

    let mut manifest = PairManifest::from_dataset(dataset);
    if checksums {
        log::info!("Computing checksums...");
        let count = manifest.compute_checksums().context("Failed to compute checksums")?;
        log::info!("Computed checksums for {} pairs", count);
    }

    if let Some(output_path) = output {
        manifest
            .save(output_path)
            .with_context(|| format!("Failed to save manifest to {}", output_path.display()))?;
        println!("Saved manifest to: {}", output_path.display());
    } else {
        let json = serde_json::to_string_pretty(&manifest)?;
        println!("{json}");
    }

    Ok(())
}

fn print_names(label: &str, names: &[String]) {
    const SHOWN: usize = 10;

    if names.is_empty() {
        return;
    }
    println!("{}: {}", label, names.len());
    for name in names.iter().take(SHOWN) {
        println!("  {}", name);
    }
    if names.len() > SHOWN {
        println!("  ... and {} more", names.len() - SHOWN);
    }
}
