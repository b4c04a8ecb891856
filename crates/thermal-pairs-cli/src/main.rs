//! thermal-pairs CLI - paired RGB / thermal dataset tool

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use thermal_pairs::{PairedImageDataset, Resample, TransformConfig};

mod commands;
#[cfg(test)]
mod fixtures;

/// Scan, inspect and check paired RGB / thermal image directories.
#[derive(Parser)]
#[command(name = "thermal-pairs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON transform config (image_size, filter)
    #[arg(long, global = true, env = "THERMAL_PAIRS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair two directories and report what matched
    Scan {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Output manifest file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record file checksums in the manifest
        #[arg(long)]
        checksums: bool,
    },

    /// Load one pair and print array statistics
    Inspect {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Pair index
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },

    /// Load every pair and report the ones that fail
    Check {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Worker threads (defaults to one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
}

/// Source directories and transform overrides shared by every command.
#[derive(Args, Debug)]
struct DatasetArgs {
    /// Directory of RGB images
    rgb_dir: PathBuf,

    /// Directory of thermal images
    thermal_dir: PathBuf,

    /// Output side length in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Resampling filter (nearest, bilinear, bicubic, gaussian, lanczos3)
    #[arg(long)]
    filter: Option<Resample>,
}

impl DatasetArgs {
    fn transform(&self, config: Option<&Path>) -> Result<TransformConfig> {
        let base = match config {
            Some(path) => TransformConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => TransformConfig::default(),
        };

        let config = TransformConfig::builder()
            .image_size(self.size.unwrap_or(base.image_size))
            .filter(self.filter.unwrap_or(base.filter))
            .build()?;
        Ok(config)
    }

    fn open(&self, config: Option<&Path>) -> Result<PairedImageDataset> {
        let transform = self.transform(config)?;
        PairedImageDataset::with_config(&self.rgb_dir, &self.thermal_dir, transform).with_context(
            || {
                format!(
                    "Failed to pair {} with {}",
                    self.rgb_dir.display(),
                    self.thermal_dir.display()
                )
            },
        )
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Scan { dataset, output, checksums } => {
            commands::scan::run(&dataset.open(config)?, output.as_deref(), checksums)
        }
        Commands::Inspect { dataset, index } => {
            commands::inspect::run(&dataset.open(config)?, index)
        }
        Commands::Check { dataset, jobs } => commands::check::run(&dataset.open(config)?, jobs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from([
            "thermal-pairs", "scan", "rgb", "thermal", "-o", "pairs.json", "--checksums",
        ])
        .unwrap();
        match cli.command {
            Commands::Scan { dataset, output, checksums } => {
                assert_eq!(dataset.rgb_dir, PathBuf::from("rgb"));
                assert_eq!(dataset.thermal_dir, PathBuf::from("thermal"));
                assert_eq!(output, Some(PathBuf::from("pairs.json")));
                assert!(checksums);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_parse_inspect_negative_index() {
        let cli = Cli::try_parse_from(["thermal-pairs", "inspect", "rgb", "thermal", "-1"]).unwrap();
        match cli.command {
            Commands::Inspect { index, .. } => assert_eq!(index, -1),
            _ => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_parse_filter() {
        let cli = Cli::try_parse_from([
            "thermal-pairs", "check", "rgb", "thermal", "--filter", "lanczos3", "--size", "64", "-j",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Check { dataset, jobs } => {
                assert_eq!(dataset.filter, Some(Resample::Lanczos3));
                assert_eq!(dataset.size, Some(64));
                assert_eq!(jobs, Some(2));
            }
            _ => panic!("expected check"),
        }

        assert!(
            Cli::try_parse_from(["thermal-pairs", "check", "rgb", "thermal", "--filter", "box"])
                .is_err()
        );
    }

    #[test]
    fn test_transform_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transform.json");
        std::fs::write(&path, r#"{"image_size": 128, "filter": "nearest"}"#).unwrap();

        let cli =
            Cli::try_parse_from(["thermal-pairs", "scan", "rgb", "thermal", "--size", "32"]).unwrap();
        let Commands::Scan { dataset, .. } = cli.command else {
            panic!("expected scan");
        };

        let config = dataset.transform(Some(&path)).unwrap();
        assert_eq!(config.image_size, 32);
        assert_eq!(config.filter, Resample::Nearest);

        let config = dataset.transform(None).unwrap();
        assert_eq!(config, TransformConfig::builder().image_size(32).build().unwrap());
    }
}
