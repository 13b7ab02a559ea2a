//! Command-line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{AppConfig, NormalizeMode};

/// Turn recorded 3D gesture strokes into fixed-length training data
#[derive(Parser, Debug)]
#[command(name = "gesture-prep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a labeled dataset bundle from a folder-per-class tree
    Build {
        /// Dataset root (defaults to the configured one)
        root: Option<PathBuf>,

        /// Bundle path; `.csv` writes CSV, anything else JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        normalize: NormalizeArgs,

        /// Log and skip unreadable recordings instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Print one normalized gesture as a Unity List<Vector3>
    Export {
        /// Gesture JSON file
        input: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        normalize: NormalizeArgs,
    },

    /// Write the default configuration to a file
    InitConfig {
        path: PathBuf,
    },
}

/// Normalization overrides shared by `build` and `export`
#[derive(clap::Args, Debug, Default)]
pub struct NormalizeArgs {
    /// resample | fixed-size | centroid-sort
    #[arg(short, long)]
    pub mode: Option<NormalizeMode>,

    /// Target point count
    #[arg(short = 'n', long)]
    pub points: Option<usize>,

    /// Seed for padding draws
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Keep the recorded coordinates instead of moving the first point to origin
    #[arg(long)]
    pub no_origin_shift: bool,
}

impl NormalizeArgs {
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(mode) = self.mode {
            config.normalize.mode = mode;
        }
        if let Some(points) = self.points {
            config.normalize.target_points = points;
        }
        if self.seed.is_some() {
            config.normalize.seed = self.seed;
        }
        if self.no_origin_shift {
            config.normalize.origin_shift = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_flags_override_config() {
        let cli = Cli::parse_from([
            "gesture-prep", "build", "data/raw", "-o", "out.csv", "--mode", "resample", "-n", "64",
            "--seed", "42", "--skip-invalid",
        ]);

        match cli.command {
            Commands::Build { root, output, normalize, skip_invalid } => {
                assert_eq!(root, Some(PathBuf::from("data/raw")));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert!(skip_invalid);

                let mut config = AppConfig::default();
                normalize.apply_to(&mut config);
                assert_eq!(config.normalize.mode, NormalizeMode::Resample);
                assert_eq!(config.normalize.target_points, 64);
                assert_eq!(config.normalize.seed, Some(42));
                assert!(config.normalize.origin_shift);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn export_with_global_flags() {
        let cli = Cli::parse_from(["gesture-prep", "-v", "export", "house.json", "--no-origin-shift"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Export { input, output, normalize } => {
                assert_eq!(input, PathBuf::from("house.json"));
                assert!(output.is_none());
                assert!(normalize.no_origin_shift);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["gesture-prep", "build", "--mode", "spline"]).is_err());
    }
}
