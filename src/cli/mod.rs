pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use gnomic_core::{default_config, load_config, Config};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gnomic",
    version,
    about = "Parse and reconcile genotype definitions",
    long_about = "Gnomic reads genotype definitions written in gnomic notation, folds each \
                  definition into the genotype of its parent and prints the net changes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file with organisms, feature types and output defaults
    #[arg(short, long, value_name = "FILE", env = "GNOMIC_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse definitions, each one on top of the previous, and print the result
    Parse(commands::parse::ParseArgs),

    /// Check definitions against the grammar
    Validate(commands::validate::ValidateArgs),

    /// List added and removed features, plasmids and fusions
    Features(commands::features::FeaturesArgs),
}

impl Cli {
    /// Default filter directive for the given number of `-v` flags
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Load the configuration file if one was given, else the built-in defaults.
pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            Ok(load_config(path)?)
        }
        None => Ok(default_config()),
    }
}
