pub mod commands;
pub mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use editgrid_core::{default_config_path, load_config, Config};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "editgrid",
    version,
    about = "Generalised edit distance and sequence alignment",
    long_about = "EditGrid computes edit distances and global or local alignment scores over a \
                  memoised cost matrix with pluggable costs, and can render the matrix or trace \
                  back an optimal alignment."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ${EDITGRID_HOME}/config.toml)
    #[arg(long, value_name = "FILE", global = true, env = "EDITGRID_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit distance between two strings
    Distance(commands::distance::DistanceArgs),

    /// Global or local alignment score and traceback
    Align(commands::align::AlignArgs),

    /// Words in a text file close to a given word
    Neighbors(commands::neighbors::NeighborsArgs),

    /// Show or initialise the configuration
    Config(commands::config::ConfigArgs),
}

impl Cli {
    /// Default log filter for the given `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Configuration from `--config`, else the default file if present, else built-in defaults.
pub fn load_effective_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()));
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using configuration at {}", path.display());
        Ok(load_config(&path)?)
    } else {
        debug!("No configuration at {}, using defaults", path.display());
        Ok(Config::default())
    }
}
