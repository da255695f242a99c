use crate::cli::load_effective_config;
use crate::cli::output;
use anyhow::Context;
use clap::Args;
use editgrid_core::{default_config_path, save_config, Config};
use std::path::Path;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the default configuration to the config file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init
    #[arg(long, requires = "init")]
    pub force: bool,

    /// Print as JSON instead of TOML
    #[arg(long, conflicts_with = "init")]
    pub json: bool,
}

pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    if args.init {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);
        if path.exists() && !args.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        save_config(&path, &Config::default())?;
        output::success(&format!("Wrote default configuration to {}", path.display()));
        return Ok(());
    }

    let config = load_effective_config(config_path)?;
    if args.json {
        println!("{}", config.to_json()?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
