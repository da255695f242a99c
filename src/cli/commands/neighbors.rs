use crate::cli::load_effective_config;
use crate::words::WordIndex;
use anyhow::Context;
use clap::Args;
use editgrid_align::CostModel;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct NeighborsArgs {
    /// Text file to read words from
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Word to compare against
    pub word: String,

    /// Largest classic edit distance to report (default: [words] max_distance)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_distance: Option<i32>,

    /// Keep the original letter case
    #[arg(long)]
    pub keep_case: bool,
}

pub fn run(args: NeighborsArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_effective_config(config_path)?;
    let max_distance = args.max_distance.unwrap_or(config.words.max_distance);
    let model: CostModel<char> = (&config.classic).into();

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let mut index = WordIndex::new(config.words.lowercase && !args.keep_case)?;
    index.read(BufReader::new(file))?;

    for neighbor in index.neighbors(&args.word, max_distance, &model) {
        println!(
            "{}\t{}\t{}:{}",
            neighbor.word, neighbor.distance, neighbor.first.line, neighbor.first.position
        );
    }
    Ok(())
}
