use crate::cli::load_effective_config;
use clap::Args;
use editgrid_align::{AlignmentEngine, CostModel, MatrixRenderer};
use editgrid_core::ClassicConfig;
use std::path::Path;
use tracing::info;

#[derive(Args)]
pub struct DistanceArgs {
    /// First string
    pub first: String,

    /// Second string
    pub second: String,

    /// Cost of inserting a character
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub insertion: Option<i32>,

    /// Cost of deleting a character
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub deletion: Option<i32>,

    /// Cost of substituting a character by a different one
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub substitution: Option<i32>,

    /// Upper bound for every stored cost
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub border: Option<i32>,

    /// Count swapped adjacent characters as one edit
    #[arg(long)]
    pub transpositions: bool,

    /// Print the cost matrix before the distance
    #[arg(long)]
    pub matrix: bool,
}

impl DistanceArgs {
    /// Command line values take precedence over the `[classic]` section.
    pub fn apply(&self, mut config: ClassicConfig) -> ClassicConfig {
        if let Some(cost) = self.insertion {
            config.insertion_cost = cost;
        }
        if let Some(cost) = self.deletion {
            config.deletion_cost = cost;
        }
        if let Some(cost) = self.substitution {
            config.mismatch_cost = cost;
        }
        if self.border.is_some() {
            config.border = self.border;
        }
        if self.transpositions {
            config.transpositions = true;
        }
        config
    }
}

pub fn run(args: DistanceArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_effective_config(config_path)?;
    let classic = args.apply(config.classic);
    let model: CostModel<char> = (&classic).into();

    let mut engine = AlignmentEngine::from_strs(&args.first, &args.second, model);
    let distance = engine.distance();
    info!(
        first = %args.first,
        second = %args.second,
        distance,
        "Computed edit distance"
    );

    if args.matrix || config.render.show_matrix {
        let renderer = MatrixRenderer::new().with_cell_width(config.render.cell_width);
        print!("{}", renderer.render(&engine));
    }
    println!("{}", distance);
    Ok(())
}
