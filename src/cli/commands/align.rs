use crate::cli::load_effective_config;
use crate::cli::output;
use clap::Args;
use editgrid_align::{AlignmentEngine, CostModel, MatrixRenderer};
use editgrid_core::{GlobalConfig, LocalConfig};
use std::path::Path;
use tracing::info;

#[derive(Args)]
pub struct AlignArgs {
    /// First sequence
    pub first: String,

    /// Second sequence
    pub second: String,

    /// Gap penalty, subtracted for each insertion or deletion
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub gap: Option<i32>,

    /// Score for a pair of equal symbols
    #[arg(long = "match", value_name = "N", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for a pair of different symbols
    #[arg(long = "mismatch", value_name = "N", allow_negative_numbers = true)]
    pub mismatch_score: Option<i32>,

    /// Local (Smith-Waterman style) instead of global alignment
    #[arg(long)]
    pub local: bool,

    /// Print the score matrix
    #[arg(long)]
    pub matrix: bool,

    /// Print the alignment as JSON
    #[arg(long)]
    pub json: bool,
}

impl AlignArgs {
    fn scores(&self, gap: i32, matched: i32, mismatched: i32) -> (i32, i32, i32) {
        (
            self.gap.unwrap_or(gap),
            self.match_score.unwrap_or(matched),
            self.mismatch_score.unwrap_or(mismatched),
        )
    }

    pub fn global_config(&self, base: &GlobalConfig) -> GlobalConfig {
        let (gap_cost, match_score, mismatch_score) =
            self.scores(base.gap_cost, base.match_score, base.mismatch_score);
        GlobalConfig {
            gap_cost,
            match_score,
            mismatch_score,
        }
    }

    pub fn local_config(&self, base: &LocalConfig) -> LocalConfig {
        let (gap_cost, match_score, mismatch_score) =
            self.scores(base.gap_cost, base.match_score, base.mismatch_score);
        LocalConfig {
            gap_cost,
            match_score,
            mismatch_score,
        }
    }
}

pub fn run(args: AlignArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_effective_config(config_path)?;
    let model: CostModel<char> = if args.local {
        (&args.local_config(&config.local)).into()
    } else {
        (&args.global_config(&config.global)).into()
    };

    let mut engine = AlignmentEngine::from_strs(&args.first, &args.second, model);
    let alignment = if args.local {
        engine.local_traceback()
    } else {
        Some(engine.traceback())
    };
    let score = alignment.as_ref().map_or(0, |a| a.score);
    info!(local = args.local, score, "Computed alignment");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&alignment)?);
        return Ok(());
    }

    if args.matrix || config.render.show_matrix {
        let renderer = MatrixRenderer::new().with_cell_width(config.render.cell_width);
        print!("{}", renderer.render(&engine));
        println!();
    }

    output::field("Score", score);
    match alignment {
        Some(alignment) if !alignment.is_empty() => {
            if args.local {
                output::field(
                    "Region",
                    format!(
                        "{}..{} / {}..{}",
                        alignment.start.0, alignment.end.0, alignment.start.1, alignment.end.1
                    ),
                );
            }
            output::field("Identity", format!("{:.1}%", alignment.identity() * 100.0));
            println!();
            println!("{}", alignment);
        }
        _ => output::warning("Empty alignment"),
    }
    Ok(())
}
