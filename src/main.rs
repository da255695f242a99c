use clap::Parser;
use colored::*;
use editgrid::cli::{Cli, Commands};
use editgrid_core::EditGridError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then EDITGRID_LOG, then the -v count
    let log_level = std::env::var("EDITGRID_LOG").unwrap_or_else(|_| cli.log_level().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

fn exit_code(e: &anyhow::Error) -> i32 {
    if let Some(err) = e.downcast_ref::<EditGridError>() {
        return match err {
            EditGridError::Configuration(_) => 2,
            EditGridError::Io(_) => 3,
            EditGridError::Parse(_) => 4,
            EditGridError::InvalidArgument(_) | EditGridError::OutOfRange { .. } => 5,
            _ => 1,
        };
    }
    if e.downcast_ref::<std::io::Error>().is_some() {
        return 3;
    }
    1
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Distance(args) => editgrid::cli::commands::distance::run(args, config),
        Commands::Align(args) => editgrid::cli::commands::align::run(args, config),
        Commands::Neighbors(args) => editgrid::cli::commands::neighbors::run(args, config),
        Commands::Config(args) => editgrid::cli::commands::config::run(args, config),
    }
}
