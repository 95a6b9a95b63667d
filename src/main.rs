//! Pricer command line
//!
//! Usage:
//!   pricer <TARGET_SIZE> [--snapshot <PATH>] [--depth <N>] < events.txt
//!
//! Emissions go to stdout, diagnostics to stderr. Set `LOGLEVEL` (for example
//! `DEBUG`) to change how much is logged.

use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use target_pricer::{Pricer, PricerConfig, PricerError, setup_logger};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "pricer")]
#[command(about = "Report the cost of filling a target size from an order book event stream")]
struct Cli {
    /// Quantity priced on each side of the book; must be positive
    target_size: u64,

    /// Write a JSON snapshot of the book to this path once input is exhausted
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Price levels per side included in the snapshot
    #[arg(long, default_value_t = 10)]
    depth: usize,
}

fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PricerError> {
    let config = PricerConfig::new(cli.target_size)?;
    info!("Pricing target size {}", config.target_size());

    let mut pricer = Pricer::new(config);
    let stats = pricer.process(io::stdin().lock(), io::stdout().lock())?;
    info!(
        lines = stats.lines_read,
        applied = stats.events_applied,
        rejected = stats.lines_rejected,
        unknown_reductions = stats.unknown_reductions,
        emissions = stats.emissions,
        "Input exhausted"
    );

    if let Some(path) = &cli.snapshot {
        let json = pricer.snapshot(cli.depth).to_json()?;
        fs::write(path, json)?;
        info!("Snapshot written to {}", path.display());
    }

    Ok(())
}
