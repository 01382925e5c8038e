// crates/blockscore/src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockscore_core::pipeline;
use blockscore_core::policy::PolicyKind;

/// A robust score distribution needs on the order of a thousand
/// counted blocks.
const ROBUST_COUNTED_MIN: usize = 1000;

/// Analyze a mining-pool block-template log: write a per-block CSV and
/// report statistics over the scores computed from fresh templates.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the collected log file
    input: PathBuf,
    /// Path the CSV report is written to
    output: PathBuf,
    /// Template refresh interval in minutes
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    interval: u32,
    /// How staleness is decided for blocks closer together than the interval
    #[arg(long, value_enum, default_value_t = Policy::MinuteBoundary)]
    policy: Policy,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Policy {
    /// Count a score only when strictly more than one interval elapsed
    StrictThreshold,
    /// Also count a score when a refresh tick fell between the two
    /// records' minute marks
    MinuteBoundary,
}

impl From<Policy> for PolicyKind {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::StrictThreshold => PolicyKind::StrictThreshold,
            Policy::MinuteBoundary => PolicyKind::MinuteBoundary,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let summary = pipeline::run(&cli.input, &cli.output, cli.interval, cli.policy.into())
        .with_context(|| format!("failed to analyze {}", cli.input.display()))?;

    if summary.counted_count < ROBUST_COUNTED_MIN {
        warn!(
            counted = summary.counted_count,
            "dataset is small; statistics may not be robust"
        );
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    info!("Done");
    Ok(())
}
