//! Synthetic Well Generator
//!
//! Writes a set of correlated synthetic wells as JSON files, one per well.
//! Every well carries the same GR marker, shifted down by `--shift` per
//! well, so `wellcorr suggest` has a known answer.
//!
//! # Usage
//! ```bash
//! synthetic-wells --count 3 --seed 7 --marker-depth 1100 --out-dir data/synthetic
//! wellcorr suggest data/synthetic/SYN-1.json data/synthetic/SYN-2.json --curve GR --depth 1100
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use wellcorr::synthetic::correlated_wells;

#[derive(Parser, Debug)]
#[command(name = "synthetic-wells")]
#[command(about = "Generate correlated synthetic wells for wellcorr")]
#[command(version)]
struct Args {
    /// Number of wells (1-50)
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..=50))]
    count: u32,

    /// Samples per well (0.5 depth-unit step from 1000)
    #[arg(long, default_value = "400", value_parser = clap::value_parser!(u32).range(21..=100_000))]
    samples: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Marker depth in the first well
    #[arg(long, default_value = "1100")]
    marker_depth: f64,

    /// Marker offset added per well
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    shift: f64,

    /// Output directory (created if missing)
    #[arg(long, default_value = "data/synthetic")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let wells = correlated_wells(
        args.count as usize,
        args.samples as usize,
        args.seed,
        args.marker_depth,
        args.shift,
    );

    for (k, well) in wells.iter().enumerate() {
        let id = well.id.as_deref().unwrap_or("well");
        let path = args.out_dir.join(format!("{id}.json"));
        let json = serde_json::to_string_pretty(well)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            path = %path.display(),
            marker_depth = args.marker_depth + k as f64 * args.shift,
            "Wrote synthetic well"
        );
    }

    println!("{}", args.out_dir.display());
    Ok(())
}
