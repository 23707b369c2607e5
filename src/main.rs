//! wellcorr - multi-well log correlation from the command line
//!
//! Reads wells as JSON (`{"id", "depthInfo": {"depths", "start", "stop", "unit"}, "curves": [...]}`)
//! and writes results as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! wellcorr validate well.json
//! wellcorr picks well.json --curve GR --pattern peak
//! wellcorr similarity a.json b.json --curve GR --top 1050 --base 1150
//! wellcorr suggest src.json t1.json t2.json --curve GR --depth 1100 --name "Top Brent"
//! wellcorr fill well.json --curve GR --kind left --cutoff 75 --min 0 --max 150 --svg
//! ```
//!
//! # Environment Variables
//!
//! - `WELLCORR_CONFIG`: Path to a TOML config file (default: ./wellcorr.toml)
//! - `WELLCORR_LOG_JSON`: Set to `true` for JSON log lines (same as `--log-json`)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use wellcorr::config::CorrelationConfig;
use wellcorr::correlation::{compute_similarity, detect_well_picks, suggest_horizon_across};
use wellcorr::rendering::{auto_range, build_fill_path_with};
use wellcorr::types::{
    Curve, DepthRange, FillKind, FillSpec, Marker, Outcome, PatternType, ScaleType, SecondaryValue,
    SimilarityMethod, TrackConfig, Well, WellRecord,
};
use wellcorr::validator::validate_with;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "wellcorr")]
#[command(about = "Multi-well log correlation engine")]
#[command(version)]
struct CliArgs {
    /// TOML config file (overrides $WELLCORR_CONFIG and ./wellcorr.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, env = "WELLCORR_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Validate a well file and print the report
    Validate {
        well: PathBuf,
    },

    /// Detect automatic picks on one curve
    Picks {
        well: PathBuf,
        #[arg(long)]
        curve: String,
        /// peak, trough or inflection
        #[arg(long, default_value = "peak")]
        pattern: PatternType,
    },

    /// Score one curve between two wells over an absolute depth interval
    Similarity {
        well_a: PathBuf,
        well_b: PathBuf,
        #[arg(long)]
        curve: String,
        #[arg(long, allow_negative_numbers = true)]
        top: f64,
        #[arg(long, allow_negative_numbers = true)]
        base: f64,
        /// pearson or euclidean (default: from config)
        #[arg(long)]
        method: Option<SimilarityMethod>,
    },

    /// Suggest where a source-well marker sits in each target well
    Suggest {
        source: PathBuf,
        #[arg(required = true)]
        targets: Vec<PathBuf>,
        #[arg(long)]
        curve: String,
        /// Marker depth in the source well
        #[arg(long, allow_negative_numbers = true)]
        depth: f64,
        #[arg(long)]
        name: Option<String>,
    },

    /// Build the fill polygon for one curve on a track
    Fill {
        well: PathBuf,
        #[arg(long)]
        curve: String,
        /// left, right, between, crossover or facies
        #[arg(long)]
        kind: FillKind,
        #[arg(long, allow_negative_numbers = true)]
        cutoff: Option<f64>,
        /// Second curve for between/crossover fills
        #[arg(long, conflicts_with = "secondary_value")]
        secondary_curve: Option<String>,
        /// Constant second boundary for between/crossover fills
        #[arg(long, allow_negative_numbers = true)]
        secondary_value: Option<f64>,
        #[arg(long, default_value = "200")]
        width: f64,
        #[arg(long, default_value = "800")]
        height: f64,
        /// Track minimum (default: curve minimum)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        /// Track maximum (default: curve maximum)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
        /// linear or log
        #[arg(long, default_value = "linear")]
        scale: ScaleType,
        #[arg(long)]
        start: Option<usize>,
        #[arg(long)]
        end: Option<usize>,
        /// Print the SVG path string instead of JSON
        #[arg(long)]
        svg: bool,
    },
}

// ============================================================================
// Helpers
// ============================================================================

fn init_logging(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&Path>) -> Result<CorrelationConfig> {
    match path {
        Some(p) => {
            let config = CorrelationConfig::load_from_file(p)
                .with_context(|| format!("Failed to load config {}", p.display()))?;
            info!(path = %p.display(), "Loaded correlation config");
            Ok(config)
        }
        None => Ok(CorrelationConfig::load()),
    }
}

fn load_well(path: &Path, config: &CorrelationConfig) -> Result<Well> {
    Well::load(path, &config.validation).with_context(|| format!("Failed to load well {}", path.display()))
}

fn require_curve<'a>(well: &'a Well, mnemonic: &str) -> Result<&'a Curve> {
    well.curve(mnemonic).with_context(|| {
        format!(
            "Curve '{mnemonic}' not found in well '{}' (available: {})",
            well.id(),
            well.mnemonics().collect::<Vec<_>>().join(", ")
        )
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();
    // Logs on stderr, results on stdout
    init_logging(args.log_json);
    let config = load_config(args.config.as_deref())?;

    match args.command {
        SubCommand::Validate { well } => {
            let record = WellRecord::load(&well)
                .with_context(|| format!("Failed to read well {}", well.display()))?;
            let report = validate_with(&record, &config.validation);
            print_json(&report)?;
            if !report.is_valid {
                bail!("{} failed validation with {} error(s)", well.display(), report.errors.len());
            }
        }

        SubCommand::Picks { well, curve, pattern } => {
            let well = load_well(&well, &config)?;
            let picks = detect_well_picks(&well, &curve, pattern, &config.auto_pick);
            if let Some(markers) = picks.value() {
                info!(well = well.id(), count = markers.len(), "Picks detected");
            }
            print_json(&picks)?;
        }

        SubCommand::Similarity {
            well_a,
            well_b,
            curve,
            top,
            base,
            method,
        } => {
            let a = load_well(&well_a, &config)?;
            let b = load_well(&well_b, &config)?;
            let method = method.unwrap_or(config.similarity.method);
            let result = compute_similarity(&a, &b, &curve, top, base, method, &config.similarity);
            print_json(&result)?;
        }

        SubCommand::Suggest {
            source,
            targets,
            curve,
            depth,
            name,
        } => {
            let source = load_well(&source, &config)?;
            let targets = targets
                .iter()
                .map(|p| load_well(p, &config))
                .collect::<Result<Vec<_>>>()?;
            let marker = Marker {
                name,
                ..Marker::manual(depth, "")
            };

            let suggestions = suggest_horizon_across(
                &source,
                &targets,
                &marker,
                &curve,
                &config.horizon,
                &config.similarity,
            );
            for s in suggestions.iter().filter(|s| !s.is_match()) {
                warn!(target = %s.target_well, "No horizon suggestion");
            }
            print_json(&suggestions)?;
        }

        SubCommand::Fill {
            well,
            curve,
            kind,
            cutoff,
            secondary_curve,
            secondary_value,
            width,
            height,
            min,
            max,
            scale,
            start,
            end,
            svg,
        } => {
            let well = load_well(&well, &config)?;
            let primary = require_curve(&well, &curve)?;

            let (auto_min, auto_max) = match (min, max) {
                (Some(lo), Some(hi)) => (lo, hi),
                _ => auto_range(primary, scale)
                    .with_context(|| format!("Curve '{curve}' has no mappable values; pass --min and --max"))?,
            };
            let track = TrackConfig {
                track_width: width,
                track_height: height,
                min: min.unwrap_or(auto_min),
                max: max.unwrap_or(auto_max),
                scale_type: scale,
            };
            track.validate().context("Invalid track")?;

            let secondary = match &secondary_curve {
                Some(mnemonic) => Some(require_curve(&well, mnemonic)?),
                None => None,
            };

            let mut spec = FillSpec::new(kind);
            spec.cutoff = cutoff;
            if let Some(v) = secondary_value {
                spec = spec.with_secondary(SecondaryValue::Constant(v));
            }

            let full = DepthRange::full(primary.len());
            let range = DepthRange::new(start.unwrap_or(full.start_index), end.unwrap_or(full.end_index));

            let path = build_fill_path_with(
                &primary.data,
                secondary.map(|c| c.data.as_slice()),
                &spec,
                &track,
                range,
                &config.mapping,
            );

            if svg {
                match path {
                    Outcome::Ok(p) => println!("{}", p.to_svg_path()),
                    Outcome::Empty => info!("Nothing to draw"),
                    Outcome::Invalid(reason) => bail!("Cannot build fill: {reason}"),
                }
            } else {
                print_json(&path)?;
            }
        }
    }

    Ok(())
}
