//! Well Dataset Validator
//!
//! Checks the structural and semantic integrity of a parsed well record
//! before any track is drawn or any correlation is run.
//!
//! ## Errors (block downstream use)
//! - Empty depth series, single-sample series, non-finite depth samples
//! - Depth series not strictly monotonic (reports the number of offending pairs)
//! - Curve length different from the depth series length
//! - No curves present
//!
//! ## Warnings (advisory only)
//! - Missing well identifier
//! - Curve more than 90% null
//! - Gamma ray (`GR`) curve with negative values
//! - Neutron (`NPHI`/`NEUT`) curve above 100 (percent vs fraction confusion)
//! - Unrecognised depth unit
//! - Duplicate curve mnemonic, header start/stop disagreeing with the samples
//!
//! Validation never fails: the report is always returned and callers decide
//! whether `errors` halts further processing.

mod statistics;

pub use statistics::{curve_statistics, CurveStatistics};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::types::WellRecord;

/// Result of validating a well record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub statistics: ValidationStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStatistics {
    pub total_curves: usize,
    pub total_depth_points: usize,
    /// Missing samples summed over every curve
    pub missing_values: usize,
    pub curves: Vec<CurveStatistics>,
}

/// Validate with the default thresholds.
pub fn validate(record: &WellRecord) -> ValidationReport {
    validate_with(record, &ValidationConfig::default())
}

/// Validate a well record. Pure; never panics.
pub fn validate_with(record: &WellRecord, config: &ValidationConfig) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let depths = &record.depth_info.depths;

    if record.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
        warnings.push("Missing well identifier".to_string());
    }

    check_depths(record, config, &mut errors, &mut warnings);

    if record.curves.is_empty() {
        errors.push("No curves present".to_string());
    }

    let mut seen = HashSet::new();
    let mut curves = Vec::with_capacity(record.curves.len());
    for curve in &record.curves {
        if !seen.insert(curve.mnemonic.as_str()) {
            warnings.push(format!(
                "Duplicate curve mnemonic '{}'; only the first occurrence is addressable",
                curve.mnemonic
            ));
        }

        if curve.len() != depths.len() {
            errors.push(format!(
                "Curve '{}' has {} samples but the depth series has {}",
                curve.mnemonic,
                curve.len(),
                depths.len()
            ));
        }

        let stats = curve_statistics(curve);
        check_curve_quality(&stats, config, &mut warnings);
        curves.push(stats);
    }

    let statistics = ValidationStatistics {
        total_curves: record.curves.len(),
        total_depth_points: depths.len(),
        missing_values: curves.iter().map(|c| c.null_count).sum(),
        curves,
    };

    debug!(
        well = record.id.as_deref().unwrap_or("<unnamed>"),
        errors = errors.len(),
        warnings = warnings.len(),
        "Validated well record"
    );

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        statistics,
    }
}

fn check_depths(
    record: &WellRecord,
    config: &ValidationConfig,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    let info = &record.depth_info;
    let depths = &info.depths;

    if let Some(unit) = info.unit.as_deref() {
        if !config.is_known_depth_unit(unit) {
            warnings.push(format!("Unrecognized depth unit '{unit}'"));
        }
    }

    match depths.len() {
        0 => {
            errors.push("Depth series is empty".to_string());
            return;
        }
        1 => {
            errors.push("Depth series has a single sample; at least 2 are required".to_string());
            return;
        }
        _ => {}
    }

    let non_finite = depths.iter().filter(|d| !d.is_finite()).count();
    if non_finite > 0 {
        errors.push(format!("Depth series contains {non_finite} non-finite value(s)"));
        return;
    }

    let violations = count_monotonic_violations(depths);
    if violations > 0 {
        errors.push(format!(
            "Depth series is not strictly monotonic: {violations} inconsistency(ies) between adjacent samples"
        ));
    }

    let first = depths[0];
    let last = depths[depths.len() - 1];
    let tolerance = 1e-6 * first.abs().max(last.abs()).max(1.0);
    if (info.start - first).abs() > tolerance || (info.stop - last).abs() > tolerance {
        warnings.push(format!(
            "Declared depth interval {}-{} differs from sampled interval {first}-{last}",
            info.start, info.stop
        ));
    }
}

/// Adjacent pairs that break the series direction.
///
/// Direction comes from the first pair, or from first-vs-last when the first
/// pair is flat. A fully flat series violates on every pair.
fn count_monotonic_violations(depths: &[f64]) -> usize {
    let n = depths.len();
    if n < 2 {
        return 0;
    }
    let mut direction = (depths[1] - depths[0]).signum();
    if depths[1] == depths[0] {
        direction = if depths[n - 1] == depths[0] {
            0.0
        } else {
            (depths[n - 1] - depths[0]).signum()
        };
    }

    depths
        .windows(2)
        .filter(|w| (w[1] - w[0]) * direction <= 0.0)
        .count()
}

fn check_curve_quality(stats: &CurveStatistics, config: &ValidationConfig, warnings: &mut Vec<String>) {
    if stats.samples > 0 && stats.null_ratio > config.max_null_ratio {
        warnings.push(format!(
            "Curve '{}' is {:.1}% null",
            stats.mnemonic,
            stats.null_ratio * 100.0
        ));
    }

    let mnemonic = stats.mnemonic.to_ascii_uppercase();

    if mnemonic.contains("GR") {
        if let Some(min) = stats.min.filter(|m| *m < 0.0) {
            warnings.push(format!(
                "Curve '{}' contains negative gamma ray values (min {min:.2})",
                stats.mnemonic
            ));
        }
    }

    if mnemonic.contains("NPHI") || mnemonic.contains("NEUT") {
        if let Some(max) = stats.max.filter(|m| *m > config.neutron_max) {
            warnings.push(format!(
                "Curve '{}' max value {max:.2} exceeds {}; check percent vs fraction units",
                stats.mnemonic, config.neutron_max
            ));
        }
    }
}
