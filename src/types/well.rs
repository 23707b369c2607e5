//! Depth-indexed well data: raw LAS-like records and the validated `Well`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ValidationConfig;
use crate::validator::{self, ValidationReport};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum WellError {
    #[error("Well failed validation with {} error(s): {}", .errors.len(), .errors.join("; "))]
    Invalid { errors: Vec<String> },

    #[error("Failed to parse well record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Raw Record (as parsed upstream)
// ============================================================================

/// A single log curve sampled on the well's depth series.
///
/// `data[i]` is the reading at `depths[i]`; `None` marks "no reading".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub mnemonic: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub data: Vec<Option<f64>>,
}

impl Curve {
    pub fn new(mnemonic: impl Into<String>, unit: Option<&str>, data: Vec<Option<f64>>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            unit: unit.map(str::to_string),
            data,
        }
    }

    /// Build a curve with no missing samples.
    pub fn from_values(mnemonic: impl Into<String>, values: &[f64]) -> Self {
        Self::new(mnemonic, None, values.iter().copied().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at `index`, treating non-finite readings as missing.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().flatten().filter(|v| v.is_finite())
    }

    /// Iterator over `(index, value)` for every usable sample.
    pub fn valid_samples(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.filter(|x| x.is_finite()).map(|x| (i, x)))
    }

    pub fn null_count(&self) -> usize {
        self.data
            .iter()
            .filter(|v| !v.is_some_and(f64::is_finite))
            .count()
    }
}

/// Depth series plus the declared interval from the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthInfo {
    #[serde(default)]
    pub depths: Vec<f64>,
    pub start: f64,
    pub stop: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Raw well dataset as produced by the (external) LAS parser.
///
/// Nothing about a `WellRecord` is trusted; run it through
/// [`validator::validate`] or [`Well::from_record`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub depth_info: DepthInfo,
    #[serde(default)]
    pub curves: Vec<Curve>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl WellRecord {
    /// Record whose declared start/stop are taken from the depth samples.
    pub fn new(id: impl Into<String>, depths: Vec<f64>, curves: Vec<Curve>) -> Self {
        let start = depths.first().copied().unwrap_or(0.0);
        let stop = depths.last().copied().unwrap_or(0.0);
        Self {
            id: Some(id.into()),
            depth_info: DepthInfo {
                depths,
                start,
                stop,
                unit: None,
            },
            curves,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_depth_unit(mut self, unit: &str) -> Self {
        self.depth_info.unit = Some(unit.to_string());
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, WellError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, WellError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

// ============================================================================
// Validated Well
// ============================================================================

/// Direction of the depth series, fixed per well at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthDirection {
    Increasing,
    Decreasing,
}

/// A validated well: strictly monotonic depths, every curve the same length
/// as the depth series, and a mnemonic index for checked curve lookup.
#[derive(Debug, Clone)]
pub struct Well {
    id: String,
    depth_info: DepthInfo,
    direction: DepthDirection,
    curves: Vec<Curve>,
    index: HashMap<String, usize>,
    report: ValidationReport,
}

impl Well {
    /// Validate `record` and take ownership of it.
    ///
    /// Fails only on structural errors; data-quality warnings stay available
    /// through [`Well::report`].
    pub fn from_record(record: WellRecord, config: &ValidationConfig) -> Result<Self, WellError> {
        let report = validator::validate_with(&record, config);
        if !report.is_valid {
            return Err(WellError::Invalid {
                errors: report.errors,
            });
        }
        for w in &report.warnings {
            warn!(well = record.id.as_deref().unwrap_or("<unnamed>"), "{w}");
        }

        let depths = &record.depth_info.depths;
        let direction = if depths[1] > depths[0] {
            DepthDirection::Increasing
        } else {
            DepthDirection::Decreasing
        };

        let mut index = HashMap::with_capacity(record.curves.len());
        for (i, curve) in record.curves.iter().enumerate() {
            index.entry(curve.mnemonic.clone()).or_insert(i);
        }

        let id = record
            .id
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "UNNAMED".to_string());
        debug!(well = %id, curves = index.len(), samples = depths.len(), "Well accepted");

        Ok(Self {
            id,
            depth_info: record.depth_info,
            direction,
            curves: record.curves,
            index,
            report,
        })
    }

    /// Load and validate a JSON well file.
    pub fn load(path: &Path, config: &ValidationConfig) -> Result<Self, WellError> {
        Self::from_record(WellRecord::load(path)?, config)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn depths(&self) -> &[f64] {
        &self.depth_info.depths
    }

    pub fn depth_unit(&self) -> Option<&str> {
        self.depth_info.unit.as_deref()
    }

    pub const fn direction(&self) -> DepthDirection {
        self.direction
    }

    /// Declared start depth from the header.
    pub const fn start(&self) -> f64 {
        self.depth_info.start
    }

    /// Declared stop depth from the header.
    pub const fn stop(&self) -> f64 {
        self.depth_info.stop
    }

    pub fn len(&self) -> usize {
        self.depth_info.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth_info.depths.is_empty()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.index.get(mnemonic).map(|&i| &self.curves[i])
    }

    pub fn mnemonics(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.mnemonic.as_str())
    }

    pub const fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Shallowest and deepest sampled depth, regardless of direction.
    pub fn depth_bounds(&self) -> (f64, f64) {
        let first = self.depth_info.depths[0];
        let last = self.depth_info.depths[self.len() - 1];
        (first.min(last), first.max(last))
    }

    /// Sample indices whose depth lies in `[lo, hi]`, shallowest first.
    ///
    /// A decreasing well yields its indices in reverse, so segments cut from
    /// wells logged in opposite directions line up top to bottom.
    pub fn index_range(&self, lo: f64, hi: f64) -> Vec<usize> {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let mut indices: Vec<usize> = self
            .depth_info
            .depths
            .iter()
            .enumerate()
            .filter(|(_, &d)| d >= lo && d <= hi)
            .map(|(i, _)| i)
            .collect();
        if self.direction == DepthDirection::Decreasing {
            indices.reverse();
        }
        indices
    }

    /// Values of `curve` over `[lo, hi]`, shallowest first.
    pub fn segment(&self, curve: &Curve, lo: f64, hi: f64) -> Vec<Option<f64>> {
        self.index_range(lo, hi).into_iter().map(|i| curve.value(i)).collect()
    }

    /// Index of the sample closest to `depth`.
    pub fn nearest_index(&self, depth: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, d) in self.depth_info.depths.iter().enumerate() {
            let dist = (d - depth).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }
}
