//! Correlation Configuration - every heuristic constant as a TOML value
//!
//! Each section struct implements `Default` with the built-in values from
//! `defaults.rs`, so an absent file or section changes nothing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use crate::correlation::smoothing::SmoothingKernel;
use crate::types::SimilarityMethod;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WELLCORR_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wellcorr.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the correlation engine.
///
/// Load with `CorrelationConfig::load()` which searches:
/// 1. `$WELLCORR_CONFIG` env var
/// 2. `./wellcorr.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationConfig {
    #[serde(default)]
    pub mapping: MappingConfig,

    #[serde(default)]
    pub similarity: SimilarityConfig,

    #[serde(default)]
    pub auto_pick: AutoPickConfig,

    #[serde(default)]
    pub horizon: HorizonConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

impl CorrelationConfig {
    /// Load configuration using the standard search order, falling back to
    /// defaults (with a warning) when a file exists but cannot be used.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded correlation config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded correlation config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings with "did you mean" suggestions and
    /// never fail the load.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate all tunables for internal consistency.
    ///
    /// Rules:
    /// - Windows, steps and epsilons must be positive and finite
    /// - The Medium threshold must sit below the High threshold
    /// - Ratios and confidences must lie in [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (mut errors, range_warnings) = super::validation::validate_ranges(self);
        for w in &range_warnings {
            warn!("{}", w);
        }

        let s = &self.similarity;
        if s.medium_threshold.is_finite()
            && s.high_threshold.is_finite()
            && s.medium_threshold >= s.high_threshold
        {
            errors.push(format!(
                "similarity.medium_threshold ({:.3}) must be less than high_threshold ({:.3})",
                s.medium_threshold, s.high_threshold
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(toml::ser::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Sections
// ============================================================================

/// Coordinate mapping tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Floor for values and bounds on log-scale tracks
    #[serde(default = "default_log_epsilon")]
    pub log_epsilon: f64,
}

fn default_log_epsilon() -> f64 {
    defaults::LOG_EPSILON
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            log_epsilon: default_log_epsilon(),
        }
    }
}

/// Similarity scoring tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    #[serde(default)]
    pub method: SimilarityMethod,

    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,
}

fn default_high_threshold() -> f64 {
    defaults::HIGH_CONFIDENCE_SCORE
}
fn default_medium_threshold() -> f64 {
    defaults::MEDIUM_CONFIDENCE_SCORE
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            method: SimilarityMethod::Pearson,
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

/// Auto-pick heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoPickConfig {
    #[serde(default = "default_smoothing_half_window")]
    pub smoothing_half_window: usize,

    #[serde(default)]
    pub smoothing_kernel: SmoothingKernel,

    #[serde(default = "default_scan_margin")]
    pub scan_margin: usize,

    #[serde(default = "default_prominence_half_window")]
    pub prominence_half_window: usize,

    /// Relative deviation from the local mean a peak/trough must exceed
    #[serde(default = "default_prominence_threshold")]
    pub prominence_threshold: f64,

    #[serde(default = "default_max_confidence")]
    pub max_confidence: f64,

    #[serde(default = "default_inflection_confidence")]
    pub inflection_confidence: f64,

    #[serde(default = "default_debounce_distance")]
    pub debounce_distance: usize,
}

fn default_smoothing_half_window() -> usize {
    defaults::SMOOTHING_HALF_WINDOW
}
fn default_scan_margin() -> usize {
    defaults::SCAN_MARGIN
}
fn default_prominence_half_window() -> usize {
    defaults::PROMINENCE_HALF_WINDOW
}
fn default_prominence_threshold() -> f64 {
    defaults::PROMINENCE_THRESHOLD
}
fn default_max_confidence() -> f64 {
    defaults::MAX_PICK_CONFIDENCE
}
fn default_inflection_confidence() -> f64 {
    defaults::INFLECTION_CONFIDENCE
}
fn default_debounce_distance() -> usize {
    defaults::DEBOUNCE_DISTANCE
}

impl Default for AutoPickConfig {
    fn default() -> Self {
        Self {
            smoothing_half_window: default_smoothing_half_window(),
            smoothing_kernel: SmoothingKernel::default(),
            scan_margin: default_scan_margin(),
            prominence_half_window: default_prominence_half_window(),
            prominence_threshold: default_prominence_threshold(),
            max_confidence: default_max_confidence(),
            inflection_confidence: default_inflection_confidence(),
            debounce_distance: default_debounce_distance(),
        }
    }
}

/// Sliding-window horizon suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Half-width of the reference window around the source marker (depth units)
    #[serde(default = "default_horizon_half_window")]
    pub half_window: f64,

    /// Slide step across the target well (depth units)
    #[serde(default = "default_horizon_step")]
    pub step: f64,

    #[serde(default)]
    pub method: SimilarityMethod,
}

fn default_horizon_half_window() -> f64 {
    defaults::HORIZON_HALF_WINDOW
}
fn default_horizon_step() -> f64 {
    defaults::HORIZON_STEP
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            half_window: default_horizon_half_window(),
            step: default_horizon_step(),
            method: SimilarityMethod::Pearson,
        }
    }
}

impl HorizonConfig {
    pub fn window_width(&self) -> f64 {
        self.half_window * 2.0
    }
}

/// Data validator thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_max_null_ratio")]
    pub max_null_ratio: f64,

    #[serde(default = "default_neutron_max")]
    pub neutron_max: f64,

    #[serde(default = "default_depth_units")]
    pub depth_units: Vec<String>,
}

fn default_max_null_ratio() -> f64 {
    defaults::MAX_NULL_RATIO
}
fn default_neutron_max() -> f64 {
    defaults::NEUTRON_MAX
}
fn default_depth_units() -> Vec<String> {
    defaults::DEPTH_UNITS.iter().map(|s| (*s).to_string()).collect()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_null_ratio: default_max_null_ratio(),
            neutron_max: default_neutron_max(),
            depth_units: default_depth_units(),
        }
    }
}

impl ValidationConfig {
    pub fn is_known_depth_unit(&self, unit: &str) -> bool {
        let unit = unit.trim();
        self.depth_units.iter().any(|u| u.eq_ignore_ascii_case(unit))
    }
}
