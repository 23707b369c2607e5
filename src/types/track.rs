//! Rendering-track configuration and fill specifications

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("Track scale max ({max}) must be greater than min ({min}) for a linear scale")]
    EmptyRange { min: f64, max: f64 },

    #[error("Track dimensions must be positive (width {width}, height {height})")]
    BadDimensions { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Linear,
    Log,
}

impl std::str::FromStr for ScaleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "log" | "logarithmic" => Ok(Self::Log),
            other => Err(format!("unknown scale type '{other}'")),
        }
    }
}

/// How one curve's value range maps onto one rendering lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackConfig {
    pub track_width: f64,
    pub track_height: f64,
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub scale_type: ScaleType,
}

impl TrackConfig {
    pub const fn linear(track_width: f64, track_height: f64, min: f64, max: f64) -> Self {
        Self {
            track_width,
            track_height,
            min,
            max,
            scale_type: ScaleType::Linear,
        }
    }

    pub const fn log(track_width: f64, track_height: f64, min: f64, max: f64) -> Self {
        Self {
            track_width,
            track_height,
            min,
            max,
            scale_type: ScaleType::Log,
        }
    }

    /// Check the configuration a caller is about to render with.
    ///
    /// Mapping stays total regardless (degenerate ranges map to the track
    /// midpoint); this is for surfacing a bad track setup early. Log scales
    /// with non-positive bounds are accepted since those are clamped.
    pub fn validate(&self) -> Result<(), TrackError> {
        if !(self.track_width > 0.0 && self.track_height > 0.0) {
            return Err(TrackError::BadDimensions {
                width: self.track_width,
                height: self.track_height,
            });
        }
        if self.scale_type == ScaleType::Linear && self.max <= self.min {
            return Err(TrackError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Geometric rule for shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Left,
    Right,
    Between,
    Crossover,
    Facies,
}

impl std::str::FromStr for FillKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "between" => Ok(Self::Between),
            "crossover" => Ok(Self::Crossover),
            "facies" => Ok(Self::Facies),
            other => Err(format!("unknown fill type '{other}'")),
        }
    }
}

/// Second boundary of a `between`/`crossover` fill: a constant or a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecondaryValue {
    Constant(f64),
    Series(Vec<Option<f64>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillSpec {
    #[serde(rename = "type")]
    pub kind: FillKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryValue>,
}

impl FillSpec {
    pub const fn new(kind: FillKind) -> Self {
        Self {
            kind,
            cutoff: None,
            secondary: None,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn with_secondary(mut self, secondary: SecondaryValue) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

/// Visible sample window `[start_index, end_index]` (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl DepthRange {
    pub const fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// Whole series of `len` samples.
    pub const fn full(len: usize) -> Self {
        Self {
            start_index: 0,
            end_index: len.saturating_sub(1),
        }
    }
}
