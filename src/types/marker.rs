//! Stratigraphic picks and horizon suggestions

use serde::{Deserialize, Serialize};

/// How a pick was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickKind {
    Peak,
    Trough,
    Inflection,
    Manual,
}

impl std::fmt::Display for PickKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Peak => write!(f, "peak"),
            Self::Trough => write!(f, "trough"),
            Self::Inflection => write!(f, "inflection"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Pattern the auto-picker searches for. `Manual` picks are never detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Peak,
    Trough,
    Inflection,
}

impl From<PatternType> for PickKind {
    fn from(p: PatternType) -> Self {
        match p {
            PatternType::Peak => Self::Peak,
            PatternType::Trough => Self::Trough,
            PatternType::Inflection => Self::Inflection,
        }
    }
}

impl std::str::FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "peak" => Ok(Self::Peak),
            "trough" => Ok(Self::Trough),
            "inflection" => Ok(Self::Inflection),
            other => Err(format!("unknown pattern type '{other}' (expected peak, trough or inflection)")),
        }
    }
}

/// A named depth of geological interest, auto-detected or user-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub depth: f64,
    /// 0.0 - 1.0
    pub confidence: f64,
    #[serde(rename = "type")]
    pub kind: PickKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sample index the pick was detected at (auto picks only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Marker {
    /// A user pick at `depth` with full confidence.
    pub fn manual(depth: f64, name: impl Into<String>) -> Self {
        Self {
            depth,
            confidence: 1.0,
            kind: PickKind::Manual,
            name: Some(name.into()),
            index: None,
        }
    }
}

/// Where a horizon suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionSource {
    #[serde(rename = "Auto-Correlation")]
    AutoCorrelation,
}

/// Proposed depth for a source-well marker in a target well.
///
/// `suggested_depth == None` (with `confidence == -1.0`) means "no
/// suggestion"; it must never be applied as a pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonSuggestion {
    pub name: String,
    pub target_well: String,
    pub suggested_depth: Option<f64>,
    pub confidence: f64,
    pub source: SuggestionSource,
    /// Number of target windows scored
    pub windows_scanned: usize,
}

impl HorizonSuggestion {
    pub const NO_MATCH_CONFIDENCE: f64 = -1.0;

    pub const fn is_match(&self) -> bool {
        self.suggested_depth.is_some()
    }
}
