//! Similarity scoring types

use serde::{Deserialize, Serialize};

/// Scoring method for curve-segment similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMethod {
    /// Pearson correlation coefficient, in [-1, 1]
    #[default]
    Pearson,
    /// `1 / (1 + euclidean distance)`, in (0, 1]
    Euclidean,
}

impl std::fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pearson => write!(f, "pearson"),
            Self::Euclidean => write!(f, "euclidean"),
        }
    }
}

impl std::str::FromStr for SimilarityMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pearson" => Ok(Self::Pearson),
            "euclidean" => Ok(Self::Euclidean),
            other => Err(format!("unknown similarity method '{other}'")),
        }
    }
}

/// Qualitative bucket for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// `|score| > high` → High, `|score| > medium` → Medium, otherwise Low.
    pub fn from_score(score: f64, high: f64, medium: f64) -> Self {
        let s = score.abs();
        if s > high {
            Self::High
        } else if s > medium {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Score between two curve segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub score: f64,
    pub confidence: ConfidenceLevel,
    pub method: SimilarityMethod,
    /// Sample pairs that contributed to the score
    pub samples: usize,
    /// Two-tailed significance of a Pearson score; `None` for Euclidean or n < 3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(ConfidenceLevel::from_score(0.71, 0.7, 0.4), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.7, 0.7, 0.4), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(-0.8, 0.7, 0.4), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.4, 0.7, 0.4), ConfidenceLevel::Low);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("Pearson".parse::<SimilarityMethod>(), Ok(SimilarityMethod::Pearson));
        assert!("dtw".parse::<SimilarityMethod>().is_err());
    }
}
