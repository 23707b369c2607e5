//! Per-curve summary statistics

use serde::{Deserialize, Serialize};

use crate::types::Curve;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveStatistics {
    pub mnemonic: String,
    pub samples: usize,
    pub null_count: usize,
    pub null_ratio: f64,
    /// `None` when the curve has no valid samples
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Summarise one curve. Non-finite samples count as missing.
pub fn curve_statistics(curve: &Curve) -> CurveStatistics {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut valid = 0usize;

    for (_, v) in curve.valid_samples() {
        min = min.min(v);
        max = max.max(v);
        sum += v;
        valid += 1;
    }

    let samples = curve.len();
    let null_count = samples - valid;
    let null_ratio = if samples == 0 {
        0.0
    } else {
        null_count as f64 / samples as f64
    };

    let (min, max, mean) = if valid == 0 {
        (None, None, None)
    } else {
        (Some(min), Some(max), Some(sum / valid as f64))
    };

    CurveStatistics {
        mnemonic: curve.mnemonic.clone(),
        samples,
        null_count,
        null_ratio,
        min,
        max,
        mean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_skip_nulls() {
        let c = Curve::new("GR", None, vec![Some(10.0), None, Some(30.0), None]);
        let s = curve_statistics(&c);
        assert_eq!(s.null_count, 2);
        assert!((s.null_ratio - 0.5).abs() < 1e-12);
        assert_eq!(s.min, Some(10.0));
        assert_eq!(s.max, Some(30.0));
        assert_eq!(s.mean, Some(20.0));
    }

    #[test]
    fn test_all_null_curve() {
        let c = Curve::new("GR", None, vec![None, None]);
        let s = curve_statistics(&c);
        assert_eq!(s.null_count, 2);
        assert!(s.min.is_none() && s.mean.is_none());
    }
}
