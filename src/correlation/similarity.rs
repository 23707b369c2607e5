//! Similarity Engine
//!
//! Scores two curve segments cut from (possibly differently sampled) wells.
//!
//! Segments are cut shallowest first, truncated to the shorter one and
//! compared sample-by-sample (index-aligned, not depth-aligned). Wells logged at different step sizes
//! are therefore compared at misaligned depths; no resampling is attempted.
//!
//! ## Methods
//! - Pearson: r in [-1, 1], 0 when either segment is constant; two-tailed
//!   p-value from Student's t (statrs) when n >= 3
//! - Euclidean: `1 / (1 + sqrt(sum (a_i - b_i)^2))` in (0, 1]

use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, warn};

use crate::config::SimilarityConfig;
use crate::types::{ConfidenceLevel, Outcome, SimilarityMethod, SimilarityResult, Well};

/// Score two wells on `mnemonic` over the absolute depth interval `[lo, hi]`.
///
/// A curve missing from either well is `Invalid`; fewer than two usable
/// sample pairs is `Empty`.
pub fn compute_similarity(
    well_a: &Well,
    well_b: &Well,
    mnemonic: &str,
    lo: f64,
    hi: f64,
    method: SimilarityMethod,
    config: &SimilarityConfig,
) -> Outcome<SimilarityResult> {
    let (Some(curve_a), Some(curve_b)) = (well_a.curve(mnemonic), well_b.curve(mnemonic)) else {
        let missing = if well_a.curve(mnemonic).is_none() {
            well_a.id()
        } else {
            well_b.id()
        };
        warn!(curve = mnemonic, well = missing, "Curve missing, similarity not computed");
        return Outcome::invalid(format!("curve '{mnemonic}' not found in well '{missing}'"));
    };

    let segment_a = well_a.segment(curve_a, lo, hi);
    let segment_b = well_b.segment(curve_b, lo, hi);

    score_segments(&segment_a, &segment_b, method, config)
}

/// Score two already extracted segments.
pub fn score_segments(
    a: &[Option<f64>],
    b: &[Option<f64>],
    method: SimilarityMethod,
    config: &SimilarityConfig,
) -> Outcome<SimilarityResult> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
            _ => None,
        })
        .unzip();

    let n = xs.len();
    if n < 2 {
        debug!(len_a = a.len(), len_b = b.len(), pairs = n, "Too few sample pairs to score");
        return Outcome::Empty;
    }

    let (score, p_value) = match method {
        SimilarityMethod::Pearson => {
            let r = pearson(&xs, &ys);
            let p = (n >= 3).then(|| p_value_for_r(r, n));
            (r, p)
        }
        SimilarityMethod::Euclidean => (euclidean(&xs, &ys), None),
    };

    Outcome::Ok(SimilarityResult {
        score,
        confidence: ConfidenceLevel::from_score(score, config.high_threshold, config.medium_threshold),
        method,
        samples: n,
        p_value,
    })
}

fn is_constant(v: &[f64]) -> bool {
    v.windows(2).all(|w| w[0].to_bits() == w[1].to_bits())
}

/// Pearson correlation coefficient.
///
/// r = sum[(xi - mx)(yi - my)] / sqrt(sum(xi - mx)^2 * sum(yi - my)^2)
///
/// Zero when either input has no spread.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);
    if is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = (sxx * syy).sqrt();
    if denominator <= 0.0 || !denominator.is_finite() {
        0.0
    } else {
        (sxy / denominator).clamp(-1.0, 1.0)
    }
}

/// `1 / (1 + euclidean distance)`; 1 means identical.
pub fn euclidean(x: &[f64], y: &[f64]) -> f64 {
    let sum_sq: f64 = x.iter().zip(y).map(|(a, b)| (a - b).powi(2)).sum();
    1.0 / (1.0 + sum_sq.sqrt())
}

/// Two-tailed p-value of `r` with `n - 2` degrees of freedom.
///
/// t = r * sqrt(n-2) / sqrt(1-r^2)
pub fn p_value_for_r(r: f64, n: usize) -> f64 {
    if n < 3 {
        return 1.0;
    }
    if r.abs() >= 0.9999 {
        return 0.0;
    }

    let df = (n - 2) as f64;
    let t_stat = r * df.sqrt() / (1.0 - r * r).sqrt();

    match StudentsT::new(0.0, 1.0, df) {
        Ok(t_dist) => 2.0 * (1.0 - t_dist.cdf(t_stat.abs())),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use crate::types::{Curve, WellRecord};

    fn some(v: &[f64]) -> Vec<Option<f64>> {
        v.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let z = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &z) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_constant_is_zero() {
        assert_eq!(pearson(&[0.1; 10], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]), 0.0);
    }

    #[test]
    fn test_euclidean_identical_is_one() {
        let x = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert!((euclidean(&x, &x) - 1.0).abs() < f64::EPSILON);
        // distance 5 -> 1/6
        assert!((euclidean(&[0.0, 0.0], &[3.0, 4.0]) - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_truncates_to_shorter_and_drops_nulls() {
        let a = vec![Some(1.0), Some(2.0), None, Some(4.0), Some(5.0), Some(6.0)];
        let b = some(&[2.0, 4.0, 6.0, 8.0]);
        let r = score_segments(&a, &b, SimilarityMethod::Pearson, &SimilarityConfig::default())
            .ok()
            .unwrap();
        assert_eq!(r.samples, 3);
        assert!((r.score - 1.0).abs() < 1e-12);
        assert_eq!(r.confidence, ConfidenceLevel::High);
        assert_eq!(r.p_value, Some(0.0));
    }

    #[test]
    fn test_too_few_pairs_is_empty() {
        let out = score_segments(&some(&[1.0]), &some(&[1.0, 2.0]), SimilarityMethod::Euclidean, &SimilarityConfig::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_p_value_weak_correlation_not_significant() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let y = [5.0, 1.0, 7.0, 2.0, 9.0, 3.0, 4.0, 8.0, 0.0, 6.0];
        let r = pearson(&x, &y);
        assert!(r.abs() < 0.5);
        assert!(p_value_for_r(r, 10) > 0.05);
    }

    #[test]
    fn test_missing_curve_is_invalid() {
        let cfg = ValidationConfig::default();
        let a = Well::from_record(
            WellRecord::new("A", vec![1.0, 2.0, 3.0], vec![Curve::from_values("GR", &[1.0, 2.0, 3.0])]),
            &cfg,
        )
        .unwrap();
        let b = Well::from_record(
            WellRecord::new("B", vec![1.0, 2.0, 3.0], vec![Curve::from_values("RHOB", &[1.0, 2.0, 3.0])]),
            &cfg,
        )
        .unwrap();
        let out = compute_similarity(&a, &b, "GR", 0.0, 10.0, SimilarityMethod::Pearson, &SimilarityConfig::default());
        assert!(out.is_invalid());
        assert!(out.reason().unwrap().contains("'B'"));
    }

    #[test]
    fn test_depth_window_extraction() {
        let cfg = ValidationConfig::default();
        let depths: Vec<f64> = (0..20).map(|i| 1000.0 + f64::from(i)).collect();
        let values: Vec<f64> = (0..20).map(|i| f64::from(i % 7)).collect();
        let a = Well::from_record(WellRecord::new("A", depths.clone(), vec![Curve::from_values("GR", &values)]), &cfg).unwrap();
        let b = Well::from_record(WellRecord::new("B", depths, vec![Curve::from_values("GR", &values)]), &cfg).unwrap();
        let r = compute_similarity(&a, &b, "GR", 1005.0, 1012.0, SimilarityMethod::Euclidean, &SimilarityConfig::default())
            .ok()
            .unwrap();
        assert_eq!(r.samples, 8);
        assert!((r.score - 1.0).abs() < f64::EPSILON);
    }
}
