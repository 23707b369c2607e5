//! Auto-Pick Engine
//!
//! Finds candidate stratigraphic markers in a single curve:
//!
//! 1. Smooth with a centered moving average (half window 5)
//! 2. Scan `[margin, len - margin)` for extrema of the smoothed series
//! 3. Peaks/troughs must deviate from the local raw mean by more than the
//!    prominence threshold; inflections pass at a fixed confidence
//! 4. Debounce: candidates within `debounce_distance` samples merge, the
//!    higher confidence one survives
//!
//! Output is in scan order (ascending sample index).

use tracing::{debug, warn};

use super::smoothing::smooth;
use crate::config::AutoPickConfig;
use crate::types::{Marker, Outcome, PatternType, PickKind, Well};

/// Detect markers of `pattern` in `data`, sampled at `depths`.
///
/// Curves shorter than `2 * scan_margin + 1` samples give no picks.
pub fn detect_picks(
    depths: &[f64],
    data: &[Option<f64>],
    pattern: PatternType,
    config: &AutoPickConfig,
) -> Vec<Marker> {
    let n = data.len();
    let margin = config.scan_margin.max(1);
    if n < 2 * margin + 1 {
        return Vec::new();
    }

    let smoothed = smooth(data, config.smoothing_half_window, config.smoothing_kernel);

    let mut candidates = Vec::new();
    for i in margin..n - margin {
        let Some(depth) = depths.get(i).copied() else {
            break;
        };
        let confidence = match pattern {
            PatternType::Peak | PatternType::Trough => {
                if !is_extremum(&smoothed, i, pattern) {
                    continue;
                }
                match prominence(data, i, pattern, config) {
                    Some(c) => c,
                    None => continue,
                }
            }
            PatternType::Inflection => {
                if !is_slope_reversal(&smoothed, i) {
                    continue;
                }
                config.inflection_confidence
            }
        };
        candidates.push(Marker {
            depth,
            confidence,
            kind: PickKind::from(pattern),
            name: None,
            index: Some(i),
        });
    }

    let found = candidates.len();
    let picks = debounce(candidates, config.debounce_distance);
    debug!(?pattern, samples = n, candidates = found, picks = picks.len(), "Auto-pick scan complete");
    picks
}

/// [`detect_picks`] on a named curve of a validated well.
pub fn detect_well_picks(
    well: &Well,
    mnemonic: &str,
    pattern: PatternType,
    config: &AutoPickConfig,
) -> Outcome<Vec<Marker>> {
    let Some(curve) = well.curve(mnemonic) else {
        warn!(well = well.id(), curve = mnemonic, "Curve missing, no picks");
        return Outcome::invalid(format!("curve '{mnemonic}' not found in well '{}'", well.id()));
    };
    let picks = detect_picks(well.depths(), &curve.data, pattern, config);
    if picks.is_empty() {
        Outcome::Empty
    } else {
        Outcome::Ok(picks)
    }
}

/// Strict extremum of the smoothed series at `i`.
///
/// A run of equal values counts once, at its first sample, when both sides
/// of the run fall away (or rise, for troughs).
fn is_extremum(s: &[Option<f64>], i: usize, pattern: PatternType) -> bool {
    let (Some(prev), Some(v)) = (s[i - 1], s[i]) else {
        return false;
    };
    let beyond = |a: f64, b: f64| match pattern {
        PatternType::Trough => a < b,
        _ => a > b,
    };
    if !beyond(v, prev) {
        return false;
    }

    let tolerance = 1e-12 * v.abs().max(1.0);
    for next in &s[i + 1..] {
        match *next {
            Some(x) if (x - v).abs() <= tolerance => continue,
            Some(x) => return beyond(v, x),
            None => return false,
        }
    }
    false
}

/// First-difference sign change at `i`.
fn is_slope_reversal(s: &[Option<f64>], i: usize) -> bool {
    match (s[i - 1], s[i], s.get(i + 1).copied().flatten()) {
        (Some(a), Some(b), Some(c)) => (b - a) * (c - b) < 0.0,
        _ => false,
    }
}

/// Confidence of a peak/trough from its raw deviation against the raw mean
/// of its neighbours, or `None` when it is not prominent enough.
fn prominence(data: &[Option<f64>], i: usize, pattern: PatternType, config: &AutoPickConfig) -> Option<f64> {
    let value = data[i].filter(|v| v.is_finite())?;
    let lo = i.saturating_sub(config.prominence_half_window);
    let hi = (i + config.prominence_half_window).min(data.len() - 1);

    let (sum, count) = (lo..=hi)
        .filter(|&j| j != i)
        .filter_map(|j| data[j].filter(|v| v.is_finite()))
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        return None;
    }
    let mean = sum / count as f64;
    if mean == 0.0 {
        return None;
    }

    let deviation = match pattern {
        PatternType::Trough => (mean - value) / mean.abs(),
        _ => (value - mean) / mean.abs(),
    };
    (deviation > config.prominence_threshold).then(|| deviation.min(config.max_confidence))
}

/// Merge candidates closer than `distance` samples, keeping the more
/// confident one (the earlier one on ties).
fn debounce(candidates: Vec<Marker>, distance: usize) -> Vec<Marker> {
    let mut kept: Vec<Marker> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if let Some(last) = kept.last_mut() {
            let gap = candidate.index.unwrap_or(0).abs_diff(last.index.unwrap_or(0));
            if gap <= distance {
                if candidate.confidence > last.confidence {
                    *last = candidate;
                }
                continue;
            }
        }
        kept.push(candidate);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depths(n: usize) -> Vec<f64> {
        (0..n).map(|i| 1500.0 + i as f64 * 0.5).collect()
    }

    fn flat_with(n: usize, base: f64, spikes: &[(usize, f64)]) -> Vec<Option<f64>> {
        let mut v = vec![Some(base); n];
        for &(i, value) in spikes {
            v[i] = Some(value);
        }
        v
    }

    #[test]
    fn test_single_spike_peak() {
        let data = flat_with(40, 100.0, &[(20, 150.0)]);
        let picks = detect_picks(&depths(40), &data, PatternType::Peak, &AutoPickConfig::default());
        assert_eq!(picks.len(), 1, "{picks:?}");
        assert_eq!(picks[0].index, Some(20));
        assert!((picks[0].depth - 1510.0).abs() < 1e-12);
        assert!((picks[0].confidence - 0.5).abs() < 1e-9);
        assert_eq!(picks[0].kind, PickKind::Peak);
    }

    #[test]
    fn test_confidence_capped() {
        let data = flat_with(40, 10.0, &[(20, 100.0)]);
        let picks = detect_picks(&depths(40), &data, PatternType::Peak, &AutoPickConfig::default());
        assert_eq!(picks.len(), 1);
        assert!((picks[0].confidence - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_trough() {
        let data = flat_with(40, 100.0, &[(18, 60.0)]);
        let picks = detect_picks(&depths(40), &data, PatternType::Trough, &AutoPickConfig::default());
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].index, Some(18));
        assert!((picks[0].confidence - 0.4).abs() < 1e-9);
        assert!(detect_picks(&depths(40), &data, PatternType::Peak, &AutoPickConfig::default()).is_empty());
    }

    #[test]
    fn test_small_bump_rejected() {
        let data = flat_with(40, 100.0, &[(20, 105.0)]);
        assert!(detect_picks(&depths(40), &data, PatternType::Peak, &AutoPickConfig::default()).is_empty());
    }

    #[test]
    fn test_two_close_peaks_debounced() {
        let data = flat_with(40, 100.0, &[(18, 160.0), (20, 140.0)]);
        let picks = detect_picks(&depths(40), &data, PatternType::Peak, &AutoPickConfig::default());
        assert_eq!(picks.len(), 1, "{picks:?}");
        assert_eq!(picks[0].index, Some(18));
    }

    #[test]
    fn test_equal_close_peaks_single_pick() {
        let data = flat_with(40, 100.0, &[(18, 150.0), (20, 150.0)]);
        let picks = detect_picks(&depths(40), &data, PatternType::Peak, &AutoPickConfig::default());
        assert_eq!(picks.len(), 1, "{picks:?}");
    }

    #[test]
    fn test_far_peaks_both_kept() {
        let data = flat_with(60, 100.0, &[(15, 150.0), (40, 170.0)]);
        let picks = detect_picks(&depths(60), &data, PatternType::Peak, &AutoPickConfig::default());
        let idx: Vec<_> = picks.iter().filter_map(|p| p.index).collect();
        assert_eq!(idx, vec![15, 40]);
    }

    #[test]
    fn test_short_curve_is_empty() {
        let data = flat_with(20, 100.0, &[(10, 200.0)]);
        assert!(detect_picks(&depths(20), &data, PatternType::Peak, &AutoPickConfig::default()).is_empty());
        assert!(detect_picks(&[], &[], PatternType::Peak, &AutoPickConfig::default()).is_empty());
    }

    #[test]
    fn test_inflection_fixed_confidence() {
        let data: Vec<Option<f64>> = (0..40)
            .map(|i| Some(((i as f64) * std::f64::consts::PI / 12.0 + 0.3).sin() * 50.0 + 100.0))
            .collect();
        let picks = detect_picks(&depths(40), &data, PatternType::Inflection, &AutoPickConfig::default());
        assert!(!picks.is_empty());
        assert!(picks.iter().all(|p| (p.confidence - 0.6).abs() < 1e-12 && p.kind == PickKind::Inflection));
    }

    #[test]
    fn test_debounce_keeps_earlier_on_tie() {
        let mk = |i: usize, c: f64| Marker {
            depth: i as f64,
            confidence: c,
            kind: PickKind::Peak,
            name: None,
            index: Some(i),
        };
        let out = debounce(vec![mk(10, 0.5), mk(13, 0.5), mk(30, 0.2)], 5);
        assert_eq!(out.iter().map(|m| m.index).collect::<Vec<_>>(), vec![Some(10), Some(30)]);
    }
}
