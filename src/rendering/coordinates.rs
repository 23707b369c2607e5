//! Value/depth to track coordinate mapping
//!
//! All functions are total: degenerate ranges map to the track midpoint and
//! out-of-range values extrapolate (clipping is the renderer's job).

use crate::config::defaults::LOG_EPSILON;
use crate::types::{Curve, ScaleType, TrackConfig};

/// Map a curve value to a horizontal track position.
///
/// - Linear: `((value - min) / (max - min)) * width`
/// - Log: the same formula in `log10` space, with the value and both bounds
///   floored at `LOG_EPSILON` first.
///
/// A zero-width range (in either space) returns `width / 2`.
pub fn map_value_to_x(value: f64, min: f64, max: f64, width: f64, scale: ScaleType) -> f64 {
    map_value_to_x_with_epsilon(value, min, max, width, scale, LOG_EPSILON)
}

/// [`map_value_to_x`] with an explicit log-scale floor.
pub fn map_value_to_x_with_epsilon(
    value: f64,
    min: f64,
    max: f64,
    width: f64,
    scale: ScaleType,
    epsilon: f64,
) -> f64 {
    let (v, lo, hi) = match scale {
        ScaleType::Linear => (value, min, max),
        ScaleType::Log => (
            value.max(epsilon).log10(),
            min.max(epsilon).log10(),
            max.max(epsilon).log10(),
        ),
    };

    if (hi - lo).abs() < f64::EPSILON * hi.abs().max(lo.abs()).max(1.0) {
        return width / 2.0;
    }
    ((v - lo) / (hi - lo)) * width
}

/// Map a sample index to a vertical track position.
///
/// `(index / max(total_points - 1, 1)) * height`
pub fn map_depth_to_y(index: usize, total_points: usize, height: f64) -> f64 {
    let span = total_points.saturating_sub(1).max(1);
    (index as f64 / span as f64) * height
}

/// Inverse of [`map_depth_to_y`]: nearest sample index for a vertical
/// position, clamped to the series.
pub fn map_y_to_index(y: f64, total_points: usize, height: f64) -> usize {
    if total_points <= 1 || !(height > 0.0) || !y.is_finite() {
        return 0;
    }
    let last = total_points - 1;
    let raw = (y / height) * last as f64;
    if raw <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let idx = raw.round() as usize;
    idx.min(last)
}

/// Value range covering every mappable sample of a curve.
///
/// For log scales only positive values count. `None` when nothing is mappable.
pub fn auto_range(curve: &Curve, scale: ScaleType) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for (_, v) in curve.valid_samples() {
        if scale == ScaleType::Log && v <= 0.0 {
            continue;
        }
        range = Some(match range {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    range
}

impl TrackConfig {
    /// Horizontal position of `value` on this track with an explicit log floor.
    pub fn map_x_with_epsilon(&self, value: f64, epsilon: f64) -> f64 {
        map_value_to_x_with_epsilon(
            value,
            self.min,
            self.max,
            self.track_width,
            self.scale_type,
            epsilon,
        )
    }

    pub fn map_y(&self, index: usize, total_points: usize) -> f64 {
        map_depth_to_y(index, total_points, self.track_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        assert!((map_value_to_x(0.0, 0.0, 150.0, 300.0, ScaleType::Linear)).abs() < 1e-12);
        assert!((map_value_to_x(150.0, 0.0, 150.0, 300.0, ScaleType::Linear) - 300.0).abs() < 1e-12);
        assert!((map_value_to_x(75.0, 0.0, 150.0, 300.0, ScaleType::Linear) - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_range_maps_to_midpoint() {
        assert!((map_value_to_x(123.0, 5.0, 5.0, 100.0, ScaleType::Linear) - 50.0).abs() < 1e-12);
        assert!((map_value_to_x(-4.0, 0.0, -3.0, 100.0, ScaleType::Log) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_scale_decades() {
        // 0.2 - 2000 ohm.m spans four decades
        let x = map_value_to_x(20.0, 0.2, 2000.0, 400.0, ScaleType::Log);
        assert!((x - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_scale_clamps_non_positive() {
        let at_zero = map_value_to_x(0.0, 0.001, 1000.0, 600.0, ScaleType::Log);
        let at_negative = map_value_to_x(-50.0, 0.001, 1000.0, 600.0, ScaleType::Log);
        assert!(at_zero.abs() < 1e-9);
        assert!(at_negative.abs() < 1e-9);
    }

    #[test]
    fn test_linear_extrapolates() {
        let x = map_value_to_x(200.0, 0.0, 100.0, 100.0, ScaleType::Linear);
        assert!((x - 200.0).abs() < 1e-12);
    }

    #[test]
    fn test_depth_to_y() {
        assert!((map_depth_to_y(0, 11, 500.0)).abs() < 1e-12);
        assert!((map_depth_to_y(10, 11, 500.0) - 500.0).abs() < 1e-12);
        // single point series does not divide by zero
        assert!((map_depth_to_y(0, 1, 500.0)).abs() < 1e-12);
        assert!((map_depth_to_y(1, 0, 500.0) - 500.0).abs() < 1e-12);
    }

    #[test]
    fn test_y_to_index_inverts() {
        for i in 0..21 {
            let y = map_depth_to_y(i, 21, 800.0);
            assert_eq!(map_y_to_index(y, 21, 800.0), i);
        }
        assert_eq!(map_y_to_index(-10.0, 21, 800.0), 0);
        assert_eq!(map_y_to_index(5000.0, 21, 800.0), 20);
    }

    #[test]
    fn test_auto_range_log_ignores_non_positive() {
        let c = Curve::new("RT", None, vec![Some(-1.0), Some(0.0), Some(2.0), None, Some(200.0)]);
        assert_eq!(auto_range(&c, ScaleType::Log), Some((2.0, 200.0)));
        assert_eq!(auto_range(&c, ScaleType::Linear), Some((-1.0, 200.0)));
        assert_eq!(auto_range(&Curve::new("X", None, vec![None]), ScaleType::Linear), None);
    }
}
