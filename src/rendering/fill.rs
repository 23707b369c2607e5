//! Fill Geometry Generator
//!
//! Builds one closed polygon per call for the five fill types:
//!
//! - `left` / `right`: area between the curve and a vertical baseline (the
//!   track edge, or `cutoff` mapped onto the track)
//! - `between` / `crossover`: area enclosed by the curve and a second curve
//!   or constant, traced forward then backward
//! - `facies`: full-width block over the depth window; colour per sample is
//!   the renderer's concern
//!
//! Missing samples are skipped, not interpolated. The crossover fill does
//! not split at points where the curves swap order; use
//! [`crossover_segments`] to split the depth window first when a
//! two-colour crossover is needed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::path::FillPath;
use crate::config::MappingConfig;
use crate::types::{DepthRange, FillKind, FillSpec, Outcome, SecondaryValue, TrackConfig};

/// Second boundary resolved for a two-sided fill.
enum Boundary<'a> {
    Constant(f64),
    Series(&'a [Option<f64>]),
}

fn sample(data: &[Option<f64>], i: usize) -> Option<f64> {
    data.get(i).copied().flatten().filter(|v| v.is_finite())
}

/// Build the fill polygon with the default log-scale floor.
///
/// `secondary` takes precedence over `spec.secondary` for two-sided fills.
/// `range` only limits which samples are visited; vertical positions are
/// always computed against the full curve length so a windowed path lines
/// up exactly with the unwindowed one.
pub fn build_fill_path(
    primary: &[Option<f64>],
    secondary: Option<&[Option<f64>]>,
    spec: &FillSpec,
    track: &TrackConfig,
    range: DepthRange,
) -> Outcome<FillPath> {
    build_fill_path_with(primary, secondary, spec, track, range, &MappingConfig::default())
}

/// [`build_fill_path`] with explicit mapping tunables.
pub fn build_fill_path_with(
    primary: &[Option<f64>],
    secondary: Option<&[Option<f64>]>,
    spec: &FillSpec,
    track: &TrackConfig,
    range: DepthRange,
    mapping: &MappingConfig,
) -> Outcome<FillPath> {
    let total = primary.len();
    if total == 0 || range.start_index >= range.end_index {
        return Outcome::Empty;
    }
    let start = range.start_index;
    let end = range.end_index.min(total - 1);
    if start >= end {
        return Outcome::Empty;
    }

    let map_x = |v: f64| track.map_x_with_epsilon(v, mapping.log_epsilon);
    let map_y = |i: usize| track.map_y(i, total);

    let outcome = match spec.kind {
        FillKind::Left | FillKind::Right => {
            let edge = if spec.kind == FillKind::Left {
                0.0
            } else {
                track.track_width
            };
            let baseline = spec.cutoff.map_or(edge, map_x);
            edge_fill(primary, start, end, baseline, spec.kind, &map_x, &map_y)
        }
        FillKind::Between | FillKind::Crossover => {
            let boundary = match (secondary, spec.secondary.as_ref()) {
                (Some(series), _) => Boundary::Series(series),
                (None, Some(SecondaryValue::Series(series))) => Boundary::Series(series),
                (None, Some(SecondaryValue::Constant(c))) => Boundary::Constant(*c),
                (None, None) => {
                    return Outcome::invalid(format!(
                        "{:?} fill needs a secondary curve or constant",
                        spec.kind
                    ))
                }
            };
            enclosed_fill(primary, &boundary, start, end, spec.kind, &map_x, &map_y)
        }
        FillKind::Facies => {
            let (y0, y1) = (map_y(start), map_y(end));
            let mut path = FillPath::new(FillKind::Facies);
            path.move_to(0.0, y0);
            path.line_to(track.track_width, y0);
            path.line_to(track.track_width, y1);
            path.line_to(0.0, y1);
            path.close();
            Outcome::Ok(path)
        }
    };

    match outcome {
        // A polygon needs three distinct corners to cover any area.
        Outcome::Ok(path) if path.distinct_vertices() < 3 => {
            debug!(kind = ?spec.kind, start, end, "Fill collapses to fewer than three vertices");
            Outcome::Empty
        }
        Outcome::Ok(path) => {
            debug!(kind = ?spec.kind, start, end, ops = path.ops.len(), "Built fill path");
            Outcome::Ok(path)
        }
        other => other,
    }
}

fn edge_fill(
    primary: &[Option<f64>],
    start: usize,
    end: usize,
    baseline: f64,
    kind: FillKind,
    map_x: &impl Fn(f64) -> f64,
    map_y: &impl Fn(usize) -> f64,
) -> Outcome<FillPath> {
    let mut points = (start..=end)
        .filter_map(|i| sample(primary, i).map(|v| (map_x(v), map_y(i))))
        .peekable();
    if points.peek().is_none() {
        return Outcome::Empty;
    }

    let mut path = FillPath::new(kind);
    path.move_to(baseline, map_y(start));
    for (x, y) in points {
        path.line_to(x, y);
    }
    path.line_to(baseline, map_y(end));
    path.close();
    Outcome::Ok(path)
}

fn enclosed_fill(
    primary: &[Option<f64>],
    boundary: &Boundary<'_>,
    start: usize,
    end: usize,
    kind: FillKind,
    map_x: &impl Fn(f64) -> f64,
    map_y: &impl Fn(usize) -> f64,
) -> Outcome<FillPath> {
    let forward: Vec<(f64, f64)> = (start..=end)
        .filter_map(|i| sample(primary, i).map(|v| (map_x(v), map_y(i))))
        .collect();
    if forward.is_empty() {
        return Outcome::Empty;
    }

    let backward: Vec<(f64, f64)> = match *boundary {
        Boundary::Constant(c) => {
            let x = map_x(c);
            (start..=end).rev().map(|i| (x, map_y(i))).collect()
        }
        Boundary::Series(series) => (start..=end)
            .rev()
            .filter_map(|i| sample(series, i).map(|v| (map_x(v), map_y(i))))
            .collect(),
    };
    if backward.is_empty() {
        return Outcome::Empty;
    }

    let mut path = FillPath::new(kind);
    let (x0, y0) = forward[0];
    path.move_to(x0, y0);
    for &(x, y) in forward.iter().skip(1).chain(backward.iter()) {
        path.line_to(x, y);
    }
    path.close();
    Outcome::Ok(path)
}

// ============================================================================
// Crossover Splitting
// ============================================================================

/// Which curve reads higher inside a crossover segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveOrder {
    PrimaryGreater,
    SecondaryGreater,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossoverSegment {
    pub range: DepthRange,
    pub order: CurveOrder,
}

/// Split `range` wherever the two curves swap order.
///
/// Consecutive segments share their boundary sample so the fills drawn for
/// them meet without a gap. Samples where either curve is missing, or where
/// the curves are equal, never start a new segment.
pub fn crossover_segments(
    primary: &[Option<f64>],
    secondary: &SecondaryValue,
    range: DepthRange,
) -> Vec<CrossoverSegment> {
    let other = |i: usize| match secondary {
        SecondaryValue::Constant(c) => Some(*c).filter(|v| v.is_finite()),
        SecondaryValue::Series(s) => sample(s, i),
    };

    let end = range.end_index.min(primary.len().saturating_sub(1));
    let mut segments = Vec::new();
    let mut current: Option<(usize, CurveOrder)> = None;
    let mut last_valid = range.start_index;

    for i in range.start_index..=end {
        let (Some(a), Some(b)) = (sample(primary, i), other(i)) else {
            continue;
        };
        let order = if a > b {
            CurveOrder::PrimaryGreater
        } else if b > a {
            CurveOrder::SecondaryGreater
        } else {
            last_valid = i;
            continue;
        };

        match current {
            None => current = Some((range.start_index, order)),
            Some((seg_start, seg_order)) if seg_order != order => {
                segments.push(CrossoverSegment {
                    range: DepthRange::new(seg_start, last_valid),
                    order: seg_order,
                });
                current = Some((last_valid, order));
            }
            Some(_) => {}
        }
        last_valid = i;
    }

    if let Some((seg_start, order)) = current {
        segments.push(CrossoverSegment {
            range: DepthRange::new(seg_start, end.max(seg_start)),
            order,
        });
    }
    segments
}
