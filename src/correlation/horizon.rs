//! Horizon Suggester
//!
//! Slides a window the width of the source pattern down a target well and
//! keeps the best-scoring position. Scans over independent target wells run
//! in parallel on the rayon pool.

use rayon::prelude::*;
use tracing::{debug, warn};

use super::similarity::score_segments;
use crate::config::{HorizonConfig, SimilarityConfig};
use crate::types::{HorizonSuggestion, Marker, Outcome, SuggestionSource, Well};

/// Propose a depth in `target` matching `marker` picked in `source`.
///
/// Returns a suggestion with `suggested_depth == None` and confidence `-1`
/// when no window could be scored (missing curve, target shorter than the
/// window, no overlapping samples).
pub fn suggest_horizon(
    source: &Well,
    target: &Well,
    marker: &Marker,
    mnemonic: &str,
    horizon: &HorizonConfig,
    similarity: &SimilarityConfig,
) -> HorizonSuggestion {
    let mut suggestion = HorizonSuggestion {
        name: marker
            .name
            .clone()
            .unwrap_or_else(|| format!("Horizon @ {:.2}", marker.depth)),
        target_well: target.id().to_string(),
        suggested_depth: None,
        confidence: HorizonSuggestion::NO_MATCH_CONFIDENCE,
        source: SuggestionSource::AutoCorrelation,
        windows_scanned: 0,
    };

    let (Some(source_curve), Some(target_curve)) = (source.curve(mnemonic), target.curve(mnemonic)) else {
        warn!(
            curve = mnemonic,
            source = source.id(),
            target = target.id(),
            "Curve missing, no horizon suggestion"
        );
        return suggestion;
    };

    let width = horizon.window_width();
    if !(horizon.step > 0.0) || !(width > 0.0) || !marker.depth.is_finite() {
        return suggestion;
    }

    let reference = source.segment(
        source_curve,
        marker.depth - horizon.half_window,
        marker.depth + horizon.half_window,
    );

    let (top, base) = target.depth_bounds();
    let last_start = base - width;
    if last_start < top {
        debug!(target = target.id(), width, "Target well shorter than the correlation window");
        return suggestion;
    }
    // Index the positions so the step does not accumulate rounding error.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let positions = ((last_start - top) / horizon.step + 1e-9).floor() as usize + 1;

    let mut best_score = HorizonSuggestion::NO_MATCH_CONFIDENCE;
    let mut best_start = None;
    for k in 0..positions {
        let start = top + k as f64 * horizon.step;
        let window = target.segment(target_curve, start, start + width);

        if let Outcome::Ok(result) = score_segments(&reference, &window, horizon.method, similarity) {
            suggestion.windows_scanned += 1;
            if result.score > best_score {
                best_score = result.score;
                best_start = Some(start);
            }
        }
    }

    if let Some(start) = best_start {
        suggestion.suggested_depth = Some(start + horizon.half_window);
        suggestion.confidence = best_score;
    }

    debug!(
        marker = %suggestion.name,
        target = target.id(),
        positions,
        scored = suggestion.windows_scanned,
        depth = ?suggestion.suggested_depth,
        confidence = suggestion.confidence,
        "Horizon scan complete"
    );
    suggestion
}

/// [`suggest_horizon`] for every well in `targets`, in parallel.
///
/// Results come back in the order of `targets`.
pub fn suggest_horizon_across(
    source: &Well,
    targets: &[Well],
    marker: &Marker,
    mnemonic: &str,
    horizon: &HorizonConfig,
    similarity: &SimilarityConfig,
) -> Vec<HorizonSuggestion> {
    targets
        .par_iter()
        .map(|target| suggest_horizon(source, target, marker, mnemonic, horizon, similarity))
        .collect()
}
