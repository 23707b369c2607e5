//! Centered moving-average smoothing for auto-pick

use serde::{Deserialize, Serialize};

/// Weighting applied inside the moving-average window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmoothingKernel {
    /// Weight `half_window + 1 - |k|` at offset `k`. An isolated spike stays
    /// a strict local extremum after smoothing.
    #[default]
    Triangular,
    /// Equal weights. An isolated spike becomes a flat plateau.
    Boxcar,
}

impl SmoothingKernel {
    fn weight(self, offset: usize, half_window: usize) -> f64 {
        match self {
            Self::Triangular => (half_window + 1 - offset) as f64,
            Self::Boxcar => 1.0,
        }
    }
}

/// Smooth `data` with a centered window of `2 * half_window + 1` samples.
///
/// Samples closer than `half_window` to either end pass through unchanged.
/// Missing neighbours are left out of the average; a missing centre stays
/// missing.
pub fn smooth(data: &[Option<f64>], half_window: usize, kernel: SmoothingKernel) -> Vec<Option<f64>> {
    let n = data.len();
    let clean = |i: usize| data[i].filter(|v| v.is_finite());

    (0..n)
        .map(|i| {
            let centre = clean(i)?;
            if half_window == 0 || i < half_window || i + half_window >= n {
                return Some(centre);
            }

            let mut sum = 0.0;
            let mut weights = 0.0;
            for j in i - half_window..=i + half_window {
                if let Some(v) = clean(j) {
                    let w = kernel.weight(i.abs_diff(j), half_window);
                    sum += w * v;
                    weights += w;
                }
            }
            Some(sum / weights)
        })
        .collect()
}
