//! Correlation path: similarity scoring, automatic picks, horizon suggestion
//!
//! Everything here is a pure function over validated [`Well`](crate::types::Well)
//! snapshots. Missing curves and empty windows resolve to `Outcome::Invalid`
//! or `Outcome::Empty` (or a "no suggestion" result) instead of errors.

pub mod auto_pick;
pub mod horizon;
pub mod similarity;
pub mod smoothing;

pub use auto_pick::{detect_picks, detect_well_picks};
pub use horizon::{suggest_horizon, suggest_horizon_across};
pub use similarity::{compute_similarity, euclidean, p_value_for_r, pearson, score_segments};
pub use smoothing::{smooth, SmoothingKernel};
