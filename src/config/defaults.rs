//! Built-in default constants.
//!
//! Every tunable in `CorrelationConfig` falls back to one of these when the
//! TOML file leaves it out. Grouped by subsystem.

// ============================================================================
// Coordinate Mapping
// ============================================================================

/// Floor applied to values and bounds before `log10` on a log-scale track.
pub const LOG_EPSILON: f64 = 0.001;

// ============================================================================
// Similarity
// ============================================================================

/// `|score|` above this is a High-confidence match.
pub const HIGH_CONFIDENCE_SCORE: f64 = 0.7;

/// `|score|` above this (and not High) is a Medium-confidence match.
pub const MEDIUM_CONFIDENCE_SCORE: f64 = 0.4;

// ============================================================================
// Auto-Pick
// ============================================================================

/// Samples on each side of the centre in the smoothing window (11-sample window).
pub const SMOOTHING_HALF_WINDOW: usize = 5;

/// Indices this close to either end of the curve are never scanned.
pub const SCAN_MARGIN: usize = 10;

/// Samples on each side of a candidate used for its local mean.
pub const PROMINENCE_HALF_WINDOW: usize = 10;

/// Minimum relative deviation from the local mean (10%).
pub const PROMINENCE_THRESHOLD: f64 = 0.10;

/// Confidence cap for peak/trough picks.
pub const MAX_PICK_CONFIDENCE: f64 = 0.95;

/// Fixed confidence for inflection picks.
pub const INFLECTION_CONFIDENCE: f64 = 0.6;

/// Candidates within this many samples of each other are merged.
pub const DEBOUNCE_DISTANCE: usize = 5;

// ============================================================================
// Horizon Suggestion
// ============================================================================

/// Half-width of the reference pattern around the source marker (depth units).
pub const HORIZON_HALF_WINDOW: f64 = 10.0;

/// Slide step across the target well (depth units).
pub const HORIZON_STEP: f64 = 5.0;

// ============================================================================
// Validation
// ============================================================================

/// A curve with more than this fraction of missing samples is flagged.
pub const MAX_NULL_RATIO: f64 = 0.9;

/// Neutron porosity above this suggests percent/fraction unit confusion.
pub const NEUTRON_MAX: f64 = 100.0;

/// Depth units recognised without a warning (compared case-insensitively).
pub const DEPTH_UNITS: &[&str] = &["m", "ft", "f", "feet", "foot", "meter", "meters", "metre", "metres"];
