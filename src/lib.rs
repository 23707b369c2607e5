//! wellcorr: Multi-Well Log Correlation Engine
//!
//! Validates LAS-like well datasets, maps curve values onto log tracks,
//! generates fill geometry, and correlates wells.
//!
//! ## Architecture
//!
//! - **Validator**: structural errors and data-quality warnings for raw well records
//! - **Rendering**: value/depth to track coordinates, closed fill polygons
//! - **Correlation**: segment similarity, automatic picks, horizon suggestion
//! - **Config**: every heuristic constant as a TOML-overridable value
//!
//! The rendering and correlation paths share only the data model in [`types`].

pub mod config;
pub mod correlation;
pub mod rendering;
pub mod synthetic;
pub mod types;
pub mod validator;

// Re-export configuration
pub use config::{ConfigError, CorrelationConfig};

// Re-export commonly used types
pub use types::{
    ConfidenceLevel, Curve, DepthRange, FillKind, FillSpec, HorizonSuggestion, Marker, Outcome,
    PatternType, PickKind, ScaleType, SecondaryValue, SimilarityMethod, SimilarityResult,
    TrackConfig, Well, WellError, WellRecord,
};

// Re-export the public operations
pub use correlation::{compute_similarity, detect_picks, detect_well_picks, suggest_horizon, suggest_horizon_across};
pub use rendering::{build_fill_path, map_depth_to_y, map_value_to_x, FillPath, PathOp};
pub use validator::{validate, ValidationReport};
