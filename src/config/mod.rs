//! Correlation Configuration Module
//!
//! Exposes every heuristic constant of the engine (smoothing window,
//! prominence thresholds, debounce distance, horizon window and step,
//! validator limits) as operator-tunable TOML values.
//!
//! ## Loading Order
//!
//! 1. `WELLCORR_CONFIG` environment variable (path to TOML file)
//! 2. `wellcorr.toml` in the current working directory
//! 3. Built-in defaults
//!
//! There is no global config: callers load a `CorrelationConfig` once and
//! pass the relevant section to each operation.
//!
//! ```ignore
//! let config = CorrelationConfig::load();
//! let picks = auto_pick::detect_picks(&depths, &curve.data, PatternType::Peak, &config.auto_pick);
//! ```

mod correlation_config;
pub mod defaults;
pub mod validation;

pub use correlation_config::*;
