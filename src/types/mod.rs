//! Shared data structures for multi-well log correlation
//!
//! - Well data: `WellRecord` (raw, as parsed) and `Well` (validated)
//! - Rendering inputs: `TrackConfig`, `FillSpec`, `DepthRange`
//! - Correlation outputs: `SimilarityResult`, `Marker`, `HorizonSuggestion`
//! - `Outcome<T>`: tagged "value / nothing / invalid request" result

mod marker;
mod outcome;
mod similarity;
mod track;
mod well;

pub use marker::*;
pub use outcome::*;
pub use similarity::*;
pub use track::*;
pub use well::*;
