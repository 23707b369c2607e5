//! Track rendering geometry
//!
//! Pure functions from curve values and track settings to pixel positions
//! and closed fill polygons. Nothing here draws; the output is handed to
//! whatever canvas or SVG layer sits on top.

pub mod coordinates;
pub mod fill;
pub mod path;

pub use coordinates::{auto_range, map_depth_to_y, map_value_to_x, map_value_to_x_with_epsilon, map_y_to_index};
pub use fill::{build_fill_path, build_fill_path_with, crossover_segments, CrossoverSegment, CurveOrder};
pub use path::{FillPath, PathOp};
