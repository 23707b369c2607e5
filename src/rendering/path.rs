//! Closed-path descriptors handed to the renderer

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::types::FillKind;

/// One drawing instruction, serialized as `{"op":"M","x":..,"y":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum PathOp {
    #[serde(rename = "M")]
    MoveTo { x: f64, y: f64 },
    #[serde(rename = "L")]
    LineTo { x: f64, y: f64 },
    #[serde(rename = "Z")]
    Close,
}

impl PathOp {
    pub const fn point(&self) -> Option<(f64, f64)> {
        match *self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => Some((x, y)),
            Self::Close => None,
        }
    }
}

/// A single closed polygon for one fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPath {
    pub kind: FillKind,
    pub ops: Vec<PathOp>,
}

impl FillPath {
    pub(crate) fn new(kind: FillKind) -> Self {
        Self {
            kind,
            ops: Vec::new(),
        }
    }

    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::MoveTo { x, y });
    }

    pub(crate) fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::LineTo { x, y });
    }

    pub(crate) fn close(&mut self) {
        self.ops.push(PathOp::Close);
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.ops.last(), Some(PathOp::Close))
    }

    pub fn vertices(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.ops.iter().filter_map(PathOp::point)
    }

    /// Number of distinct vertices (exact coordinate comparison, `-0.0 == 0.0`).
    pub fn distinct_vertices(&self) -> usize {
        let mut seen: Vec<(u64, u64)> = Vec::new();
        for (x, y) in self.vertices() {
            let key = ((x + 0.0).to_bits(), (y + 0.0).to_bits());
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen.len()
    }

    /// SVG path data, e.g. `M 0.000 0.000 L 12.500 3.000 Z`.
    pub fn to_svg_path(&self) -> String {
        let mut out = String::with_capacity(self.ops.len() * 20);
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = match *op {
                PathOp::MoveTo { x, y } => write!(out, "M {x:.3} {y:.3}"),
                PathOp::LineTo { x, y } => write!(out, "L {x:.3} {y:.3}"),
                PathOp::Close => write!(out, "Z"),
            };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_and_json_shape() {
        let mut p = FillPath::new(FillKind::Left);
        p.move_to(0.0, 0.0);
        p.line_to(12.5, 3.0);
        p.line_to(0.0, 3.0);
        p.close();

        assert_eq!(p.to_svg_path(), "M 0.000 0.000 L 12.500 3.000 L 0.000 3.000 Z");
        assert!(p.is_closed());
        assert_eq!(p.distinct_vertices(), 3);

        p.line_to(-0.0, 0.0);
        assert_eq!(p.distinct_vertices(), 3, "signed zero is the same vertex");

        let json = serde_json::to_value(&p.ops).unwrap();
        assert_eq!(json[0]["op"], "M");
        assert_eq!(json[1]["x"], 12.5);
        assert_eq!(json[3], serde_json::json!({"op": "Z"}));
    }
}
