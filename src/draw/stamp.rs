//! Stamp motifs and the paths that outline them.

use super::color::Color;
use super::path::PathOp;
use crate::util::Rect;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The motif stamped at each click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StampShape {
    /// Rhombus standing on its tip
    Diamond,
    /// Upward-pointing triangle
    Triangle,
    /// Curled ram's-horn swirl built from cubic curves
    #[serde(alias = "intricate")]
    Horn,
}

/// Raised when a shape name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown stamp shape '{0}' (expected diamond, triangle or horn)")]
pub struct ShapeParseError(pub String);

impl StampShape {
    /// All shapes, in toolbar order.
    pub const ALL: [StampShape; 3] = [StampShape::Diamond, StampShape::Triangle, StampShape::Horn];

    /// Returns the shape after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            StampShape::Diamond => StampShape::Triangle,
            StampShape::Triangle => StampShape::Horn,
            StampShape::Horn => StampShape::Diamond,
        }
    }

    /// Human-readable label for the toolbar and logs.
    pub fn label(self) -> &'static str {
        match self {
            StampShape::Diamond => "Diamond",
            StampShape::Triangle => "Triangle",
            StampShape::Horn => "Horn",
        }
    }

    /// Builds the closed outline of this motif centred on `(x, y)`.
    ///
    /// `size` is the nominal stamp size; diamond and triangle fit a `size`
    /// square, while the horn curls out to roughly one `size` on each side.
    pub fn outline(self, x: f64, y: f64, size: f64) -> Vec<PathOp> {
        let half = size / 2.0;
        match self {
            StampShape::Diamond => vec![
                PathOp::MoveTo(x, y - half),
                PathOp::LineTo(x + half, y),
                PathOp::LineTo(x, y + half),
                PathOp::LineTo(x - half, y),
                PathOp::Close,
            ],
            StampShape::Triangle => vec![
                PathOp::MoveTo(x, y - half),
                PathOp::LineTo(x + half, y + half),
                PathOp::LineTo(x - half, y + half),
                PathOp::Close,
            ],
            StampShape::Horn => {
                let start_x = x - half;
                let start_y = y + size / 4.0;
                vec![
                    PathOp::MoveTo(start_x, start_y),
                    // sweep up and over to the right
                    PathOp::CurveTo(start_x, y - size, x + size, y - size, x + size, y),
                    // curl down and back into the centre
                    PathOp::CurveTo(x + size, y + size / 1.5, x, y + half, x, y),
                    // thicken through the middle back to the start
                    PathOp::CurveTo(
                        x - size / 4.0,
                        y + half,
                        start_x + size / 4.0,
                        start_y + size / 4.0,
                        start_x,
                        start_y,
                    ),
                    PathOp::Close,
                ]
            }
        }
    }
}

impl fmt::Display for StampShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StampShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diamond" => Ok(StampShape::Diamond),
            "triangle" => Ok(StampShape::Triangle),
            "horn" | "intricate" => Ok(StampShape::Horn),
            _ => Err(ShapeParseError(s.to_string())),
        }
    }
}

/// A motif placed on the canvas.
///
/// Stamps carry their own color and size so later palette changes never
/// repaint existing work.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    /// Canvas-local X coordinate of the stamp centre
    pub x: f64,
    /// Canvas-local Y coordinate of the stamp centre
    pub y: f64,
    /// Which motif to draw
    pub shape: StampShape,
    /// Fill color
    pub color: Color,
    /// Nominal size in pixels
    pub size: f64,
}

impl Stamp {
    pub fn new(x: f64, y: f64, shape: StampShape, color: Color, size: f64) -> Self {
        Self {
            x,
            y,
            shape,
            color,
            size,
        }
    }

    /// Returns the closed outline for this stamp.
    pub fn outline(&self) -> Vec<PathOp> {
        self.shape.outline(self.x, self.y, self.size)
    }

    /// Returns the axis-aligned bounds of the filled area, padded for antialiasing.
    ///
    /// Curve control points are included, so the box always contains the curve
    /// (a Bézier segment lies inside the hull of its control points).
    pub fn bounding_box(&self) -> Option<Rect> {
        bounding_box_for_path(&self.outline())
    }
}

/// Computes padded integer bounds for a path.
pub(crate) fn bounding_box_for_path(ops: &[PathOp]) -> Option<Rect> {
    let mut points = ops.iter().flat_map(|op| op.points());
    let (first_x, first_y) = points.next()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first_x, first_y, first_x, first_y);

    for (x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    const AA_PADDING: f64 = 1.0;
    let min_x = (min_x - AA_PADDING).floor() as i32;
    let min_y = (min_y - AA_PADDING).floor() as i32;
    let max_x = (max_x + AA_PADDING).ceil() as i32;
    let max_y = (max_y + AA_PADDING).ceil() as i32;
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::FELT_RED;

    #[test]
    fn diamond_outline_touches_half_size_on_each_axis() {
        let ops = StampShape::Diamond.outline(100.0, 50.0, 60.0);
        assert_eq!(
            ops,
            vec![
                PathOp::MoveTo(100.0, 20.0),
                PathOp::LineTo(130.0, 50.0),
                PathOp::LineTo(100.0, 80.0),
                PathOp::LineTo(70.0, 50.0),
                PathOp::Close,
            ]
        );
    }

    #[test]
    fn triangle_outline_has_flat_base() {
        let ops = StampShape::Triangle.outline(0.0, 0.0, 60.0);
        assert_eq!(ops[0], PathOp::MoveTo(0.0, -30.0));
        assert_eq!(ops[1], PathOp::LineTo(30.0, 30.0));
        assert_eq!(ops[2], PathOp::LineTo(-30.0, 30.0));
        assert_eq!(ops.last(), Some(&PathOp::Close));
    }

    #[test]
    fn horn_outline_returns_to_its_start() {
        let ops = StampShape::Horn.outline(200.0, 200.0, 60.0);
        assert_eq!(ops[0], PathOp::MoveTo(170.0, 215.0));
        assert_eq!(ops.len(), 5);
        match ops[3] {
            PathOp::CurveTo(_, _, _, _, x, y) => assert_eq!((x, y), (170.0, 215.0)),
            ref other => panic!("expected closing curve, got {other:?}"),
        }
        match ops[1] {
            PathOp::CurveTo(_, _, _, _, x, y) => assert_eq!((x, y), (260.0, 200.0)),
            ref other => panic!("expected sweep curve, got {other:?}"),
        }
    }

    #[test]
    fn shape_names_parse_case_insensitively() {
        assert_eq!("Diamond".parse::<StampShape>(), Ok(StampShape::Diamond));
        assert_eq!(" triangle ".parse::<StampShape>(), Ok(StampShape::Triangle));
        assert_eq!("intricate".parse::<StampShape>(), Ok(StampShape::Horn));
        assert_eq!(
            "hexagon".parse::<StampShape>(),
            Err(ShapeParseError("hexagon".into()))
        );
    }

    #[test]
    fn next_cycles_through_every_shape() {
        let mut shape = StampShape::Diamond;
        for expected in [StampShape::Triangle, StampShape::Horn, StampShape::Diamond] {
            shape = shape.next();
            assert_eq!(shape, expected);
        }
    }

    #[test]
    fn diamond_bounding_box_pads_for_antialiasing() {
        let stamp = Stamp::new(100.0, 100.0, StampShape::Diamond, FELT_RED, 60.0);
        let rect = stamp.bounding_box().expect("diamond should have bounds");
        assert_eq!(rect, Rect::new(69, 69, 62, 62).unwrap());
    }

    #[test]
    fn horn_bounding_box_covers_the_curl() {
        let stamp = Stamp::new(100.0, 100.0, StampShape::Horn, FELT_RED, 40.0);
        let rect = stamp.bounding_box().expect("horn should have bounds");
        // The sweep reaches one size above and to the right of the centre.
        assert!(rect.x <= 80);
        assert!(rect.y <= 60);
        assert!(rect.x + rect.width >= 140);
        assert!(rect.y + rect.height >= 120);
    }
}
