//! Backend-neutral path description shared by stamps and the border.

/// One path-construction command, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    /// Starts a new sub-path at the point
    MoveTo(f64, f64),
    /// Straight segment to the point
    LineTo(f64, f64),
    /// Cubic Bézier: two control points then the end point
    CurveTo(f64, f64, f64, f64, f64, f64),
    /// Closes the current sub-path
    Close,
}

impl PathOp {
    /// Every coordinate this command references, control points included.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> {
        let points: [Option<(f64, f64)>; 3] = match *self {
            PathOp::MoveTo(x, y) | PathOp::LineTo(x, y) => [Some((x, y)), None, None],
            PathOp::CurveTo(x1, y1, x2, y2, x3, y3) => {
                [Some((x1, y1)), Some((x2, y2)), Some((x3, y3))]
            }
            PathOp::Close => [None, None, None],
        };
        points.into_iter().flatten()
    }
}

/// How overlapping sub-paths decide what is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    /// Inside when the winding number is non-zero
    NonZero,
    /// Inside when an odd number of edges is crossed
    EvenOdd,
}

impl From<FillRule> for cairo::FillRule {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::NonZero => cairo::FillRule::Winding,
            FillRule::EvenOdd => cairo::FillRule::EvenOdd,
        }
    }
}

/// Builds a closed polygon path from a list of vertices.
pub fn polygon(points: &[(f64, f64)]) -> Vec<PathOp> {
    let mut ops = Vec::with_capacity(points.len() + 1);
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        ops.push(PathOp::MoveTo(x, y));
        ops.extend(iter.map(|&(x, y)| PathOp::LineTo(x, y)));
        ops.push(PathOp::Close);
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_reports_control_points() {
        let op = PathOp::CurveTo(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let points: Vec<_> = op.points().collect();
        assert_eq!(points, vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        assert_eq!(PathOp::Close.points().count(), 0);
    }

    #[test]
    fn polygon_closes_its_outline() {
        let ops = polygon(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        assert_eq!(
            ops,
            vec![
                PathOp::MoveTo(0.0, 0.0),
                PathOp::LineTo(4.0, 0.0),
                PathOp::LineTo(2.0, 3.0),
                PathOp::Close,
            ]
        );
        assert!(polygon(&[]).is_empty());
    }
}
