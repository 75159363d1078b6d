//! Felt ground fill and the zig-zag border motif.

use super::color::Color;
use super::path::{FillRule, PathOp, polygon};
use super::render::fill_path;

/// Zig-zag border appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    /// Fill color of the teeth
    pub color: Color,
    /// How far the teeth reach into the canvas, in pixels
    pub depth: f64,
    /// Preferred tooth width; stretched so a whole number of teeth fits each edge
    pub tooth_width: f64,
}

/// Everything painted underneath the stamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    /// Solid ground color
    pub color: Color,
    /// Optional border drawn along all four edges
    pub border: Option<BorderStyle>,
}

/// One cell of the zig-zag border, expressed along the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooth {
    /// Triangle outline followed by an inner diamond sub-path
    pub path: Vec<PathOp>,
    /// Even teeth punch the diamond out, odd teeth stay solid
    pub fill_rule: FillRule,
}

/// Canvas edge a run of teeth is laid along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    fn run(self, width: f64, height: f64) -> f64 {
        match self {
            Edge::Top | Edge::Bottom => width,
            Edge::Left | Edge::Right => height,
        }
    }

    /// Maps top-edge coordinates (x along the edge, y inward) onto this edge.
    fn apply_transform(self, ctx: &cairo::Context, width: f64, height: f64) {
        let swap_axes = cairo::Matrix::new(0.0, 1.0, 1.0, 0.0, 0.0, 0.0);
        match self {
            Edge::Top => {}
            Edge::Bottom => {
                ctx.translate(0.0, height);
                ctx.scale(1.0, -1.0);
            }
            Edge::Left => ctx.transform(swap_axes),
            Edge::Right => {
                ctx.translate(width, 0.0);
                ctx.scale(-1.0, 1.0);
                ctx.transform(swap_axes);
            }
        }
    }
}

/// Lays out the teeth for one edge of length `run`.
///
/// Returns an empty list when the style or run cannot produce a visible tooth.
pub fn border_teeth(run: f64, style: &BorderStyle) -> Vec<Tooth> {
    if run <= 0.0 || style.depth <= 0.0 || style.tooth_width <= 0.0 {
        return Vec::new();
    }

    let count = ((run / style.tooth_width).floor() as usize).max(1);
    let tooth = run / count as f64;
    let depth = style.depth;

    (0..count)
        .map(|i| {
            let x0 = i as f64 * tooth;
            let x1 = x0 + tooth;
            let mid = x0 + tooth / 2.0;

            // Both sub-paths wind clockwise so the non-zero rule fills the diamond.
            let mut path = polygon(&[(x0, 0.0), (x1, 0.0), (mid, depth)]);
            let cy = depth * 0.35;
            let half_h = depth * 0.15;
            let half_w = tooth * 0.12;
            path.extend(polygon(&[
                (mid, cy - half_h),
                (mid + half_w, cy),
                (mid, cy + half_h),
                (mid - half_w, cy),
            ]));

            let fill_rule = if i % 2 == 0 {
                FillRule::EvenOdd
            } else {
                FillRule::NonZero
            };
            Tooth { path, fill_rule }
        })
        .collect()
}

/// Paints the ground color over `width` x `height` and the border, if any.
pub fn render_background(ctx: &cairo::Context, width: f64, height: f64, background: &Background) {
    let _ = ctx.save();
    let color = background.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(0.0, 0.0, width, height);
    let _ = ctx.fill();
    let _ = ctx.restore();

    if let Some(style) = &background.border {
        for edge in Edge::ALL {
            let _ = ctx.save();
            edge.apply_transform(ctx, width, height);
            for tooth in border_teeth(edge.run(width, height), style) {
                fill_path(ctx, &tooth.path, style.color, tooth.fill_rule);
            }
            let _ = ctx.restore();
        }
    }
}
