//! Cairo-based rendering functions for stamps and paths.

use super::color::Color;
use super::path::{FillRule, PathOp};
use super::stamp::Stamp;

/// Replays path commands onto the context's current path.
///
/// Starts a fresh path; the caller decides whether to fill or stroke.
pub fn trace_path(ctx: &cairo::Context, ops: &[PathOp]) {
    ctx.new_path();
    for op in ops {
        match *op {
            PathOp::MoveTo(x, y) => ctx.move_to(x, y),
            PathOp::LineTo(x, y) => ctx.line_to(x, y),
            PathOp::CurveTo(x1, y1, x2, y2, x3, y3) => ctx.curve_to(x1, y1, x2, y2, x3, y3),
            PathOp::Close => ctx.close_path(),
        }
    }
}

/// Fills a path with a solid color using the given fill rule.
pub fn fill_path(ctx: &cairo::Context, ops: &[PathOp], color: Color, rule: FillRule) {
    let _ = ctx.save();
    trace_path(ctx, ops);
    ctx.set_fill_rule(rule.into());
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.fill(); // A failed fill leaves the canvas untouched
    let _ = ctx.restore();
}

/// Renders all stamps in order (first stamp = bottom layer).
pub fn render_stamps(ctx: &cairo::Context, stamps: &[Stamp]) {
    for stamp in stamps {
        render_stamp(ctx, stamp);
    }
}

/// Renders a single stamp as a filled motif.
pub fn render_stamp(ctx: &cairo::Context, stamp: &Stamp) {
    fill_path(ctx, &stamp.outline(), stamp.color, FillRule::NonZero);
}

/// Clears the whole target to fully transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}
