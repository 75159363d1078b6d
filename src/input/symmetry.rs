//! Four-way mirror symmetry through the canvas centre.

/// Returns every position a click at `(x, y)` stamps.
///
/// With symmetry off this is just the click. With symmetry on the click is
/// reflected across the vertical axis, the horizontal axis, and both, in that
/// order. Reflections that land exactly on an earlier point (a click on an
/// axis or on the centre) are dropped; a click even a fraction of a pixel off
/// the axis keeps all four.
pub fn stamp_positions(x: f64, y: f64, center: (f64, f64), symmetric: bool) -> Vec<(f64, f64)> {
    if !symmetric {
        return vec![(x, y)];
    }

    let (cx, cy) = center;
    let mirrored_x = 2.0 * cx - x;
    let mirrored_y = 2.0 * cy - y;
    let candidates = [
        (x, y),
        (mirrored_x, y),
        (x, mirrored_y),
        (mirrored_x, mirrored_y),
    ];

    let mut positions: Vec<(f64, f64)> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !positions.iter().any(|p| same_point(*p, candidate)) {
            positions.push(candidate);
        }
    }
    positions
}

/// Reflection arithmetic is exact for points on an axis; this only absorbs rounding.
const COINCIDENT_EPSILON: f64 = 1e-9;

fn same_point(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < COINCIDENT_EPSILON && (a.1 - b.1).abs() < COINCIDENT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetry_off_returns_the_click() {
        assert_eq!(
            stamp_positions(12.0, 34.0, (400.0, 300.0), false),
            vec![(12.0, 34.0)]
        );
    }

    #[test]
    fn symmetry_on_reflects_through_both_axes() {
        let positions = stamp_positions(100.0, 50.0, (400.0, 300.0), true);
        assert_eq!(
            positions,
            vec![(100.0, 50.0), (700.0, 50.0), (100.0, 550.0), (700.0, 550.0)]
        );
    }

    #[test]
    fn click_on_vertical_axis_yields_two_stamps() {
        let positions = stamp_positions(400.0, 50.0, (400.0, 300.0), true);
        assert_eq!(positions, vec![(400.0, 50.0), (400.0, 550.0)]);
    }

    #[test]
    fn sub_pixel_offset_from_axis_keeps_every_reflection() {
        let positions = stamp_positions(400.2, 50.0, (400.0, 300.0), true);
        assert_eq!(positions.len(), 4);
        assert!((positions[1].0 - 399.8).abs() < 1e-9);
    }

    #[test]
    fn fractional_centre_still_collapses_axis_clicks() {
        let positions = stamp_positions(200.5, 150.25, (200.5, 150.25), true);
        assert_eq!(positions, vec![(200.5, 150.25)]);
    }

    #[test]
    fn click_on_centre_yields_one_stamp() {
        let positions = stamp_positions(400.0, 300.0, (400.0, 300.0), true);
        assert_eq!(positions, vec![(400.0, 300.0)]);
    }

    #[test]
    fn reflections_can_leave_the_canvas() {
        // Off-centre canvases are not clipped here; the renderer clips instead.
        let positions = stamp_positions(-10.0, 20.0, (50.0, 50.0), true);
        assert_eq!(positions[1], (110.0, 20.0));
        assert_eq!(positions[3], (110.0, 80.0));
    }
}
