//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned rectangles that need repainting between frames.

use super::Stamp;
use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the bounding box for the given stamp, or full damage if none is available.
    ///
    /// `origin_y` is where the canvas starts on the surface; stamps live in
    /// canvas coordinates while damage is reported in surface coordinates.
    pub fn mark_stamp(&mut self, stamp: &Stamp, origin_y: i32) {
        match stamp.bounding_box() {
            Some(rect) => self.mark_rect(rect.offset(0, origin_y)),
            None => self.mark_full(),
        }
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            if width > 0 && height > 0 {
                if let Some(full) = Rect::new(0, 0, width, height) {
                    return vec![full];
                }
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{StampShape, color::FELT_RED};

    #[test]
    fn mark_stamp_records_rectangles() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_stamp(
            &Stamp::new(50.0, 50.0, StampShape::Triangle, FELT_RED, 20.0),
            0,
        );

        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(39, 39, 22, 22).unwrap());
        assert!(tracker.take_regions(100, 100).is_empty());
    }

    #[test]
    fn mark_stamp_shifts_below_the_toolbar() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_stamp(
            &Stamp::new(50.0, 50.0, StampShape::Triangle, FELT_RED, 20.0),
            56,
        );
        let rects = tracker.take_regions(100, 200);
        assert_eq!(rects, vec![Rect::new(39, 95, 22, 22).unwrap()]);
        assert!(tracker.take_regions(100, 200).is_empty());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_stamp(&Stamp::new(5.0, 5.0, StampShape::Diamond, FELT_RED, 10.0), 0);
        tracker.mark_full();
        tracker.mark_stamp(&Stamp::new(20.0, 20.0, StampShape::Horn, FELT_RED, 15.0), 0);

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(0, 0, 200, 100).unwrap());
        assert!(tracker.take_regions(200, 100).is_empty());
    }
}
