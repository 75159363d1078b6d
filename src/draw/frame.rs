//! Frame container for the stamps placed on the canvas.

use super::stamp::Stamp;

/// Container for all stamps in the current drawing session.
///
/// Stamps are kept in placement order and replayed on every redraw, so the
/// canvas survives resizes and scale changes.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// All stamps in draw order (first = bottom layer, last = top layer)
    pub stamps: Vec<Stamp>,
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self { stamps: Vec::new() }
    }

    /// Removes every stamp, leaving the plain background.
    pub fn clear(&mut self) {
        self.stamps.clear();
    }

    /// Number of stamps placed so far.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Returns true when nothing has been stamped.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Adds a group of stamps, enforcing a maximum stamp count when `max` > 0.
    ///
    /// The group is all-or-nothing so a mirrored click never lands half-drawn.
    /// Returns `true` if the stamps were added.
    pub fn try_add_stamps(&mut self, stamps: &[Stamp], max: usize) -> bool {
        if max > 0 && self.stamps.len() + stamps.len() > max {
            return false;
        }
        self.stamps.extend_from_slice(stamps);
        true
    }
}
