//! Manages the window, its shared memory buffers, and sizing state for the Wayland backend.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};

/// Tracks the toplevel window, buffer pool, and associated sizing state.
///
/// `width`/`height` are logical (surface-local) pixels; buffers are
/// `scale` times larger in each direction.
pub struct SurfaceState {
    window: Option<Window>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    scale: i32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates a new, unconfigured surface state.
    pub fn new() -> Self {
        Self {
            window: None,
            pool: None,
            width: 0,
            height: 0,
            scale: 1,
            configured: false,
            frame_callback_pending: false,
        }
    }

    /// Assigns the window produced during startup.
    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    /// Returns the window, if initialized.
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Updates the logical dimensions, returning `true` if the size changed.
    ///
    /// When the size changes, any existing buffer pool becomes invalid and is dropped.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    /// Updates the buffer scale, returning `true` if it changed.
    pub fn update_scale(&mut self, scale: i32) -> bool {
        let scale = scale.max(1);
        let changed = self.scale != scale;
        self.scale = scale;
        if changed {
            self.pool = None;
        }
        changed
    }

    /// Current logical width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current logical height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Integer buffer scale (1 on regular displays, 2 on most HiDPI ones).
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Buffer dimensions in device pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        let scale = self.scale as u32;
        (self.width * scale, self.height * scale)
    }

    /// Marks the surface as configured by the compositor.
    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Returns whether the surface has completed its initial configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Sets the frame callback pending flag.
    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    /// Returns whether a frame callback is currently outstanding.
    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a shared memory pool of the appropriate size exists.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let (width, height) = self.buffer_size();
            let buffer_size = (width * height * 4) as usize;
            let pool_size = buffer_size * buffer_count;
            info!(
                "Creating new SlotPool ({}x{} @{}x, {} bytes, {} buffers)",
                width, height, self.scale, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_follows_scale() {
        let mut surface = SurfaceState::new();
        assert!(surface.update_dimensions(800, 656));
        assert!(!surface.update_dimensions(800, 656));
        assert_eq!(surface.buffer_size(), (800, 656));

        assert!(surface.update_scale(2));
        assert_eq!(surface.buffer_size(), (1600, 1312));
        assert_eq!(surface.width(), 800);
    }

    #[test]
    fn scale_never_drops_below_one() {
        let mut surface = SurfaceState::new();
        assert!(!surface.update_scale(0));
        assert_eq!(surface.scale(), 1);
    }
}
