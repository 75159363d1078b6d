// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides the render path used across them.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell}, shm::Shm,
};
use wayland_client::{
    QueueHandle,
    protocol::{wl_keyboard, wl_pointer, wl_shm},
};

use crate::{config::Config, draw::clear_surface, input::InputState, util::Rect};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,
    pub(super) keyboard: Option<wl_keyboard::WlKeyboard>,
    pub(super) pointer: Option<wl_pointer::WlPointer>,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Input state
    pub(super) input_state: InputState,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            keyboard: None,
            pointer: None,
            surface: SurfaceState::new(),
            config,
            input_state,
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let scale = self.surface.scale();
        let (buffer_width, buffer_height) = self.surface.buffer_size();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            let result = pool
                .create_buffer(
                    buffer_width as i32,
                    buffer_height as i32,
                    (buffer_width * 4) as i32,
                    wl_shm::Format::Argb8888,
                )
                .context("Failed to create buffer")?;
            debug!("Buffer acquired from pool");
            result
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are explicitly dropped before the buffer is committed to Wayland,
        //    ensuring Cairo doesn't access memory after ownership transfers
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                buffer_width as i32,
                buffer_height as i32,
                (buffer_width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Recycled buffers hold an older frame; start from transparent.
        debug!("Clearing buffer");
        clear_surface(&ctx);

        // Everything below draws in logical pixels.
        ctx.scale(scale as f64, scale as f64);

        debug!(
            "Rendering toolbar, background and {} stamps",
            self.input_state.frame.len()
        );
        self.input_state.render(&ctx);

        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface();
        wl_surface.set_buffer_scale(scale);
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        let surface_width = buffer_width.min(i32::MAX as u32) as i32;
        let surface_height = buffer_height.min(i32::MAX as u32) as i32;

        let dirty_regions = resolve_damage_regions(
            surface_width,
            surface_height,
            self.input_state
                .take_dirty_regions()
                .into_iter()
                .map(|rect| rect.scaled(scale))
                .collect(),
        );

        for rect in &dirty_regions {
            debug!(
                "Damaging buffer region x={} y={} w={} h={}",
                rect.x, rect.y, rect.width, rect.height
            );
            wl_surface.damage_buffer(rect.x, rect.y, rect.width, rect.height);
        }

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        } else {
            debug!("Skipping frame callback (vsync disabled - allows back-to-back renders)");
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

/// Drops empty rectangles and falls back to full damage when nothing is left.
fn resolve_damage_regions(width: i32, height: i32, mut regions: Vec<Rect>) -> Vec<Rect> {
    regions.retain(Rect::is_valid);

    if regions.is_empty() && width > 0 && height > 0 {
        if let Some(full) = Rect::new(0, 0, width, height) {
            regions.push(full);
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_damage_returns_full_when_empty() {
        let regions = resolve_damage_regions(800, 656, Vec::new());
        assert_eq!(regions, vec![Rect::new(0, 0, 800, 656).unwrap()]);
    }

    #[test]
    fn resolve_damage_filters_invalid_rects() {
        let regions = resolve_damage_regions(
            800,
            656,
            vec![
                Rect {
                    x: 10,
                    y: 66,
                    width: 50,
                    height: 40,
                },
                Rect {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 10,
                },
            ],
        );

        assert_eq!(regions, vec![Rect::new(10, 66, 50, 40).unwrap()]);
    }
}
