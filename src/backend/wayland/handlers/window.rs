// Responds to xdg_toplevel configure/close events, keeping dimensions in sync with the compositor.
use log::info;
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;
use crate::ui::TOOLBAR_HEIGHT;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // A missing dimension means the client picks; keep the current size or
        // fall back to the configured canvas plus the toolbar.
        let fallback_width = if self.surface.width() > 0 {
            self.surface.width()
        } else {
            self.config.canvas.width
        };
        let fallback_height = if self.surface.height() > 0 {
            self.surface.height()
        } else {
            self.config.canvas.height + TOOLBAR_HEIGHT
        };

        let width = configure.new_size.0.map_or(fallback_width, |w| w.get());
        let height = configure.new_size.1.map_or(fallback_height, |h| h.get());
        info!("Window configured: {}x{}", width, height);

        if self.surface.update_dimensions(width, height) {
            info!("Surface size changed - recreating SlotPool");
        }
        self.input_state.update_screen_dimensions(width, height);

        self.surface.set_configured(true);
        self.input_state.needs_redraw = true;
    }
}
