use crate::draw::{render_background, render_stamps};
use crate::ui::{TOOLBAR_HEIGHT, render_help_overlay, render_toolbar};

use super::InputState;

impl InputState {
    /// Paints the canvas (background, border, stamps) in canvas coordinates.
    ///
    /// The caller positions the canvas on the surface; nothing is drawn for the
    /// toolbar.
    pub fn render_canvas(&self, ctx: &cairo::Context) {
        let (width, height) = self.canvas_size();
        render_background(ctx, width as f64, height as f64, &self.background());
        render_stamps(ctx, &self.frame.stamps);
    }

    /// Paints the whole surface in logical coordinates: toolbar strip, canvas
    /// below it, and the help overlay on top when visible.
    pub fn render(&self, ctx: &cairo::Context) {
        render_toolbar(ctx, self, &self.toolbar_style, self.screen_width);

        let (width, height) = self.canvas_size();
        let _ = ctx.save();
        ctx.translate(0.0, TOOLBAR_HEIGHT as f64);
        ctx.rectangle(0.0, 0.0, width as f64, height as f64);
        ctx.clip();
        self.render_canvas(ctx);
        let _ = ctx.restore();

        if self.show_help {
            render_help_overlay(
                ctx,
                &self.help_style,
                &self.help_entries,
                self.screen_width,
                self.screen_height,
            );
        }
    }
}
