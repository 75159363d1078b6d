use crate::input::events::MouseButton;
use crate::ui::{Control, TOOLBAR_HEIGHT};
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Pointer X in surface coordinates
    /// * `y` - Pointer Y in surface coordinates
    ///
    /// # Behavior
    /// - Left click in the toolbar strip: activates the control under the pointer
    /// - Left click on the canvas: stamps at the canvas-local point
    /// - Other buttons are ignored
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        let toolbar_height = TOOLBAR_HEIGHT as f64;
        if y < toolbar_height {
            match self.toolbar.hit_test(x, y) {
                Some(control) => self.apply_control(control),
                None => debug!("Toolbar click at ({:.0}, {:.0}) hit nothing", x, y),
            }
            return;
        }

        self.place_stamp(x, y - toolbar_height);
    }

    /// Applies a toolbar control as if it had been clicked.
    pub fn apply_control(&mut self, control: Control) {
        match control {
            Control::BackgroundSwatch(i) => {
                if let Some(color) = self.background_palette.get(i).copied() {
                    self.set_background_color(color);
                }
            }
            Control::PatternSwatch(i) => {
                if let Some(color) = self.pattern_palette.get(i).copied() {
                    self.set_pattern_color(color);
                }
            }
            Control::Shape(shape) => self.set_shape(shape),
            Control::Symmetry => self.toggle_symmetry(),
            Control::Border => self.toggle_border(),
            Control::Clear => self.clear_canvas(),
        }
    }
}
