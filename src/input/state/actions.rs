use crate::config::Action;
use crate::draw::StampShape;
use crate::input::events::Key;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state; every other key is
    /// looked up in the configured keybindings.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => {
                // Escape dismisses the help overlay before it quits
                if self.show_help {
                    self.show_help = false;
                    self.mark_everything();
                } else {
                    self.should_exit = true;
                }
            }
            Action::ClearCanvas => self.clear_canvas(),
            Action::ToggleSymmetry => self.toggle_symmetry(),
            Action::ToggleBorder => self.toggle_border(),
            Action::SelectDiamond => self.set_shape(StampShape::Diamond),
            Action::SelectTriangle => self.set_shape(StampShape::Triangle),
            Action::SelectHorn => self.set_shape(StampShape::Horn),
            Action::NextShape => self.set_shape(self.shape.next()),
            Action::NextBackgroundColor => self.next_background_color(),
            Action::NextPatternColor => self.next_pattern_color(),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.mark_everything();
            }
        }
    }

    /// Processes a key release event.
    ///
    /// Currently only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
