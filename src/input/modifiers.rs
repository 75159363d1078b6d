//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Tracks which modifier keys are currently pressed so keybindings such as
/// `Ctrl+Q` can be matched exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }
}
