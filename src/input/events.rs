//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// F1 function key
    F1,
    /// F10 function key (toggle help)
    F10,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used by keybinding strings in the config file, if the key can be bound.
    pub fn binding_name(self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_string()),
            Key::Escape => "Escape",
            Key::Return => "Return",
            Key::Backspace => "Backspace",
            Key::Delete => "Delete",
            Key::Tab => "Tab",
            Key::Space => "Space",
            Key::F1 => "F1",
            Key::F10 => "F10",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (stamps and toolbar clicks)
    Left,
    /// Right mouse button (ignored by the canvas)
    Right,
}
