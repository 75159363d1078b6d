//! Input handling and canvas state.
//!
//! This module translates backend keyboard and mouse events into canvas actions.
//! It maintains the active colors, shape and toggles, routes clicks either to the
//! toolbar or to the stamp placer, and computes mirrored stamp positions.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod symmetry;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::InputState;
pub use symmetry::stamp_positions;
