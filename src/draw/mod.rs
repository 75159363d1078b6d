//! Rendering primitives and stamp definitions (Cairo-based).
//!
//! This module defines the core drawing types of the felt canvas:
//! - [`Color`]: RGBA color with the felt palette and hex parsing
//! - [`StampShape`] / [`Stamp`]: the motifs and their placed instances
//! - [`Background`]: ground fill and optional zig-zag border
//! - [`Frame`]: container for every stamp on the canvas
//! - Rendering functions for Cairo-based output

pub mod background;
pub mod color;
pub mod dirty;
pub mod frame;
pub mod path;
pub mod render;
pub mod stamp;

// Re-export commonly used types at module level
pub use background::{Background, BorderStyle, render_background};
pub use color::Color;
pub use dirty::DirtyTracker;
pub use frame::Frame;
pub use path::{FillRule, PathOp};
pub use render::{clear_surface, fill_path, render_stamp, render_stamps, trace_path};
pub use stamp::{ShapeParseError, Stamp, StampShape};
