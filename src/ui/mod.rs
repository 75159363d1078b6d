//! UI rendering: toolbar strip and help overlay.

pub mod help;
pub mod toolbar;

pub use help::{help_entries, render_help_overlay};
pub use toolbar::{Control, TOOLBAR_HEIGHT, ToolbarLayout, render_toolbar};
