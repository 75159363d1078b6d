//! Library exports for the shyrdak stamping canvas.
//!
//! The binary only wires command-line flags to [`Config`] and hands it to the
//! Wayland backend; the canvas model, rendering and input routing live here so
//! they can be exercised headlessly against Cairo image surfaces.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
