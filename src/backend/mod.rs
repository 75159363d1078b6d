use anyhow::Result;

use crate::config::Config;

pub mod wayland;

/// Run the Wayland backend with the full event loop until the window closes.
///
/// # Arguments
/// * `config` - Loaded configuration with command-line overrides applied
pub fn run_wayland(config: Config) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config);
    backend.run()
}
