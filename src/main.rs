use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use shyrdak::config::{Config, Overrides};
use shyrdak::draw::{Color, StampShape};

#[derive(Parser, Debug)]
#[command(name = "shyrdak")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SHYRDAK_GIT_HASH"), ")"),
    about = "Felt-motif stamping canvas for Wayland compositors"
)]
struct Cli {
    /// Read configuration from this file instead of ~/.config/shyrdak/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial background color (palette name or #rrggbb)
    #[arg(long, short = 'b', value_name = "COLOR")]
    background: Option<Color>,

    /// Initial pattern color (palette name or #rrggbb)
    #[arg(long, short = 'p', value_name = "COLOR")]
    pattern: Option<Color>,

    /// Initial stamp shape (diamond, triangle, or horn)
    #[arg(long, short = 's', value_name = "SHAPE")]
    shape: Option<StampShape>,

    /// Stamp size in pixels
    #[arg(long, value_name = "PX")]
    size: Option<f64>,

    /// Start with 4-way mirror symmetry enabled
    #[arg(long, action = ArgAction::SetTrue)]
    symmetry: bool,

    /// Start with the zig-zag border enabled
    #[arg(long, action = ArgAction::SetTrue)]
    border: bool,

    /// Write a documented default config file (to --config PATH if given) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => {
                Config::create_default_file_at(&path)?;
                path
            }
            None => Config::create_default_file()?,
        };
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!(
            "WAYLAND_DISPLAY not set: Wayland environment required"
        ));
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    config.apply_overrides(&Overrides {
        background: cli.background,
        pattern: cli.pattern,
        shape: cli.shape,
        size: cli.size,
        symmetry: cli.symmetry,
        border: cli.border,
    });

    log::info!("Starting shyrdak canvas...");
    log::info!("Controls:");
    log::info!("  - Stamp: left click on the canvas");
    log::info!("  - Shapes: 1 (diamond), 2 (triangle), 3 (horn), Tab (cycle)");
    log::info!("  - Colors: click a swatch, G/P to cycle background/pattern");
    log::info!("  - Mirror: S, Border: B, Clear: E");
    log::info!("  - Help: F10, Exit: Escape");

    shyrdak::backend::run_wayland(config)?;

    log::info!("Canvas closed.");
    Ok(())
}
