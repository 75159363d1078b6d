//! Configuration file support for shyrdak.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shyrdak/config.toml`. Settings include the canvas size, the
//! color palettes, stamp and border defaults, keybindings and UI styling.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    BorderConfig, CanvasConfig, HelpOverlayStyle, PaletteConfig, PerformanceConfig, StampConfig,
    ToolbarStyle, UiConfig,
};

use crate::draw::color::{BACKGROUND_SWATCHES, FELT_BROWN, FELT_RED, FELT_SAFFRON, PATTERN_SWATCHES};
use crate::draw::{BorderStyle, Color, StampShape};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Most swatches a palette row can hold before the toolbar runs out of room.
pub const MAX_PALETTE_SWATCHES: usize = 8;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [palette]
/// default_background = "indigo"
/// default_pattern = "#f9a825"
///
/// [stamp]
/// default_shape = "horn"
/// size = 80.0
/// symmetry = true
///
/// [border]
/// enabled = true
/// depth = 30.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial canvas size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Color swatches and startup colors
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Stamp defaults (shape, size, symmetry, limit)
    #[serde(default)]
    pub stamp: StampConfig,

    /// Zig-zag border settings
    #[serde(default)]
    pub border: BorderConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub background: Option<Color>,
    pub pattern: Option<Color>,
    pub shape: Option<StampShape>,
    pub size: Option<f64>,
    pub symmetry: bool,
    pub border: bool,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced with the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`: 200 - 8192, `canvas.height`: 150 - 8192
    /// - `stamp.size`: 10.0 - 300.0
    /// - `border.depth`: 4.0 - 120.0
    /// - `border.tooth_width`: 8.0 - 400.0
    /// - palettes: 1 - 8 swatches
    /// - `buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        if !(200..=8192).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 200-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(200, 8192);
        }

        if !(150..=8192).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 150-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(150, 8192);
        }

        // NaN fails the range check too; clamp would keep it, so reset instead.
        if !(10.0..=300.0).contains(&self.stamp.size) {
            warn!(
                "Invalid stamp size {:.1}, clamping to 10.0-300.0 range",
                self.stamp.size
            );
            self.stamp.size = if self.stamp.size.is_nan() {
                60.0
            } else {
                self.stamp.size.clamp(10.0, 300.0)
            };
        }

        if !(4.0..=120.0).contains(&self.border.depth) {
            warn!(
                "Invalid border depth {:.1}, clamping to 4.0-120.0 range",
                self.border.depth
            );
            self.border.depth = if self.border.depth.is_nan() {
                24.0
            } else {
                self.border.depth.clamp(4.0, 120.0)
            };
        }

        if !(8.0..=400.0).contains(&self.border.tooth_width) {
            warn!(
                "Invalid border tooth_width {:.1}, clamping to 8.0-400.0 range",
                self.border.tooth_width
            );
            self.border.tooth_width = if self.border.tooth_width.is_nan() {
                48.0
            } else {
                self.border.tooth_width.clamp(8.0, 400.0)
            };
        }

        let palette_defaults = PaletteConfig::default();
        if self.palette.background.is_empty() {
            warn!("Background palette is empty, restoring the default swatches");
            self.palette.background = palette_defaults.background;
        } else if self.palette.background.len() > MAX_PALETTE_SWATCHES {
            warn!(
                "Background palette has {} swatches, keeping the first {}",
                self.palette.background.len(),
                MAX_PALETTE_SWATCHES
            );
            self.palette.background.truncate(MAX_PALETTE_SWATCHES);
        }

        if self.palette.pattern.is_empty() {
            warn!("Pattern palette is empty, restoring the default swatches");
            self.palette.pattern = palette_defaults.pattern;
        } else if self.palette.pattern.len() > MAX_PALETTE_SWATCHES {
            warn!(
                "Pattern palette has {} swatches, keeping the first {}",
                self.palette.pattern.len(),
                MAX_PALETTE_SWATCHES
            );
            self.palette.pattern.truncate(MAX_PALETTE_SWATCHES);
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Background color active at startup.
    pub fn background_color(&self) -> Color {
        self.palette.default_background.to_color_or(FELT_BROWN)
    }

    /// Pattern color active at startup.
    pub fn pattern_color(&self) -> Color {
        self.palette.default_pattern.to_color_or(FELT_RED)
    }

    /// Background swatches with unparseable entries replaced by the stock swatch
    /// in the same position.
    pub fn background_palette(&self) -> Vec<Color> {
        resolve_palette(&self.palette.background, &BACKGROUND_SWATCHES)
    }

    /// Pattern swatches, resolved like [`Config::background_palette`].
    pub fn pattern_palette(&self) -> Vec<Color> {
        resolve_palette(&self.palette.pattern, &PATTERN_SWATCHES)
    }

    pub fn border_style(&self) -> BorderStyle {
        BorderStyle {
            color: self.border.color.to_color_or(FELT_SAFFRON),
            depth: self.border.depth,
            tooth_width: self.border.tooth_width,
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(color) = overrides.background {
            self.palette.default_background = color.into();
        }
        if let Some(color) = overrides.pattern {
            self.palette.default_pattern = color.into();
        }
        if let Some(shape) = overrides.shape {
            self.stamp.default_shape = shape;
        }
        if let Some(size) = overrides.size {
            self.stamp.size = size;
        }
        if overrides.symmetry {
            self.stamp.symmetry = true;
        }
        if overrides.border {
            self.border.enabled = true;
        }
        self.validate_and_clamp();
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shyrdak/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shyrdak");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    /// Writes the documented example config to an explicit path.
    ///
    /// Fails like [`Config::create_default_file`] when the file already exists.
    pub fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Config)).unwrap_or_default()
    }
}

fn resolve_palette(specs: &[ColorSpec], stock: &[Color]) -> Vec<Color> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| spec.to_color_or(stock[i % stock.len()]))
        .collect()
}
