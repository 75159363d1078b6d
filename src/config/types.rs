//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::StampShape;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial canvas size.
///
/// The window opens at this size plus the toolbar strip; the canvas follows
/// the window when the compositor resizes it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in logical pixels (valid range: 200 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in logical pixels, excluding the toolbar (valid range: 150 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Color swatches offered in the toolbar and the colors active at startup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Background color at startup
    #[serde(default = "default_background")]
    pub default_background: ColorSpec,

    /// Pattern (stamp) color at startup
    #[serde(default = "default_pattern")]
    pub default_pattern: ColorSpec,

    /// Background swatches, left to right (1 - 8 entries)
    #[serde(default = "default_background_swatches")]
    pub background: Vec<ColorSpec>,

    /// Pattern swatches, left to right (1 - 8 entries)
    #[serde(default = "default_pattern_swatches")]
    pub pattern: Vec<ColorSpec>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_background: default_background(),
            default_pattern: default_pattern(),
            background: default_background_swatches(),
            pattern: default_pattern_swatches(),
        }
    }
}

/// Stamp behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StampConfig {
    /// Motif selected at startup (diamond, triangle, horn)
    #[serde(default = "default_shape")]
    pub default_shape: StampShape,

    /// Stamp size in pixels (valid range: 10.0 - 300.0)
    #[serde(default = "default_stamp_size")]
    pub size: f64,

    /// Start with four-way mirror symmetry enabled
    #[serde(default)]
    pub symmetry: bool,

    /// Maximum number of stamps on the canvas (0 = unlimited)
    #[serde(default)]
    pub max_stamps: usize,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            default_shape: default_shape(),
            size: default_stamp_size(),
            symmetry: false,
            max_stamps: 0,
        }
    }
}

/// Zig-zag border settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BorderConfig {
    /// Draw the border at startup
    #[serde(default)]
    pub enabled: bool,

    /// Border color
    #[serde(default = "default_border_color")]
    pub color: ColorSpec,

    /// How far the teeth reach into the canvas (valid range: 4.0 - 120.0)
    #[serde(default = "default_border_depth")]
    pub depth: f64,

    /// Preferred tooth width (valid range: 8.0 - 400.0)
    #[serde(default = "default_tooth_width")]
    pub tooth_width: f64,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: default_border_color(),
            depth: default_border_depth(),
            tooth_width: default_tooth_width(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Toolbar styling options
    #[serde(default)]
    pub toolbar_style: ToolbarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

/// Toolbar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarStyle {
    /// Font size for button labels
    #[serde(default = "default_toolbar_font_size")]
    pub font_size: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_toolbar_bg_color")]
    pub bg_color: [f64; 4],

    /// Label and outline color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_toolbar_text_color")]
    pub text_color: [f64; 4],

    /// Highlight ring around the active swatch or button [R, G, B, A]
    #[serde(default = "default_toolbar_accent_color")]
    pub accent_color: [f64; 4],
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            font_size: default_toolbar_font_size(),
            bg_color: default_toolbar_bg_color(),
            text_color: default_toolbar_text_color(),
            accent_color: default_toolbar_accent_color(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#3e2723".to_string())
}

fn default_pattern() -> ColorSpec {
    ColorSpec::Name("#c62828".to_string())
}

fn default_background_swatches() -> Vec<ColorSpec> {
    ["brown", "indigo", "forest", "charcoal", "cream"]
        .into_iter()
        .map(|name| ColorSpec::Name(name.to_string()))
        .collect()
}

fn default_pattern_swatches() -> Vec<ColorSpec> {
    ["red", "saffron", "cream", "sky", "emerald"]
        .into_iter()
        .map(|name| ColorSpec::Name(name.to_string()))
        .collect()
}

fn default_shape() -> StampShape {
    StampShape::Diamond
}

fn default_stamp_size() -> f64 {
    60.0
}

fn default_border_color() -> ColorSpec {
    ColorSpec::Name("saffron".to_string())
}

fn default_border_depth() -> f64 {
    24.0
}

fn default_tooth_width() -> f64 {
    48.0
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_toolbar_font_size() -> f64 {
    13.0
}

fn default_toolbar_bg_color() -> [f64; 4] {
    [0.12, 0.1, 0.09, 1.0]
}

fn default_toolbar_text_color() -> [f64; 4] {
    [0.95, 0.93, 0.88, 1.0]
}

fn default_toolbar_accent_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_help_font_size() -> f64 {
    15.0
}

fn default_help_line_height() -> f64 {
    22.0
}

fn default_help_padding() -> f64 {
    20.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.98, 0.66, 0.15, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
