//! Canvas state and the controls that mutate it.

use crate::config::{Action, Config, HelpOverlayStyle, KeyBinding, ToolbarStyle};
use crate::draw::{Background, BorderStyle, Color, DirtyTracker, Frame, Stamp, StampShape};
use crate::input::{modifiers::Modifiers, symmetry};
use crate::ui::{TOOLBAR_HEIGHT, ToolbarLayout, help_entries};
use crate::util::Rect;
use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Main input state containing all canvas session state.
///
/// Holds the placed stamps, the active colors/shape/toggles that the toolbar
/// and keybindings mutate, and the bookkeeping the backend needs to decide
/// when and where to redraw. Pointer coordinates arrive in surface space; the
/// canvas starts [`TOOLBAR_HEIGHT`] pixels below the top of the surface.
pub struct InputState {
    /// Every stamp placed since the last clear
    pub frame: Frame,
    /// Ground color of the felt
    pub background_color: Color,
    /// Color of the next stamps
    pub pattern_color: Color,
    /// Motif of the next stamps
    pub shape: StampShape,
    /// Size of the next stamps in pixels
    pub stamp_size: f64,
    /// Four-way mirror symmetry through the canvas centre
    pub symmetry: bool,
    /// Whether the zig-zag border is drawn
    pub border_enabled: bool,
    /// Border appearance when enabled
    pub border_style: BorderStyle,
    /// Background swatches shown in the toolbar
    pub background_palette: Vec<Color>,
    /// Pattern swatches shown in the toolbar
    pub pattern_palette: Vec<Color>,
    /// Toolbar control positions
    pub toolbar: ToolbarLayout,
    pub toolbar_style: ToolbarStyle,
    pub help_style: HelpOverlayStyle,
    /// Rows of the help overlay
    pub help_entries: Vec<(String, &'static str)>,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible
    pub show_help: bool,
    /// Surface width in logical pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Surface height in logical pixels, toolbar included
    pub screen_height: u32,
    /// Maximum number of stamps on the canvas (0 = unlimited)
    pub max_stamps: usize,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Builds the session state from a loaded configuration.
    ///
    /// Screen dimensions start at the configured canvas size plus the toolbar
    /// and are replaced by the backend once the compositor configures the
    /// window (see [`InputState::update_screen_dimensions`]).
    ///
    /// # Errors
    /// Returns an error if a keybinding cannot be parsed or is bound twice.
    pub fn from_config(config: &Config) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(|e| anyhow!("Invalid keybindings: {e}"))?;

        let background_palette = config.background_palette();
        let pattern_palette = config.pattern_palette();
        let toolbar = ToolbarLayout::new(background_palette.len(), pattern_palette.len());

        let mut dirty_tracker = DirtyTracker::new();
        dirty_tracker.mark_full();

        Ok(Self {
            frame: Frame::new(),
            background_color: config.background_color(),
            pattern_color: config.pattern_color(),
            shape: config.stamp.default_shape,
            stamp_size: config.stamp.size,
            symmetry: config.stamp.symmetry,
            border_enabled: config.border.enabled,
            border_style: config.border_style(),
            background_palette,
            pattern_palette,
            toolbar,
            toolbar_style: config.ui.toolbar_style.clone(),
            help_style: config.ui.help_overlay_style.clone(),
            help_entries: help_entries(&config.keybindings),
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            screen_width: config.canvas.width,
            screen_height: config.canvas.height + TOOLBAR_HEIGHT,
            max_stamps: config.stamp.max_stamps,
            dirty_tracker,
            action_map,
        })
    }

    /// Updates surface dimensions after backend configuration.
    ///
    /// Stamps keep their canvas coordinates, so a resize moves the symmetry
    /// centre but never the artwork already placed.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        if self.screen_width != width || self.screen_height != height {
            debug!("Surface resized to {}x{}", width, height);
            self.screen_width = width;
            self.screen_height = height;
            self.dirty_tracker.mark_full();
            self.needs_redraw = true;
        }
    }

    /// Canvas size (surface minus toolbar) in logical pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.screen_width,
            self.screen_height.saturating_sub(TOOLBAR_HEIGHT),
        )
    }

    /// Mirror centre for symmetry mode, in canvas coordinates.
    pub fn canvas_center(&self) -> (f64, f64) {
        let (width, height) = self.canvas_size();
        (width as f64 / 2.0, height as f64 / 2.0)
    }

    /// Ground fill and border as currently configured.
    pub fn background(&self) -> Background {
        Background {
            color: self.background_color,
            border: self.border_enabled.then_some(self.border_style),
        }
    }

    /// Drains pending dirty rectangles in surface coordinates.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Stamps the current motif at a canvas-local point, plus its mirror
    /// images when symmetry is on.
    ///
    /// Returns the number of stamps placed. When the stamp limit would be
    /// exceeded nothing is placed and 0 is returned.
    pub fn place_stamp(&mut self, x: f64, y: f64) -> usize {
        let positions = symmetry::stamp_positions(x, y, self.canvas_center(), self.symmetry);
        let stamps: Vec<Stamp> = positions
            .into_iter()
            .map(|(px, py)| Stamp::new(px, py, self.shape, self.pattern_color, self.stamp_size))
            .collect();

        if !self.frame.try_add_stamps(&stamps, self.max_stamps) {
            warn!(
                "Stamp limit ({}) reached; discarding click at ({:.0}, {:.0})",
                self.max_stamps, x, y
            );
            return 0;
        }

        for stamp in &stamps {
            self.dirty_tracker.mark_stamp(stamp, TOOLBAR_HEIGHT as i32);
        }
        self.needs_redraw = true;
        debug!(
            "Placed {} {} stamp(s) at ({:.0}, {:.0})",
            stamps.len(),
            self.shape,
            x,
            y
        );
        stamps.len()
    }

    /// Switches the ground color. Repainting the ground erases every stamp.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        self.frame.clear();
        self.mark_everything();
        info!("Background set to {}", color);
    }

    /// Switches the color used by the next stamps; placed stamps keep theirs.
    pub fn set_pattern_color(&mut self, color: Color) {
        self.pattern_color = color;
        self.mark_toolbar();
        debug!("Pattern color set to {}", color);
    }

    pub fn set_shape(&mut self, shape: StampShape) {
        self.shape = shape;
        self.mark_toolbar();
        debug!("Shape set to {}", shape);
    }

    pub fn set_symmetry(&mut self, enabled: bool) {
        self.symmetry = enabled;
        self.mark_toolbar();
        debug!("Symmetry {}", if enabled { "on" } else { "off" });
    }

    pub fn toggle_symmetry(&mut self) {
        self.set_symmetry(!self.symmetry);
    }

    /// Shows or hides the zig-zag border. Stamps stay where they are.
    pub fn toggle_border(&mut self) {
        self.border_enabled = !self.border_enabled;
        self.mark_everything();
        debug!(
            "Border {}",
            if self.border_enabled { "on" } else { "off" }
        );
    }

    /// Restores the plain background, erasing every stamp.
    pub fn clear_canvas(&mut self) {
        let removed = self.frame.len();
        self.frame.clear();
        self.mark_everything();
        info!("Cleared canvas ({} stamps removed)", removed);
    }

    /// Selects the swatch after the active one, wrapping around.
    pub(super) fn next_background_color(&mut self) {
        if let Some(color) = next_in_palette(&self.background_palette, self.background_color) {
            self.set_background_color(color);
        }
    }

    pub(super) fn next_pattern_color(&mut self) {
        if let Some(color) = next_in_palette(&self.pattern_palette, self.pattern_color) {
            self.set_pattern_color(color);
        }
    }

    /// Look up an action for the given key and modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }

    fn mark_toolbar(&mut self) {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        match Rect::new(0, 0, width, TOOLBAR_HEIGHT as i32) {
            Some(rect) => self.dirty_tracker.mark_rect(rect),
            None => self.dirty_tracker.mark_full(),
        }
        self.needs_redraw = true;
    }

    pub(super) fn mark_everything(&mut self) {
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }
}

/// Palette entry after `current`, or the first entry when `current` is not
/// part of the palette.
fn next_in_palette(palette: &[Color], current: Color) -> Option<Color> {
    let next = palette
        .iter()
        .position(|color| color.approx_eq(&current))
        .map_or(0, |i| (i + 1) % palette.len());
    palette.get(next).copied()
}
