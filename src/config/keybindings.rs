//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize keyboard shortcuts for every canvas action.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Exit,
    ClearCanvas,

    // Mode toggles
    ToggleSymmetry,
    ToggleBorder,

    // Shape selection
    SelectDiamond,
    SelectTriangle,
    SelectHorn,
    NextShape,

    // Palette cycling
    NextBackgroundColor,
    NextPatternColor,

    ToggleHelp,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W" or "Escape".
    ///
    /// Modifiers may appear in any order and spaces around '+' are ignored.
    /// A trailing "++" binds the '+' key itself.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty pieces are the '+' key.
        // Keys are stored lowercase so "S" and "s" collide in the action map.
        let key = key_parts.join("+").to_ascii_lowercase();
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// clear_canvas = ["E", "Delete"]
/// toggle_symmetry = ["S"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_toggle_symmetry")]
    pub toggle_symmetry: Vec<String>,

    #[serde(default = "default_toggle_border")]
    pub toggle_border: Vec<String>,

    #[serde(default = "default_select_diamond")]
    pub select_diamond: Vec<String>,

    #[serde(default = "default_select_triangle")]
    pub select_triangle: Vec<String>,

    #[serde(default = "default_select_horn")]
    pub select_horn: Vec<String>,

    #[serde(default = "default_next_shape")]
    pub next_shape: Vec<String>,

    #[serde(default = "default_next_background_color")]
    pub next_background_color: Vec<String>,

    #[serde(default = "default_next_pattern_color")]
    pub next_pattern_color: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            clear_canvas: default_clear_canvas(),
            toggle_symmetry: default_toggle_symmetry(),
            toggle_border: default_toggle_border(),
            select_diamond: default_select_diamond(),
            select_triangle: default_select_triangle(),
            select_horn: default_select_horn(),
            next_shape: default_next_shape(),
            next_background_color: default_next_background_color(),
            next_pattern_color: default_next_pattern_color(),
            toggle_help: default_toggle_help(),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(&[String], Action); 11] {
        [
            (&self.exit, Action::Exit),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.toggle_symmetry, Action::ToggleSymmetry),
            (&self.toggle_border, Action::ToggleBorder),
            (&self.select_diamond, Action::SelectDiamond),
            (&self.select_triangle, Action::SelectTriangle),
            (&self.select_horn, Action::SelectHorn),
            (&self.next_shape, Action::NextShape),
            (&self.next_background_color, Action::NextBackgroundColor),
            (&self.next_pattern_color, Action::NextPatternColor),
            (&self.toggle_help, Action::ToggleHelp),
        ]
    }

    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }

    /// Every binding configured for an action, in config order.
    pub fn bindings(&self, action: Action) -> &[String] {
        self.entries()
            .into_iter()
            .find(|(_, candidate)| *candidate == action)
            .map(|(bindings, _)| bindings)
            .unwrap_or(&[])
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["E".to_string(), "Delete".to_string()]
}

fn default_toggle_symmetry() -> Vec<String> {
    vec!["S".to_string()]
}

fn default_toggle_border() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_select_diamond() -> Vec<String> {
    vec!["1".to_string(), "D".to_string()]
}

fn default_select_triangle() -> Vec<String> {
    vec!["2".to_string(), "T".to_string()]
}

fn default_select_horn() -> Vec<String> {
    vec!["3".to_string(), "H".to_string()]
}

fn default_next_shape() -> Vec<String> {
    vec!["Tab".to_string()]
}

fn default_next_background_color() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_next_pattern_color() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F10".to_string(), "F1".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_handles_modifiers_in_any_order() {
        let binding = KeyBinding::parse("Shift + ctrl+W").unwrap();
        assert_eq!(binding.key, "w");
        assert!(binding.ctrl && binding.shift && !binding.alt);
        assert!(binding.matches("w", true, true, false));
        assert!(!binding.matches("w", true, false, false));
    }

    #[test]
    fn parse_accepts_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn parse_rejects_modifier_only_bindings() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn default_map_covers_every_action() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();
        let esc = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&esc), Some(&Action::Exit));
        let s = KeyBinding::parse("S").unwrap();
        assert_eq!(map.get(&s), Some(&Action::ToggleSymmetry));
        assert_eq!(config.bindings(Action::ToggleHelp), ["F10", "F1"]);
    }

    #[test]
    fn duplicate_bindings_are_rejected() {
        let config = KeybindingsConfig {
            toggle_border: vec!["S".to_string()],
            ..KeybindingsConfig::default()
        };
        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding 'S'"));
    }

    #[test]
    fn duplicate_bindings_differing_in_case_are_rejected() {
        let config = KeybindingsConfig {
            toggle_border: vec!["s".to_string()],
            ..KeybindingsConfig::default()
        };
        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding 's'"));

        let config = KeybindingsConfig {
            exit: vec!["ctrl+q".to_string()],
            clear_canvas: vec!["Ctrl+Q".to_string()],
            ..KeybindingsConfig::default()
        };
        assert!(config.build_action_map().is_err());
    }

    #[test]
    fn lowercase_binding_matches_either_case() {
        let binding = KeyBinding::parse("F10").unwrap();
        assert_eq!(binding.key, "f10");
        assert!(binding.matches("F10", false, false, false));
        assert!(binding.matches("f10", false, false, false));
    }
}
