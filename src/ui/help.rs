//! Help overlay listing the mouse controls and configured keybindings.

use crate::config::{Action, HelpOverlayStyle, KeybindingsConfig};

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

/// Keyboard actions in the order the overlay lists them.
const HELP_ROWS: [(Action, &str); 11] = [
    (Action::SelectDiamond, "Diamond stamp"),
    (Action::SelectTriangle, "Triangle stamp"),
    (Action::SelectHorn, "Horn stamp"),
    (Action::NextShape, "Next stamp shape"),
    (Action::NextBackgroundColor, "Next background color (clears)"),
    (Action::NextPatternColor, "Next pattern color"),
    (Action::ToggleSymmetry, "Toggle mirror symmetry"),
    (Action::ToggleBorder, "Toggle zig-zag border"),
    (Action::ClearCanvas, "Clear canvas"),
    (Action::ToggleHelp, "Toggle this help"),
    (Action::Exit, "Exit"),
];

/// Builds the `(keys, description)` rows shown in the overlay.
///
/// Actions with no binding are listed as "unbound" so users can see what is
/// available from the toolbar only.
pub fn help_entries(keybindings: &KeybindingsConfig) -> Vec<(String, &'static str)> {
    HELP_ROWS
        .iter()
        .map(|(action, description)| {
            let keys = keybindings.bindings(*action);
            let keys = if keys.is_empty() {
                "unbound".to_string()
            } else {
                keys.join(" / ")
            };
            (keys, *description)
        })
        .collect()
}

/// Render help overlay centred on the surface.
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    entries: &[(String, &str)],
    screen_width: u32,
    screen_height: u32,
) {
    let mut lines = vec![
        "SHYRDAK CONTROLS".to_string(),
        String::new(),
        format!("  {:<18}{}", "Click canvas", "Stamp the selected motif"),
        format!("  {:<18}{}", "Click toolbar", "Pick colors, shapes and toggles"),
        String::new(),
    ];
    lines.extend(
        entries
            .iter()
            .map(|(keys, description)| format!("  {:<18}{}", keys, description)),
    );

    let _ = ctx.save();
    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    // Find longest line for width
    let mut max_width: f64 = 0.0;
    for line in &lines {
        let width = match ctx.text_extents(line) {
            Ok(ext) => ext.width(),
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                line.len() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        };
        max_width = max_width.max(width);
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (lines.len() as f64) * style.line_height + style.padding * 2.0;

    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in lines.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
    let _ = ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_show_every_binding() {
        let entries = help_entries(&KeybindingsConfig::default());
        assert_eq!(entries.len(), HELP_ROWS.len());
        assert!(entries.contains(&("Escape / Ctrl+Q".to_string(), "Exit")));
        assert!(entries.contains(&("1 / D".to_string(), "Diamond stamp")));
    }

    #[test]
    fn unbound_actions_are_marked() {
        let keybindings = KeybindingsConfig {
            toggle_border: Vec::new(),
            ..KeybindingsConfig::default()
        };
        let entries = help_entries(&keybindings);
        assert!(entries.contains(&("unbound".to_string(), "Toggle zig-zag border")));
    }
}
