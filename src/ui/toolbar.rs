//! Toolbar strip above the canvas: layout, hit-testing and rendering.

use crate::config::ToolbarStyle;
use crate::draw::{Color, FillRule, StampShape, fill_path};
use crate::input::InputState;
use crate::util::Rect;

// ============================================================================
// Layout Constants (not configurable)
// ============================================================================

/// Height of the toolbar strip in logical pixels.
pub const TOOLBAR_HEIGHT: u32 = 56;

/// Left margin before the first control
const PAD: i32 = 10;
/// Gap between controls of the same group
const ITEM_GAP: i32 = 6;
/// Extra gap between groups
const GROUP_GAP: i32 = 12;
/// Swatch edge length
const SWATCH_SIZE: i32 = 28;
/// Swatch top offset (vertically centred)
const SWATCH_Y: i32 = 14;
/// Shape button edge length
const BUTTON_SIZE: i32 = 36;
/// Button top offset (vertically centred)
const BUTTON_Y: i32 = 10;
/// Checkbox hit area width (box plus label)
const CHECKBOX_WIDTH: i32 = 100;
/// Clear button width
const CLEAR_WIDTH: i32 = 72;
/// Edge length of the tick box inside a checkbox
const TICK_BOX: f64 = 16.0;

/// Something the user can click in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Background swatch by palette index
    BackgroundSwatch(usize),
    /// Pattern swatch by palette index
    PatternSwatch(usize),
    /// Shape selector button
    Shape(StampShape),
    /// Mirror symmetry checkbox
    Symmetry,
    /// Zig-zag border checkbox
    Border,
    /// Clear-canvas button
    Clear,
}

/// Positions of every toolbar control, in surface coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarLayout {
    items: Vec<(Rect, Control)>,
}

impl ToolbarLayout {
    /// Lays out the toolbar left to right: background swatches, pattern
    /// swatches, shape buttons, the two checkboxes and the clear button.
    pub fn new(background_swatches: usize, pattern_swatches: usize) -> Self {
        let mut items = Vec::new();
        let mut x = PAD;

        fn push(items: &mut Vec<(Rect, Control)>, x: &mut i32, rect: Option<Rect>, control: Control) {
            if let Some(rect) = rect {
                *x = rect.x + rect.width + ITEM_GAP;
                items.push((rect, control));
            }
        }

        for i in 0..background_swatches {
            let rect = Rect::new(x, SWATCH_Y, SWATCH_SIZE, SWATCH_SIZE);
            push(&mut items, &mut x, rect, Control::BackgroundSwatch(i));
        }
        x += GROUP_GAP - ITEM_GAP;

        for i in 0..pattern_swatches {
            let rect = Rect::new(x, SWATCH_Y, SWATCH_SIZE, SWATCH_SIZE);
            push(&mut items, &mut x, rect, Control::PatternSwatch(i));
        }
        x += GROUP_GAP - ITEM_GAP;

        for shape in StampShape::ALL {
            let rect = Rect::new(x, BUTTON_Y, BUTTON_SIZE, BUTTON_SIZE);
            push(&mut items, &mut x, rect, Control::Shape(shape));
        }
        x += GROUP_GAP - ITEM_GAP;

        let rect = Rect::new(x, BUTTON_Y, CHECKBOX_WIDTH, BUTTON_SIZE);
        push(&mut items, &mut x, rect, Control::Symmetry);
        let rect = Rect::new(x, BUTTON_Y, CHECKBOX_WIDTH, BUTTON_SIZE);
        push(&mut items, &mut x, rect, Control::Border);
        x += GROUP_GAP - ITEM_GAP;

        let rect = Rect::new(x, BUTTON_Y, CLEAR_WIDTH, BUTTON_SIZE);
        push(&mut items, &mut x, rect, Control::Clear);

        Self { items }
    }

    /// Returns the control under a surface-coordinate point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Control> {
        self.items
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, control)| *control)
    }

    /// Rectangle occupied by a control.
    pub fn rect_for(&self, control: Control) -> Option<Rect> {
        self.items
            .iter()
            .find(|(_, candidate)| *candidate == control)
            .map(|(rect, _)| *rect)
    }

    pub fn items(&self) -> &[(Rect, Control)] {
        &self.items
    }

    /// Width needed to show every control, including the trailing margin.
    pub fn min_width(&self) -> u32 {
        self.items
            .iter()
            .map(|(rect, _)| rect.x + rect.width)
            .max()
            .map_or(0, |right| (right + PAD) as u32)
    }
}

/// Renders the toolbar strip at the top of the surface.
pub fn render_toolbar(ctx: &cairo::Context, state: &InputState, style: &ToolbarStyle, width: u32) {
    let _ = ctx.save();

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(0.0, 0.0, width as f64, TOOLBAR_HEIGHT as f64);
    let _ = ctx.fill();

    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    for (rect, control) in state.toolbar.items() {
        match *control {
            Control::BackgroundSwatch(i) => {
                if let Some(color) = state.background_palette.get(i) {
                    let active = color.approx_eq(&state.background_color);
                    draw_swatch(ctx, rect, *color, active, style);
                }
            }
            Control::PatternSwatch(i) => {
                if let Some(color) = state.pattern_palette.get(i) {
                    let active = color.approx_eq(&state.pattern_color);
                    draw_swatch(ctx, rect, *color, active, style);
                }
            }
            Control::Shape(shape) => {
                draw_shape_button(ctx, rect, shape, state, style);
            }
            Control::Symmetry => draw_checkbox(ctx, rect, "Mirror", state.symmetry, style),
            Control::Border => draw_checkbox(ctx, rect, "Border", state.border_enabled, style),
            Control::Clear => draw_button(ctx, rect, "Clear", style),
        }
    }

    let _ = ctx.restore();
}

fn draw_swatch(ctx: &cairo::Context, rect: &Rect, color: Color, active: bool, style: &ToolbarStyle) {
    let (x, y, w, h) = rect_f64(rect);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();

    if active {
        let [r, g, b, a] = style.accent_color;
        ctx.set_source_rgba(r, g, b, a);
        ctx.set_line_width(2.0);
        ctx.rectangle(x - 3.0, y - 3.0, w + 6.0, h + 6.0);
    } else {
        let [r, g, b, _] = style.text_color;
        ctx.set_source_rgba(r, g, b, 0.35);
        ctx.set_line_width(1.0);
        ctx.rectangle(x + 0.5, y + 0.5, w - 1.0, h - 1.0);
    }
    let _ = ctx.stroke();
}

fn draw_shape_button(
    ctx: &cairo::Context,
    rect: &Rect,
    shape: StampShape,
    state: &InputState,
    style: &ToolbarStyle,
) {
    let (x, y, w, h) = rect_f64(rect);
    let active = shape == state.shape;

    let [r, g, b, _] = style.text_color;
    ctx.set_source_rgba(r, g, b, if active { 0.18 } else { 0.06 });
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();

    // The horn reaches a full size to the right of its anchor, so shrink and
    // shift it to sit inside the button.
    let (cx, cy) = rect.center();
    let preview = match shape {
        StampShape::Horn => shape.outline(cx - 3.5, cy, 14.0),
        _ => shape.outline(cx, cy, 22.0),
    };
    fill_path(ctx, &preview, state.pattern_color, FillRule::NonZero);

    if active {
        let [r, g, b, a] = style.accent_color;
        ctx.set_source_rgba(r, g, b, a);
        ctx.set_line_width(2.0);
        ctx.rectangle(x + 1.0, y + 1.0, w - 2.0, h - 2.0);
        let _ = ctx.stroke();
    }
}

fn draw_checkbox(ctx: &cairo::Context, rect: &Rect, label: &str, checked: bool, style: &ToolbarStyle) {
    let (x, y, _, h) = rect_f64(rect);
    let box_x = x + 4.0;
    let box_y = y + (h - TICK_BOX) / 2.0;

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(1.5);
    ctx.rectangle(box_x, box_y, TICK_BOX, TICK_BOX);
    let _ = ctx.stroke();

    if checked {
        let [ar, ag, ab, aa] = style.accent_color;
        ctx.set_source_rgba(ar, ag, ab, aa);
        ctx.rectangle(box_x + 3.0, box_y + 3.0, TICK_BOX - 6.0, TICK_BOX - 6.0);
        let _ = ctx.fill();
    }

    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(box_x + TICK_BOX + 6.0, y + h / 2.0 + style.font_size / 3.0);
    let _ = ctx.show_text(label);
}

fn draw_button(ctx: &cairo::Context, rect: &Rect, label: &str, style: &ToolbarStyle) {
    let (x, y, w, h) = rect_f64(rect);
    let [r, g, b, a] = style.text_color;

    ctx.set_source_rgba(r, g, b, 0.1);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();

    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(1.0);
    ctx.rectangle(x + 0.5, y + 0.5, w - 1.0, h - 1.0);
    let _ = ctx.stroke();

    let text_width = match ctx.text_extents(label) {
        Ok(extents) => extents.width(),
        Err(e) => {
            log::warn!("Failed to measure label '{}': {}, using estimate", label, e);
            label.len() as f64 * style.font_size * 0.6
        }
    };
    ctx.move_to(x + (w - text_width) / 2.0, y + h / 2.0 + style.font_size / 3.0);
    let _ = ctx.show_text(label);
}

fn rect_f64(rect: &Rect) -> (f64, f64, f64, f64) {
    (
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_positions() {
        let layout = ToolbarLayout::new(5, 5);
        assert_eq!(
            layout.rect_for(Control::BackgroundSwatch(0)),
            Rect::new(10, 14, 28, 28)
        );
        assert_eq!(
            layout.rect_for(Control::PatternSwatch(0)),
            Rect::new(186, 14, 28, 28)
        );
        assert_eq!(
            layout.rect_for(Control::Shape(StampShape::Diamond)),
            Rect::new(362, 10, 36, 36)
        );
        assert_eq!(layout.rect_for(Control::Symmetry), Rect::new(494, 10, 100, 36));
        assert_eq!(layout.rect_for(Control::Border), Rect::new(600, 10, 100, 36));
        assert_eq!(layout.rect_for(Control::Clear), Rect::new(712, 10, 72, 36));
        assert_eq!(layout.min_width(), 794);
    }

    #[test]
    fn hit_test_finds_controls_and_gaps() {
        let layout = ToolbarLayout::new(5, 5);
        assert_eq!(layout.hit_test(20.0, 20.0), Some(Control::BackgroundSwatch(0)));
        assert_eq!(layout.hit_test(45.0, 20.0), Some(Control::BackgroundSwatch(1)));
        assert_eq!(
            layout.hit_test(410.0, 30.0),
            Some(Control::Shape(StampShape::Triangle))
        );
        assert_eq!(layout.hit_test(740.0, 30.0), Some(Control::Clear));
        // Gap between two swatches
        assert_eq!(layout.hit_test(40.0, 20.0), None);
        // Above the swatch row
        assert_eq!(layout.hit_test(20.0, 5.0), None);
    }

    #[test]
    fn layout_follows_palette_sizes() {
        let layout = ToolbarLayout::new(2, 3);
        assert_eq!(
            layout.rect_for(Control::PatternSwatch(0)),
            Rect::new(84, 14, 28, 28)
        );
        assert_eq!(layout.rect_for(Control::PatternSwatch(3)), None);
        assert_eq!(layout.items().len(), 2 + 3 + 3 + 3);
    }
}
