use super::*;
use crate::config::{Config, KeybindingsConfig};
use crate::draw::StampShape;
use crate::draw::color::{
    BACKGROUND_SWATCHES, FELT_BROWN, FELT_INDIGO, FELT_RED, FELT_SAFFRON, PATTERN_SWATCHES,
};
use crate::input::{Key, MouseButton};
use crate::ui::{Control, TOOLBAR_HEIGHT};

/// 800x600 canvas, centre (400, 300), toolbar above it.
fn create_test_input_state() -> InputState {
    let mut state = InputState::from_config(&Config::default()).unwrap();
    state.update_screen_dimensions(800, 600 + TOOLBAR_HEIGHT);
    let _ = state.take_dirty_regions();
    state.needs_redraw = false;
    state
}

fn canvas_click(state: &mut InputState, x: f64, y: f64) {
    state.on_mouse_press(MouseButton::Left, x, y + TOOLBAR_HEIGHT as f64);
}

fn toolbar_click(state: &mut InputState, control: Control) {
    let (x, y) = state.toolbar.rect_for(control).unwrap().center();
    state.on_mouse_press(MouseButton::Left, x, y);
}

fn positions(state: &InputState) -> Vec<(f64, f64)> {
    state.frame.stamps.iter().map(|s| (s.x, s.y)).collect()
}

#[test]
fn test_initial_state_follows_config() {
    let state = create_test_input_state();
    assert_eq!(state.background_color, FELT_BROWN);
    assert_eq!(state.pattern_color, FELT_RED);
    assert_eq!(state.shape, StampShape::Diamond);
    assert_eq!(state.stamp_size, 60.0);
    assert!(!state.symmetry);
    assert!(!state.border_enabled);
    assert!(state.frame.is_empty());
    assert_eq!(state.canvas_size(), (800, 600));
    assert_eq!(state.canvas_center(), (400.0, 300.0));
}

#[test]
fn test_click_without_symmetry_places_one_stamp() {
    let mut state = create_test_input_state();
    canvas_click(&mut state, 120.0, 80.0);

    assert_eq!(state.frame.len(), 1);
    let stamp = &state.frame.stamps[0];
    assert_eq!((stamp.x, stamp.y), (120.0, 80.0));
    assert_eq!(stamp.shape, StampShape::Diamond);
    assert_eq!(stamp.color, FELT_RED);
    assert_eq!(stamp.size, 60.0);
    assert!(state.needs_redraw);
}

#[test]
fn test_click_with_symmetry_places_four_mirrored_stamps() {
    let mut state = create_test_input_state();
    state.set_symmetry(true);
    canvas_click(&mut state, 100.0, 50.0);

    assert_eq!(
        positions(&state),
        vec![(100.0, 50.0), (700.0, 50.0), (100.0, 550.0), (700.0, 550.0)]
    );
}

#[test]
fn test_symmetry_click_on_axis_does_not_stack_stamps() {
    let mut state = create_test_input_state();
    state.set_symmetry(true);
    canvas_click(&mut state, 400.0, 120.0);
    assert_eq!(positions(&state), vec![(400.0, 120.0), (400.0, 480.0)]);
}

#[test]
fn test_symmetry_centre_follows_resize() {
    let mut state = create_test_input_state();
    state.set_symmetry(true);
    state.update_screen_dimensions(400, 200 + TOOLBAR_HEIGHT);
    canvas_click(&mut state, 10.0, 20.0);
    assert_eq!(
        positions(&state),
        vec![(10.0, 20.0), (390.0, 20.0), (10.0, 180.0), (390.0, 180.0)]
    );
}

#[test]
fn test_pattern_color_change_applies_to_next_click_only() {
    let mut state = create_test_input_state();
    canvas_click(&mut state, 50.0, 50.0);
    state.set_pattern_color(FELT_SAFFRON);
    canvas_click(&mut state, 150.0, 50.0);

    assert_eq!(state.frame.stamps[0].color, FELT_RED);
    assert_eq!(state.frame.stamps[1].color, FELT_SAFFRON);
}

#[test]
fn test_clear_button_erases_stamps() {
    let mut state = create_test_input_state();
    canvas_click(&mut state, 50.0, 50.0);
    canvas_click(&mut state, 60.0, 60.0);
    toolbar_click(&mut state, Control::Clear);

    assert!(state.frame.is_empty());
    assert_eq!(state.background_color, FELT_BROWN);
    assert_eq!(
        state.take_dirty_regions(),
        vec![crate::util::Rect::new(0, 0, 800, 656).unwrap()]
    );
}

#[test]
fn test_background_swatch_erases_stamps() {
    let mut state = create_test_input_state();
    canvas_click(&mut state, 50.0, 50.0);
    toolbar_click(&mut state, Control::BackgroundSwatch(1));

    assert_eq!(state.background_color, BACKGROUND_SWATCHES[1]);
    assert!(state.frame.is_empty());
}

#[test]
fn test_border_toggle_keeps_stamps() {
    let mut state = create_test_input_state();
    canvas_click(&mut state, 50.0, 50.0);
    toolbar_click(&mut state, Control::Border);

    assert!(state.border_enabled);
    assert!(state.background().border.is_some());
    assert_eq!(state.frame.len(), 1);

    toolbar_click(&mut state, Control::Border);
    assert!(!state.border_enabled);
    assert!(state.background().border.is_none());
}

#[test]
fn test_toolbar_controls_select_shape_pattern_and_symmetry() {
    let mut state = create_test_input_state();
    toolbar_click(&mut state, Control::Shape(StampShape::Horn));
    toolbar_click(&mut state, Control::PatternSwatch(3));
    toolbar_click(&mut state, Control::Symmetry);

    assert_eq!(state.shape, StampShape::Horn);
    assert_eq!(state.pattern_color, PATTERN_SWATCHES[3]);
    assert!(state.symmetry);
    // Toolbar clicks never stamp
    assert!(state.frame.is_empty());
}

#[test]
fn test_toolbar_gap_click_does_nothing() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    assert!(state.frame.is_empty());
    assert!(!state.needs_redraw);
}

#[test]
fn test_right_click_is_ignored() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Right, 200.0, 200.0);
    assert!(state.frame.is_empty());
}

#[test]
fn test_stamp_damage_is_reported_in_surface_coordinates() {
    let mut state = create_test_input_state();
    state.set_shape(StampShape::Triangle);
    let _ = state.take_dirty_regions();

    state.stamp_size = 20.0;
    canvas_click(&mut state, 50.0, 50.0);
    assert_eq!(
        state.take_dirty_regions(),
        vec![crate::util::Rect::new(39, 95, 22, 22).unwrap()]
    );
}

#[test]
fn test_stamp_limit_rejects_whole_click() {
    let mut state = create_test_input_state();
    state.max_stamps = 5;
    state.set_symmetry(true);

    canvas_click(&mut state, 100.0, 100.0);
    assert_eq!(state.frame.len(), 4);

    let _ = state.take_dirty_regions();
    state.needs_redraw = false;
    assert_eq!(state.place_stamp(120.0, 100.0), 0);
    assert_eq!(state.frame.len(), 4);
    assert!(!state.needs_redraw);
    assert!(state.take_dirty_regions().is_empty());
}

#[test]
fn test_keybindings_drive_actions() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::Char('3'));
    assert_eq!(state.shape, StampShape::Horn);

    state.on_key_press(Key::Tab);
    assert_eq!(state.shape, StampShape::Diamond);

    state.on_key_press(Key::Char('s'));
    assert!(state.symmetry);

    state.on_key_press(Key::Char('b'));
    assert!(state.border_enabled);

    state.on_key_press(Key::Char('p'));
    assert_eq!(state.pattern_color, PATTERN_SWATCHES[1]);

    canvas_click(&mut state, 10.0, 10.0);
    state.on_key_press(Key::Char('g'));
    assert_eq!(state.background_color, FELT_INDIGO);
    assert!(state.frame.is_empty());

    canvas_click(&mut state, 10.0, 10.0);
    state.on_key_press(Key::Delete);
    assert!(state.frame.is_empty());
}

#[test]
fn test_palette_cycling_wraps_around() {
    let mut state = create_test_input_state();
    for _ in 0..PATTERN_SWATCHES.len() {
        state.on_key_press(Key::Char('p'));
    }
    assert_eq!(state.pattern_color, FELT_RED);
}

#[test]
fn test_escape_closes_help_before_exiting() {
    let mut state = create_test_input_state();
    state.on_key_press(Key::F10);
    assert!(state.show_help);

    state.on_key_press(Key::Escape);
    assert!(!state.show_help);
    assert!(!state.should_exit);

    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn test_modifiers_must_match_exactly() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::Char('q'));
    assert!(!state.should_exit);

    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char('e'));
    assert!(state.frame.is_empty());
    state.on_key_press(Key::Char('q'));
    assert!(state.should_exit);

    state.on_key_release(Key::Ctrl);
    assert!(!state.modifiers.ctrl);
}

#[test]
fn test_invalid_keybindings_are_reported() {
    let config = Config {
        keybindings: KeybindingsConfig {
            exit: vec!["Ctrl+".to_string(), "Ctrl+Shift".to_string()],
            ..KeybindingsConfig::default()
        },
        ..Config::default()
    };
    let err = InputState::from_config(&config).err().unwrap();
    assert!(err.to_string().contains("Invalid keybindings"));
}
