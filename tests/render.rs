use cairo::{Context, ImageSurface};
use shyrdak::config::Config;
use shyrdak::draw::Color;
use shyrdak::draw::color::{FELT_BROWN, FELT_CREAM, FELT_RED, FELT_SAFFRON};
use shyrdak::input::{InputState, MouseButton};
use shyrdak::ui::TOOLBAR_HEIGHT;

const CANVAS_W: u32 = 400;
const CANVAS_H: u32 = 300;

fn make_input_state(config: &Config) -> InputState {
    let mut input = InputState::from_config(config).unwrap();
    input.update_screen_dimensions(CANVAS_W, CANVAS_H + TOOLBAR_HEIGHT);
    input
}

fn surface_with_context(width: u32, height: u32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Renders the full window and returns the surface.
fn render_window(input: &InputState) -> ImageSurface {
    let (surface, ctx) = surface_with_context(CANVAS_W, CANVAS_H + TOOLBAR_HEIGHT);
    input.render(&ctx);
    drop(ctx);
    surface
}

/// Renders only the canvas, in canvas coordinates.
fn render_canvas(input: &InputState) -> ImageSurface {
    let (surface, ctx) = surface_with_context(CANVAS_W, CANVAS_H);
    input.render_canvas(&ctx);
    drop(ctx);
    surface
}

/// Reads a pixel as (r, g, b, a); ARgb32 is stored little-endian as B, G, R, A.
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let stride = surface.stride();
    let data = surface.data().unwrap();
    let offset = (y * stride + x * 4) as usize;
    (
        data[offset + 2],
        data[offset + 1],
        data[offset],
        data[offset + 3],
    )
}

fn assert_pixel_is(surface: &mut ImageSurface, x: i32, y: i32, color: Color) {
    let expected = (
        (color.r * 255.0).round() as i32,
        (color.g * 255.0).round() as i32,
        (color.b * 255.0).round() as i32,
    );
    let (r, g, b, a) = pixel(surface, x, y);
    let close = |actual: u8, wanted: i32| (actual as i32 - wanted).abs() <= 1;
    assert!(
        close(r, expected.0) && close(g, expected.1) && close(b, expected.2) && a == 255,
        "pixel ({x}, {y}) is ({r}, {g}, {b}, {a}), expected {:?}",
        expected
    );
}

fn click_canvas(input: &mut InputState, x: f64, y: f64) {
    input.on_mouse_press(MouseButton::Left, x, y + TOOLBAR_HEIGHT as f64);
}

#[test]
fn empty_canvas_is_filled_with_background() {
    let input = make_input_state(&Config::default());
    let mut surface = render_canvas(&input);
    assert_pixel_is(&mut surface, 0, 0, FELT_BROWN);
    assert_pixel_is(&mut surface, 200, 150, FELT_BROWN);
    assert_pixel_is(&mut surface, 399, 299, FELT_BROWN);
}

#[test]
fn click_stamps_pattern_color_below_toolbar() {
    let mut input = make_input_state(&Config::default());
    click_canvas(&mut input, 100.0, 100.0);

    let mut surface = render_window(&input);
    let offset = TOOLBAR_HEIGHT as i32;
    assert_pixel_is(&mut surface, 100, 100 + offset, FELT_RED);
    assert_pixel_is(&mut surface, 300, 100 + offset, FELT_BROWN);
}

#[test]
fn symmetric_click_fills_all_four_quadrants() {
    let mut input = make_input_state(&Config::default());
    input.set_symmetry(true);
    click_canvas(&mut input, 100.0, 100.0);

    let mut surface = render_canvas(&input);
    for (x, y) in [(100, 100), (300, 100), (100, 200), (300, 200)] {
        assert_pixel_is(&mut surface, x, y, FELT_RED);
    }
    assert_pixel_is(&mut surface, 200, 150, FELT_BROWN);
}

#[test]
fn pattern_color_change_leaves_existing_stamps() {
    let mut input = make_input_state(&Config::default());
    click_canvas(&mut input, 100.0, 100.0);
    input.set_pattern_color(FELT_SAFFRON);
    click_canvas(&mut input, 300.0, 200.0);

    let mut surface = render_canvas(&input);
    assert_pixel_is(&mut surface, 100, 100, FELT_RED);
    assert_pixel_is(&mut surface, 300, 200, FELT_SAFFRON);
}

#[test]
fn clear_restores_plain_background() {
    let mut input = make_input_state(&Config::default());
    click_canvas(&mut input, 100.0, 100.0);
    input.clear_canvas();

    let mut surface = render_canvas(&input);
    assert_pixel_is(&mut surface, 100, 100, FELT_BROWN);
}

#[test]
fn background_change_repaints_with_new_color() {
    let mut input = make_input_state(&Config::default());
    click_canvas(&mut input, 100.0, 100.0);
    input.set_background_color(FELT_CREAM);

    let mut surface = render_canvas(&input);
    assert_pixel_is(&mut surface, 100, 100, FELT_CREAM);
}

#[test]
fn border_teeth_alternate_between_hole_and_solid() {
    let mut config = Config::default();
    config.border.enabled = true;
    config.border.depth = 24.0;
    config.border.tooth_width = 48.0;
    let input = make_input_state(&config);

    // Every edge run (400px or 300px) splits into teeth of 50px. Tooth 1 spans
    // 50..100 and is solid; tooth 2 spans 100..150 and has its diamond punched
    // out. Samples sit 8.5px inward from each edge.
    let mut surface = render_canvas(&input);
    let solid_and_hollow = [
        ((75, 8), (125, 8)),     // top
        ((75, 291), (125, 291)), // bottom
        ((8, 75), (8, 125)),     // left
        ((391, 75), (391, 125)), // right
    ];
    for ((sx, sy), (hx, hy)) in solid_and_hollow {
        assert_pixel_is(&mut surface, sx, sy, FELT_SAFFRON);
        assert_pixel_is(&mut surface, hx, hy, FELT_BROWN);
    }
    assert_pixel_is(&mut surface, 200, 150, FELT_BROWN);
}

#[test]
fn clear_surface_leaves_transparent_pixels() {
    let input = make_input_state(&Config::default());
    let (mut surface, ctx) = surface_with_context(CANVAS_W, CANVAS_H);
    input.render_canvas(&ctx);
    shyrdak::draw::clear_surface(&ctx);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 200, 150), (0, 0, 0, 0));
}

#[test]
fn toolbar_strip_shows_background_swatch() {
    let input = make_input_state(&Config::default());
    let mut surface = render_window(&input);

    let (x, y) = input
        .toolbar
        .rect_for(shyrdak::ui::Control::BackgroundSwatch(0))
        .unwrap()
        .center();
    assert_pixel_is(&mut surface, x as i32, y as i32, FELT_BROWN);

    let [r, g, b, a] = input.toolbar_style.bg_color;
    assert_pixel_is(&mut surface, 3, 3, Color::new(r, g, b, a));
}
