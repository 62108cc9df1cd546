use pixel_avatar::app::config::{EditorConfig, EXPORT_FILE_NAME};
use pixel_avatar::app::engine::AvatarEngine;
use pixel_avatar::app::events::{InputEvent, NoCapture};
use pixel_avatar::app::io_service::IoService;
use pixel_avatar::core::color::Color;

fn paint(engine: &mut AvatarEngine, x: f32, y: f32) {
    engine.handle_input(InputEvent::PointerDown { x, y }, &mut NoCapture);
    engine.handle_input(InputEvent::PointerUp, &mut NoCapture);
}

#[test]
fn test_export_single_red_cell() {
    let mut engine = AvatarEngine::new();
    engine.set_primary_color(Color::opaque(255, 0, 0));
    paint(&mut engine, 3.0, 3.0);

    let bytes = engine.export_png().expect("png bytes");
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (512, 512));

    for (x, y, px) in img.enumerate_pixels() {
        if x < 16 && y < 16 {
            assert_eq!(px.0, [255, 0, 0, 255], "({}, {}) should be red", x, y);
        } else {
            assert_eq!(px.0[3], 0, "({}, {}) should be transparent", x, y);
        }
    }
}

#[test]
fn test_export_has_no_checkerboard_or_grid() {
    let mut engine = AvatarEngine::new();
    engine.set_primary_color(Color::opaque(10, 20, 30));
    engine.fill();

    let bytes = engine.export_png().unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(img.pixels().all(|p| p.0 == [10, 20, 30, 255]));

    // the on-screen frame does carry grid lines
    let frame = engine.frame();
    let at = |x: usize, y: usize| &frame[(y * 512 + x) * 4..(y * 512 + x) * 4 + 4];
    assert_ne!(at(16, 5), at(5, 5));
}

#[test]
fn test_export_of_blank_canvas_is_fully_transparent() {
    let engine = AvatarEngine::new();
    let bytes = engine.export_png().unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn test_export_follows_viewport_size() {
    let config = EditorConfig { viewport_size: 96, ..EditorConfig::default() };
    let mut engine = AvatarEngine::with_config(config);
    engine.set_primary_color(Color::opaque(0, 0, 255));
    // 3px cells
    paint(&mut engine, 95.0, 95.0);

    let img = image::load_from_memory(&engine.export_png().unwrap()).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (96, 96));
    assert_eq!(img.get_pixel(93, 93).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(92, 92).0[3], 0);
}

#[test]
fn test_export_does_not_touch_state() {
    let mut engine = AvatarEngine::new();
    paint(&mut engine, 40.0, 40.0);
    let before = engine.store().read();
    let past = engine.history().past_len();
    let generation = engine.frame_generation();

    let _ = engine.export_png();
    assert_eq!(engine.store().read(), before);
    assert_eq!(engine.history().past_len(), past);
    assert_eq!(engine.frame_generation(), generation);
}

#[test]
fn test_export_written_to_disk() {
    let mut engine = AvatarEngine::new();
    engine.set_primary_color(Color::opaque(1, 2, 3));
    paint(&mut engine, 500.0, 10.0);
    let bytes = engine.export_png().unwrap();

    let mut path = std::env::temp_dir();
    path.push(format!("{}-{}", std::process::id(), EXPORT_FILE_NAME));
    IoService::save_bytes(&path, &bytes).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(500, 10).0, [1, 2, 3, 255]);
    let _ = std::fs::remove_file(path);
}
