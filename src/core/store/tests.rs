use super::*;

const RED: Color = Color::opaque(255, 0, 0);

#[test]
fn test_store_defaults() {
    let s = BitmapStore::default();
    assert_eq!((s.width(), s.height()), (GRID_SIZE, GRID_SIZE));
    assert!(s.pixels().iter().all(|&b| b == 0));
}

#[test]
fn test_store_set_pixel() {
    let mut s = BitmapStore::new(4, 4);
    s.set_pixel(1, 2, RED);
    assert_eq!(s.get_pixel(1, 2), Some(RED));
    assert_eq!(s.get_pixel(2, 1), Some(Color::transparent()));
}

#[test]
fn test_store_out_of_bounds_is_noop() {
    let mut s = BitmapStore::new(4, 4);
    let before = s.read();
    s.set_pixel(-1, 0, RED);
    s.set_pixel(4, 0, RED);
    s.set_pixel(0, 4, RED);
    s.clear_pixel(99, -3);
    assert_eq!(s.read(), before);
    assert!(s.get_pixel(4, 4).is_none());
}

#[test]
fn test_store_clear_pixel_keeps_rgb() {
    let mut s = BitmapStore::new(4, 4);
    s.set_pixel(3, 3, Color::new(10, 20, 30, 255));
    s.clear_pixel(3, 3);
    assert_eq!(s.get_pixel(3, 3), Some(Color::new(10, 20, 30, 0)));
}

#[test]
fn test_store_fill_and_clear_all() {
    let mut s = BitmapStore::new(3, 3);
    s.fill_all(RED);
    assert!(s.pixels().chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
    s.clear_all();
    assert!(s.pixels().chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn test_store_read_is_a_copy() {
    let mut s = BitmapStore::new(2, 2);
    let snap = s.read();
    s.set_pixel(0, 0, RED);
    assert_eq!(snap.get_pixel(0, 0), Some(Color::transparent()));
    s.write(&snap);
    assert_eq!(s.get_pixel(0, 0), Some(Color::transparent()));
}

#[test]
fn test_store_write_rejects_foreign_size() {
    let mut s = BitmapStore::new(2, 2);
    s.set_pixel(0, 0, RED);
    s.write(&BitmapStore::new(3, 3).read());
    assert_eq!(s.get_pixel(0, 0), Some(RED));
}
