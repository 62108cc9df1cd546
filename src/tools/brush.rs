use super::tool_trait::Tool;
use crate::core::color::Color;
use crate::core::store::BitmapStore;

pub struct BrushTool;

impl Tool for BrushTool {
    fn apply(&self, x: i32, y: i32, color: Color, store: &mut BitmapStore) {
        store.set_pixel(x, y, Color { a: 255, ..color });
    }
}
