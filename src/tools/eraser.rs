use super::tool_trait::Tool;
use crate::core::color::Color;
use crate::core::store::BitmapStore;

pub struct EraserTool;

impl Tool for EraserTool {
    fn apply(&self, x: i32, y: i32, _color: Color, store: &mut BitmapStore) {
        store.clear_pixel(x, y);
    }
}
