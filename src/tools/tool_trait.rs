use crate::core::color::Color;
use crate::core::store::BitmapStore;

pub trait Tool {
    fn apply(&self, x: i32, y: i32, color: Color, store: &mut BitmapStore);
}
