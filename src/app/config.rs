use crate::core::color::Color;
use crate::core::store::GRID_SIZE;
use crate::history::manager::DEFAULT_HISTORY_CAPACITY;

pub const DEFAULT_VIEWPORT_SIZE: u32 = 512;
pub const EXPORT_FILE_NAME: &str = "pixel-avatar.png";

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Cells per side of the bitmap.
    pub grid_size: u32,
    /// Logical edge of the rendered viewport and of exported images.
    pub viewport_size: u32,
    pub history_capacity: usize,
    pub export_file_name: String,
    pub initial_color: Color,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            viewport_size: DEFAULT_VIEWPORT_SIZE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            export_file_name: EXPORT_FILE_NAME.to_string(),
            initial_color: Color::opaque(0, 0, 0),
        }
    }
}
