use crate::core::color::Color;
use crate::core::store::BitmapStore;
use crate::tools::{apply_tool, ToolType};

/// Active tool plus the stroke-in-progress flag.
pub struct ToolManager {
    pub active_type: ToolType,
    pub is_drawing: bool,
}

impl ToolManager {
    pub fn new() -> Self {
        Self {
            active_type: ToolType::Brush,
            is_drawing: false,
        }
    }

    pub fn set_tool(&mut self, tool_type: ToolType) {
        self.active_type = tool_type;
    }

    pub fn begin_stroke(&mut self) {
        self.is_drawing = true;
    }

    /// Returns whether a stroke was actually in progress.
    pub fn end_stroke(&mut self) -> bool {
        std::mem::replace(&mut self.is_drawing, false)
    }

    pub fn paint(&self, x: i32, y: i32, color: Color, store: &mut BitmapStore) {
        apply_tool(self.active_type, x, y, color, store);
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}
