pub mod tool_trait;
pub mod brush;
pub mod eraser;

use crate::core::color::Color;
use crate::core::store::BitmapStore;
use brush::BrushTool;
use eraser::EraserTool;
use tool_trait::Tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolType {
    #[default]
    Brush,
    Erase,
}

impl ToolType {
    pub const ALL: [ToolType; 2] = [ToolType::Brush, ToolType::Erase];
}

/// Applies `tool` to one cell. Out-of-grid cells leave the store untouched.
pub fn apply_tool(tool: ToolType, x: i32, y: i32, color: Color, store: &mut BitmapStore) {
    match tool {
        ToolType::Brush => BrushTool.apply(x, y, color, store),
        ToolType::Erase => EraserTool.apply(x, y, color, store),
    }
}
