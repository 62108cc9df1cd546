use crate::core::color::Color;
use crate::tools::ToolType;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectTool(ToolType),
    SetPrimaryColor(Color),
    SetPrimaryColorHex(String),
    Undo,
    Redo,
    Clear,
    Fill,
    ExportPng,
    SetLanguage(String),
    DismissError,
    WindowClose,
}
