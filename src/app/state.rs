use crate::app::commands::AppCommand;
use crate::app::engine::AvatarEngine;
use crate::app::error::Result;
use crate::app::events::{EngineEffect, InputEvent, PointerCapture};
use crate::app::io_service::IoService;
use crate::app::ui_state::UiState;
use crate::tools::ToolType;
use std::collections::VecDeque;
use rust_i18n::t;

pub struct AppState {
    pub engine: AvatarEngine,
    pub command_queue: VecDeque<AppCommand>,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_engine(AvatarEngine::new())
    }

    pub fn with_engine(engine: AvatarEngine) -> Self {
        let mut ui = UiState::new();
        ui.hex_input = engine.primary_color().to_hex();
        Self {
            engine,
            command_queue: VecDeque::new(),
            ui,
        }
    }

    pub fn enqueue_command(&mut self, cmd: AppCommand) {
        self.command_queue.push_back(cmd);
    }

    pub fn pop_command(&mut self) -> Option<AppCommand> {
        self.command_queue.pop_front()
    }

    pub fn set_tool(&mut self, tool_type: ToolType) {
        if self.engine.active_tool() == tool_type { return; }
        self.engine.set_tool(tool_type);
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32, capture: &mut dyn PointerCapture) -> EngineEffect {
        self.engine.handle_input(InputEvent::PointerDown { x, y }, capture)
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, capture: &mut dyn PointerCapture) -> EngineEffect {
        self.engine.handle_input(InputEvent::PointerMove { x, y }, capture)
    }

    pub fn on_pointer_up(&mut self, capture: &mut dyn PointerCapture) -> EngineEffect {
        self.engine.handle_input(InputEvent::PointerUp, capture)
    }

    pub fn on_pointer_cancel(&mut self, capture: &mut dyn PointerCapture) -> EngineEffect {
        self.engine.handle_input(InputEvent::PointerCancel, capture)
    }

    /// Applies a `#rrggbb` color. On failure the color and the hex field are
    /// left showing the current color.
    pub fn set_primary_color_hex(&mut self, hex: &str) -> Result<()> {
        let result = self.engine.set_primary_color_hex(hex);
        self.ui.hex_input = self.engine.primary_color().to_hex();
        result?;
        Ok(())
    }

    pub fn undo(&mut self) { self.engine.undo(); }
    pub fn redo(&mut self) { self.engine.redo(); }
    pub fn clear(&mut self) { self.engine.clear(); }
    pub fn fill(&mut self) { self.engine.fill(); }

    /// Encodes first; the save dialog only opens once there is a complete image.
    pub fn export_to_png(&mut self) {
        let Some(bytes) = self.engine.export_png() else { return };
        if let Some(path) = IoService::pick_export_path(&self.engine.config().export_file_name) {
            if let Err(e) = IoService::save_bytes(&path, &bytes) {
                self.ui.error_message = Some(t!("error.export_failed", err = e.to_string()).to_string());
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
