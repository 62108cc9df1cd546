use crate::app::config::EditorConfig;
use crate::app::events::{EngineEffect, InputEvent, PointerCapture};
use crate::app::io_service::IoService;
use crate::app::tool_manager::ToolManager;
use crate::app::view_state::ViewState;
use crate::core::color::Color;
use crate::core::error::Result;
use crate::core::store::BitmapStore;
use crate::history::manager::HistoryManager;
use crate::render::compositor::Compositor;
use crate::tools::ToolType;

/// One editing session: bitmap, history, tool/color selection and the last
/// rendered viewport. Every state change re-renders before returning.
pub struct AvatarEngine {
    config: EditorConfig,
    store: BitmapStore,
    history: HistoryManager,
    tool_manager: ToolManager,
    primary_color: Color,
    view: ViewState,
    frame: Vec<u8>,
    frame_generation: u64,
    capture_held: bool,
}

impl AvatarEngine {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let store = BitmapStore::new(config.grid_size, config.grid_size);
        let history = HistoryManager::new(store.read(), config.history_capacity);
        let mut engine = Self {
            store,
            history,
            tool_manager: ToolManager::new(),
            primary_color: config.initial_color,
            view: ViewState::new(config.viewport_size as f32),
            frame: vec![0u8; Compositor::frame_len(config.viewport_size)],
            frame_generation: 0,
            capture_held: false,
            config,
        };
        engine.render();
        engine
    }

    pub fn config(&self) -> &EditorConfig { &self.config }
    pub fn store(&self) -> &BitmapStore { &self.store }
    pub fn history(&self) -> &HistoryManager { &self.history }
    pub fn tool_manager(&self) -> &ToolManager { &self.tool_manager }
    pub fn active_tool(&self) -> ToolType { self.tool_manager.active_type }
    pub fn primary_color(&self) -> Color { self.primary_color }
    pub fn is_drawing(&self) -> bool { self.tool_manager.is_drawing }
    pub fn view(&self) -> &ViewState { &self.view }
    pub fn view_mut(&mut self) -> &mut ViewState { &mut self.view }

    /// Last rendered viewport, `viewport_size`² RGBA pixels.
    pub fn frame(&self) -> &[u8] { &self.frame }
    pub fn frame_generation(&self) -> u64 { self.frame_generation }

    pub fn render(&mut self) {
        Compositor::render(&self.store, &mut self.frame, self.config.viewport_size, self.config.grid_size);
        self.frame_generation = self.frame_generation.wrapping_add(1);
    }

    pub fn set_tool(&mut self, tool: ToolType) {
        self.tool_manager.set_tool(tool);
        self.render();
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.primary_color = color;
        self.render();
    }

    /// Malformed input leaves the current color in place.
    pub fn set_primary_color_hex(&mut self, hex: &str) -> Result<()> {
        let color = Color::from_hex(hex)?;
        self.set_primary_color(color);
        Ok(())
    }

    pub fn undo(&mut self) {
        self.interrupt_stroke();
        self.history.undo(&mut self.store);
        self.render();
    }

    pub fn redo(&mut self) {
        self.interrupt_stroke();
        self.history.redo(&mut self.store);
        self.render();
    }

    pub fn clear(&mut self) {
        self.interrupt_stroke();
        self.history.record_checkpoint(&self.store);
        self.store.clear_all();
        self.render();
    }

    pub fn fill(&mut self) {
        self.interrupt_stroke();
        self.history.record_checkpoint(&self.store);
        self.store.fill_all(self.primary_color);
        self.render();
    }

    /// Flattened PNG of the bitmap at viewport size, or `None` if encoding
    /// produced nothing.
    pub fn export_png(&self) -> Option<Vec<u8>> {
        match IoService::encode_png(&self.store, self.config.viewport_size) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                log::warn!("export aborted: {}", e);
                None
            }
        }
    }

    fn paint_at(&mut self, x: f32, y: f32) {
        let (cx, cy) = self.view.screen_to_cell(x, y, self.config.grid_size);
        self.tool_manager.paint(cx, cy, self.primary_color, &mut self.store);
    }

    pub fn handle_input(&mut self, event: InputEvent, capture: &mut dyn PointerCapture) -> EngineEffect {
        match event {
            InputEvent::PointerDown { x, y } => {
                if self.tool_manager.is_drawing || self.capture_held {
                    // a down without an up: close the old stroke first
                    self.finish_stroke(capture);
                }
                match capture.acquire() {
                    Ok(()) => self.capture_held = true,
                    Err(e) => log::debug!("pointer capture unavailable: {}", e),
                }
                self.history.record_checkpoint(&self.store);
                self.tool_manager.begin_stroke();
                self.paint_at(x, y);
                self.render();
                EngineEffect::RedrawCanvas
            }
            InputEvent::PointerMove { x, y } => {
                if !self.tool_manager.is_drawing {
                    return EngineEffect::None;
                }
                self.paint_at(x, y);
                self.render();
                EngineEffect::RedrawCanvas
            }
            InputEvent::PointerUp | InputEvent::PointerCancel => {
                self.finish_stroke(capture);
                EngineEffect::None
            }
        }
    }

    fn finish_stroke(&mut self, capture: &mut dyn PointerCapture) {
        self.tool_manager.end_stroke();
        if !std::mem::replace(&mut self.capture_held, false) {
            return;
        }
        if let Err(e) = capture.release() {
            log::debug!("ignoring pointer capture release failure: {}", e);
        }
    }

    /// Ends the stroke before a whole-bitmap action so later moves of the same
    /// drag paint nothing. Capture stays held until the pointer comes up.
    fn interrupt_stroke(&mut self) {
        if self.tool_manager.end_stroke() {
            log::debug!("stroke interrupted");
        }
    }
}

impl Default for AvatarEngine {
    fn default() -> Self {
        Self::new()
    }
}
