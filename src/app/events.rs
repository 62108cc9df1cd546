use crate::app::error::Result;

/// Pointer positions are in host window coordinates; the engine maps them
/// through its `ViewState`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEffect {
    None,
    RedrawCanvas,
}

impl EngineEffect {
    pub fn merge(self, other: EngineEffect) -> EngineEffect {
        match (self, other) {
            (EngineEffect::RedrawCanvas, _) | (_, EngineEffect::RedrawCanvas) => EngineEffect::RedrawCanvas,
            _ => EngineEffect::None,
        }
    }

    pub fn needs_redraw(self) -> bool {
        self == EngineEffect::RedrawCanvas
    }
}

/// Routes the rest of a drag to the interaction that started it.
pub trait PointerCapture {
    fn acquire(&mut self) -> Result<()>;
    fn release(&mut self) -> Result<()>;
}

pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&mut self) -> Result<()> { Ok(()) }
    fn release(&mut self) -> Result<()> { Ok(()) }
}
