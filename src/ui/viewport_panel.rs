use egui::{ColorImage, Sense, TextureHandle, TextureId, TextureOptions, Ui};
use crate::app::events::{EngineEffect, PointerCapture};
use crate::app::state::AppState;

/// Shows the engine's rendered viewport and turns drags on it into strokes.
pub struct ViewportPanel {
    texture: Option<TextureHandle>,
    uploaded_generation: Option<u64>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self { texture: None, uploaded_generation: None }
    }

    fn sync_texture(&mut self, ctx: &egui::Context, app: &AppState) -> Option<TextureId> {
        let generation = app.engine.frame_generation();
        if self.uploaded_generation != Some(generation) || self.texture.is_none() {
            let size = app.engine.config().viewport_size as usize;
            let image = ColorImage::from_rgba_unmultiplied([size, size], app.engine.frame());
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => self.texture = Some(ctx.load_texture("viewport", image, TextureOptions::NEAREST)),
            }
            self.uploaded_generation = Some(generation);
        }
        self.texture.as_ref().map(|t| t.id())
    }

    /// Returns `RedrawCanvas` when a pointer event changed the frame after it
    /// was uploaded for this pass.
    pub fn show(&mut self, ui: &mut Ui, app: &mut AppState, capture: &mut dyn PointerCapture) -> EngineEffect {
        let Some(texture_id) = self.sync_texture(ui.ctx(), app) else { return EngineEffect::None };

        // shrink to fit, never upscale past the logical size
        let logical = app.engine.config().viewport_size as f32;
        let available = ui.available_size();
        let side = available.x.min(available.y).min(logical).max(32.0);
        let top_pad = ((available.y - side) / 2.0).max(0.0);

        let (rect, response) = ui.vertical_centered(|ui| {
            ui.add_space(top_pad);
            let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), Sense::drag());
            egui::Image::new(texture_id, rect.size()).paint_at(ui, rect);
            (rect, response)
        }).inner;

        app.engine.view_mut().update_viewport(rect.min.x, rect.min.y, rect.width());

        let mut effect = EngineEffect::None;
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                effect = effect.merge(app.on_pointer_down(pos.x, pos.y, capture));
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                effect = effect.merge(app.on_pointer_move(pos.x, pos.y, capture));
            }
        }
        if response.drag_released() {
            effect = effect.merge(app.on_pointer_up(capture));
        }
        effect
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}
