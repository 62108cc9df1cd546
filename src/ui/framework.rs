use egui::{Context, Visuals};
use egui_wgpu::{renderer::ScreenDescriptor, Renderer};
use egui_winit::State;
use pixels::{wgpu, PixelsContext};
use winit::event::WindowEvent;
use winit::event_loop::EventLoopWindowTarget;
use winit::window::Window;

use crate::app::events::{EngineEffect, PointerCapture};
use crate::app::state::AppState;
use crate::ui::gui::Gui;

/// egui on top of the `pixels` surface.
pub struct GuiFramework {
    egui_ctx: Context,
    egui_state: State,
    screen_descriptor: ScreenDescriptor,
    renderer: Renderer,
    gui: Gui,
}

impl GuiFramework {
    pub fn new<T>(
        width: u32,
        height: u32,
        scale_factor: f32,
        pixels: &pixels::Pixels,
        gui: Gui,
        event_loop: &EventLoopWindowTarget<T>,
    ) -> Self {
        let egui_ctx = Context::default();
        egui_ctx.set_visuals(Visuals::dark());
        let mut egui_state = State::new(event_loop);
        egui_state.set_pixels_per_point(scale_factor);

        let renderer = Renderer::new(pixels.device(), pixels.render_texture_format(), None, 1);
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: scale_factor,
        };

        Self { egui_ctx, egui_state, screen_descriptor, renderer, gui }
    }

    /// Returns true when egui wants a repaint for this event.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        self.egui_state.on_event(&self.egui_ctx, event).repaint
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen_descriptor.size_in_pixels = [width, height];
    }

    pub fn scale_factor(&mut self, scale_factor: f32) {
        self.screen_descriptor.pixels_per_point = scale_factor;
        self.egui_state.set_pixels_per_point(scale_factor);
    }

    /// Runs the UI for one frame. Pointer strokes on the viewport reach the
    /// engine from inside this call.
    pub fn prepare(&mut self, window: &Window, app: &mut AppState, capture: &mut dyn PointerCapture) -> EngineEffect {
        let raw_input = self.egui_state.take_egui_input(window);
        self.egui_ctx.begin_frame(raw_input);
        let ctx = self.egui_ctx.clone();
        self.gui.ui(&ctx, app, capture)
    }

    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        render_target: &wgpu::TextureView,
        context: &PixelsContext,
    ) {
        let full_output = self.egui_ctx.end_frame();
        let paint_jobs = self.egui_ctx.tessellate(full_output.shapes);

        for (id, image_delta) in full_output.textures_delta.set {
            self.renderer.update_texture(&context.device, &context.queue, id, &image_delta);
        }
        self.renderer.update_buffers(&context.device, &context.queue, encoder, &paint_jobs, &self.screen_descriptor);

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: render_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: true,
                    },
                })],
                depth_stencil_attachment: None,
            });
            self.renderer.render(&mut rpass, &paint_jobs, &self.screen_descriptor);
        }

        for id in full_output.textures_delta.free {
            self.renderer.free_texture(&id);
        }
    }
}
