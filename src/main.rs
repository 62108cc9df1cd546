#![windows_subsystem = "windows"]
use pixel_avatar::app::command_handler::CommandHandler;
use pixel_avatar::app::commands::AppCommand;
use pixel_avatar::app::error::{AppError, Result as AppResult};
use pixel_avatar::app::events::PointerCapture;
use pixel_avatar::app::logging::{init_logging, LoggingConfig};
use pixel_avatar::app::state::AppState;
use pixel_avatar::ui::framework::GuiFramework;
use pixel_avatar::ui::gui::Gui;

use pixels::{Pixels, SurfaceTexture};
use rust_i18n::t;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowBuilder},
};

rust_i18n::i18n!("locales");

const BACKGROUND: [u8; 4] = [25, 25, 25, 255];

/// Keeps the cursor inside the window for the length of a stroke.
struct WindowCapture<'a>(&'a Window);

impl PointerCapture for WindowCapture<'_> {
    fn acquire(&mut self) -> AppResult<()> {
        self.0.set_cursor_grab(CursorGrabMode::Confined)
            .map_err(|e| AppError::PointerCapture(e.to_string()))
    }

    fn release(&mut self) -> AppResult<()> {
        self.0.set_cursor_grab(CursorGrabMode::None)
            .map_err(|e| AppError::PointerCapture(e.to_string()))
    }
}

fn fill_background(frame: &mut [u8]) {
    for px in frame.chunks_exact_mut(4) {
        px.copy_from_slice(&BACKGROUND);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());
    rust_i18n::set_locale("en");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(t!("app.title").to_string())
        .with_inner_size(LogicalSize::new(760.0, 600.0))
        .with_min_inner_size(LogicalSize::new(480.0, 360.0))
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let mut app_state = AppState::new();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = match Pixels::new(window_size.width, window_size.height, surface_texture) {
        Ok(p) => p,
        Err(e) => {
            rfd::MessageDialog::new()
                .set_title(&t!("error.hardware_init_title").to_string())
                .set_description(&t!("error.hardware_init_desc", error = e.to_string()).to_string())
                .set_level(rfd::MessageLevel::Error)
                .show();
            return Err(e.into());
        }
    };
    fill_background(pixels.frame_mut());

    let mut framework = GuiFramework::new(
        window_size.width,
        window_size.height,
        window.scale_factor() as f32,
        &pixels,
        Gui::new(),
        &event_loop,
    );
    log::info!(
        "editor ready: {0}x{0} grid, {1}px viewport",
        app_state.engine.config().grid_size,
        app_state.engine.config().viewport_size
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                framework.handle_event(&event);

                match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(size) => {
                        if size.width == 0 || size.height == 0 { return; }
                        if let Err(e) = pixels.resize_surface(size.width, size.height) {
                            log::error!("resize surface failed: {}", e);
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                        if let Err(e) = pixels.resize_buffer(size.width, size.height) {
                            log::error!("resize buffer failed: {}", e);
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                        fill_background(pixels.frame_mut());
                        framework.resize(size.width, size.height);
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        framework.scale_factor(scale_factor as f32);
                    }
                    WindowEvent::Focused(false) => {
                        app_state.on_pointer_cancel(&mut WindowCapture(&window));
                    }
                    _ => {}
                }
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                while let Some(cmd) = app_state.pop_command() {
                    match cmd {
                        AppCommand::WindowClose => *control_flow = ControlFlow::Exit,
                        _ => CommandHandler::execute(&mut app_state, cmd),
                    }
                }

                let effect = framework.prepare(&window, &mut app_state, &mut WindowCapture(&window));

                let render_result = pixels.render_with(|encoder, render_target, context| {
                    context.scaling_renderer.render(encoder, render_target);
                    framework.render(encoder, render_target, context);
                    Ok(())
                });
                if let Err(e) = render_result {
                    log::error!("render failed: {}", e);
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                // the viewport texture lags one frame behind a paint or a queued command
                if effect.needs_redraw() || !app_state.command_queue.is_empty() {
                    window.request_redraw();
                }
            }
            _ => (),
        }
    });
}
