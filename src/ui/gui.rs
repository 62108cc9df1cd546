use crate::app::commands::AppCommand;
use crate::app::events::{EngineEffect, PointerCapture};
use crate::app::state::AppState;
use crate::tools::ToolType;
use crate::ui::toolbar::Toolbar;
use crate::ui::viewport_panel::ViewportPanel;
use rust_i18n::t;

pub struct Gui {
    viewport: ViewportPanel,
}

impl Gui {
    pub fn new() -> Self {
        Self { viewport: ViewportPanel::new() }
    }

    pub fn ui(&mut self, ctx: &egui::Context, app: &mut AppState, capture: &mut dyn PointerCapture) -> EngineEffect {
        Self::handle_shortcuts(ctx, app);

        egui::SidePanel::left("toolbar").resizable(false).default_width(170.0).show(ctx, |ui| {
            ui.add_space(8.0);
            Toolbar::show(ui, app);
        });

        let frame = egui::Frame::none().fill(egui::Color32::from_rgb(25, 25, 25));
        let effect = egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            self.viewport.show(ui, app, capture)
        }).inner;

        Self::error_window(ctx, app);
        effect
    }

    fn handle_shortcuts(ctx: &egui::Context, app: &mut AppState) {
        if ctx.wants_keyboard_input() { return; }

        let (undo, redo) = ctx.input(|i| {
            let cmd = i.modifiers.command;
            (
                cmd && !i.modifiers.shift && i.key_pressed(egui::Key::Z),
                cmd && (i.key_pressed(egui::Key::Y) || (i.modifiers.shift && i.key_pressed(egui::Key::Z))),
            )
        });
        if undo { app.enqueue_command(AppCommand::Undo); }
        if redo { app.enqueue_command(AppCommand::Redo); }

        let tool = ctx.input(|i| {
            i.events.iter().rev().find_map(|event| match event {
                egui::Event::Text(text) if text == "b" => Some(ToolType::Brush),
                egui::Event::Text(text) if text == "e" => Some(ToolType::Erase),
                _ => None,
            })
        });
        if let Some(tool) = tool {
            app.enqueue_command(AppCommand::SelectTool(tool));
        }
    }

    fn error_window(ctx: &egui::Context, app: &mut AppState) {
        let Some(message) = app.ui.error_message.clone() else { return };
        egui::Window::new(t!("error.title").to_string())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button(t!("action.ok").to_string()).clicked() {
                    app.enqueue_command(AppCommand::DismissError);
                }
            });
    }
}

impl Default for Gui {
    fn default() -> Self {
        Self::new()
    }
}
