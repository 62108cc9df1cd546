use egui::{Color32, RichText, Ui};
use crate::app::commands::AppCommand;
use crate::app::state::AppState;
use crate::core::color::Color;
use crate::tools::ToolType;
use rust_i18n::t;

const LANGUAGES: [(&str, &str); 2] = [("en", "English"), ("zh-CN", "简体中文")];

pub struct Toolbar;

impl Toolbar {
    pub fn show(ui: &mut Ui, app: &mut AppState) {
        Self::section(ui, &t!("toolbar.tools").to_string());
        ui.horizontal(|ui| {
            for tool in ToolType::ALL {
                Self::tool_btn(ui, app, tool);
            }
        });

        ui.separator();
        Self::section(ui, &t!("toolbar.color").to_string());
        let current = app.engine.primary_color();
        let mut rgb = [current.r, current.g, current.b];
        ui.horizontal(|ui| {
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                let picked = Color::opaque(rgb[0], rgb[1], rgb[2]);
                app.ui.hex_input = picked.to_hex();
                app.enqueue_command(AppCommand::SetPrimaryColor(picked));
            }
            let hex = ui.add(egui::TextEdit::singleline(&mut app.ui.hex_input).desired_width(72.0));
            if hex.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                app.enqueue_command(AppCommand::SetPrimaryColorHex(app.ui.hex_input.clone()));
            }
        });

        ui.separator();
        Self::section(ui, &t!("toolbar.history").to_string());
        let (can_undo, can_redo) = (app.engine.history().can_undo(), app.engine.history().can_redo());
        ui.horizontal(|ui| {
            if ui.add_enabled(can_undo, egui::Button::new(t!("action.undo").to_string())).clicked() {
                app.enqueue_command(AppCommand::Undo);
            }
            if ui.add_enabled(can_redo, egui::Button::new(t!("action.redo").to_string())).clicked() {
                app.enqueue_command(AppCommand::Redo);
            }
        });
        ui.horizontal(|ui| {
            if ui.button(t!("action.clear").to_string()).clicked() {
                app.enqueue_command(AppCommand::Clear);
            }
            if ui.button(t!("action.fill").to_string()).clicked() {
                app.enqueue_command(AppCommand::Fill);
            }
        });

        ui.separator();
        if ui.button(t!("action.export").to_string()).clicked() {
            app.enqueue_command(AppCommand::ExportPng);
        }

        ui.add_space(12.0);
        Self::section(ui, &t!("toolbar.language").to_string());
        let selected = LANGUAGES.iter()
            .find(|(code, _)| *code == app.ui.language)
            .map(|(_, name)| *name)
            .unwrap_or("English");
        egui::ComboBox::from_id_source("language")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for (code, name) in LANGUAGES {
                    if ui.selectable_label(app.ui.language == code, name).clicked() {
                        app.enqueue_command(AppCommand::SetLanguage(code.to_string()));
                    }
                }
            });
    }

    fn section(ui: &mut Ui, title: &str) {
        ui.label(RichText::new(title).size(10.0).color(Color32::GRAY));
    }

    fn tool_btn(ui: &mut Ui, app: &mut AppState, tool: ToolType) {
        let name = match tool {
            ToolType::Brush => t!("tool.brush").to_string(),
            ToolType::Erase => t!("tool.erase").to_string(),
        };
        let is_active = app.engine.active_tool() == tool;
        let text = RichText::new(name).color(if is_active { Color32::LIGHT_BLUE } else { Color32::GRAY });
        if ui.selectable_label(is_active, text).clicked() {
            app.enqueue_command(AppCommand::SelectTool(tool));
        }
    }
}
