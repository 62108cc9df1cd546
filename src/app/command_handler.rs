use crate::app::commands::AppCommand;
use crate::app::state::AppState;

pub struct CommandHandler;

impl CommandHandler {
    pub fn execute(app_state: &mut AppState, cmd: AppCommand) {
        match cmd {
            AppCommand::SelectTool(tool) => app_state.set_tool(tool),
            AppCommand::SetPrimaryColor(color) => app_state.engine.set_primary_color(color),
            AppCommand::SetPrimaryColorHex(hex) => {
                if let Err(e) = app_state.set_primary_color_hex(&hex) {
                    app_state.ui.error_message = Some(e.to_string());
                }
            }
            AppCommand::Undo => app_state.undo(),
            AppCommand::Redo => app_state.redo(),
            AppCommand::Clear => app_state.clear(),
            AppCommand::Fill => app_state.fill(),
            AppCommand::ExportPng => app_state.export_to_png(),
            AppCommand::SetLanguage(lang) => {
                rust_i18n::set_locale(&lang);
                app_state.ui.language = lang;
            }
            AppCommand::DismissError => app_state.ui.error_message = None,
            // handled by the window shell
            AppCommand::WindowClose => {}
        }
    }
}
