use pixel_avatar::app::command_handler::CommandHandler;
use pixel_avatar::app::commands::AppCommand;
use pixel_avatar::app::error::AppError;
use pixel_avatar::app::events::{EngineEffect, NoCapture};
use pixel_avatar::app::state::AppState;
use pixel_avatar::core::color::Color;
use pixel_avatar::tools::ToolType;

fn run(state: &mut AppState, cmds: Vec<AppCommand>) {
    for cmd in cmds {
        state.enqueue_command(cmd);
    }
    while let Some(cmd) = state.pop_command() {
        CommandHandler::execute(state, cmd);
    }
}

#[test]
fn test_queue_is_fifo() {
    let mut state = AppState::new();
    state.enqueue_command(AppCommand::Undo);
    state.enqueue_command(AppCommand::Redo);
    assert_eq!(state.pop_command(), Some(AppCommand::Undo));
    assert_eq!(state.pop_command(), Some(AppCommand::Redo));
    assert_eq!(state.pop_command(), None);
}

#[test]
fn test_select_tool() {
    let mut state = AppState::new();
    assert_eq!(state.engine.active_tool(), ToolType::Brush);
    run(&mut state, vec![AppCommand::SelectTool(ToolType::Erase)]);
    assert_eq!(state.engine.active_tool(), ToolType::Erase);
}

#[test]
fn test_valid_hex_sets_color() {
    let mut state = AppState::new();
    run(&mut state, vec![AppCommand::SetPrimaryColorHex("ff8800".into())]);
    assert_eq!(state.engine.primary_color(), Color::opaque(0xff, 0x88, 0x00));
    assert!(state.ui.error_message.is_none());
}

#[test]
fn test_invalid_hex_reports_and_keeps_color() {
    let mut state = AppState::new();
    run(&mut state, vec![AppCommand::SetPrimaryColor(Color::opaque(1, 2, 3))]);
    state.ui.hex_input = "#zzz".into();
    run(&mut state, vec![AppCommand::SetPrimaryColorHex("#zzz".into())]);

    assert_eq!(state.engine.primary_color(), Color::opaque(1, 2, 3));
    assert!(state.ui.error_message.is_some());
    assert_eq!(state.ui.hex_input, "#010203");

    run(&mut state, vec![AppCommand::DismissError]);
    assert!(state.ui.error_message.is_none());
}

#[test]
fn test_fill_clear_undo_redo() {
    let mut state = AppState::new();
    run(&mut state, vec![
        AppCommand::SetPrimaryColor(Color::opaque(9, 9, 9)),
        AppCommand::Fill,
        AppCommand::Clear,
        AppCommand::Undo,
    ]);
    assert_eq!(state.engine.store().get_pixel(31, 0), Some(Color::opaque(9, 9, 9)));

    run(&mut state, vec![AppCommand::Redo]);
    assert_eq!(state.engine.store().get_pixel(31, 0).unwrap().a, 0);
}

#[test]
fn test_pointer_routing_through_state() {
    let mut state = AppState::new();
    let mut capture = NoCapture;
    state.on_pointer_down(20.0, 20.0, &mut capture);
    state.on_pointer_move(36.0, 20.0, &mut capture);
    state.on_pointer_up(&mut capture);
    assert_eq!(state.engine.store().get_pixel(1, 1).unwrap().a, 255);
    assert_eq!(state.engine.store().get_pixel(2, 1).unwrap().a, 255);

    run(&mut state, vec![AppCommand::Undo]);
    assert!(state.engine.store().pixels().iter().all(|&b| b == 0));
}

#[test]
fn test_window_close_is_left_to_shell() {
    let mut state = AppState::new();
    run(&mut state, vec![AppCommand::WindowClose]);
    assert!(state.ui.error_message.is_none());
}

#[test]
fn test_hex_error_surfaces_as_app_error() {
    let mut state = AppState::new();
    let err = state.set_primary_color_hex("#12345g").unwrap_err();
    assert!(matches!(err, AppError::Core(_)));
    assert!(err.to_string().contains("#12345g"));
    assert_eq!(state.ui.hex_input, "#000000");
    assert!(state.set_primary_color_hex(" 0A0b0C ").is_ok());
    assert_eq!(state.ui.hex_input, "#0a0b0c");
}

#[test]
fn test_pointer_effects_report_redraws() {
    let mut state = AppState::new();
    let mut capture = NoCapture;
    assert_eq!(state.on_pointer_move(8.0, 8.0, &mut capture), EngineEffect::None);
    assert_eq!(state.on_pointer_down(8.0, 8.0, &mut capture), EngineEffect::RedrawCanvas);
    assert_eq!(state.on_pointer_move(24.0, 8.0, &mut capture), EngineEffect::RedrawCanvas);
    assert_eq!(state.on_pointer_up(&mut capture), EngineEffect::None);
    assert_eq!(state.on_pointer_cancel(&mut capture), EngineEffect::None);
}
