pub mod config;
pub mod error;
pub mod logging;
pub mod events;
pub mod view_state;
pub mod tool_manager;
pub mod engine;
pub mod io_service;
pub mod commands;
pub mod command_handler;
pub mod ui_state;
pub mod state;
