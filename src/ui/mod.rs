pub mod framework;
pub mod gui;
pub mod toolbar;
pub mod viewport_panel;
