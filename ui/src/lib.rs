pub mod about;
pub mod app;
pub mod game_display;
pub mod render_control;
pub mod render_thread;
pub mod snapshot_editor;
pub mod ui_traits;
