// ui/widgets/mod.rs - UI widgets

pub mod editor_pane;
pub mod file_dialog;
pub mod menu_bar;
pub mod status_bar;
