// lib.rs - Library root for the quill editor

pub mod buffer;
pub mod cli;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod cursor;
pub mod dialog;
pub mod editor;
pub mod error;
pub mod history;
pub mod keymap;
pub mod menu;
pub mod mode;
pub mod text_area;
pub mod ui;
pub mod viewport;
