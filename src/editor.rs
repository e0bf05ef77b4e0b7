// src/editor.rs - Editor application controller

use crate::clipboard::{ClipboardPort, system_or_memory};
use crate::command::{Command, Invocation};
use crate::config::QuillConfig;
use crate::cursor::Motion;
use crate::dialog::{DialogKind, DialogOutcome, FileDialog};
use crate::error::EditorError;
use crate::history::TextHistory;
use crate::menu::MenuBar;
use crate::mode::Mode;
use crate::text_area::TextArea;
use crate::viewport::Viewport;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub const INITIAL_TITLE: &str = "My Text Editor";
pub const UNTITLED_TITLE: &str = "Text Editor";
pub const INITIAL_STATUS: &str = "Start";
pub const READY_STATUS: &str = "Ready";
pub const SAVED_STATUS: &str = "File saved successfully!";

/// Owns the single open document and wires commands to it.
pub struct Editor {
    pub text_area: TextArea,
    pub mode: Mode,
    pub viewport: Viewport,
    pub menu_bar: MenuBar,
    pub dialog: Option<FileDialog>,
    pub title: String,
    pub status_message: String,
    /// File last loaded or saved; `None` while untitled.
    pub file_path: Option<PathBuf>,
    /// Text captured by the last Cut/Copy. Paste reads it without clearing.
    pub selection_buffer: Option<String>,
    clipboard: Box<dyn ClipboardPort>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(&QuillConfig::default(), system_or_memory())
    }

    pub fn with_clipboard(clipboard: Box<dyn ClipboardPort>) -> Self {
        Self::with_config(&QuillConfig::default(), clipboard)
    }

    pub fn with_config(config: &QuillConfig, clipboard: Box<dyn ClipboardPort>) -> Self {
        let mut text_area = TextArea::new(config.undo_limit);
        text_area.tab_width = config.tab_width;

        Self {
            text_area,
            mode: Mode::Editing,
            viewport: Viewport::new(20, 80),
            menu_bar: MenuBar::new(),
            dialog: None,
            title: INITIAL_TITLE.to_string(),
            status_message: INITIAL_STATUS.to_string(),
            file_path: None,
            selection_buffer: None,
            clipboard,
        }
    }

    pub fn text(&self) -> String {
        self.text_area.text()
    }

    pub fn execute_command(&mut self, cmd: Command) -> bool {
        // Returns true if should quit
        debug!("command {:?}", cmd);
        let result = match cmd {
            Command::Exit => return true,
            Command::New => {
                self.new_file();
                Ok(())
            }
            Command::Open => {
                self.begin_dialog(DialogKind::Open);
                Ok(())
            }
            Command::Save => self.save(),
            Command::SaveAs => {
                self.begin_dialog(DialogKind::SaveAs);
                Ok(())
            }
            Command::Cut(how) => self.cut(how),
            Command::Copy(how) => self.copy(how),
            Command::Paste(how) => self.paste(how),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::SelectAll => {
                self.text_area.select_all();
                Ok(())
            }
            Command::InsertChar(c) => self.text_area.insert_char(c).map_err(EditorError::from),
            Command::InsertNewline => self.text_area.insert_text("\n").map_err(EditorError::from),
            Command::InsertTab => self.text_area.insert_tab().map_err(EditorError::from),
            Command::DeleteBackward => self.text_area.delete_backward().map_err(EditorError::from),
            Command::DeleteForward => self.text_area.delete_forward().map_err(EditorError::from),
            Command::Move { motion, extend } => {
                if matches!(motion, Motion::PageUp | Motion::PageDown) {
                    self.text_area.page_rows = self.viewport.rows;
                }
                self.text_area.move_cursor(motion, extend);
                Ok(())
            }
            Command::OpenMenu(index) => {
                self.menu_bar.open_menu(index);
                if self.menu_bar.is_open() {
                    self.mode = Mode::Menu;
                }
                Ok(())
            }
            Command::MenuLeft => {
                self.menu_bar.prev_menu();
                Ok(())
            }
            Command::MenuRight => {
                self.menu_bar.next_menu();
                Ok(())
            }
            Command::MenuUp => {
                self.menu_bar.select_prev();
                Ok(())
            }
            Command::MenuDown => {
                self.menu_bar.select_next();
                Ok(())
            }
            Command::CloseMenu => {
                self.menu_bar.close();
                self.mode = Mode::Editing;
                Ok(())
            }
            Command::MenuActivate => {
                self.mode = Mode::Editing;
                if let Some(chosen) = self.menu_bar.activate() {
                    return self.execute_command(chosen);
                }
                Ok(())
            }
            Command::DialogInput(c) => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.push_char(c);
                }
                Ok(())
            }
            Command::DialogBackspace => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.backspace();
                }
                Ok(())
            }
            Command::DialogNextFilter => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.next_filter();
                }
                Ok(())
            }
            Command::DialogUp => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.select_prev();
                }
                Ok(())
            }
            Command::DialogDown => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.select_next();
                }
                Ok(())
            }
            Command::DialogConfirm => self.confirm_dialog(),
            Command::DialogCancel => self.close_dialog(DialogOutcome::Cancelled),
        };

        if let Err(err) = result {
            self.report(err);
        }

        let cursor = self.text_area.insertion_point();
        self.viewport.scroll_to_cursor(cursor.line, cursor.col);
        false // Don't quit by default
    }

    fn report(&mut self, err: EditorError) {
        warn!("{}", err);
        self.status_message = format!("Error: {}", err);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        // Menu bar on top, status bar at the bottom
        self.viewport
            .resize((rows as usize).saturating_sub(2), cols as usize);
    }

    pub fn new_file(&mut self) {
        self.text_area.clear();
        self.file_path = None;
        self.title = UNTITLED_TITLE.to_string();
        self.set_status(READY_STATUS);
        info!("new document");
    }

    /// Load `path` into the buffer, replacing its contents. On failure the
    /// current document is left untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<(), EditorError> {
        check_path(path)?;
        self.text_area
            .load_file(path)
            .map_err(|e| EditorError::from_file(path, e))?;
        self.file_path = Some(path.to_path_buf());
        self.set_status(format!("Opened {}", path.display()));
        info!("opened {} ({} chars)", path.display(), self.text_area.buffer.len_chars());
        Ok(())
    }

    /// Save to the current path, or ask for one when untitled.
    pub fn save(&mut self) -> Result<(), EditorError> {
        match self.file_path.clone() {
            Some(path) => self.write_to(&path),
            None => {
                self.begin_dialog(DialogKind::SaveAs);
                Ok(())
            }
        }
    }

    /// Write the buffer to `path` and make it the current file.
    pub fn save_as_path(&mut self, path: &Path) -> Result<(), EditorError> {
        check_path(path)?;
        self.write_to(path)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), EditorError> {
        self.text_area
            .buffer
            .save_to_file(path)
            .map_err(|e| EditorError::from_file(path, e))?;
        self.set_status(SAVED_STATUS);
        info!("saved {}", path.display());
        Ok(())
    }

    pub fn cut(&mut self, how: Invocation) -> Result<(), EditorError> {
        let text = self
            .text_area
            .delete_selection()?
            .ok_or(EditorError::EmptySelection)?;
        debug!("cut {} chars via {:?}", text.chars().count(), how);
        self.publish(&text);
        self.selection_buffer = Some(text);
        self.set_status("Cut");
        Ok(())
    }

    pub fn copy(&mut self, how: Invocation) -> Result<(), EditorError> {
        let text = self
            .text_area
            .selected_text()
            .ok_or(EditorError::EmptySelection)?;
        debug!("copied {} chars via {:?}", text.chars().count(), how);
        self.publish(&text);
        self.selection_buffer = Some(text);
        self.set_status("Copied");
        Ok(())
    }

    fn publish(&mut self, text: &str) {
        if let Err(e) = self.clipboard.write(text) {
            warn!("clipboard write failed: {}", e);
        }
    }

    /// Insert at the cursor. The menu path uses the selection buffer; the
    /// shortcut path prefers the OS clipboard.
    pub fn paste(&mut self, how: Invocation) -> Result<(), EditorError> {
        let text = match how {
            Invocation::Menu => self.selection_buffer.clone(),
            Invocation::Shortcut => self
                .clipboard
                .read()
                .or_else(|| self.selection_buffer.clone()),
        };
        match text.filter(|t| !t.is_empty()) {
            Some(text) => {
                self.text_area.insert_text(&text)?;
                self.set_status("Pasted");
            }
            None => self.set_status("Nothing to paste"),
        }
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), EditorError> {
        if self.text_area.undo()? {
            self.set_status("Undo");
        } else {
            self.set_status("Nothing to undo");
        }
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), EditorError> {
        if self.text_area.redo()? {
            self.set_status("Redo");
        } else {
            self.set_status("Nothing to redo");
        }
        Ok(())
    }

    pub fn begin_dialog(&mut self, kind: DialogKind) {
        let base = self
            .file_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        self.begin_dialog_in(kind, &base);
    }

    pub fn begin_dialog_in(&mut self, kind: DialogKind, dir: &Path) {
        self.menu_bar.close();
        self.dialog = Some(FileDialog::new(kind, dir));
        self.mode = Mode::Dialog;
    }

    fn confirm_dialog(&mut self) -> Result<(), EditorError> {
        let Some(dialog) = &mut self.dialog else {
            return Ok(());
        };
        match dialog.confirm() {
            Some(outcome) => self.close_dialog(outcome),
            None => Ok(()),
        }
    }

    /// Finish the dialog. Cancelling changes nothing, not even the status.
    pub fn close_dialog(&mut self, outcome: DialogOutcome) -> Result<(), EditorError> {
        let Some(dialog) = self.dialog.take() else {
            return Ok(());
        };
        self.mode = Mode::Editing;
        match outcome {
            DialogOutcome::Cancelled => {
                debug!("{} cancelled", dialog.kind.title());
                Ok(())
            }
            DialogOutcome::Chosen(path) => match dialog.kind {
                DialogKind::Open => self.open_path(&path),
                DialogKind::SaveAs => self.save_as_path(&path),
            },
        }
    }
}

fn check_path(path: &Path) -> Result<(), EditorError> {
    if path.as_os_str().is_empty() {
        return Err(EditorError::InvalidPath(String::new()));
    }
    Ok(())
}
