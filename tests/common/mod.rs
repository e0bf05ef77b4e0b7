// Common test utilities for driving the editor headlessly

use quill::clipboard::MemoryClipboard;
use quill::command::Command;
use quill::cursor::Position;
use quill::editor::Editor;

/// Editor wired to an in-process clipboard so tests never touch the OS one
#[allow(dead_code)]
pub fn editor() -> Editor {
    Editor::with_clipboard(Box::new(MemoryClipboard::new()))
}

/// Type `text` one key at a time, the way the keyboard would
#[allow(dead_code)]
pub fn type_str(editor: &mut Editor, text: &str) {
    for c in text.chars() {
        let cmd = if c == '\n' {
            Command::InsertNewline
        } else {
            Command::InsertChar(c)
        };
        editor.execute_command(cmd);
    }
}

/// Enter a path into the open dialog and confirm it
#[allow(dead_code)]
pub fn answer_dialog(editor: &mut Editor, path: &str) {
    for c in path.chars() {
        editor.execute_command(Command::DialogInput(c));
    }
    editor.execute_command(Command::DialogConfirm);
}

/// Select the chars between two positions on line `line`
#[allow(dead_code)]
pub fn select_on_line(editor: &mut Editor, line: usize, start: usize, end: usize) {
    editor
        .text_area
        .select(Position::new(line, start), Position::new(line, end));
}

pub mod validation {
    use super::*;

    /// Assert cursor is within buffer bounds
    #[allow(dead_code)]
    pub fn assert_cursor_valid(editor: &Editor) {
        let buffer = &editor.text_area.buffer;
        let cursor = editor.text_area.cursor.position();
        assert!(
            cursor.line < buffer.line_count(),
            "cursor line {} out of bounds ({} lines)",
            cursor.line,
            buffer.line_count()
        );
        assert!(
            cursor.col <= buffer.line_len(cursor.line),
            "cursor col {} past end of line {} (len {})",
            cursor.col,
            cursor.line,
            buffer.line_len(cursor.line)
        );
    }
}
