// src/text_area.rs - Editable text widget: document, cursor, selection and history

use crate::buffer::{Buffer, BufferError};
use crate::cursor::{Cursor, Motion, Position};
use crate::history::{DEFAULT_UNDO_LIMIT, Edit, EditHistory, TextHistory};
use log::debug;
use std::path::Path;

/// The text widget the editor drives.
///
/// All document mutations go through here so that every change lands in
/// the undo log. Positions handed in from outside are clamped to the
/// document, so callers never have to pre-validate them.
pub struct TextArea {
    pub buffer: Buffer,
    pub cursor: Cursor,
    /// Selection anchor. The selection runs from here to the cursor.
    pub anchor: Option<Position>,
    /// Rows moved by PageUp/PageDown.
    pub page_rows: usize,
    /// Spaces inserted for Tab; 0 inserts a literal tab.
    pub tab_width: usize,
    history: EditHistory,
}

impl TextArea {
    pub fn new(undo_limit: usize) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            anchor: None,
            page_rows: 20,
            tab_width: 4,
            history: EditHistory::new(undo_limit),
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut area = Self::default();
        area.buffer = Buffer::from_text(text);
        area
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.modified
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Replace the whole document. Drops the selection and the undo log.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = Buffer::from_text(text);
        self.reset_view();
    }

    /// Load a file as the whole document. On failure nothing changes.
    pub fn load_file(&mut self, path: &Path) -> Result<(), BufferError> {
        let mut buffer = Buffer::new();
        buffer.load_from_file(path)?;
        self.buffer = buffer;
        self.reset_view();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.cursor = Cursor::new();
        self.anchor = None;
        self.history.clear();
    }

    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.buffer.line_count().saturating_sub(1));
        Position::new(line, pos.col.min(self.buffer.line_len(line)))
    }

    pub fn pos_to_char(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.buffer.line_to_char(pos.line) + pos.col
    }

    pub fn char_to_pos(&self, char_idx: usize) -> Position {
        let idx = char_idx.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(idx);
        self.clamp(Position::new(line, idx - self.buffer.line_to_char(line)))
    }

    pub fn insertion_point(&self) -> Position {
        self.cursor.position()
    }

    fn cursor_char(&self) -> usize {
        self.pos_to_char(self.cursor.position())
    }

    fn set_cursor_char(&mut self, char_idx: usize) {
        let pos = self.char_to_pos(char_idx);
        self.cursor.set(pos);
    }

    /// Place the insertion point and drop any selection.
    pub fn move_to(&mut self, pos: Position) {
        let pos = self.clamp(pos);
        self.cursor.set(pos);
        self.anchor = None;
        self.history.seal();
    }

    pub fn select(&mut self, anchor: Position, head: Position) {
        self.anchor = Some(self.clamp(anchor));
        let head = self.clamp(head);
        self.cursor.set(head);
        self.history.seal();
    }

    pub fn select_all(&mut self) {
        let last = self.buffer.line_count().saturating_sub(1);
        let end = Position::new(last, self.buffer.line_len(last));
        self.select(Position::default(), end);
    }

    /// Normalized selection as a char range, `None` when nothing is selected.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.pos_to_char(self.anchor?);
        let head = self.cursor_char();
        if anchor == head {
            None
        } else {
            Some((anchor.min(head), anchor.max(head)))
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection_range()?;
        self.buffer.slice(start..end).ok()
    }

    /// Remove the selected text and return it.
    pub fn delete_selection(&mut self) -> Result<Option<String>, BufferError> {
        let Some((start, end)) = self.selection_range() else {
            self.anchor = None;
            return Ok(None);
        };
        let removed = self.buffer.remove(start..end)?;
        self.record_edit(Edit::Delete {
            at: start,
            text: removed.clone(),
        });
        self.anchor = None;
        self.set_cursor_char(start);
        Ok(Some(removed))
    }

    /// Insert a typed character, replacing the selection if there is one.
    pub fn insert_char(&mut self, c: char) -> Result<(), BufferError> {
        if c == '\n' {
            return self.insert_text("\n");
        }
        if self.has_selection() {
            return self.replace_selection(&c.to_string());
        }
        self.anchor = None;
        let at = self.cursor_char();
        let text = c.to_string();
        self.buffer.insert(at, &text)?;
        self.history.push(Edit::Insert { at, text }, true);
        self.set_cursor_char(at + 1);
        Ok(())
    }

    pub fn insert_tab(&mut self) -> Result<(), BufferError> {
        if self.tab_width == 0 {
            self.insert_char('\t')
        } else {
            self.insert_text(&" ".repeat(self.tab_width))
        }
    }

    /// Insert a block of text at the cursor as one undo step.
    pub fn insert_text(&mut self, text: &str) -> Result<(), BufferError> {
        if self.has_selection() {
            return self.replace_selection(text);
        }
        self.anchor = None;
        if text.is_empty() {
            return Ok(());
        }
        let at = self.cursor_char();
        self.buffer.insert(at, text)?;
        self.record_edit(Edit::Insert {
            at,
            text: text.to_string(),
        });
        self.set_cursor_char(at + text.chars().count());
        Ok(())
    }

    /// Swap the selection for `text`, undone in a single step.
    fn replace_selection(&mut self, text: &str) -> Result<(), BufferError> {
        let Some((start, end)) = self.selection_range() else {
            return Ok(());
        };
        let removed = self.buffer.remove(start..end)?;
        self.buffer.insert(start, text)?;
        self.record_edit(Edit::Replace {
            at: start,
            removed,
            inserted: text.to_string(),
        });
        self.anchor = None;
        self.set_cursor_char(start + text.chars().count());
        Ok(())
    }

    pub fn delete_backward(&mut self) -> Result<(), BufferError> {
        if self.has_selection() {
            self.delete_selection()?;
            return Ok(());
        }
        self.anchor = None;
        let end = self.cursor_char();
        if end == 0 {
            return Ok(());
        }
        let start = if end >= 2 && self.buffer.slice(end - 2..end)? == "\r\n" {
            end - 2
        } else {
            end - 1
        };
        self.remove_range(start, end)
    }

    pub fn delete_forward(&mut self) -> Result<(), BufferError> {
        if self.has_selection() {
            self.delete_selection()?;
            return Ok(());
        }
        self.anchor = None;
        let start = self.cursor_char();
        let len = self.buffer.len_chars();
        if start >= len {
            return Ok(());
        }
        let end = if start + 2 <= len && self.buffer.slice(start..start + 2)? == "\r\n" {
            start + 2
        } else {
            start + 1
        };
        self.remove_range(start, end)
    }

    fn remove_range(&mut self, start: usize, end: usize) -> Result<(), BufferError> {
        let removed = self.buffer.remove(start..end)?;
        self.record_edit(Edit::Delete {
            at: start,
            text: removed,
        });
        self.set_cursor_char(start);
        Ok(())
    }

    /// Move the cursor. With `extend` the selection grows from its anchor.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor.position());
            }
        } else {
            self.anchor = None;
        }
        self.history.seal();

        let last_line = self.buffer.line_count().saturating_sub(1);
        match motion {
            Motion::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.col = self.buffer.line_len(self.cursor.line);
                }
                self.cursor.desired_col = self.cursor.col;
            }
            Motion::Right => {
                if self.cursor.col < self.buffer.line_len(self.cursor.line) {
                    self.cursor.col += 1;
                } else if self.cursor.line < last_line {
                    self.cursor.line += 1;
                    self.cursor.col = 0;
                }
                self.cursor.desired_col = self.cursor.col;
            }
            Motion::Up => self.move_vertical(-1),
            Motion::Down => self.move_vertical(1),
            Motion::PageUp => self.move_vertical(-(self.page_rows.max(1) as isize)),
            Motion::PageDown => self.move_vertical(self.page_rows.max(1) as isize),
            Motion::LineStart => {
                self.cursor.col = 0;
                self.cursor.desired_col = 0;
            }
            Motion::LineEnd => {
                self.cursor.col = self.buffer.line_len(self.cursor.line);
                self.cursor.desired_col = self.cursor.col;
            }
            Motion::DocStart => self.cursor.set(Position::default()),
            Motion::DocEnd => {
                let end = Position::new(last_line, self.buffer.line_len(last_line));
                self.cursor.set(end);
            }
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let last_line = self.buffer.line_count().saturating_sub(1);
        let line = if delta < 0 {
            self.cursor.line.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.line.saturating_add(delta as usize).min(last_line)
        };
        self.cursor.line = line;
        self.cursor.col = self.cursor.desired_col.min(self.buffer.line_len(line));
    }

    fn apply(&mut self, edit: &Edit) -> Result<(), BufferError> {
        match edit {
            Edit::Insert { at, text } => self.buffer.insert(*at, text),
            Edit::Delete { at, text } => self
                .buffer
                .remove(*at..*at + text.chars().count())
                .map(|_| ()),
            Edit::Replace {
                at,
                removed,
                inserted,
            } => {
                self.buffer.remove(*at..*at + removed.chars().count())?;
                self.buffer.insert(*at, inserted)
            }
        }
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}

impl TextHistory for TextArea {
    type Error = BufferError;

    fn record_edit(&mut self, edit: Edit) {
        debug!("record edit {:?}", edit);
        self.history.push(edit, false);
    }

    fn undo(&mut self) -> Result<bool, BufferError> {
        let Some(edit) = self.history.take_undo() else {
            return Ok(false);
        };
        let inverse = edit.inverse();
        self.apply(&inverse)?;
        self.anchor = None;
        self.set_cursor_char(inverse.end());
        Ok(true)
    }

    fn redo(&mut self) -> Result<bool, BufferError> {
        let Some(edit) = self.history.take_redo() else {
            return Ok(false);
        };
        self.apply(&edit)?;
        self.anchor = None;
        self.set_cursor_char(edit.end());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(area: &mut TextArea, s: &str) {
        for c in s.chars() {
            area.insert_char(c).unwrap();
        }
    }

    #[test]
    fn test_typing_advances_cursor() {
        let mut area = TextArea::default();
        type_str(&mut area, "ab\ncd");
        assert_eq!(area.text(), "ab\ncd");
        assert_eq!(area.insertion_point(), Position::new(1, 2));
        assert!(area.is_modified());
    }

    #[test]
    fn test_selection_is_normalized() {
        let mut area = TextArea::with_text("hello world");
        area.select(Position::new(0, 11), Position::new(0, 6));
        assert_eq!(area.selection_range(), Some((6, 11)));
        assert_eq!(area.selected_text().as_deref(), Some("world"));
    }

    #[test]
    fn test_empty_selection_is_none() {
        let mut area = TextArea::with_text("abc");
        area.select(Position::new(0, 1), Position::new(0, 1));
        assert!(!area.has_selection());
        assert_eq!(area.selected_text(), None);
    }

    #[test]
    fn test_delete_selection_then_undo_redo() {
        let mut area = TextArea::default();
        type_str(&mut area, "abc");
        area.select(Position::new(0, 1), Position::new(0, 2));
        assert_eq!(area.delete_selection().unwrap().as_deref(), Some("b"));
        assert_eq!(area.text(), "ac");
        assert_eq!(area.insertion_point(), Position::new(0, 1));

        assert!(area.undo().unwrap());
        assert_eq!(area.text(), "abc");
        assert!(area.redo().unwrap());
        assert_eq!(area.text(), "ac");
    }

    #[test]
    fn test_typing_undoes_as_one_step() {
        let mut area = TextArea::default();
        type_str(&mut area, "hello");
        assert!(area.undo().unwrap());
        assert_eq!(area.text(), "");
        assert!(!area.undo().unwrap());
    }

    #[test]
    fn test_cursor_move_splits_undo_groups() {
        let mut area = TextArea::default();
        type_str(&mut area, "ab");
        area.move_cursor(Motion::Left, false);
        area.move_cursor(Motion::Right, false);
        type_str(&mut area, "cd");
        assert!(area.undo().unwrap());
        assert_eq!(area.text(), "ab");
    }

    #[test]
    fn test_insert_text_replaces_selection() {
        let mut area = TextArea::with_text("one two");
        area.select(Position::new(0, 0), Position::new(0, 3));
        area.insert_text("three").unwrap();
        assert_eq!(area.text(), "three two");
        assert_eq!(area.insertion_point(), Position::new(0, 5));
    }

    #[test]
    fn test_paste_over_selection_undoes_in_one_step() {
        let mut area = TextArea::with_text("abc");
        area.select(Position::new(0, 1), Position::new(0, 3));
        area.insert_text("a").unwrap();
        assert_eq!(area.text(), "aa");

        assert!(area.undo().unwrap());
        assert_eq!(area.text(), "abc");
        assert_eq!(area.insertion_point(), Position::new(0, 3));
        assert!(!area.history().can_undo());

        assert!(area.redo().unwrap());
        assert_eq!(area.text(), "aa");
        assert_eq!(area.insertion_point(), Position::new(0, 2));
    }

    #[test]
    fn test_typing_over_selection_undoes_in_one_step() {
        let mut area = TextArea::with_text("hello");
        area.select_all();
        area.insert_char('j').unwrap();
        assert_eq!(area.text(), "j");
        assert!(area.undo().unwrap());
        assert_eq!(area.text(), "hello");
    }

    #[test]
    fn test_line_end_before_lone_carriage_return() {
        let mut area = TextArea::with_text("a\rb");
        assert_eq!(area.buffer.line_count(), 2);
        area.move_cursor(Motion::LineEnd, false);
        assert_eq!(area.insertion_point(), Position::new(0, 1));
        area.insert_char('X').unwrap();
        assert_eq!(area.text(), "aX\rb");
        assert_eq!(area.insertion_point(), Position::new(0, 2));

        area.move_cursor(Motion::Right, false);
        assert_eq!(area.insertion_point(), Position::new(1, 0));
        area.delete_backward().unwrap();
        assert_eq!(area.text(), "aXb");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::with_text("ab\ncd");
        area.move_to(Position::new(1, 0));
        area.delete_backward().unwrap();
        assert_eq!(area.text(), "abcd");
        assert_eq!(area.insertion_point(), Position::new(0, 2));
    }

    #[test]
    fn test_crlf_removed_as_unit() {
        let mut area = TextArea::with_text("ab\r\ncd");
        area.move_to(Position::new(1, 0));
        area.delete_backward().unwrap();
        assert_eq!(area.text(), "abcd");

        let mut area = TextArea::with_text("ab\r\ncd");
        area.move_to(Position::new(0, 2));
        area.delete_forward().unwrap();
        assert_eq!(area.text(), "abcd");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut area = TextArea::with_text("abc");
        area.delete_backward().unwrap();
        assert_eq!(area.text(), "abc");
        assert!(!area.history().can_undo());
    }

    #[test]
    fn test_vertical_motion_keeps_desired_column() {
        let mut area = TextArea::with_text("abcdef\nab\nabcdef");
        area.move_to(Position::new(0, 5));
        area.move_cursor(Motion::Down, false);
        assert_eq!(area.insertion_point(), Position::new(1, 2));
        area.move_cursor(Motion::Down, false);
        assert_eq!(area.insertion_point(), Position::new(2, 5));
    }

    #[test]
    fn test_horizontal_motion_wraps_lines() {
        let mut area = TextArea::with_text("ab\ncd");
        area.move_to(Position::new(0, 2));
        area.move_cursor(Motion::Right, false);
        assert_eq!(area.insertion_point(), Position::new(1, 0));
        area.move_cursor(Motion::Left, false);
        assert_eq!(area.insertion_point(), Position::new(0, 2));
    }

    #[test]
    fn test_shift_motion_extends_selection() {
        let mut area = TextArea::with_text("hello");
        area.move_cursor(Motion::Right, true);
        area.move_cursor(Motion::Right, true);
        assert_eq!(area.selected_text().as_deref(), Some("he"));
        area.move_cursor(Motion::Right, false);
        assert!(!area.has_selection());
    }

    #[test]
    fn test_select_all() {
        let mut area = TextArea::with_text("a\nbc");
        area.select_all();
        assert_eq!(area.selected_text().as_deref(), Some("a\nbc"));
    }

    #[test]
    fn test_tab_width() {
        let mut area = TextArea::default();
        area.tab_width = 2;
        area.insert_tab().unwrap();
        assert_eq!(area.text(), "  ");
        area.tab_width = 0;
        area.insert_tab().unwrap();
        assert_eq!(area.text(), "  \t");
    }

    #[test]
    fn test_positions_are_clamped() {
        let mut area = TextArea::with_text("ab\nc");
        area.move_to(Position::new(10, 10));
        assert_eq!(area.insertion_point(), Position::new(1, 1));
        assert_eq!(area.pos_to_char(Position::new(0, 99)), 2);
    }

    #[test]
    fn test_set_text_resets_history() {
        let mut area = TextArea::default();
        type_str(&mut area, "abc");
        area.set_text("new");
        assert_eq!(area.text(), "new");
        assert!(!area.history().can_undo());
        assert!(!area.is_modified());
        assert_eq!(area.insertion_point(), Position::new(0, 0));
    }
}
