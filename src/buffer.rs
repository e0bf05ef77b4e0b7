// src/buffer.rs - Rope-backed document storage

use ropey::Rope;
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rope error: {0}")]
    Rope(#[from] ropey::Error),
}

pub struct Buffer {
    pub rope: Rope,
    pub modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            modified: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            modified: false,
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Insert `text` at a char index. Fails if the index is past the end.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> Result<(), BufferError> {
        self.rope.try_insert(char_idx, text)?;
        self.touch();
        Ok(())
    }

    /// Remove a char range and return the removed text.
    pub fn remove(&mut self, range: Range<usize>) -> Result<String, BufferError> {
        let removed = self.slice(range.clone())?;
        self.rope.try_remove(range)?;
        self.touch();
        Ok(removed)
    }

    pub fn slice(&self, range: Range<usize>) -> Result<String, BufferError> {
        match self.rope.get_slice(range.clone()) {
            Some(slice) => Ok(slice.to_string()),
            None => Err(ropey::Error::CharRangeOutOfBounds(
                Some(range.start),
                Some(range.end),
                self.rope.len_chars(),
            )
            .into()),
        }
    }

    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.modified = false;
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of a line without its line break.
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let len = self.line_len(line_idx);
            Some(self.rope.line(line_idx).slice(..len).to_string())
        } else {
            None
        }
    }

    /// Length of a line in chars, excluding its line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && is_line_break(line.char(len - 1)) {
            len -= 1;
            // CRLF is a single break
            if line.char(len) == '\n' && len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    pub fn line_to_char(&self, line_idx: usize) -> usize {
        self.rope.line_to_char(line_idx.min(self.rope.len_lines()))
    }

    pub fn char_to_line(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.rope.len_chars()))
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let content = fs::read_to_string(path.as_ref())?;
        self.rope = Rope::from_str(&content);
        self.modified = false;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let mut file = fs::File::create(path.as_ref())?;
        self.rope.write_to(&mut file)?;
        self.modified = false;
        Ok(())
    }

    fn touch(&mut self) {
        self.modified = true;
    }
}

/// Chars ropey ends a line on, besides the CRLF pair.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[test]
fn test_insert_text() {
    let mut buffer = Buffer::new();
    buffer.insert(0, "a").unwrap();
    assert_eq!(buffer.line(0).unwrap(), "a");
    assert!(buffer.modified);
}

#[test]
fn test_insert_past_end_fails() {
    let mut buffer = Buffer::from_text("ab");
    assert!(buffer.insert(5, "x").is_err());
    assert_eq!(buffer.text(), "ab");
}

#[test]
fn test_remove_returns_text() {
    let mut buffer = Buffer::from_text("hello world");
    let removed = buffer.remove(5..11).unwrap();
    assert_eq!(removed, " world");
    assert_eq!(buffer.text(), "hello");
}

#[test]
fn test_line_len_ignores_line_breaks() {
    let buffer = Buffer::from_text("ab\r\ncde\n");
    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line_len(0), 2);
    assert_eq!(buffer.line_len(1), 3);
    assert_eq!(buffer.line_len(2), 0);
    assert_eq!(buffer.line(0).unwrap(), "ab");
}

#[test]
fn test_edit_and_save() {
    use tempfile::NamedTempFile;
    let mut buffer = Buffer::new();
    for (i, c) in "hello".chars().enumerate() {
        buffer.insert(i, &c.to_string()).unwrap();
    }
    let temp_file = NamedTempFile::new().unwrap();
    buffer.save_to_file(temp_file.path()).unwrap();
    assert!(!buffer.modified);
    let mut loaded_buffer = Buffer::new();
    loaded_buffer.load_from_file(temp_file.path()).unwrap();
    assert_eq!(loaded_buffer.text(), "hello");
}

#[test]
fn test_load_and_save() {
    use tempfile::NamedTempFile;
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), "hello\nworld").unwrap();

    let mut buffer = Buffer::new();
    buffer.load_from_file(temp_file.path()).unwrap();
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.line(0).unwrap(), "hello");
    assert_eq!(buffer.line(1).unwrap(), "world");

    let save_file = NamedTempFile::new().unwrap();
    buffer.save_to_file(save_file.path()).unwrap();
    let content = fs::read_to_string(save_file.path()).unwrap();
    assert_eq!(content, "hello\nworld");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let mut buffer = Buffer::from_text("keep");
    let err = buffer
        .load_from_file("/nonexistent/dir/file.txt")
        .unwrap_err();
    assert!(matches!(err, BufferError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    assert_eq!(buffer.text(), "keep");
}

#[test]
fn test_line_len_excludes_every_break_kind() {
    let buffer = Buffer::from_text("a\rbc\r\nd\u{2028}ef\u{85}g");
    assert_eq!(buffer.line_count(), 5);
    let lens: Vec<usize> = (0..5).map(|i| buffer.line_len(i)).collect();
    assert_eq!(lens, vec![1, 2, 1, 2, 1]);
    assert_eq!(buffer.line(0).unwrap(), "a");
    assert_eq!(buffer.line(1).unwrap(), "bc");
    assert_eq!(buffer.line(3).unwrap(), "ef");
    assert_eq!(buffer.line(4).unwrap(), "g");
}
