/// A location in the document, in lines and chars within the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Cursor movements understood by the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    DocStart,
    DocEnd,
}

pub struct Cursor {
    pub line: usize,
    pub col: usize,
    pub desired_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            desired_col: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Jump to `pos` and forget the remembered column.
    pub fn set(&mut self, pos: Position) {
        self.line = pos.line;
        self.col = pos.col;
        self.desired_col = pos.col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
