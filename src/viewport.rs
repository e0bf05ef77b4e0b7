pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    /// Scroll the least amount needed to keep the cursor on screen.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);

        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + rows {
            self.offset_line = cursor_line + 1 - rows;
        }

        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if cursor_col >= self.offset_col + cols {
            self.offset_col = cursor_col + 1 - cols;
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_viewport_new() {
        let viewport = Viewport::new(10, 20);
        assert_eq!(viewport.offset_line, 0);
        assert_eq!(viewport.offset_col, 0);
        assert_eq!(viewport.rows, 10);
        assert_eq!(viewport.cols, 20);
    }

    #[test]
    fn test_scroll_to_cursor_inside_is_noop() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to_cursor(5, 10);
        assert_eq!(viewport.offset_line, 0);
        assert_eq!(viewport.offset_col, 0);
    }

    #[test]
    fn test_scroll_to_cursor_below() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to_cursor(15, 10);
        assert_eq!(viewport.offset_line, 6);
        assert_eq!(viewport.offset_col, 0);
    }

    #[test]
    fn test_scroll_to_cursor_above() {
        let mut viewport = Viewport::new(10, 20);
        viewport.offset_line = 30;
        viewport.scroll_to_cursor(12, 0);
        assert_eq!(viewport.offset_line, 12);
    }

    #[test]
    fn test_scroll_to_cursor_right_then_left() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to_cursor(5, 25);
        assert_eq!(viewport.offset_col, 6);
        viewport.scroll_to_cursor(5, 3);
        assert_eq!(viewport.offset_col, 3);
    }

    proptest! {
        #[test]
        fn viewport_scroll_invariants(rows in 1..100usize, cols in 1..100usize, cursor_line in 0..200usize, cursor_col in 0..200usize, start_line in 0..200usize) {
            let mut viewport = Viewport::new(rows, cols);
            viewport.offset_line = start_line;
            viewport.scroll_to_cursor(cursor_line, cursor_col);

            // Cursor should be visible
            prop_assert!(cursor_line >= viewport.offset_line && cursor_line < viewport.offset_line + viewport.rows);
            prop_assert!(cursor_col >= viewport.offset_col && cursor_col < viewport.offset_col + viewport.cols);
        }
    }
}
