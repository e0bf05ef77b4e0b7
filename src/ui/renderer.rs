// ui/renderer.rs - Ratatui-based renderer for the text editor

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use std::io::Stdout;

use crate::editor::Editor;
use crate::mode::Mode;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::file_dialog::FileDialogWidget;
use crate::ui::widgets::menu_bar::{MenuBarWidget, MenuDropdown, menu_title_offset};
use crate::ui::widgets::status_bar::StatusBar;

/// Rows given to the file dialog panel, borders included
const DIALOG_HEIGHT: u16 = 10;

/// Ratatui-based renderer for the text editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    /// Create a new TuiRenderer
    pub fn new(theme: Theme) -> Result<Self, Box<dyn std::error::Error>> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal, theme })
    }

    /// Draw the editor UI
    pub fn draw(&mut self, editor: &mut Editor) -> Result<(), Box<dyn std::error::Error>> {
        self.terminal.draw(|f| {
            let size = f.size();

            let dialog_height = if editor.dialog.is_some() {
                DIALOG_HEIGHT.min(size.height.saturating_sub(3))
            } else {
                0
            };

            let vertical_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),             // Menu bar
                    Constraint::Min(1),                // Text area
                    Constraint::Length(dialog_height), // File dialog, when open
                    Constraint::Length(1),             // Status bar
                ])
                .split(size);

            // Split text area: text + scrollbar
            let editor_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(vertical_chunks[1]);
            let text_rect = editor_chunks[0];

            // Keep the viewport in step with the real pane size
            editor
                .viewport
                .resize(text_rect.height as usize, text_rect.width as usize);
            let cursor = editor.text_area.insertion_point();
            editor.viewport.scroll_to_cursor(cursor.line, cursor.col);

            f.render_widget(MenuBarWidget::new(editor, &self.theme), vertical_chunks[0]);
            f.render_widget(EditorPane::new(editor, &self.theme), text_rect);

            let line_count = editor.text_area.buffer.line_count();
            if line_count > text_rect.height as usize {
                let mut scrollbar_state =
                    ScrollbarState::new(line_count).position(editor.viewport.offset_line);
                let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .style(Style::default().fg(self.theme.ui.scrollbar_fg));
                f.render_stateful_widget(scrollbar, editor_chunks[1], &mut scrollbar_state);
            }

            if let Some(dialog) = &editor.dialog {
                f.render_widget(FileDialogWidget::new(dialog, &self.theme), vertical_chunks[2]);
            }

            f.render_widget(StatusBar::new(editor, &self.theme), vertical_chunks[3]);

            // Render the open drop-down over everything else
            if let Some(index) = editor.menu_bar.open
                && let Some(menu) = editor.menu_bar.current()
            {
                let dropdown = MenuDropdown::new(menu, editor.menu_bar.selected, &self.theme);
                let title_x = vertical_chunks[0].x + menu_title_offset(&editor.menu_bar, index);
                let area = dropdown.calculate_position(title_x, vertical_chunks[0].y, size);
                f.render_widget(dropdown, area);
            }

            match editor.mode {
                Mode::Editing => {
                    let cursor_row = cursor.line.saturating_sub(editor.viewport.offset_line) as u16;
                    let cursor_col = cursor.col.saturating_sub(editor.viewport.offset_col) as u16;
                    if cursor_row < text_rect.height && cursor_col < text_rect.width {
                        f.set_cursor(text_rect.x + cursor_col, text_rect.y + cursor_row);
                    }
                }
                Mode::Dialog => {
                    if let Some(dialog) = &editor.dialog {
                        let (x, y) = FileDialogWidget::cursor_position(dialog, vertical_chunks[2]);
                        f.set_cursor(x, y);
                    }
                }
                Mode::Menu => {}
            }
        })?;
        Ok(())
    }
}
