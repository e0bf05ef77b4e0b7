// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Status bar: cursor position on the left, last status message on the right
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    fn position_text(&self) -> String {
        let point = self.editor.text_area.insertion_point();
        format!(" Ln {}, Col {}", point.line + 1, point.col + 1)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let message = format!("{} ", self.editor.status_message);
        let message_len = message.chars().count();
        let position = self.position_text();

        let mut status = String::with_capacity(width);
        if position.len() + message_len < width {
            status.push_str(&position);
            status.push_str(&" ".repeat(width - position.len() - message_len));
            status.push_str(&message);
        } else if message_len < width {
            status.push_str(&" ".repeat(width - message_len));
            status.push_str(&message);
        } else {
            status = message.chars().take(width).collect();
        }

        let line_widget = Line::from(status).style(
            Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
        );

        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
