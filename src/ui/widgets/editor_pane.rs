// ui/widgets/editor_pane.rs - Text area widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Visible slice of the document, with the selection highlighted
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    fn render_line(&self, line_idx: usize, width: usize) -> Line<'static> {
        let text_area = &self.editor.text_area;
        let Some(line) = text_area.buffer.line(line_idx) else {
            return Line::default();
        };

        let normal = Style::default()
            .fg(self.theme.general.foreground)
            .bg(self.theme.general.background);
        let selected = Style::default()
            .fg(self.theme.ui.selection_fg)
            .bg(self.theme.ui.selection_bg);

        let line_start = text_area.buffer.line_to_char(line_idx);
        let selection = text_area.selection_range();
        let offset_col = self.editor.viewport.offset_col;

        // Group consecutive cells with the same highlight into one span
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_selected = false;
        for (col, ch) in line.chars().enumerate().skip(offset_col).take(width) {
            let char_idx = line_start + col;
            let is_selected = selection.is_some_and(|(start, end)| char_idx >= start && char_idx < end);
            if is_selected != run_selected && !run.is_empty() {
                let style = if run_selected { selected } else { normal };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_selected = is_selected;
            run.push(if ch == '\t' { ' ' } else { ch });
        }
        if !run.is_empty() {
            let style = if run_selected { selected } else { normal };
            spans.push(Span::styled(run, style));
        }

        // A selected line break shows as one highlighted cell past the text
        let line_len = text_area.buffer.line_len(line_idx);
        let break_idx = line_start + line_len;
        let break_selected = line_idx + 1 < text_area.buffer.line_count()
            && selection.is_some_and(|(start, end)| break_idx >= start && break_idx < end);
        if break_selected && line_len >= offset_col && line_len < offset_col + width {
            spans.push(Span::styled(" ", selected));
        }

        Line::from(spans)
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(
            area,
            Style::default()
                .fg(self.theme.general.foreground)
                .bg(self.theme.general.background),
        );

        let line_count = self.editor.text_area.buffer.line_count();
        for row in 0..area.height {
            let line_idx = self.editor.viewport.offset_line + row as usize;
            if line_idx >= line_count {
                break;
            }
            let line = self.render_line(line_idx, area.width as usize);
            buf.set_line(area.x, area.y + row, &line, area.width);
        }
    }
}
