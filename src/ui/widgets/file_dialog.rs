// ui/widgets/file_dialog.rs - Open/Save-as prompt panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::dialog::FileDialog;
use crate::ui::theme::Theme;

pub const NAME_LABEL: &str = "Name: ";

/// Bordered panel with the path input, the type filter and a listing
pub struct FileDialogWidget<'a> {
    pub dialog: &'a FileDialog,
    pub theme: &'a Theme,
}

impl<'a> FileDialogWidget<'a> {
    pub fn new(dialog: &'a FileDialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }

    /// Where the terminal cursor goes while typing a path
    pub fn cursor_position(dialog: &FileDialog, area: Rect) -> (u16, u16) {
        let x = area.x + 1 + NAME_LABEL.len() as u16 + dialog.input.chars().count() as u16;
        (x.min(area.right().saturating_sub(2)), area.y + 1)
    }
}

impl Widget for FileDialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let text_style = Style::default()
            .fg(self.theme.general.foreground)
            .bg(self.theme.general.background);
        let dim = Style::default().fg(self.theme.ui.border_fg);
        let highlight = Style::default()
            .fg(self.theme.ui.menu_highlight_fg)
            .bg(self.theme.ui.menu_highlight_bg)
            .add_modifier(Modifier::BOLD);

        let filter = self.dialog.filter();
        let mut lines = vec![
            Line::from(vec![
                Span::styled(NAME_LABEL, dim),
                Span::styled(self.dialog.input.clone(), text_style),
            ]),
            Line::from(vec![
                Span::styled("Type: ", dim),
                Span::styled(format!("{} ({})", filter.label, filter.pattern), text_style),
                Span::styled("  [Tab] next type  [Esc] cancel", dim),
            ]),
        ];

        // Two input rows plus the borders
        let list_rows = area.height.saturating_sub(4) as usize;
        if list_rows > 0 {
            let selected = self.dialog.selected.unwrap_or(0);
            let first = (selected + 1).saturating_sub(list_rows);
            for (i, item) in self
                .dialog
                .entries
                .iter()
                .enumerate()
                .skip(first)
                .take(list_rows)
            {
                let mut name = item.name.clone();
                if item.is_dir && item.name != ".." {
                    name.push('/');
                }
                let style = if self.dialog.selected == Some(i) {
                    highlight
                } else if item.is_dir {
                    dim
                } else {
                    text_style
                };
                lines.push(Line::from(Span::styled(format!("  {}", name), style)));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(dim)
            .title(format!(" {} ", self.dialog.kind.title()))
            .title_style(text_style.add_modifier(Modifier::BOLD));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogKind;
    use tempfile::TempDir;

    #[test]
    fn test_cursor_follows_input() {
        let dir = TempDir::new().unwrap();
        let mut dialog = FileDialog::new(DialogKind::Open, dir.path());
        let area = Rect::new(0, 10, 60, 8);
        let (x0, y) = FileDialogWidget::cursor_position(&dialog, area);
        assert_eq!(y, 11);
        dialog.push_char('a');
        dialog.push_char('b');
        let (x1, _) = FileDialogWidget::cursor_position(&dialog, area);
        assert_eq!(x1, x0 + 2);
    }

    #[test]
    fn test_render_shows_title_and_filter() {
        let dir = TempDir::new().unwrap();
        let dialog = FileDialog::new(DialogKind::SaveAs, dir.path());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        FileDialogWidget::new(&dialog, &theme).render(area, &mut buf);

        let top: String = (0..area.width)
            .map(|x| buf.get(x, 0).symbol().to_string())
            .collect();
        assert!(top.contains("Save File as"));
        let type_row: String = (0..area.width)
            .map(|x| buf.get(x, 2).symbol().to_string())
            .collect();
        assert!(type_row.contains("Text Files (*.txt)"));
    }
}
