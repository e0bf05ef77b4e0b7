// src/ui/widgets/menu_bar.rs - Menu bar and drop-down menu widgets

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget},
};

use crate::editor::Editor;
use crate::menu::{Menu, MenuBar, MenuEntry};
use crate::ui::theme::Theme;

/// Column where the title of menu `index` starts in the bar.
pub fn menu_title_offset(bar: &MenuBar, index: usize) -> u16 {
    bar.menus
        .iter()
        .take(index)
        .map(|menu| menu.title.chars().count() as u16 + 2)
        .sum()
}

/// Top row: menu titles on the left, window title on the right
pub struct MenuBarWidget<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> MenuBarWidget<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for MenuBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.ui.menu_bg)
            .fg(self.theme.ui.menu_fg);
        let highlight = Style::default()
            .bg(self.theme.ui.menu_highlight_bg)
            .fg(self.theme.ui.menu_highlight_fg);
        buf.set_style(area, base);

        let bar = &self.editor.menu_bar;
        let spans: Vec<Span> = bar
            .menus
            .iter()
            .enumerate()
            .map(|(i, menu)| {
                let style = if bar.open == Some(i) { highlight } else { base };
                Span::styled(format!(" {} ", menu.title), style)
            })
            .collect();
        let titles = Line::from(spans);
        buf.set_line(area.x, area.y, &titles, area.width);

        let mut title = self.editor.title.clone();
        if self.editor.text_area.is_modified() {
            title.push_str(" [+]");
        }
        title.push(' ');
        let used = menu_title_offset(bar, bar.menus.len());
        if used + (title.chars().count() as u16) < area.width {
            Paragraph::new(Line::from(Span::styled(title, base.add_modifier(Modifier::BOLD))))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

/// Drop-down list of the open menu's entries
pub struct MenuDropdown<'a> {
    pub menu: &'a Menu,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> MenuDropdown<'a> {
    pub fn new(menu: &'a Menu, selected: usize, theme: &'a Theme) -> Self {
        Self {
            menu,
            selected,
            theme,
        }
    }

    fn label_width(&self) -> usize {
        self.menu
            .entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Item {
                    label, shortcut, ..
                } => label.chars().count() + shortcut.chars().count() + 3,
                MenuEntry::Separator => 0,
            })
            .max()
            .unwrap_or(10)
    }

    /// Place the drop-down under its title, kept inside `area`
    pub fn calculate_position(&self, title_x: u16, bar_y: u16, area: Rect) -> Rect {
        let width = (self.label_width() as u16 + 4).min(area.width);
        let height = (self.menu.entries.len() as u16 + 2).min(area.height.saturating_sub(bar_y + 1));

        let mut x = title_x;
        if x + width > area.width {
            x = area.width.saturating_sub(width);
        }

        Rect {
            x,
            y: bar_y + 1,
            width,
            height,
        }
    }
}

impl Widget for MenuDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first
        Clear.render(area, buf);

        let base = Style::default()
            .bg(self.theme.ui.menu_bg)
            .fg(self.theme.ui.menu_fg);
        let highlight = Style::default()
            .bg(self.theme.ui.menu_highlight_bg)
            .fg(self.theme.ui.menu_highlight_fg)
            .add_modifier(Modifier::BOLD);
        let inner_width = self.label_width();

        let lines: Vec<Line> = self
            .menu
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                MenuEntry::Item {
                    label, shortcut, ..
                } => {
                    let gap = inner_width
                        .saturating_sub(label.chars().count() + shortcut.chars().count());
                    let text = format!("{}{}{}", label, " ".repeat(gap), shortcut);
                    let style = if i == self.selected { highlight } else { base };
                    Line::from(Span::styled(text, style))
                }
                MenuEntry::Separator => Line::from(Span::styled("─".repeat(inner_width), base)),
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base)
            .style(base)
            .padding(Padding::horizontal(1));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_offsets() {
        let bar = MenuBar::new();
        assert_eq!(menu_title_offset(&bar, 0), 0);
        // " File "
        assert_eq!(menu_title_offset(&bar, 1), 6);
    }

    #[test]
    fn test_dropdown_stays_on_screen() {
        let bar = MenuBar::new();
        let theme = Theme::default();
        let dropdown = MenuDropdown::new(&bar.menus[1], 0, &theme);
        let screen = Rect::new(0, 0, 12, 24);
        let area = dropdown.calculate_position(10, 0, screen);
        assert!(area.x + area.width <= screen.width);
        assert_eq!(area.y, 1);
    }
}
