// src/menu.rs - Menu bar model and keyboard navigation

use crate::command::{Command, Invocation};

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Item {
        label: &'static str,
        shortcut: &'static str,
        command: Command,
    },
    Separator,
}

impl MenuEntry {
    fn item(label: &'static str, shortcut: &'static str, command: Command) -> Self {
        MenuEntry::Item {
            label,
            shortcut,
            command,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, MenuEntry::Item { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// The File/Edit menu bar. At most one menu is open at a time.
#[derive(Debug, Clone)]
pub struct MenuBar {
    pub menus: Vec<Menu>,
    pub open: Option<usize>,
    pub selected: usize,
}

impl MenuBar {
    pub fn new() -> Self {
        let file = Menu {
            title: "File",
            entries: vec![
                MenuEntry::item("New", "Ctrl+N", Command::New),
                MenuEntry::item("Open", "Ctrl+O", Command::Open),
                MenuEntry::item("Save", "Ctrl+S", Command::Save),
                MenuEntry::item("Save as", "F12", Command::SaveAs),
                MenuEntry::Separator,
                MenuEntry::item("Exit", "Ctrl+Q", Command::Exit),
            ],
        };
        let edit = Menu {
            title: "Edit",
            entries: vec![
                MenuEntry::item("Cut", "Ctrl+X", Command::Cut(Invocation::Menu)),
                MenuEntry::item("Copy", "Ctrl+C", Command::Copy(Invocation::Menu)),
                MenuEntry::item("Paste", "Ctrl+V", Command::Paste(Invocation::Menu)),
                MenuEntry::item("Undo", "Ctrl+Z", Command::Undo),
                MenuEntry::item("Redo", "Ctrl+Y", Command::Redo),
            ],
        };
        Self {
            menus: vec![file, edit],
            open: None,
            selected: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_menu(&mut self, index: usize) {
        if index < self.menus.len() {
            self.open = Some(index);
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = None;
        self.selected = 0;
    }

    pub fn current(&self) -> Option<&Menu> {
        self.menus.get(self.open?)
    }

    pub fn next_menu(&mut self) {
        if let Some(idx) = self.open {
            self.open_menu((idx + 1) % self.menus.len());
        }
    }

    pub fn prev_menu(&mut self) {
        if let Some(idx) = self.open {
            let len = self.menus.len();
            self.open_menu((idx + len - 1) % len);
        }
    }

    /// Move the highlight down, skipping separators and wrapping.
    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, dir: isize) {
        let Some(menu) = self.current() else { return };
        let selectable: Vec<bool> = menu.entries.iter().map(MenuEntry::is_selectable).collect();
        let len = selectable.len() as isize;
        if len == 0 {
            return;
        }
        let mut idx = self.selected as isize;
        for _ in 0..len {
            idx = (idx + dir).rem_euclid(len);
            if selectable[idx as usize] {
                self.selected = idx as usize;
                return;
            }
        }
    }

    /// Close the open menu and return the highlighted item's command.
    pub fn activate(&mut self) -> Option<Command> {
        let command = match self.current()?.entries.get(self.selected)? {
            MenuEntry::Item { command, .. } => Some(command.clone()),
            MenuEntry::Separator => None,
        };
        self.close();
        command
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(menu: &Menu) -> Vec<&'static str> {
        menu.entries
            .iter()
            .map(|e| match e {
                MenuEntry::Item { label, .. } => *label,
                MenuEntry::Separator => "-",
            })
            .collect()
    }

    #[test]
    fn test_menu_layout() {
        let bar = MenuBar::new();
        assert_eq!(bar.menus[0].title, "File");
        assert_eq!(
            labels(&bar.menus[0]),
            vec!["New", "Open", "Save", "Save as", "-", "Exit"]
        );
        assert_eq!(bar.menus[1].title, "Edit");
        assert_eq!(
            labels(&bar.menus[1]),
            vec!["Cut", "Copy", "Paste", "Undo", "Redo"]
        );
    }

    #[test]
    fn test_navigation_skips_separator() {
        let mut bar = MenuBar::new();
        bar.open_menu(0);
        for _ in 0..3 {
            bar.select_next();
        }
        assert_eq!(bar.selected, 3);
        bar.select_next();
        assert_eq!(bar.selected, 5);
        bar.select_next();
        assert_eq!(bar.selected, 0);
        bar.select_prev();
        assert_eq!(bar.selected, 5);
    }

    #[test]
    fn test_activate_returns_command_and_closes() {
        let mut bar = MenuBar::new();
        bar.open_menu(1);
        bar.select_next();
        assert_eq!(bar.activate(), Some(Command::Copy(Invocation::Menu)));
        assert!(!bar.is_open());
    }

    #[test]
    fn test_switch_menus_wraps() {
        let mut bar = MenuBar::new();
        bar.open_menu(1);
        bar.next_menu();
        assert_eq!(bar.open, Some(0));
        bar.prev_menu();
        assert_eq!(bar.open, Some(1));
    }

    #[test]
    fn test_closed_menu_does_nothing() {
        let mut bar = MenuBar::new();
        bar.select_next();
        bar.next_menu();
        assert_eq!(bar.activate(), None);
        assert!(!bar.is_open());
    }
}
