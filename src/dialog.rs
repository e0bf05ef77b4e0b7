// src/dialog.rs - Open / Save-as file dialog shown on the bottom prompt

use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// A named filename pattern offered by the dialog. Patterns are either
/// `*` or `*.ext`; they only narrow the listing, never the typed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub label: &'static str,
    pub pattern: &'static str,
}

pub const FILE_FILTERS: [FileFilter; 4] = [
    FileFilter {
        label: "Text Files",
        pattern: "*.txt",
    },
    FileFilter {
        label: "All Files",
        pattern: "*",
    },
    FileFilter {
        label: "Python Files",
        pattern: "*.py",
    },
    FileFilter {
        label: "HTML Files",
        pattern: "*.html",
    },
];

impl FileFilter {
    pub fn matches(&self, file_name: &str) -> bool {
        match self.pattern.strip_prefix('*') {
            Some("") => true,
            Some(suffix) => file_name.ends_with(suffix),
            None => file_name == self.pattern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Open,
    SaveAs,
}

impl DialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::Open => "Open File",
            DialogKind::SaveAs => "Save File as",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The user confirmed this path. It may be empty.
    Chosen(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

pub struct FileDialog {
    pub kind: DialogKind,
    pub input: String,
    pub filter_index: usize,
    pub entries: Vec<FileItem>,
    pub selected: Option<usize>,
    base_dir: PathBuf,
}

impl FileDialog {
    /// Relative input is resolved against `base_dir`.
    pub fn new(kind: DialogKind, base_dir: &Path) -> Self {
        let mut dialog = Self {
            kind,
            input: String::new(),
            filter_index: 0,
            entries: Vec::new(),
            selected: None,
            base_dir: base_dir.to_path_buf(),
        };
        dialog.rescan();
        dialog
    }

    pub fn filter(&self) -> &FileFilter {
        &FILE_FILTERS[self.filter_index % FILE_FILTERS.len()]
    }

    pub fn next_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % FILE_FILTERS.len();
        self.rescan();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.rescan();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.rescan();
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.pick(next);
    }

    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let prev = match self.selected {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.pick(prev);
    }

    /// Copy a listed entry into the input line without rescanning, so
    /// Up/Down keep walking the same listing.
    fn pick(&mut self, index: usize) {
        self.selected = Some(index);
        let item = &self.entries[index];
        let mut text = item.path.to_string_lossy().to_string();
        if item.is_dir && !text.ends_with(MAIN_SEPARATOR) {
            text.push(MAIN_SEPARATOR);
        }
        self.input = text;
    }

    /// The path the input currently names.
    pub fn resolved_path(&self) -> PathBuf {
        let typed = Path::new(&self.input);
        if typed.is_absolute() {
            typed.to_path_buf()
        } else {
            self.base_dir.join(typed)
        }
    }

    /// Confirm the input. A directory is entered instead of returned,
    /// in which case the dialog stays open and `None` comes back.
    pub fn confirm(&mut self) -> Option<DialogOutcome> {
        if self.input.trim().is_empty() {
            return Some(DialogOutcome::Chosen(PathBuf::new()));
        }
        let path = self.resolved_path();
        if path.is_dir() {
            let mut text = path.to_string_lossy().to_string();
            if !text.ends_with(MAIN_SEPARATOR) {
                text.push(MAIN_SEPARATOR);
            }
            self.input = text;
            self.rescan();
            return None;
        }
        Some(DialogOutcome::Chosen(path))
    }

    /// Directory whose contents the listing shows.
    pub fn listing_dir(&self) -> PathBuf {
        if self.input.is_empty() {
            return self.base_dir.clone();
        }
        let path = self.resolved_path();
        if self.input.ends_with(MAIN_SEPARATOR) || self.input.ends_with('/') {
            path
        } else {
            path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.base_dir.clone())
        }
    }

    fn rescan(&mut self) {
        let dir = self.listing_dir();
        let prefix = if self.input.ends_with(MAIN_SEPARATOR) || self.input.ends_with('/') {
            String::new()
        } else {
            Path::new(&self.input)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        };
        let filter = *self.filter();
        self.entries = scan_directory(&dir, &filter)
            .into_iter()
            .filter(|item| item.name == ".." || item.name.starts_with(&prefix))
            .collect();
        self.selected = None;
    }
}

/// List `path` for the dialog: a `..` entry, then files passing `filter`,
/// then sub-directories. Hidden entries are skipped.
pub fn scan_directory(path: &Path, filter: &FileFilter) -> Vec<FileItem> {
    let mut items = Vec::new();

    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            let is_dir = metadata.is_dir();
            if !is_dir && !filter.matches(&name) {
                continue;
            }
            items.push(FileItem {
                name,
                path: entry.path(),
                is_dir,
            });
        }
    }

    // Files first, then directories, both alphabetically
    items.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        _ => a.name.cmp(&b.name),
    });

    if let Some(parent) = path.parent() {
        items.insert(
            0,
            FileItem {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            },
        );
    }

    items
}
