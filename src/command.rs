use crate::cursor::Motion;

/// Where a Cut/Copy/Paste request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Menu,
    Shortcut,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // File menu
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    // Edit menu
    Cut(Invocation),
    Copy(Invocation),
    Paste(Invocation),
    Undo,
    Redo,
    SelectAll,
    // Text area
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    Move { motion: Motion, extend: bool },
    // Menu bar
    OpenMenu(usize),
    MenuLeft,
    MenuRight,
    MenuUp,
    MenuDown,
    MenuActivate,
    CloseMenu,
    // File dialog
    DialogInput(char),
    DialogBackspace,
    DialogNextFilter,
    DialogUp,
    DialogDown,
    DialogConfirm,
    DialogCancel,
}
