/// Which surface currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Editing,
    Menu,
    Dialog,
}
