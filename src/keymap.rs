// src/keymap.rs - Key events to editor commands

use crate::command::{Command, Invocation};
use crate::cursor::Motion;
use crate::mode::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const FILE_MENU: usize = 0;
pub const EDIT_MENU: usize = 1;

pub fn key_to_command(key_event: KeyEvent, mode: Mode) -> Option<Command> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match mode {
        Mode::Editing => editing_key(key_event),
        Mode::Menu => match key_event.code {
            KeyCode::Esc | KeyCode::F(10) => Some(Command::CloseMenu),
            KeyCode::Left => Some(Command::MenuLeft),
            KeyCode::Right => Some(Command::MenuRight),
            KeyCode::Up => Some(Command::MenuUp),
            KeyCode::Down => Some(Command::MenuDown),
            KeyCode::Enter => Some(Command::MenuActivate),
            _ => None,
        },
        Mode::Dialog => match key_event.code {
            KeyCode::Esc => Some(Command::DialogCancel),
            KeyCode::Enter => Some(Command::DialogConfirm),
            KeyCode::Tab => Some(Command::DialogNextFilter),
            KeyCode::Up => Some(Command::DialogUp),
            KeyCode::Down => Some(Command::DialogDown),
            KeyCode::Backspace => Some(Command::DialogBackspace),
            KeyCode::Char(c)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::DialogInput(c))
            }
            _ => None,
        },
    }
}

fn editing_key(key_event: KeyEvent) -> Option<Command> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);
    let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl {
        return match key_event.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'n' => Some(Command::New),
                'o' => Some(Command::Open),
                's' if shift => Some(Command::SaveAs),
                's' => Some(Command::Save),
                'q' => Some(Command::Exit),
                'x' => Some(Command::Cut(Invocation::Shortcut)),
                'c' => Some(Command::Copy(Invocation::Shortcut)),
                'v' => Some(Command::Paste(Invocation::Shortcut)),
                'z' => Some(Command::Undo),
                'y' => Some(Command::Redo),
                'a' => Some(Command::SelectAll),
                _ => None,
            },
            KeyCode::Home => Some(Command::Move {
                motion: Motion::DocStart,
                extend: shift,
            }),
            KeyCode::End => Some(Command::Move {
                motion: Motion::DocEnd,
                extend: shift,
            }),
            _ => None,
        };
    }

    if alt {
        return match key_event.code {
            KeyCode::Char('f') | KeyCode::Char('F') => Some(Command::OpenMenu(FILE_MENU)),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::OpenMenu(EDIT_MENU)),
            _ => None,
        };
    }

    let motion = |motion| {
        Some(Command::Move {
            motion,
            extend: shift,
        })
    };
    match key_event.code {
        KeyCode::F(10) => Some(Command::OpenMenu(FILE_MENU)),
        KeyCode::F(12) => Some(Command::SaveAs),
        KeyCode::Left => motion(Motion::Left),
        KeyCode::Right => motion(Motion::Right),
        KeyCode::Up => motion(Motion::Up),
        KeyCode::Down => motion(Motion::Down),
        KeyCode::Home => motion(Motion::LineStart),
        KeyCode::End => motion(Motion::LineEnd),
        KeyCode::PageUp => motion(Motion::PageUp),
        KeyCode::PageDown => motion(Motion::PageDown),
        KeyCode::Enter => Some(Command::InsertNewline),
        KeyCode::Tab => Some(Command::InsertTab),
        KeyCode::Backspace => Some(Command::DeleteBackward),
        KeyCode::Delete => Some(Command::DeleteForward),
        KeyCode::Char(c) => Some(Command::InsertChar(c)),
        _ => None,
    }
}
