// src/history.rs - Undo/redo log for the text area

/// A single reversible change, addressed in char indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert { at: usize, text: String },
    Delete { at: usize, text: String },
    /// `removed` swapped for `inserted` at the same index, as one step.
    Replace {
        at: usize,
        removed: String,
        inserted: String,
    },
}

impl Edit {
    /// The edit that cancels this one.
    pub fn inverse(&self) -> Edit {
        match self {
            Edit::Insert { at, text } => Edit::Delete {
                at: *at,
                text: text.clone(),
            },
            Edit::Delete { at, text } => Edit::Insert {
                at: *at,
                text: text.clone(),
            },
            Edit::Replace {
                at,
                removed,
                inserted,
            } => Edit::Replace {
                at: *at,
                removed: inserted.clone(),
                inserted: removed.clone(),
            },
        }
    }

    /// Char index right after the text this edit leaves in the document.
    pub fn end(&self) -> usize {
        match self {
            Edit::Insert { at, text } => at + text.chars().count(),
            Edit::Delete { at, .. } => *at,
            Edit::Replace { at, inserted, .. } => at + inserted.chars().count(),
        }
    }
}

/// History capability a text widget exposes to the controller.
///
/// The controller never touches the undo log directly; it only asks the
/// widget to step backward or forward.
pub trait TextHistory {
    type Error;

    /// Record an edit that has already been applied to the document.
    fn record_edit(&mut self, edit: Edit);

    /// Revert the most recent edit. Returns `Ok(false)` when there is none.
    fn undo(&mut self) -> Result<bool, Self::Error>;

    /// Re-apply the most recently undone edit. Returns `Ok(false)` when there is none.
    fn redo(&mut self) -> Result<bool, Self::Error>;
}

#[derive(Debug, Clone)]
struct Entry {
    edit: Edit,
    typing: bool,
}

/// Bounded undo/redo stacks.
///
/// Consecutive typed characters are merged into a single entry until the
/// group is sealed (cursor movement, a newline, any other edit).
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo: Vec<Entry>,
    redo: Vec<Entry>,
    limit: usize,
    sealed: bool,
}

pub const DEFAULT_UNDO_LIMIT: usize = 1000;

impl EditHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit: limit.max(1),
            sealed: true,
        }
    }

    pub fn push(&mut self, edit: Edit, typing: bool) {
        self.redo.clear();

        if typing
            && !self.sealed
            && let Some(Entry {
                edit: Edit::Insert { at: prev_at, text: prev },
                typing: true,
            }) = self.undo.last_mut()
            && let Edit::Insert { at, text } = &edit
            && *at == *prev_at + prev.chars().count()
        {
            prev.push_str(text);
            return;
        }

        self.undo.push(Entry { edit, typing });
        if self.undo.len() > self.limit {
            let excess = self.undo.len() - self.limit;
            self.undo.drain(0..excess);
        }
        self.sealed = !typing;
    }

    /// End the current typing group.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Pop the newest edit and move it onto the redo stack.
    pub fn take_undo(&mut self) -> Option<Edit> {
        let entry = self.undo.pop()?;
        let edit = entry.edit.clone();
        self.redo.push(entry);
        self.sealed = true;
        Some(edit)
    }

    /// Pop the newest undone edit and move it back onto the undo stack.
    pub fn take_redo(&mut self) -> Option<Edit> {
        let entry = self.redo.pop()?;
        let edit = entry.edit.clone();
        self.undo.push(entry);
        self.sealed = true;
        Some(edit)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.sealed = true;
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(at: usize, text: &str) -> Edit {
        Edit::Insert {
            at,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_inverse_swaps_kind() {
        let edit = insert(3, "ab");
        assert_eq!(
            edit.inverse(),
            Edit::Delete {
                at: 3,
                text: "ab".to_string()
            }
        );
        assert_eq!(edit.inverse().inverse(), edit);
        assert_eq!(edit.end(), 5);
    }

    #[test]
    fn test_replace_inverse_swaps_texts() {
        let edit = Edit::Replace {
            at: 1,
            removed: "bc".to_string(),
            inserted: "xyz".to_string(),
        };
        assert_eq!(edit.end(), 4);
        let inverse = edit.inverse();
        assert_eq!(inverse.end(), 3);
        assert_eq!(inverse.inverse(), edit);
    }

    #[test]
    fn test_typing_coalesces() {
        let mut history = EditHistory::default();
        history.push(insert(0, "a"), true);
        history.push(insert(1, "b"), true);
        history.push(insert(2, "c"), true);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.take_undo(), Some(insert(0, "abc")));
    }

    #[test]
    fn test_seal_splits_typing() {
        let mut history = EditHistory::default();
        history.push(insert(0, "a"), true);
        history.seal();
        history.push(insert(1, "b"), true);
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_non_contiguous_typing_not_merged() {
        let mut history = EditHistory::default();
        history.push(insert(0, "a"), true);
        history.push(insert(5, "b"), true);
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = EditHistory::default();
        history.push(insert(0, "a"), false);
        history.take_undo();
        assert!(history.can_redo());
        history.push(insert(0, "b"), false);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_moves_between_stacks() {
        let mut history = EditHistory::default();
        history.push(insert(0, "x"), false);
        assert_eq!(history.take_undo(), Some(insert(0, "x")));
        assert!(!history.can_undo());
        assert_eq!(history.take_redo(), Some(insert(0, "x")));
        assert!(history.can_undo());
        assert_eq!(history.take_redo(), None);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = EditHistory::new(2);
        history.push(insert(0, "a"), false);
        history.push(insert(1, "b"), false);
        history.push(insert(2, "c"), false);
        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.take_undo(), Some(insert(2, "c")));
        assert_eq!(history.take_undo(), Some(insert(1, "b")));
        assert_eq!(history.take_undo(), None);
    }
}
