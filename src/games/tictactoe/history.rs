//! Labelled view of the move history, for "go to move" menus.

/// One selectable history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Menu label.
    pub label: String,
}

impl MoveEntry {
    /// Creates the entry for history index `index`.
    pub fn new(index: usize) -> Self {
        let label = if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        };
        Self { index, label }
    }
}

/// Lazy iterator over the entries of a history of a given length.
///
/// Cloning restarts the sequence from wherever the clone was taken, so a
/// fresh `list_moves()` call always yields the full list again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList {
    next: usize,
    len: usize,
}

impl MoveList {
    pub(super) fn new(len: usize) -> Self {
        Self { next: 0, len }
    }
}

impl Iterator for MoveList {
    type Item = MoveEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let entry = MoveEntry::new(self.next);
        self.next += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveList {}

impl std::iter::FusedIterator for MoveList {}
