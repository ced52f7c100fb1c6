use cardstack_foundation::SwipeDirection;
use cardstack_graphics::Point;

/// One committed swipe that undo can reverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryEntry {
    pub index: usize,
    pub direction: SwipeDirection,
    /// The point the card was sent to.
    pub last_offset: Point,
}

/// Last-in, first-out record of committed swipes.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    entries: Vec<HistoryEntry>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite the most recent entry for `entry.index`. Returns `false`
    /// when there is none.
    pub fn replace_latest_for(&mut self, entry: HistoryEntry) -> bool {
        match self
            .entries
            .iter_mut()
            .rev()
            .find(|existing| existing.index == entry.index)
        {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => false,
        }
    }

    pub fn retain(&mut self, keep: impl FnMut(&HistoryEntry) -> bool) {
        self.entries.retain(keep);
    }

    /// Oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
