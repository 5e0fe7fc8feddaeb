//! Location history with back and forward navigation.

use std::collections::VecDeque;

/// Maximum number of locations kept; the oldest are dropped first.
pub const MAX_ENTRIES: usize = 100;

/// Ordered list of visited query strings with a cursor.
///
/// Pushing a location discards everything forward of the cursor, the same
/// way a browser forgets forward history after a new navigation.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    cursor: usize,
}

impl History {
    /// Starts a history at `initial`.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let mut entries = VecDeque::with_capacity(MAX_ENTRIES);
        entries.push_back(initial.into());
        Self { entries, cursor: 0 }
    }

    /// The location under the cursor.
    #[must_use]
    pub fn current(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map_or("", String::as_str)
    }

    /// Records a new location. Pushing the current location again is a no-op.
    pub fn push(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.current() {
            return;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(query);

        if self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Moves one entry back, returning the new current location.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Moves one entry forward, returning the new current location.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
