// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the duct search.
//!
//! Every cell marked visited during a search is recorded on the trail.
//! Backtracking rewinds the trail to a checkpoint, undoing the marks in
//! reverse order. This gives strict LIFO mark/unmark pairing for both the
//! recursive and the explicit-stack search without either engine having
//! to remember what it marked.

use crate::grid::Position;

/// The trail of cells marked since the search started.
///
/// # Memory Model
///
/// - Owned by one [`SearchContext`](crate::context::SearchContext); never shared
/// - Holds at most one entry per open cell, since a cell is on the trail
///   exactly while it is on the current path
#[derive(Debug, Default, Clone)]
pub struct Trail {
    /// Cells marked so far, oldest first.
    entries: Vec<Position>,
}

impl Trail {
    /// Create an empty trail sized for a grid of `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Current trail length, usable as a checkpoint for [`pop_to`](Self::pop_to).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record that `position` was marked.
    pub(crate) fn record_mark(&mut self, position: Position) {
        self.entries.push(position);
    }

    /// Remove the most recent entry if the trail is longer than `checkpoint`.
    ///
    /// Callers loop on this to rewind, undoing each returned mark.
    pub(crate) fn pop_to(&mut self, checkpoint: usize) -> Option<Position> {
        if self.entries.len() > checkpoint {
            self.entries.pop()
        } else {
            None
        }
    }

    /// The cells currently on the trail, oldest first.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[Position] {
        &self.entries
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::with_capacity(8);
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.checkpoint(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_pop_to_is_lifo() {
        let mut trail = Trail::with_capacity(8);
        trail.record_mark(Position::new(1));
        let checkpoint = trail.checkpoint();
        trail.record_mark(Position::new(2));
        trail.record_mark(Position::new(3));

        assert_eq!(trail.pop_to(checkpoint), Some(Position::new(3)));
        assert_eq!(trail.pop_to(checkpoint), Some(Position::new(2)));
        assert_eq!(trail.pop_to(checkpoint), None);
        assert_eq!(trail.entries(), &[Position::new(1)]);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::with_capacity(8);

        let outer = trail.checkpoint();
        trail.record_mark(Position::new(5));
        let inner = trail.checkpoint();
        trail.record_mark(Position::new(6));
        assert_eq!(trail.len(), 2);

        while trail.pop_to(inner).is_some() {}
        assert_eq!(trail.len(), 1);

        while trail.pop_to(outer).is_some() {}
        assert!(trail.is_empty());
    }

    #[test]
    fn test_pop_to_empty() {
        let mut trail = Trail::default();
        assert_eq!(trail.pop_to(0), None);
    }
}
