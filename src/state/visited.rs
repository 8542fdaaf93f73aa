// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visitation state: which cells are currently on the in-progress duct.

use crate::grid::{Grid, Position};

/// Per-search record of occupied cells.
///
/// BLOCKED cells are marked at construction and stay marked for the
/// lifetime of the set, so a single `visited` test excludes both walls and
/// cells already on the path. The START cell is also marked at construction:
/// the search begins standing on it.
///
/// Marks made during a search must be undone in strict LIFO order. The
/// [`SearchContext`](crate::context::SearchContext) enforces this by routing
/// every mark through its trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    visited: Vec<bool>,
    /// Cells that are never free (BLOCKED).
    permanent: Vec<bool>,
    marked: usize,
}

impl VisitedSet {
    /// Create the initial visitation state for `grid`: walls and START marked.
    pub fn new(grid: &Grid) -> Self {
        let permanent: Vec<bool> = grid
            .positions()
            .map(|p| !grid.cell_state(p).is_open())
            .collect();
        let mut visited = permanent.clone();
        visited[grid.start().index()] = true;
        let marked = visited.iter().filter(|&&v| v).count();
        Self {
            visited,
            permanent,
            marked,
        }
    }

    /// Mark `position` as part of the current path.
    ///
    /// The caller guarantees the cell is currently free.
    pub fn mark(&mut self, position: Position) {
        debug_assert!(
            !self.visited[position.index()],
            "mark of already visited cell {}",
            position
        );
        self.visited[position.index()] = true;
        self.marked += 1;
    }

    /// Undo a previous [`mark`](Self::mark) on backtrack.
    pub fn unmark(&mut self, position: Position) {
        debug_assert!(
            !self.permanent[position.index()],
            "unmark of blocked cell {}",
            position
        );
        debug_assert!(
            self.visited[position.index()],
            "unmark of unvisited cell {}",
            position
        );
        self.visited[position.index()] = false;
        self.marked -= 1;
    }

    /// True iff the cell is open and not on the current path.
    pub fn is_free(&self, position: Position) -> bool {
        !self.visited[position.index()]
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.visited[position.index()]
    }

    /// True for BLOCKED cells, which are never free.
    pub fn is_permanent(&self, position: Position) -> bool {
        self.permanent[position.index()]
    }

    /// Number of marked cells, walls included.
    pub fn marked_count(&self) -> usize {
        self.marked
    }
}
