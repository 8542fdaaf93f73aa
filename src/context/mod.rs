// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the immutable grid and the mutable search state.
//!
//! The SearchContext is the core data structure passed through the search:
//! - Tier 1: the Grid, immutable for the lifetime of the context
//! - Tier 2: VisitedSet, Trail and Statistics, mutable and owned
//!
//! Nothing here is global. Independent grids can be counted concurrently by
//! giving each its own context.

use crate::grid::{Grid, Position};
use crate::state::{Statistics, VisitedSet};
use crate::trail::Trail;

/// Search context for one grid.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     grid: Grid,              // Tier 1: immutable
///     visited: VisitedSet,     // Tier 2: mutable, restored by the trail
///     trail: Trail,            // Tier 2: mutable, owned
///     statistics: Statistics,  // Tier 2: accumulated across searches
/// }
/// ```
///
/// # Example
///
/// ```
/// use duct_search::{Grid, SearchContext};
/// use duct_search::grid::Position;
///
/// let grid = Grid::from_codes(3, 1, &[2, 0, 3]).unwrap();
/// let mut ctx = SearchContext::new(grid);
///
/// let checkpoint = ctx.enter(Position::new(1));
/// assert!(!ctx.visited.is_free(Position::new(1)));
///
/// ctx.rewind_to(checkpoint);
/// assert!(ctx.visited.is_free(Position::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct SearchContext {
    grid: Grid,
    /// Cells currently occupied by walls or by the duct.
    pub visited: VisitedSet,
    /// Marks made since the context was created.
    pub trail: Trail,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context standing on the grid's START cell.
    pub fn new(grid: Grid) -> Self {
        let visited = VisitedSet::new(&grid);
        let trail = Trail::with_capacity(grid.total_open());
        log::debug!(
            "[SearchContext] {}x{} grid, {} open cells, start {}, end {}",
            grid.width(),
            grid.height(),
            grid.total_open(),
            grid.start(),
            grid.end()
        );
        Self {
            grid,
            visited,
            trail,
            statistics: Statistics::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mark `position` visited and record it on the trail.
    ///
    /// Returns the checkpoint to pass to [`rewind_to`](Self::rewind_to) to
    /// undo this mark and everything marked after it.
    pub fn enter(&mut self, position: Position) -> usize {
        let checkpoint = self.trail.checkpoint();
        self.visited.mark(position);
        self.trail.record_mark(position);
        checkpoint
    }

    /// Unmark every cell recorded after `checkpoint`, most recent first.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while let Some(position) = self.trail.pop_to(checkpoint) {
            self.visited.unmark(position);
        }
    }

    /// True when only the walls and the START cell are marked.
    pub fn is_at_rest(&self) -> bool {
        self.trail.is_empty() && self.visited == VisitedSet::new(&self.grid)
    }
}
